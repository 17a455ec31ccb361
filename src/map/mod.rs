//! An ordered map based on a left-leaning red-black tree.

mod node;

use compare::{Compare, Natural};
use log::{debug, trace};
use self::node::{Dir, Left, Node, Right};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use std::ops;
use super::error::{Error, Result};

/// An ordered map based on a left-leaning red-black tree.
///
/// Every path from the root to a missing child crosses the same number of black links and red
/// links only ever lean left, so lookups, insertions and deletions take `O(log n)` time.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = llrb::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { root: None, cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map.
    ///
    /// This is read from the root's subtree size and takes constant time.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { node::size(&self.root) }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let map: llrb::Map<i32, &str> = llrb::Map::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: llrb::Map<i32, &str, _> = llrb::Map::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.len(), 3);
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Inserts an entry into the map, returning the previous value, if any, associated
    /// with the key.
    ///
    /// Inserting a key that is already present only replaces its value; the tree's shape and
    /// the map's length are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old_value = node::insert(&mut self.root, &self.cmp, key, value);
        if old_value.is_none() { trace!("inserted new entry, len is now {}", self.len()); }
        old_value
    }

    /// Removes and returns the entry whose key is equal to the given key, returning
    /// `None` if the map does not contain the key.
    ///
    /// Deleting a missing key is a no-op: the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.delete(&1), Some((1, "a")));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&1), None);
    ///
    /// assert_eq!(map.delete(&1), None);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn delete<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        if !self.contains_key(key) { return None; }

        let key_value = node::remove(&mut self.root, &self.cmp, key);
        trace!("deleted entry, len is now {}", self.len());
        key_value
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::Error;
    ///
    /// let mut map = llrb::Map::new();
    /// assert_eq!(map.delete_min(), Err(Error::Underflow("delete_min")));
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.delete_min(), Ok((1, "a")));
    /// assert_eq!(map.min(), Some(&2));
    /// ```
    pub fn delete_min(&mut self) -> Result<(K, V)> {
        match node::remove_min(&mut self.root) {
            Some(key_value) => {
                trace!("deleted minimum entry, len is now {}", self.len());
                Ok(key_value)
            }
            None => {
                debug!("delete_min called on an empty map");
                Err(Error::Underflow("delete_min"))
            }
        }
    }

    /// Removes and returns the entry with the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::Error;
    ///
    /// let mut map = llrb::Map::new();
    /// assert_eq!(map.delete_max(), Err(Error::Underflow("delete_max")));
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.delete_max(), Ok((2, "b")));
    /// assert_eq!(map.max(), Some(&1));
    /// ```
    pub fn delete_max(&mut self) -> Result<(K, V)> {
        match node::remove_max(&mut self.root) {
            Some(key_value) => {
                trace!("deleted maximum entry, len is now {}", self.len());
                Ok(key_value)
            }
            None => {
                debug!("delete_max called on an empty map");
                Err(Error::Underflow("delete_max"))
            }
        }
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.get(key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).map(Node::value)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key).map(Node::value_mut)
    }

    /// Returns a reference to the map's smallest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    /// assert_eq!(map.min(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&K> { self.min_entry().map(|e| e.0) }

    /// Returns a reference to the map's largest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    /// assert_eq!(map.max(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&K> { self.max_entry().map(|e| e.0) }

    /// Returns references to the map's smallest key and its associated value, or `None` if the
    /// map is empty.
    pub fn min_entry(&self) -> Option<(&K, &V)> {
        Left::extremum(&self.root).map(Node::entry)
    }

    /// Returns references to the map's largest key and its associated value, or `None` if the
    /// map is empty.
    pub fn max_entry(&self) -> Option<(&K, &V)> {
        Right::extremum(&self.root).map(Node::entry)
    }

    /// Returns a reference to the greatest key that is less than or equal to the given key, or
    /// `None` if no such key is present in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(4, "d");
    ///
    /// assert_eq!(map.floor(&1), None);
    /// assert_eq!(map.floor(&2), Some(&2));
    /// assert_eq!(map.floor(&3), Some(&2));
    /// assert_eq!(map.floor(&5), Some(&4));
    /// ```
    pub fn floor<Q: ?Sized>(&self, key: &Q) -> Option<&K> where C: Compare<Q, K> {
        Left::closest(&self.root, &self.cmp, key).map(Node::key)
    }

    /// Returns a reference to the smallest key that is greater than or equal to the given key,
    /// or `None` if no such key is present in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(4, "d");
    ///
    /// assert_eq!(map.ceiling(&1), Some(&2));
    /// assert_eq!(map.ceiling(&3), Some(&4));
    /// assert_eq!(map.ceiling(&4), Some(&4));
    /// assert_eq!(map.ceiling(&5), None);
    /// ```
    pub fn ceiling<Q: ?Sized>(&self, key: &Q) -> Option<&K> where C: Compare<Q, K> {
        Right::closest(&self.root, &self.cmp, key).map(Node::key)
    }

    /// Returns the number of keys in the map that are strictly less than the given key.
    ///
    /// The given key need not itself be present in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: llrb::Map<_, _> = vec![(10, "a"), (20, "b"), (30, "c")].into_iter().collect();
    ///
    /// assert_eq!(map.rank(&5), 0);
    /// assert_eq!(map.rank(&20), 1);
    /// assert_eq!(map.rank(&25), 2);
    /// assert_eq!(map.rank(&35), 3);
    /// ```
    pub fn rank<Q: ?Sized>(&self, key: &Q) -> usize where C: Compare<Q, K> {
        node::rank(&self.root, &self.cmp, key)
    }

    /// Returns the key that has exactly `rank` smaller keys in the map, or `None` if
    /// `rank >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: llrb::Map<_, _> = vec![(10, "a"), (20, "b"), (30, "c")].into_iter().collect();
    ///
    /// assert_eq!(map.select(0), Some(&10));
    /// assert_eq!(map.select(2), Some(&30));
    /// assert_eq!(map.select(3), None);
    /// ```
    pub fn select(&self, rank: usize) -> Option<&K> {
        node::select(&self.root, rank).map(Node::key)
    }

    /// Returns the number of edges on the longest path from the root to a leaf, or `None` if
    /// the map is empty.
    ///
    /// The height of a map with `n` entries never exceeds `2 * log2(n + 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    /// assert_eq!(map.height(), None);
    ///
    /// for i in 0..255 { map.insert(i, ()); }
    /// assert!(map.height().unwrap() <= 16);
    /// ```
    pub fn height(&self) -> Option<usize> { node::height(&self.root) }

    /// Returns the map's keys that lie in the inclusive range `[lo, hi]`, in ascending order.
    ///
    /// Subtrees that cannot contain keys in the range are not visited. The result is empty if
    /// `lo` is greater than `hi`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// for (i, key) in ["C", "A", "G", "H", "B", "F"].iter().enumerate() {
    ///     map.insert(*key, i);
    /// }
    ///
    /// assert_eq!(map.keys_in_range(&"B", &"G"), [&"B", &"C", &"F", &"G"]);
    /// assert!(map.keys_in_range(&"G", &"B").is_empty());
    /// ```
    pub fn keys_in_range(&self, lo: &K, hi: &K) -> Vec<&K> {
        let mut keys = vec![];
        node::keys_in_range(&self.root, &self.cmp, lo, hi, &mut keys);
        keys
    }

    /// Returns the number of keys in the map that lie in the inclusive range `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: llrb::Map<_, _> = (0..10).map(|i| (i * 2, ())).collect();
    ///
    /// assert_eq!(map.len_in_range(&3, &9), 3);
    /// assert_eq!(map.len_in_range(&4, &8), 3);
    /// assert_eq!(map.len_in_range(&9, &3), 0);
    /// ```
    pub fn len_in_range(&self, lo: &K, hi: &K) -> usize {
        if self.cmp.compares_gt(lo, hi) { return 0; }

        let len = self.rank(hi) - self.rank(lo);
        if self.contains_key(hi) { len + 1 } else { len }
    }

    /// Returns the map's keys in level order: the root first, then each level of the tree from
    /// left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: llrb::Map<_, _> = (1..4).map(|i| (i, ())).collect();
    /// assert_eq!(map.keys_level_order(), [&2, &1, &3]);
    /// ```
    pub fn keys_level_order(&self) -> Vec<&K> { node::keys_level_order(&self.root) }

    /// Returns an iterator over the map's keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn keys(&self) -> Keys<K, V> { Keys(self.iter()) }

    /// Returns an iterator over the map's values, ordered by their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.values().collect::<Vec<_>>(), [&"a", &"b", &"c"]);
    /// ```
    pub fn values(&self) -> Values<K, V> { Values(self.iter()) }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V> {
        Iter(node::Iter::new(self.root.as_deref(), self.len()))
    }

    /// Returns an iterator over the map's entries with mutable references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 2;
    /// }
    ///
    /// assert_eq!(map[&"a"], 2);
    /// assert_eq!(map[&"b"], 4);
    /// assert_eq!(map[&"c"], 6);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        let len = self.len();
        IterMut(node::Iter::new(self.root.as_deref_mut(), len))
    }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some((k, v)) = it.next() {
            write!(f, "{:?}: {:?}", k, v)?;
            for (k, v) in it { write!(f, ", {:?}: {:?}", k, v)?; }
        }

        write!(f, "}}")
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> iter::FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map: Map<K, V, C> = Default::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &'a Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Returns an iterator that consumes the map, yielding its entries in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = llrb::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.into_iter();
    /// assert_eq!(it.next(), Some((1, "a")));
    /// assert_eq!(it.next(), Some((2, "b")));
    /// assert_eq!(it.next(), Some((3, "c")));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        let len = self.len();
        IntoIter(node::Iter::new(self.root.take(), len))
    }
}

impl<K, V, C> PartialEq for Map<K, V, C> where K: PartialEq, V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for Map<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

impl<K, V, C> PartialOrd for Map<K, V, C> where K: PartialOrd, V: PartialOrd, C: Compare<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

/// An iterator that consumes the map.
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut map = llrb::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct IntoIter<K, V>(node::Iter<Box<Node<K, V>>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the map's entries with immutable references to the values.
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the `IntoIterator` trait.
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<&'a Node<K, V>>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// Acquire through [`Map::iter_mut`](struct.Map.html#method.iter_mut) or the `IntoIterator`
/// trait.
pub struct IterMut<'a, K: 'a, V: 'a>(node::Iter<&'a mut Node<K, V>>);

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An iterator over the map's keys in ascending order.
///
/// Acquire through [`Map::keys`](struct.Map.html#method.keys).
pub struct Keys<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self { Keys(self.0.clone()) }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// An iterator over the map's values, ordered by their keys.
///
/// Acquire through [`Map::values`](struct.Map.html#method.values).
pub struct Values<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Self { Values(self.0.clone()) }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}
