mod iter;


use compare::Compare;
use std::cmp::{self, Ordering::*};
use std::collections::VecDeque;
use std::mem;

pub use self::iter::Iter;

pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// The color of the link between a node and its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

#[derive(Clone)]
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    color: Color,
    size: usize,
    key: K,
    value: V,
}

pub fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |node| node.color == Color::Red)
}

// Whether the link's left child is red, i.e. `h.left.left` when called on `h.left`.
fn left_is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |node| is_red(&node.left))
}

pub fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, color: Color::Red, size: 1, key, value }
    }

    pub fn key(&self) -> &K { &self.key }

    pub fn value(&self) -> &V { &self.value }

    pub fn value_mut(&mut self) -> &mut V { &mut self.value }

    pub fn entry(&self) -> (&K, &V) { (&self.key, &self.value) }

    fn update_size(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }

    // Turn a right-leaning red link into a left-leaning one
    fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        debug_assert!(is_red(&node.right));

        let Some(mut save) = node.right.take() else { return node };
        node.right = save.left.take();
        save.color = node.color;
        node.color = Color::Red;
        save.size = node.size;
        node.update_size();
        save.left = Some(node);
        save
    }

    // Turn a left-leaning red link into a right-leaning one
    fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        debug_assert!(is_red(&node.left));

        let Some(mut save) = node.left.take() else { return node };
        node.left = save.right.take();
        save.color = node.color;
        node.color = Color::Red;
        save.size = node.size;
        node.update_size();
        save.right = Some(node);
        save
    }

    // Split (or, during removal, merge) a temporary 4-node
    fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(ref mut left) = self.left { left.color = left.color.flip(); }
        if let Some(ref mut right) = self.right { right.color = right.color.flip(); }
    }

    fn balance(mut node: Box<Self>) -> Box<Self> {
        if is_red(&node.right) && !is_red(&node.left) { node = Self::rotate_left(node); }
        if is_red(&node.left) && left_is_red(&node.left) { node = Self::rotate_right(node); }
        if is_red(&node.left) && is_red(&node.right) { node.flip_colors(); }

        node.update_size();
        node
    }

    // Assuming `node` is red and both `node.left` and `node.left.left` are black, make
    // `node.left` or one of its children red.
    fn move_red_left(mut node: Box<Self>) -> Box<Self> {
        node.flip_colors();

        if left_is_red(&node.right) {
            node.right = node.right.take().map(Self::rotate_right);
            node = Self::rotate_left(node);
            node.flip_colors();
        }

        node
    }

    // Assuming `node` is red and both `node.right` and `node.right.left` are black, make
    // `node.right` or one of its children red.
    fn move_red_right(mut node: Box<Self>) -> Box<Self> {
        node.flip_colors();

        if left_is_red(&node.left) {
            node = Self::rotate_right(node);
            node.flip_colors();
        }

        node
    }

    fn into_entry(self) -> (K, V) { (self.key, self.value) }
}

fn blacken_root<K, V>(root: &mut Link<K, V>) {
    if let Some(ref mut node) = *root { node.color = Color::Black; }
}

// Removal descends through a node that is red or has a red child
fn redden_root<K, V>(root: &mut Link<K, V>) {
    if let Some(ref mut node) = *root {
        if !is_red(&node.left) && !is_red(&node.right) { node.color = Color::Red; }
    }
}

pub fn insert<K, V, C>(root: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    let old_value = do_insert(root, cmp, key, value);
    blacken_root(root);
    old_value
}

fn do_insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    let mut node = match link.take() {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            return None;
        }
        Some(node) => node,
    };

    let old_value = match cmp.compare(&key, &node.key) {
        Equal => Some(mem::replace(&mut node.value, value)),
        Less => do_insert(&mut node.left, cmp, key, value),
        Greater => do_insert(&mut node.right, cmp, key, value),
    };

    *link = Some(if old_value.is_some() { node } else { Node::balance(node) });
    old_value
}

pub fn remove_min<K, V>(root: &mut Link<K, V>) -> Option<(K, V)> {
    redden_root(root);
    let min = do_remove_min(root);
    blacken_root(root);
    min
}

fn do_remove_min<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    let mut node = link.take()?;

    if node.left.is_none() {
        debug_assert!(node.right.is_none());
        let mut node = *node;
        *link = node.right.take();
        return Some(node.into_entry());
    }

    if !is_red(&node.left) && !left_is_red(&node.left) { node = Node::move_red_left(node); }

    let min = do_remove_min(&mut node.left);
    *link = Some(Node::balance(node));
    min
}

pub fn remove_max<K, V>(root: &mut Link<K, V>) -> Option<(K, V)> {
    redden_root(root);
    let max = do_remove_max(root);
    blacken_root(root);
    max
}

fn do_remove_max<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    let mut node = link.take()?;

    if is_red(&node.left) { node = Node::rotate_right(node); }

    if node.right.is_none() {
        debug_assert!(node.left.is_none());
        let mut node = *node;
        *link = node.left.take();
        return Some(node.into_entry());
    }

    if !is_red(&node.right) && !left_is_red(&node.right) { node = Node::move_red_right(node); }

    let max = do_remove_max(&mut node.right);
    *link = Some(Node::balance(node));
    max
}

/// Removes the entry with the given key. The key must be present in the tree.
pub fn remove<K, V, C, Q: ?Sized>(root: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    debug_assert!(get(root, cmp, key).is_some());

    redden_root(root);
    let key_value = do_remove(root, cmp, key);
    blacken_root(root);
    key_value
}

fn do_remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    let mut node = link.take()?;
    let key_value;

    if cmp.compares_lt(key, &node.key) {
        if !is_red(&node.left) && !left_is_red(&node.left) { node = Node::move_red_left(node); }
        key_value = do_remove(&mut node.left, cmp, key);
    } else {
        if is_red(&node.left) { node = Node::rotate_right(node); }

        if cmp.compares_eq(key, &node.key) && node.right.is_none() {
            let mut node = *node;
            *link = node.left.take();
            return Some(node.into_entry());
        }

        if !is_red(&node.right) && !left_is_red(&node.right) {
            node = Node::move_red_right(node);
        }

        key_value = if cmp.compares_eq(key, &node.key) {
            // Move the successor's entry up and hand back the one it replaces
            do_remove_min(&mut node.right).map(|(key, value)| {
                (mem::replace(&mut node.key, key), mem::replace(&mut node.value, value))
            })
        } else {
            do_remove(&mut node.right, cmp, key)
        };
    }

    *link = Some(Node::balance(node));
    key_value
}

pub fn get<'a, K, V, C, Q: ?Sized>(mut link: &'a Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

    while let Some(ref node) = *link {
        match cmp.compare(key, &node.key) {
            Equal => return Some(&**node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(mut link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut Node<K, V>> where C: Compare<Q, K> {

    while let Some(node) = link {
        match cmp.compare(key, &node.key) {
            Equal => return Some(&mut **node),
            Less => link = &mut node.left,
            Greater => link = &mut node.right,
        }
    }

    None
}

pub fn rank<K, V, C, Q: ?Sized>(mut link: &Link<K, V>, cmp: &C, key: &Q) -> usize
    where C: Compare<Q, K> {

    let mut rank = 0;

    while let Some(ref node) = *link {
        match cmp.compare(key, &node.key) {
            Equal => return rank + size(&node.left),
            Less => link = &node.left,
            Greater => {
                rank += 1 + size(&node.left);
                link = &node.right;
            }
        }
    }

    rank
}

pub fn select<K, V>(mut link: &Link<K, V>, mut rank: usize) -> Option<&Node<K, V>> {
    while let Some(ref node) = *link {
        let left_size = size(&node.left);

        match rank.cmp(&left_size) {
            Equal => return Some(&**node),
            Less => link = &node.left,
            Greater => {
                rank -= left_size + 1;
                link = &node.right;
            }
        }
    }

    None
}

/// Returns the number of edges on the longest path from the root to a leaf.
pub fn height<K, V>(link: &Link<K, V>) -> Option<usize> {
    link.as_ref().map(|node| {
        let left = height(&node.left).map_or(0, |h| h + 1);
        let right = height(&node.right).map_or(0, |h| h + 1);
        cmp::max(left, right)
    })
}

pub fn keys_in_range<'a, K, V, C>(link: &'a Link<K, V>, cmp: &C, lo: &K, hi: &K,
                                  keys: &mut Vec<&'a K>) where C: Compare<K> {

    if let Some(ref node) = *link {
        let above_lo = cmp.compares_lt(lo, &node.key);
        let below_hi = cmp.compares_lt(&node.key, hi);

        if above_lo { keys_in_range(&node.left, cmp, lo, hi, keys); }

        if cmp.compares_le(lo, &node.key) && cmp.compares_le(&node.key, hi) {
            keys.push(&node.key);
        }

        if below_hi { keys_in_range(&node.right, cmp, lo, hi, keys); }
    }
}

pub fn keys_level_order<K, V>(root: &Link<K, V>) -> Vec<&K> {
    let mut keys = Vec::with_capacity(size(root));
    let mut queue: VecDeque<&Node<K, V>> = root.as_deref().into_iter().collect();

    while let Some(node) = queue.pop_front() {
        keys.push(&node.key);
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }

    keys
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn left() -> bool;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;

    fn extremum<K, V>(mut link: &Link<K, V>) -> Option<&Node<K, V>> {
        let mut extremum = None;

        while let Some(ref node) = *link {
            extremum = Some(&**node);
            link = Self::forward(node);
        }

        extremum
    }

    // The closest key to `key` in this direction, inclusive of `key` itself
    fn closest<'a, K, V, C, Q: ?Sized>(mut link: &'a Link<K, V>, cmp: &C, key: &Q)
        -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

        let mut closest_ancstr = None;

        while let Some(ref node) = *link {
            match cmp.compare(key, &node.key) {
                Equal => return Some(&**node),
                order => link =
                    if Self::left() == (order == Less) {
                        Self::forward(node)
                    } else {
                        closest_ancstr = Some(&**node);
                        Self::Opposite::forward(node)
                    },
            }
        }

        closest_ancstr
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn left() -> bool { true }

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn left() -> bool { false }

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
}
