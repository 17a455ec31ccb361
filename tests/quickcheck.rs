use compare::Compare;
use llrb::Map;
use quickcheck::{Arbitrary, Gen};

pub trait Remove<K, C> where C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)>;
}

macro_rules! remove {
    ($K:ty, $V:ty, $R:ty) => {
        mod remove {
            use crate::Remove;
            use llrb::Map;
            use quickcheck::{TestResult, quickcheck};

            #[test]
            fn removes_key() {
                fn test(mut map: Map<$K, $V>, removal: $R) -> TestResult {
                    match removal.remove(&mut map) {
                        None => TestResult::discard(),
                        Some((ref key, _)) => TestResult::from_bool(
                            !map.contains_key(key) &&
                            map.get(key).is_none() &&
                            map.iter().find(|e| e.0 == key).is_none()
                        ),
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R) -> TestResult);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut map: Map<$K, $V>, removal: $R) -> bool {
                    let old_map = map.clone();

                    match removal.remove(&mut map) {
                        None => map == old_map,
                        Some((ref key, _)) =>
                            map.iter().collect::<Vec<_>>() ==
                               old_map.iter().filter(|e| e.0 != key).collect::<Vec<_>>()
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R) -> bool);
            }

            #[test]
            fn sets_len() {
                fn test(mut map: Map<$K, $V>, removal: $R) -> bool {
                    let old_len = map.len();

                    match removal.remove(&mut map) {
                        None => map.len() == old_len,
                        Some(_) => map.len() == old_len - 1,
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R) -> bool);
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Find<Q>(Q);

impl<Q> Arbitrary for Find<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { Find(Q::arbitrary(gen)) }
    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> { Box::new(self.0.shrink().map(Find)) }
}

impl<Q, K, C> Remove<K, C> for Find<Q> where C: Compare<K> + Compare<Q, K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> { map.delete(&self.0) }
}

pub trait Insert<K> {
    fn key(&self) -> K;
    fn insert<V, C>(self, map: &mut Map<K, V, C>, value: V) -> Option<V> where C: Compare<K>;
}

impl<K> Insert<K> for Find<K> where K: Clone {
    fn key(&self) -> K { self.0.clone() }

    fn insert<V, C>(self, map: &mut Map<K, V, C>, value: V) -> Option<V> where C: Compare<K> {
        map.insert(self.0, value)
    }
}

macro_rules! insert {
    ($K:ty, $V:ty, $R:ty) => {
        mod insert {
            use crate::Insert;
            use llrb::Map;
            use quickcheck::quickcheck;

            #[test]
            fn sets_len() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let old_len = map.len();

                    if r.insert(&mut map, value).is_some() {
                        map.len() == old_len
                    } else {
                        map.len() == old_len + 1
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn inserts_key() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let key = r.key();
                    r.insert(&mut map, value);

                    map.contains_key(&key) &&
                    map.get(&key) == Some(&value) &&
                    map.iter().filter(|e| *e.0 == key).collect::<Vec<_>>() == [(&key, &value)]
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let old_map = map.clone();
                    let key = r.key();
                    r.insert(&mut map, value);

                    map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>() ==
                        old_map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>()
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn returns_old_value() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let key = r.key();
                    map.get(&key).cloned() == r.insert(&mut map, value)
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }
        }
    }
}

mod find {
    insert!{u32, u16, crate::Find<u32>}
    remove!{u32, u16, crate::Find<u32>}
}

#[derive(Clone, Debug)]
pub struct Max;

impl Arbitrary for Max { fn arbitrary(_gen: &mut Gen) -> Self { Max } }

impl<K, C> Remove<K, C> for Max where C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> { map.delete_max().ok() }
}

mod max {
    use llrb::{Error, Map};
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn agrees_with_iter(map: Map<u32, u16>) -> bool {
        map.max_entry() == map.iter().last()
    }

    #[quickcheck]
    fn underflows_only_when_empty(map: Map<u32, u16>) -> bool {
        let mut map = map;
        map.is_empty() == (map.delete_max() == Err(Error::Underflow("delete_max")))
    }

    remove!{u32, u16, crate::Max}
}

#[derive(Clone, Debug)]
pub struct Min;

impl Arbitrary for Min { fn arbitrary(_gen: &mut Gen) -> Self { Min } }

impl<K, C> Remove<K, C> for Min where C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> { map.delete_min().ok() }
}

mod min {
    use llrb::{Error, Map};
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn agrees_with_iter(map: Map<u32, u16>) -> bool {
        map.min_entry() == map.iter().next()
    }

    #[quickcheck]
    fn underflows_only_when_empty(map: Map<u32, u16>) -> bool {
        let mut map = map;
        map.is_empty() == (map.delete_min() == Err(Error::Underflow("delete_min")))
    }

    remove!{u32, u16, crate::Min}
}

mod floor {
    use llrb::Map;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn agrees_with_iter(map: Map<u32, u16>, key: u32) -> bool {
        map.floor(&key) == map.keys().filter(|k| **k <= key).last()
    }
}

mod ceiling {
    use llrb::Map;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn agrees_with_iter(map: Map<u32, u16>, key: u32) -> bool {
        map.ceiling(&key) == map.keys().find(|k| **k >= key)
    }
}

mod rank {
    use llrb::Map;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn counts_smaller_keys(map: Map<u32, u16>, key: u32) -> bool {
        map.rank(&key) == map.keys().filter(|k| **k < key).count()
    }

    #[quickcheck]
    fn inverts_select(map: Map<u32, u16>) -> bool {
        (0..map.len()).all(|i| map.select(i).map(|k| map.rank(k)) == Some(i)) &&
            map.select(map.len()).is_none()
    }
}

mod range {
    use llrb::Map;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn agrees_with_iter(map: Map<u8, u16>, lo: u8, hi: u8) -> bool {
        map.keys_in_range(&lo, &hi) ==
            map.keys().filter(|k| lo <= **k && **k <= hi).collect::<Vec<_>>()
    }

    #[quickcheck]
    fn len_agrees_with_keys(map: Map<u8, u16>, lo: u8, hi: u8) -> bool {
        map.len_in_range(&lo, &hi) == map.keys_in_range(&lo, &hi).len()
    }
}

mod iter {
    use llrb::Map;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn ascends(map: Map<u32, u16>) -> bool {
        map.iter().zip(map.iter().skip(1)).all(|(e1, e2)| e1.0 < e2.0)
    }

    #[quickcheck]
    fn size_hint_is_exact(map: Map<u32, u16>) -> bool {
        let mut len = map.len();
        let mut it = map.iter();

        loop {
            if it.size_hint() != (len, Some(len)) { return false; }
            if it.next().is_none() { break; }
            len -= 1;
        }

        len == 0 && it.size_hint() == (0, Some(0))
    }

    #[quickcheck]
    fn keys_and_values_agree(map: Map<u32, u16>) -> bool {
        map.keys().zip(map.values()).eq(map.iter())
    }

    #[quickcheck]
    fn into_iter_agrees(map: Map<u32, u16>) -> bool {
        let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        map.into_iter().collect::<Vec<_>>() == entries
    }

    #[quickcheck]
    fn level_order_visits_every_key(map: Map<u32, u16>) -> bool {
        let mut keys = map.keys_level_order();
        keys.sort();
        keys == map.keys().collect::<Vec<_>>()
    }
}

mod height {
    use llrb::Map;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn is_logarithmic(map: Map<u32, u16>) -> bool {
        match map.height() {
            None => map.is_empty(),
            Some(height) => (height as f64) <= 2.0 * ((map.len() + 1) as f64).log2(),
        }
    }
}
