use compare::{Compare, natural};
use llrb::{Error, Map};

fn letters() -> Map<&'static str, u32> {
    let mut map = Map::new();

    for &(key, value) in &[("C", 3), ("A", 1), ("G", 5), ("H", 6), ("B", 2), ("F", 4)] {
        map.insert(key, value);
    }

    map
}

#[test]
fn letters_scenario() {
    let mut map = letters();

    assert_eq!(map.len(), 6);
    assert!(map.contains_key(&"B"));
    assert_eq!(map.get(&"C"), Some(&3));

    assert_eq!(map.delete(&"B"), Some(("B", 2)));

    assert_eq!(map.len(), 5);
    assert_eq!(map.keys().collect::<Vec<_>>(), [&"A", &"C", &"F", &"G", &"H"]);
    assert!(!map.contains_key(&"B"));
}

#[test]
fn range_scenario() {
    let map = letters();

    assert_eq!(map.keys_in_range(&"B", &"G"), [&"B", &"C", &"F", &"G"]);
    assert_eq!(map.keys_in_range(&"D", &"E"), Vec::<&&str>::new());
    assert_eq!(map.keys_in_range(&"A", &"A"), [&"A"]);
    assert_eq!(map.len_in_range(&"B", &"G"), 4);
}

#[test]
fn empty_map() {
    let mut map: Map<&str, u32> = Map::new();

    assert_eq!(map.delete_min(), Err(Error::Underflow("delete_min")));
    assert_eq!(map.delete_max(), Err(Error::Underflow("delete_max")));
    assert_eq!(map.min(), None);
    assert_eq!(map.max(), None);
    assert_eq!(map.keys().next(), None);
    assert_eq!(map.keys_in_range(&"A", &"Z"), Vec::<&&str>::new());
    assert_eq!(map.keys_level_order(), Vec::<&&str>::new());
    assert_eq!(map.height(), None);
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
}

#[test]
fn min_and_max_on_owned_map() {
    let map = letters();
    let mut bigger = letters();
    bigger.insert("Z", 26);

    assert_eq!(map.min(), Some(&"A"));
    assert_eq!(map.max(), Some(&"H"));
    assert_eq!(bigger.max(), Some(&"Z"));
    assert!(map < bigger);
}

#[test]
fn delete_missing_key_is_a_no_op() {
    let mut map = letters();
    let before = map.clone();

    assert_eq!(map.delete(&"Z"), None);
    assert_eq!(map, before);
    assert_eq!(map.keys_level_order(), before.keys_level_order());
}

#[test]
fn overwrite_keeps_len() {
    let mut map = letters();

    assert_eq!(map.insert("C", 30), Some(3));
    assert_eq!(map.get(&"C"), Some(&30));
    assert_eq!(map.len(), 6);
}

#[test]
fn underflow_is_displayed() {
    assert_eq!(Error::Underflow("delete_min").to_string(),
               "map underflow: `delete_min` called on an empty map");
}

#[test]
fn drain_to_empty_and_refill() {
    let mut map = letters();

    assert_eq!(map.delete_min(), Ok(("A", 1)));
    assert_eq!(map.delete_max(), Ok(("H", 6)));

    while map.delete_min().is_ok() {}

    assert!(map.is_empty());
    assert_eq!(map.delete_max(), Err(Error::Underflow("delete_max")));

    map.insert("Q", 17);
    assert_eq!(map.min(), Some(&"Q"));
    assert_eq!(map.max(), Some(&"Q"));
}

#[test]
fn reversed_comparator() {
    let mut map = Map::with_cmp(natural().rev());

    for i in 0..10 { map.insert(i, i * i); }

    assert_eq!(map.min(), Some(&9));
    assert_eq!(map.max(), Some(&0));
    assert_eq!(map.keys_in_range(&6, &3), [&6, &5, &4, &3]);
    assert_eq!(map.len_in_range(&6, &3), 4);
    assert_eq!(map.len_in_range(&3, &6), 0);
    assert_eq!(map.floor(&-1), Some(&0));
    assert_eq!(map.delete_min(), Ok((9, 81)));
}

#[test]
fn closure_comparator() {
    let by_len = |l: &String, r: &String| l.len().cmp(&r.len());
    let mut map = Map::with_cmp(by_len);

    map.insert("ccc".to_string(), 3);
    map.insert("a".to_string(), 1);
    map.insert("bb".to_string(), 2);
    map.insert("zz".to_string(), 22);

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&"xx".to_string()), Some(&22));
    assert!(map.cmp().compares_lt(&"a".to_string(), &"bb".to_string()));
}

#[test]
fn iter_mut_updates_values() {
    let mut map = letters();

    for (_, value) in &mut map { *value *= 10; }

    assert_eq!(map.values().cloned().collect::<Vec<_>>(), [10, 20, 30, 40, 50, 60]);
    assert_eq!(map[&"H"], 60);
}

#[test]
fn debug_lists_entries_in_order() {
    let map: Map<u32, char> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
    assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
}

#[test]
#[should_panic(expected = "key not found")]
fn index_panics_on_missing_key() {
    let map = letters();
    let _value = map[&"Z"];
}
