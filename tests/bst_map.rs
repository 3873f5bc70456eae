use std::{borrow::Borrow, collections::HashSet};

use ordered_bst::bst_map::DefaultBstMap;
use rand::{seq::SliceRandom, thread_rng, Rng};

fn assert_sorted(map: &DefaultBstMap<i32, i32>) {
    let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "out of order: {:?}", keys);
    assert_eq!(keys.len(), map.len());
}

#[test]
fn bst_map_works() {
    let mut tree = DefaultBstMap::<i32, i32>::new();

    for i in 0..1000 {
        tree.insert(i, i + 1);
    }

    for i in 0..1000 {
        assert_eq!(tree.get(&i), Some(&(i + 1)));
    }

    assert_eq!(tree.get(&12), Some(&13));
    assert_eq!(tree.remove(&12), Some(13));
    assert!(tree.get(&12).is_none());
    assert_eq!(tree.insert(12, 24), None);
    assert_eq!(tree.get(&12), Some(&24));
    assert_eq!(tree.insert(12, 25), Some(24));
    *tree.get_mut(&12).unwrap() = 24;

    for i in 0..1000 {
        if i == 12 {
            assert_eq!(tree.get(&i), Some(&24));
        } else {
            assert_eq!(tree.get(&i), Some(&(i + 1)));
        }
    }
}

#[test]
fn works_on_pointer_types() {
    let mut tree = DefaultBstMap::<String, String>::new();
    assert_eq!(tree.get(&"test".into()), None);
    tree.insert("test".into(), "test2".into());
    assert_eq!(tree.get(&"test".into()), Some(&("test2".to_string())));
    for i in 0..100 {
        tree.insert(i.to_string(), (i + 1).to_string());
    }
    for i in 0..100 {
        assert_eq!(
            tree.get(i.to_string().borrow()),
            Some((i + 1).to_string().borrow()),
        );
    }
}

#[test]
fn works_on_byte_keys() {
    let mut tree = DefaultBstMap::<Vec<u8>, usize>::new();
    let keys: Vec<Vec<u8>> = vec![b"b".to_vec(), b"ab".to_vec(), b"a".to_vec(), b"abc".to_vec(), vec![]];
    for (i, k) in keys.iter().enumerate() {
        tree.insert(k.clone(), i);
    }
    let ordered: Vec<_> = tree.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(
        ordered,
        vec![vec![], b"a".to_vec(), b"ab".to_vec(), b"abc".to_vec(), b"b".to_vec()]
    );
}

#[test]
fn collect_extend_and_range() {
    let mut map: DefaultBstMap<i32, i32> = (0..20).rev().map(|i| (i * 5, i)).collect();
    map.extend([(1, -1), (2, -2)]);
    assert_eq!(map.len(), 22);
    assert_eq!(map.first_key_value(), Some((&0, &0)));
    assert_eq!(map.last_key_value(), Some((&95, &19)));

    let range: Vec<_> = map.range(&2, &20).into_iter().map(|(k, _)| *k).collect();
    assert_eq!(range, vec![2, 5, 10, 15, 20]);

    let copy = map.clone();
    map.remove(&10);
    assert!(copy.contains_key(&10));
    assert!(!map.contains_key(&10));

    let total: i32 = (&copy).into_iter().map(|(_, v)| *v).sum();
    assert_eq!(total, (0..20).sum::<i32>() - 3);

    assert_eq!(format!("{:?}", DefaultBstMap::<i32, i32>::new()), "{}");
    let small: DefaultBstMap<i32, i32> = [(2, 20), (1, 10)].into_iter().collect();
    assert_eq!(format!("{:?}", small), "{1: 10, 2: 20}");
}

#[test]
fn random_op_test() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = DefaultBstMap::<i32, i32>::new();

    let n = 5000;

    let mut rng = thread_rng();

    let mut keys = HashSet::new();
    while keys.len() < n {
        keys.insert(rng.gen::<u16>() as i32);
    }
    let mut keys: Vec<_> = keys.into_iter().collect();

    for &key in keys.iter() {
        tree.insert(key, key + 1);
    }

    for &key in keys.iter() {
        assert_eq!(tree.get(&key), Some(&(key + 1)));
    }

    keys.shuffle(&mut rng);
    let removed_keys = keys.split_off(n / 2);
    for &key in removed_keys.iter() {
        assert_eq!(tree.remove(&key), Some(key + 1));
    }

    for &key in removed_keys.iter() {
        assert!(tree.get(&key).is_none());
    }

    for &key in keys.iter() {
        assert_eq!(tree.get(&key), Some(&(key + 1)));
    }
    assert_eq!(tree.len(), keys.len());
    assert_sorted(&tree);
}

#[test]
fn random_set_clear_balance_keeps_order() {
    let mut rng = thread_rng();
    let mut tree = DefaultBstMap::<i32, i32>::new();
    let mut model = std::collections::BTreeMap::new();

    for round in 0..4000 {
        let key = rng.gen_range(0..300);
        match rng.gen_range(0..10) {
            0..=5 => {
                assert_eq!(tree.insert(key, round), model.insert(key, round));
            }
            6..=8 => {
                assert_eq!(tree.remove(&key), model.remove(&key));
            }
            _ => tree.balance(),
        }
        if round % 100 == 0 {
            assert_sorted(&tree);
            let expected: Vec<_> = model.iter().map(|(k, v)| (*k, *v)).collect();
            let actual: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
            assert_eq!(actual, expected);
        }
    }

    for key in 0..300 {
        assert_eq!(tree.get(&key), model.get(&key));
        let prev = model.range(..key).next_back().map(|(_, v)| v);
        assert_eq!(tree.tree().previous(&key), prev);
        let next = model.range(key + 1..).next().map(|(_, v)| v);
        assert_eq!(tree.tree().next(&key), next);
    }
}
