use rand::{self, prelude::random, rngs::StdRng, Rng, SeedableRng};

use super::*;
use crate::trie::Trie;

#[test]
fn test_patricia_trie() {
    let mut trie = PatriciaTrie::<u64>::new();
    assert!(trie.is_empty());
    assert_eq!(trie.retrieve("").count(), 0);

    for (i, key) in ["romane", "romanus", "romulus", "rubens", "ruber", "rom"].iter().enumerate() {
        trie.add(key, i as u64);
    }
    trie.add("ruber", 10);
    assert_eq!(trie.len(), 7);

    let root = trie.as_root();
    assert!(root.as_key().is_empty());
    let keys: Vec<String> = root.as_children().map(|n| n.as_key().to_string()).collect();
    assert_eq!(keys, vec!["r".to_string()]);

    let vals: Vec<u64> = trie.retrieve("rom").cloned().collect();
    assert_eq!(vals, vec![5, 0, 1, 2]);
    let vals: Vec<u64> = trie.retrieve("ro").cloned().collect();
    assert_eq!(vals, vec![5, 0, 1, 2]);
    let vals: Vec<u64> = trie.retrieve("ruber").cloned().collect();
    assert_eq!(vals, vec![4, 10]);
    let vals: Vec<u64> = trie.retrieve("rube").cloned().collect();
    assert_eq!(vals, vec![3, 4, 10]);
    assert_eq!(trie.retrieve("rubx").count(), 0);
    assert_eq!(trie.retrieve("romanesque").count(), 0);
    assert_eq!(trie.retrieve("").count(), 7);

    trie.add("", 20);
    assert_eq!(trie.as_root().as_values(), &[20]);
    assert_eq!(trie.retrieve("").count(), 8);
}

#[test]
fn test_patricia_vs_trie() {
    let seed: u64 = random();
    println!("test_patricia_vs_trie {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut patricia = PatriciaTrie::<u64>::new();
    let mut trie = Trie::<char, u64>::new();
    let mut keys = vec![];
    for i in 0..500 {
        let n = rng.gen::<usize>() % 10;
        let key: String = (0..n).map(|_| ['a', 'b', 'c'][rng.gen::<usize>() % 3]).collect();
        patricia.add(&key, i);
        trie.add(&key.chars().collect::<Vec<char>>(), i);
        keys.push(key);
    }
    assert_eq!(patricia.len(), trie.len());

    for _ in 0..500 {
        let n = rng.gen::<usize>() % 6;
        let query: String = (0..n).map(|_| ['a', 'b', 'c'][rng.gen::<usize>() % 3]).collect();
        let mut a: Vec<u64> = patricia.retrieve(&query).cloned().collect();
        let mut b: Vec<u64> = trie.retrieve(&query.chars().collect::<Vec<char>>()).cloned().collect();
        let mut c: Vec<u64> = keys
            .iter()
            .enumerate()
            .filter(|(_, k)| k.starts_with(&query))
            .map(|(i, _)| i as u64)
            .collect();
        a.sort_unstable();
        b.sort_unstable();
        c.sort_unstable();
        assert_eq!(a, c, "query:{:?}", query);
        assert_eq!(b, c, "query:{:?}", query);
    }
}
