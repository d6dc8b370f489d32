use rand::{self, prelude::random, rngs::StdRng, Rng, SeedableRng};

use std::collections::BTreeSet;

use super::*;
use crate::scan::LinearScan;

#[test]
fn test_suffix_trie() {
    let mut index = SuffixTrie::<u64>::new("test_suffix_trie", 3);
    assert_eq!(index.to_name(), "test_suffix_trie");
    assert_eq!(index.to_min_suffix_len(), 3);

    index.add("banana", 1);
    index.add("an", 2);
    index.add("bandana", 3);
    assert_eq!(index.len(), 3);

    assert_eq!(index.retrieve("ana"), vec![&1, &3]);
    assert_eq!(index.retrieve("nan"), vec![&1]);
    assert_eq!(index.retrieve("dan"), vec![&3]);
    // key "an" is shorter than minimum suffix length.
    assert_eq!(index.retrieve("an"), vec![&1, &3]);
    assert_eq!(index.retrieve("na"), vec![&1]);
    assert!(index.retrieve("xyz").is_empty());
    assert_eq!(index.as_trie().len(), 4 + 5);
}

#[test]
fn test_suffix_trie_min_zero() {
    let mut index = SuffixTrie::<u64>::new("test_suffix_trie_min_zero", 0);
    index.add("ab", 1);
    index.add("", 2);

    // empty suffix is held by the root.
    assert_eq!(index.as_trie().get(&[]), &[1, 2]);
    let vals: BTreeSet<u64> = index.retrieve("").into_iter().cloned().collect();
    assert_eq!(vals, vec![1, 2].into_iter().collect());
    assert_eq!(index.retrieve("b"), vec![&1]);

    let index = SuffixTrie::<u64>::from_config(&Config::default());
    assert_eq!(index.to_min_suffix_len(), MIN_SUFFIX_LEN);
    assert!(index.is_empty());
}

#[test]
fn test_suffix_trie_scan() {
    let seed: u64 = random();
    println!("test_suffix_trie_scan {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let min_suffix_len = rng.gen::<usize>() % 4;
    let mut index = SuffixTrie::<u64>::new("test_suffix_trie_scan", min_suffix_len);
    let mut scan = LinearScan::<u64>::new();
    for i in 0..200 {
        let n = rng.gen::<usize>() % 12;
        let key: String = (0..n).map(|_| ['a', 'b', 'c'][rng.gen::<usize>() % 3]).collect();
        db::Index::add(&mut index, &key, i);
        scan.add(&key, i);
    }

    for _ in 0..200 {
        let n = min_suffix_len + (rng.gen::<usize>() % 5);
        let query: String = (0..n).map(|_| ['a', 'b', 'c'][rng.gen::<usize>() % 3]).collect();
        let vals: Vec<u64> = db::Index::retrieve(&index, &query).cloned().collect();
        let set: BTreeSet<u64> = vals.iter().cloned().collect();
        assert_eq!(vals.len(), set.len(), "duplicates for {:?}", query);
        let refs: BTreeSet<u64> = scan.retrieve(&query).into_iter().cloned().collect();
        assert_eq!(set, refs, "query:{:?}", query);
    }
}
