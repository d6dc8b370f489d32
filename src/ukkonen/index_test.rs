use arbitrary::{self, unstructured::Unstructured, Arbitrary};
use rand::{self, prelude::random, rngs::StdRng, Rng, SeedableRng};

use std::{collections::BTreeSet, sync::Arc, thread};

use super::*;
use crate::scan::LinearScan;

#[test]
fn test_retrieve_scenarios() {
    let mut index = SuffixTree::<u64>::new("test_retrieve_scenarios", 0);
    index.add("abcabxabcd", 1);
    assert!(index.retrieve("abc").any(|v| *v == 1));
    index.validate().unwrap();

    let mut index = SuffixTree::<u64>::new("test_retrieve_scenarios", 0);
    index.add("xabxac", 1);
    index.add("abcabxabcd", 2);
    let vals: BTreeSet<u64> = index.retrieve("ab").cloned().collect();
    assert_eq!(vals, vec![1, 2].into_iter().collect());
    let vals: BTreeSet<u64> = index.retrieve("xa").cloned().collect();
    assert_eq!(vals, vec![1, 2].into_iter().collect());
    let vals: BTreeSet<u64> = index.retrieve("abc").cloned().collect();
    assert_eq!(vals, vec![2].into_iter().collect());
    assert_eq!(index.retrieve("xac").cloned().collect::<Vec<u64>>(), vec![1]);
    index.validate().unwrap();

    let mut index = SuffixTree::<u64>::new("test_retrieve_scenarios", 0);
    index.add("banana", 1);
    let vals: Vec<u64> = index.retrieve("ana").cloned().collect();
    assert!(!vals.is_empty());
    assert!(vals.iter().all(|v| *v == 1));
    assert_eq!(index.retrieve("nab").count(), 0);

    let mut index = SuffixTree::<u64>::new("test_retrieve_scenarios", 3);
    index.add("short", 1);
    assert_eq!(index.retrieve("sh").count(), 0);
    assert_eq!(index.retrieve("sho").cloned().collect::<Vec<u64>>(), vec![1]);
    assert_eq!(index.retrieve("ort").cloned().collect::<Vec<u64>>(), vec![1]);

    let index = SuffixTree::<u64>::new("test_retrieve_scenarios", 0);
    assert_eq!(index.retrieve("anything").count(), 0);
    assert!(index.is_empty());

    let mut index = SuffixTree::<u64>::new("test_retrieve_scenarios", 0);
    index.add("a", 1);
    assert_eq!(index.retrieve("zzz").count(), 0);
    assert_eq!(index.retrieve("aa").count(), 0);
    assert_eq!(index.retrieve("a").cloned().collect::<Vec<u64>>(), vec![1]);
}

#[test]
fn test_shorter_suffixes() {
    // second key's extensions are all present already, its value must
    // still reach the shorter suffixes.
    let mut index = SuffixTree::<u64>::new("test_shorter_suffixes", 0);
    index.add("xab", 1);
    index.add("ab", 2);

    let vals: BTreeSet<u64> = index.retrieve("b").cloned().collect();
    assert_eq!(vals, vec![1, 2].into_iter().collect());
    let vals: BTreeSet<u64> = index.retrieve("ab").cloned().collect();
    assert_eq!(vals, vec![1, 2].into_iter().collect());
    let vals: BTreeSet<u64> = index.retrieve("xab").cloned().collect();
    assert_eq!(vals, vec![1].into_iter().collect());

    index.validate().unwrap();
}

#[test]
fn test_empty_key_query() {
    let mut index = SuffixTree::<u64>::new("test_empty_key_query", 0);
    index.add("", 1);
    assert_eq!(index.len(), 1);
    assert!(!index.is_empty());

    index.add("abc", 2);
    assert_eq!(index.len(), 2);
    // empty query does not match the root.
    assert_eq!(index.retrieve("").count(), 0);

    let stats = index.validate().unwrap();
    assert_eq!(stats.n_count, 2);
    assert_eq!(stats.n_keys, 1);
    assert_eq!(stats.n_chars, 3);
}

#[test]
fn test_multiplicity() {
    let mut index = SuffixTree::<u64>::new("test_multiplicity", 0);
    index.add("short", 1);
    let n = index.retrieve("short").count();
    index.add("short", 1);
    assert!(index.retrieve("short").count() >= 2);
    assert!(index.retrieve("short").count() > n);
    assert!(index.retrieve("hor").filter(|v| **v == 1).count() >= 2);
}

#[test]
fn test_values_restart() {
    let mut index = SuffixTree::<u64>::new("test_values_restart", 0);
    for (i, key) in ["mississippi", "missing", "sip", "pi"].iter().enumerate() {
        index.add(key, i as u64);
    }

    let iter = index.retrieve("ssi");
    let a: Vec<u64> = iter.clone().cloned().collect();
    let b: Vec<u64> = iter.cloned().collect();
    assert_eq!(a, b);
    let vals: BTreeSet<u64> = a.into_iter().collect();
    assert_eq!(vals, vec![0, 1].into_iter().collect());

    let vals: BTreeSet<u64> = index.retrieve("i").cloned().collect();
    assert_eq!(vals, vec![0, 1, 2, 3].into_iter().collect());
    let vals: BTreeSet<u64> = index.retrieve("ip").cloned().collect();
    assert_eq!(vals, vec![0, 2].into_iter().collect());
}

#[test]
fn test_unicode() {
    let mut index = SuffixTree::<u64>::new("test_unicode", 0);
    index.add("naïve café", 1);
    index.add("日本語のテキスト", 2);
    index.add("cafe", 3);

    assert_eq!(index.retrieve("ïve").cloned().collect::<Vec<u64>>(), vec![1]);
    assert_eq!(index.retrieve("本語").cloned().collect::<Vec<u64>>(), vec![2]);
    let vals: BTreeSet<u64> = index.retrieve("caf").cloned().collect();
    assert_eq!(vals, vec![1, 3].into_iter().collect());
    // no normalization, "é" and "e" are different characters.
    assert_eq!(index.retrieve("café").cloned().collect::<Vec<u64>>(), vec![1]);
    assert_eq!(index.retrieve("cafe").cloned().collect::<Vec<u64>>(), vec![3]);

    index.validate().unwrap();
}

#[test]
fn test_stats() {
    let mut index = SuffixTree::<u64>::new("test_stats", 2);
    assert_eq!(index.to_name(), "test_stats");
    assert_eq!(index.to_min_query_len(), 2);
    index.add("banana", 1);
    index.add("bandana", 2);

    let stats = index.validate().unwrap();
    assert_eq!(stats.name, "test_stats");
    assert_eq!(stats.min_query_len, 2);
    assert_eq!(stats.n_count, 2);
    assert_eq!(stats.n_keys, 2);
    assert_eq!(stats.n_chars, 13);
    assert!(stats.n_nodes > stats.n_leaves);
    assert!(stats.n_values >= 13);
    let edge_depths = stats.edge_depths.as_ref().unwrap();
    let char_depths = stats.char_depths.as_ref().unwrap();
    assert_eq!(edge_depths.to_samples(), stats.n_leaves);
    assert_eq!(char_depths.to_samples(), stats.n_leaves);
    // "bandana" is not contained in any other key, it ends at a leaf.
    assert_eq!(char_depths.to_max(), Some(7));
    assert!(edge_depths.to_max() <= char_depths.to_max());
    assert_eq!(edge_depths.to_min(), Some(1));
    println!("{}", stats);
    println!("{}", db::ToJson::to_json(&stats));

    assert!(index.to_stats().edge_depths.is_none());
    assert!(index.to_stats().char_depths.is_none());
    assert!(index.footprint().unwrap() > 0);

    let index = SuffixTree::<u64>::from_config(&Config::new("config"));
    assert_eq!(index.to_name(), "config");
    assert_eq!(index.to_min_query_len(), MIN_QUERY_LEN);
}

#[test]
fn test_suffix_tree() {
    let seed: u64 = random();
    println!("test_suffix_tree {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let min_query_len = [0, 0, 1, 2, 3][rng.gen::<usize>() % 5];
    let n_ops = [10, 100, 1000, 3000][rng.gen::<usize>() % 4];
    println!("test_suffix_tree min_query_len:{} n_ops:{}", min_query_len, n_ops);

    let mut index = SuffixTree::<u64>::new("test_suffix_tree", min_query_len);
    let mut scan = LinearScan::<u64>::new();
    let mut keys: Vec<String> = vec![];

    let mut op_counts = [0_u64; 5];
    for i in 0..n_ops {
        let op: Op = {
            let bytes = rng.gen::<[u8; 32]>();
            let mut uns = Unstructured::new(&bytes);
            uns.arbitrary().unwrap()
        };

        match op {
            Op::Add(key) => {
                op_counts[0] += 1;
                let key = to_key(&key);
                index.add(&key, i);
                scan.add(&key, i);
                keys.push(key);
            }
            Op::Retrieve(query) => {
                op_counts[1] += 1;
                check_query(&index, &scan, &to_key(&query), min_query_len);
            }
            Op::Substring(a, b) if !keys.is_empty() => {
                op_counts[2] += 1;
                let key: Vec<char> = keys[rng.gen::<usize>() % keys.len()].chars().collect();
                let (a, b) = (a % (key.len() + 1), b % (key.len() + 1));
                let (a, b) = (usize::min(a, b), usize::max(a, b));
                let query: String = key[a..b].iter().collect();
                check_query(&index, &scan, &query, min_query_len);
            }
            Op::Substring(_, _) => (),
            Op::Len => {
                op_counts[3] += 1;
                assert_eq!(index.len(), scan.len());
                assert_eq!(index.is_empty(), scan.is_empty());
            }
            Op::Validate => {
                op_counts[4] += 1;
                let stats = index.validate().unwrap();
                let max_len = keys.iter().map(|k| k.chars().count()).max().unwrap_or(0);
                let char_depths = stats.char_depths.unwrap();
                assert_eq!(char_depths.to_max(), Some(max_len));
                assert_eq!(char_depths.to_samples(), stats.n_leaves);
            }
        }
    }

    let stats = index.validate().unwrap();
    println!("test_suffix_tree op_counts:{:?}", op_counts);
    println!("{}", stats);
}

#[test]
fn test_monotonic() {
    let seed: u64 = random();
    println!("test_monotonic {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let keys: Vec<String> = (0..100)
        .map(|_| {
            let n = rng.gen::<usize>() % 16;
            (0..n).map(|_| ['a', 'b', 'c'][rng.gen::<usize>() % 3]).collect()
        })
        .collect();
    let queries: Vec<String> = (0..100)
        .map(|_| {
            let n = 1 + (rng.gen::<usize>() % 4);
            (0..n).map(|_| ['a', 'b', 'c'][rng.gen::<usize>() % 3]).collect()
        })
        .collect();

    let mut index = SuffixTree::<u64>::new("test_monotonic", 0);
    let mut prev: Vec<BTreeSet<u64>> = queries.iter().map(|_| BTreeSet::new()).collect();
    for (i, key) in keys.iter().enumerate() {
        index.add(key, i as u64);
        for (query, prev) in queries.iter().zip(prev.iter_mut()) {
            let vals: BTreeSet<u64> = index.retrieve(query).cloned().collect();
            assert!(prev.is_subset(&vals), "key:{:?} query:{:?}", key, query);
            *prev = vals;
        }
    }
}

#[test]
fn test_concurrent_retrieve() {
    let seed: u64 = random();
    println!("test_concurrent_retrieve {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut index = SuffixTree::<u64>::new("test_concurrent_retrieve", 0);
    let mut scan = LinearScan::<u64>::new();
    for i in 0..1000 {
        let n = 1 + rng.gen::<usize>() % 20;
        let key: String = (0..n).map(|_| ['x', 'y', 'z', 'w'][rng.gen::<usize>() % 4]).collect();
        index.add(&key, i);
        scan.add(&key, i);
    }

    let index = Arc::new(index);
    let scan = Arc::new(scan);

    let mut handles = vec![];
    for id in 0..4 {
        let (index, scan) = (Arc::clone(&index), Arc::clone(&scan));
        let seed = seed + id;
        handles.push(thread::spawn(move || {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..1000 {
                let n = 1 + rng.gen::<usize>() % 5;
                let query: String =
                    (0..n).map(|_| ['x', 'y', 'z', 'w'][rng.gen::<usize>() % 4]).collect();
                check_query(&index, &scan, &query, 0);
            }
        }));
    }

    for handle in handles.into_iter() {
        handle.join().unwrap();
    }
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Add(Vec<u8>),
    Retrieve(Vec<u8>),
    Substring(usize, usize),
    Len,
    Validate,
}

// map bytes to a small alphabet, so that keys share plenty of sub-strings.
fn to_key(bytes: &[u8]) -> String {
    bytes.iter().map(|b| ['a', 'b', 'c', 'd'][(b % 4) as usize]).collect()
}

fn check_query(
    index: &SuffixTree<u64>,
    scan: &LinearScan<u64>,
    query: &str,
    min_query_len: usize,
) {
    let vals: BTreeSet<u64> = index.retrieve(query).cloned().collect();
    let n = query.chars().count();
    if n < min_query_len || n == 0 {
        assert!(vals.is_empty(), "query:{:?}", query);
    } else {
        let refs: BTreeSet<u64> = scan.retrieve(query).into_iter().cloned().collect();
        assert_eq!(vals, refs, "query:{:?}", query);
    }
}
