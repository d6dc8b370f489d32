//! Module `scan` implement a brute force index, useful as baseline while
//! measuring the other index types.

use crate::db;

/// LinearScan type, hold `{key, value}` pairs in a stack and scan all of
/// them on every lookup. There is no minimum query length, an empty query
/// matches every entry.
#[derive(Clone)]
pub struct LinearScan<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for LinearScan<V> {
    fn default() -> LinearScan<V> {
        LinearScan::new()
    }
}

impl<V> LinearScan<V> {
    pub fn new() -> LinearScan<V> {
        LinearScan {
            entries: Vec::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, key: &str, value: V) {
        self.entries.push((key.to_string(), value))
    }

    /// Return values whose key contain `query`, latest entries first.
    pub fn retrieve(&self, query: &str) -> Vec<&V> {
        self.entries
            .iter()
            .rev()
            .filter_map(|(key, value)| if key.contains(query) { Some(value) } else { None })
            .collect()
    }
}

impl<V> db::Index<V> for LinearScan<V> {
    fn add(&mut self, key: &str, value: V) {
        LinearScan::add(self, key, value)
    }

    fn retrieve<'a>(&'a self, query: &str) -> Box<dyn Iterator<Item = &'a V> + 'a> {
        Box::new(LinearScan::retrieve(self, query).into_iter())
    }
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;
