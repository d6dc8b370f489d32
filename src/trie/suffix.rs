use std::hash::Hash;

use crate::{
    config::{Config, DEFAULT_NAME, MIN_SUFFIX_LEN},
    db,
    trie::Trie,
    util,
};

/// SuffixTrie type, indexes every suffix of every key, that is not shorter
/// than the configured minimum suffix length, into a [Trie]. Sub-string
/// lookup is a prefix lookup on the inner trie.
///
/// Memory cost is quadratic in the length of keys, refer to
/// [SuffixTree][crate::ukkonen::SuffixTree] for a linear alternative.
#[derive(Clone)]
pub struct SuffixTrie<V> {
    name: String,
    min_suffix_len: usize,
    inner: Trie<char, V>,
    n_count: usize,
}

impl<V> Default for SuffixTrie<V> {
    fn default() -> SuffixTrie<V> {
        SuffixTrie::new(DEFAULT_NAME, MIN_SUFFIX_LEN)
    }
}

impl<V> SuffixTrie<V> {
    pub fn new(name: &str, min_suffix_len: usize) -> SuffixTrie<V> {
        log::debug!(
            target: "sstrie",
            "{}, new suffix trie min_suffix_len:{}", name, min_suffix_len
        );

        SuffixTrie {
            name: name.to_string(),
            min_suffix_len,
            inner: Trie::new(),
            n_count: 0,
        }
    }

    pub fn from_config(config: &Config) -> SuffixTrie<V> {
        SuffixTrie::new(&config.name, config.min_suffix_len)
    }

    #[inline]
    pub fn to_name(&self) -> String {
        self.name.clone()
    }

    #[inline]
    pub fn to_min_suffix_len(&self) -> usize {
        self.min_suffix_len
    }

    /// Return number of entries added to this index.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return the inner trie.
    pub fn as_trie(&self) -> &Trie<char, V> {
        &self.inner
    }

    /// Add `{key, value}`, suffixes are added from the shortest to the full
    /// key. Keys shorter than the minimum suffix length are not indexed.
    pub fn add(&mut self, key: &str, value: V)
    where
        V: Clone,
    {
        self.n_count += 1;

        let chars = util::as_chars(key);
        if let Some(n) = chars.len().checked_sub(self.min_suffix_len) {
            for i in (0..=n).rev() {
                self.inner.add(&chars[i..], value.clone());
            }
        }
    }

    /// Return values whose key contain `query`, duplicate values are
    /// removed.
    pub fn retrieve(&self, query: &str) -> Vec<&V>
    where
        V: Eq + Hash,
    {
        db::distinct(self.inner.retrieve(&util::as_chars(query)))
    }
}

impl<V> db::Index<V> for SuffixTrie<V>
where
    V: Clone + Eq + Hash,
{
    fn add(&mut self, key: &str, value: V) {
        SuffixTrie::add(self, key, value)
    }

    fn retrieve<'a>(&'a self, query: &str) -> Box<dyn Iterator<Item = &'a V> + 'a> {
        Box::new(SuffixTrie::retrieve(self, query).into_iter())
    }
}

#[cfg(test)]
#[path = "suffix_test.rs"]
mod suffix_test;
