use std::{hash::Hash, sync::Arc};

use crate::{
    config::{Config, DEFAULT_NAME, MIN_SUFFIX_LEN},
    db,
    patricia::{Partition, PatriciaTrie},
    util,
};

/// PatriciaSuffixTrie type, same as [SuffixTrie][crate::trie::SuffixTrie]
/// but suffixes are indexed into a [PatriciaTrie]. All suffixes of a key
/// share the key's buffer.
#[derive(Clone)]
pub struct PatriciaSuffixTrie<V> {
    name: String,
    min_suffix_len: usize,
    inner: PatriciaTrie<V>,
    n_count: usize,
}

impl<V> Default for PatriciaSuffixTrie<V> {
    fn default() -> PatriciaSuffixTrie<V> {
        PatriciaSuffixTrie::new(DEFAULT_NAME, MIN_SUFFIX_LEN)
    }
}

impl<V> PatriciaSuffixTrie<V> {
    pub fn new(name: &str, min_suffix_len: usize) -> PatriciaSuffixTrie<V> {
        log::debug!(
            target: "sstrie",
            "{}, new patricia suffix trie min_suffix_len:{}", name, min_suffix_len
        );

        PatriciaSuffixTrie {
            name: name.to_string(),
            min_suffix_len,
            inner: PatriciaTrie::new(),
            n_count: 0,
        }
    }

    pub fn from_config(config: &Config) -> PatriciaSuffixTrie<V> {
        PatriciaSuffixTrie::new(&config.name, config.min_suffix_len)
    }

    #[inline]
    pub fn to_name(&self) -> String {
        self.name.clone()
    }

    #[inline]
    pub fn to_min_suffix_len(&self) -> usize {
        self.min_suffix_len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    pub fn as_trie(&self) -> &PatriciaTrie<V> {
        &self.inner
    }

    /// Add `{key, value}`, every suffix not shorter than the minimum suffix
    /// length is added to the inner trie, shortest first.
    pub fn add(&mut self, key: &str, value: V)
    where
        V: Clone,
    {
        self.n_count += 1;

        let data: Arc<[char]> = util::as_chars(key).into();
        if let Some(n) = data.len().checked_sub(self.min_suffix_len) {
            for i in (0..=n).rev() {
                let suffix = Partition::from_offset(Arc::clone(&data), i);
                self.inner.add_partition(suffix, value.clone());
            }
        }
    }

    /// Return values whose key contain `query`, duplicate values are
    /// removed.
    pub fn retrieve(&self, query: &str) -> Vec<&V>
    where
        V: Eq + Hash,
    {
        db::distinct(self.inner.retrieve(query))
    }
}

impl<V> db::Index<V> for PatriciaSuffixTrie<V>
where
    V: Clone + Eq + Hash,
{
    fn add(&mut self, key: &str, value: V) {
        PatriciaSuffixTrie::add(self, key, value)
    }

    fn retrieve<'a>(&'a self, query: &str) -> Box<dyn Iterator<Item = &'a V> + 'a> {
        Box::new(PatriciaSuffixTrie::retrieve(self, query).into_iter())
    }
}

#[cfg(test)]
#[path = "suffix_test.rs"]
mod suffix_test;
