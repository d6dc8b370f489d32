use std::{collections::BTreeMap, mem, sync::Arc};

use crate::{
    db,
    patricia::{Match, Partition},
    util,
};

/// PatriciaTrie type, path compressed trie where every node hold a
/// partition of the keys passing through it. Like [Trie][crate::trie::Trie],
/// retrieve is a prefix lookup.
#[derive(Clone)]
pub struct PatriciaTrie<V> {
    root: Node<V>,
    n_count: usize,
}

impl<V> Default for PatriciaTrie<V> {
    fn default() -> Self {
        PatriciaTrie::new()
    }
}

impl<V> PatriciaTrie<V> {
    pub fn new() -> PatriciaTrie<V> {
        PatriciaTrie {
            root: Node::new(Partition::default(), vec![]),
            n_count: 0,
        }
    }

    pub fn as_root(&self) -> &Node<V> {
        &self.root
    }

    /// Return number of values added to this trie.
    pub fn len(&self) -> usize {
        self.n_count
    }

    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    pub fn add(&mut self, key: &str, value: V) {
        let data: Arc<[char]> = util::as_chars(key).into();
        self.add_partition(Partition::new(data), value)
    }

    /// Same as add, but `key` can share its buffer with other keys.
    pub fn add_partition(&mut self, key: Partition, value: V) {
        self.root.add(key, value);
        self.n_count += 1;
    }

    /// Return values for all keys starting with `query`. Empty query
    /// returns all values.
    pub fn retrieve(&self, query: &str) -> Values<'_, V> {
        Values::new(self.root.search(&util::as_chars(query)))
    }
}

/// Node type for [PatriciaTrie]. Children are keyed by the first character
/// of their partition.
#[derive(Clone)]
pub struct Node<V> {
    key: Partition,
    values: Vec<V>,
    children: BTreeMap<char, Node<V>>,
}

impl<V> Node<V> {
    fn new(key: Partition, values: Vec<V>) -> Node<V> {
        Node {
            key,
            values,
            children: BTreeMap::new(),
        }
    }

    pub fn as_key(&self) -> &Partition {
        &self.key
    }

    pub fn as_values(&self) -> &[V] {
        &self.values
    }

    pub fn as_children(&self) -> impl Iterator<Item = &Node<V>> {
        self.children.values()
    }

    fn add_child(&mut self, child: Node<V>) {
        if let Some(ch) = child.key.first() {
            self.children.insert(ch, child);
        }
    }

    fn add(&mut self, key: Partition, value: V) {
        let ch = match key.first() {
            Some(ch) => ch,
            None => {
                self.values.push(value);
                return;
            }
        };

        let child = match self.children.get_mut(&ch) {
            Some(child) => child,
            None => {
                self.children.insert(ch, Node::new(key, vec![value]));
                return;
            }
        };

        match child.key.zip_with(key.as_chars()) {
            (_, Match::Exact) => child.values.push(value),
            (n, Match::Descend) => child.add(key.split(n).1, value),
            (n, Match::Inside) => child.split(n, vec![value]),
            (n, Match::Partial) => {
                child.split(n, vec![]);
                child.add_child(Node::new(key.split(n).1, vec![value]));
            }
        }
    }

    // split this node at `n`, the head stays with `values`, the rest moves
    // into a child node.
    fn split(&mut self, n: usize, values: Vec<V>) {
        let (head, rest) = self.key.split(n);
        let mut old = mem::replace(self, Node::new(head, values));
        old.key = rest;
        self.add_child(old);
    }

    fn search(&self, query: &[char]) -> Option<&Node<V>> {
        let child = match query.first() {
            Some(ch) => self.children.get(ch)?,
            None => return Some(self),
        };

        match child.key.zip_with(query) {
            (_, Match::Exact) | (_, Match::Inside) => Some(child),
            (n, Match::Descend) => child.search(&query[n..]),
            (_, Match::Partial) => None,
        }
    }
}

/// Iterator over values in a sub-trie, returned by
/// [PatriciaTrie::retrieve].
pub struct Values<'a, V> {
    stack: Vec<&'a Node<V>>,
    values: std::slice::Iter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    fn new(root: Option<&'a Node<V>>) -> Self {
        Values {
            stack: root.into_iter().collect(),
            values: <&[V]>::default().iter(),
        }
    }
}

impl<'a, V> Clone for Values<'a, V> {
    fn clone(&self) -> Self {
        Values {
            stack: self.stack.clone(),
            values: self.values.clone(),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.values.next() {
                break Some(value);
            }

            let node = self.stack.pop()?;
            self.stack.extend(node.children.values().rev());
            self.values = node.values.iter();
        }
    }
}

impl<V> db::Index<V> for PatriciaTrie<V> {
    fn add(&mut self, key: &str, value: V) {
        PatriciaTrie::add(self, key, value)
    }

    fn retrieve<'a>(&'a self, query: &str) -> Box<dyn Iterator<Item = &'a V> + 'a> {
        Box::new(PatriciaTrie::retrieve(self, query))
    }
}

#[cfg(test)]
#[path = "trie_test.rs"]
mod trie_test;
