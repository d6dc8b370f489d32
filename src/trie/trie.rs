use std::slice;

use crate::{db, util};

/// Trie type, keys are sequence of components `P`, each node in the trie
/// hold a single component. Every key can map to several values, values
/// are appended in the order they are added.
///
/// [Trie::retrieve] is a prefix lookup, it returns values for all keys that
/// start with the query.
#[derive(Clone)]
pub struct Trie<P, V> {
    root: Node<P, V>,
    n_count: usize,
}

impl<P, V> Default for Trie<P, V> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<P, V> Trie<P, V> {
    pub fn new() -> Trie<P, V> {
        let root = Node::Root {
            values: Vec::default(),
            children: Vec::default(),
        };
        Trie { root, n_count: 0 }
    }

    pub fn as_root(&self) -> &Node<P, V> {
        &self.root
    }

    /// Add value for key `comps`. Values added with empty key are held by
    /// the root node.
    pub fn add(&mut self, comps: &[P], value: V)
    where
        P: Clone + Ord,
    {
        self.root.add(comps, value);
        self.n_count += 1;
    }

    /// Return the number of values added to this trie.
    pub fn len(&self) -> usize {
        self.n_count
    }

    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return values added for exactly `comps`.
    pub fn get(&self, comps: &[P]) -> &[V]
    where
        P: Ord,
    {
        match self.root.get(comps) {
            Some(node) => node.as_values(),
            None => &[],
        }
    }

    /// Return values for all keys starting with `comps`, in depth first
    /// order.
    pub fn retrieve(&self, comps: &[P]) -> Values<'_, P, V>
    where
        P: Ord,
    {
        Values::new(self.root.get(comps))
    }
}

/// Node type for [Trie].
#[derive(Clone)]
pub enum Node<P, V> {
    Root {
        values: Vec<V>,
        children: Vec<Node<P, V>>,
    },
    Comp {
        comp: P,
        values: Vec<V>,
        children: Vec<Node<P, V>>,
    },
}

impl<P, V> Node<P, V> {
    fn new(comp: &P) -> Node<P, V>
    where
        P: Clone,
    {
        Node::Comp {
            comp: comp.clone(),
            values: Vec::default(),
            children: Vec::default(),
        }
    }

    pub fn as_comp(&self) -> Option<&P> {
        match self {
            Node::Root { .. } => None,
            Node::Comp { comp, .. } => Some(comp),
        }
    }

    pub fn as_values(&self) -> &[V] {
        match self {
            Node::Root { values, .. } => values,
            Node::Comp { values, .. } => values,
        }
    }

    pub fn as_children(&self) -> &[Node<P, V>] {
        match self {
            Node::Root { children, .. } => children,
            Node::Comp { children, .. } => children,
        }
    }

    fn as_mut_children(&mut self) -> &mut Vec<Node<P, V>> {
        match self {
            Node::Root { children, .. } => children,
            Node::Comp { children, .. } => children,
        }
    }

    fn add_value(&mut self, value: V) {
        match self {
            Node::Root { values, .. } => values.push(value),
            Node::Comp { values, .. } => values.push(value),
        }
    }

    fn find(&self, comp: &P) -> Result<usize, usize>
    where
        P: Ord,
    {
        self.as_children().binary_search_by_key(&comp, |n| match n {
            Node::Comp { comp, .. } => comp,
            _ => unreachable!(),
        })
    }

    fn add(&mut self, comps: &[P], value: V)
    where
        P: Clone + Ord,
    {
        match comps {
            [] => self.add_value(value),
            [comp, rest @ ..] => {
                let off = match self.find(comp) {
                    Ok(off) => off,
                    Err(off) => {
                        self.as_mut_children().insert(off, Node::new(comp));
                        off
                    }
                };
                self.as_mut_children()[off].add(rest, value)
            }
        }
    }

    fn get(&self, comps: &[P]) -> Option<&Node<P, V>>
    where
        P: Ord,
    {
        match comps {
            [] => Some(self),
            [comp, rest @ ..] => match self.find(comp) {
                Ok(off) => self.as_children()[off].get(rest),
                Err(_off) => None,
            },
        }
    }
}

/// Iterator over values in a sub-trie, returned by [Trie::retrieve].
pub struct Values<'a, P, V> {
    stack: Vec<&'a Node<P, V>>,
    values: slice::Iter<'a, V>,
}

impl<'a, P, V> Values<'a, P, V> {
    fn new(root: Option<&'a Node<P, V>>) -> Self {
        Values {
            stack: root.into_iter().collect(),
            values: <&[V]>::default().iter(),
        }
    }
}

impl<'a, P, V> Clone for Values<'a, P, V> {
    fn clone(&self) -> Self {
        Values {
            stack: self.stack.clone(),
            values: self.values.clone(),
        }
    }
}

impl<'a, P, V> Iterator for Values<'a, P, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.values.next() {
                break Some(value);
            }

            let node = self.stack.pop()?;
            self.stack.extend(node.as_children().iter().rev());
            self.values = node.as_values().iter();
        }
    }
}

impl<V> db::Index<V> for Trie<char, V> {
    fn add(&mut self, key: &str, value: V) {
        Trie::add(self, &util::as_chars(key), value)
    }

    fn retrieve<'a>(&'a self, query: &str) -> Box<dyn Iterator<Item = &'a V> + 'a> {
        Box::new(Trie::retrieve(self, &util::as_chars(query)))
    }
}

#[cfg(test)]
#[path = "trie_test.rs"]
mod trie_test;
