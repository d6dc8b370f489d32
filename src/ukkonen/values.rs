use std::slice;

use crate::ukkonen::{Node, NodeId};

/// Iterator over values attached to a subtree, returned by
/// [SuffixTree::retrieve][crate::ukkonen::SuffixTree::retrieve].
///
/// Nodes are visited in pre-order, following child edges in the order of
/// their first character. Values in a node are yielded before the values in
/// its children. Cloning the iterator before consuming it makes it
/// restartable.
pub struct Values<'a, V> {
    nodes: &'a [Node<V>],
    stack: Vec<NodeId>,
    values: slice::Iter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(nodes: &'a [Node<V>], root: Option<NodeId>) -> Self {
        Values {
            nodes,
            stack: root.into_iter().collect(),
            values: <&[V]>::default().iter(),
        }
    }
}

impl<'a, V> Clone for Values<'a, V> {
    fn clone(&self) -> Self {
        Values {
            nodes: self.nodes,
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

            let node = self.nodes.get(self.stack.pop()?)?;
            self.stack.extend(node.edges.values().rev().map(|e| e.target));
            self.values = node.values.iter();
        }
    }
}
