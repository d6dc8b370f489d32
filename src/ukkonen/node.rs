use std::collections::BTreeMap;

use crate::ukkonen::Label;

/// Index of a node in the tree's arena.
pub type NodeId = usize;

/// Root node is always the first node in the arena.
pub const ROOT: NodeId = 0;

/// Edge owns its target node, there is exactly one edge pointing to every
/// node other than the root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub label: Label,
    pub target: NodeId,
}

impl Edge {
    pub fn new(label: Label, target: NodeId) -> Edge {
        Edge { label, target }
    }
}

/// Node type, explicit point in the tree.
#[derive(Clone)]
pub struct Node<V> {
    /// child edges keyed by the first character of their label.
    pub edges: BTreeMap<char, Edge>,
    /// non-owning reference, set at most once.
    pub suffix: Option<NodeId>,
    pub values: Vec<V>,
    /// sequence number of the last add() operation that attached a value.
    pub seqno: u64,
}

impl<V> Default for Node<V> {
    fn default() -> Node<V> {
        Node {
            edges: BTreeMap::new(),
            suffix: None,
            values: Vec::default(),
            seqno: 0,
        }
    }
}

impl<V> Node<V> {
    #[inline]
    pub fn as_edge(&self, ch: char) -> Option<&Edge> {
        self.edges.get(&ch)
    }

    /// Set outgoing edge for `ch`, replacing the old one.
    #[inline]
    pub fn set_edge(&mut self, ch: char, edge: Edge) -> Option<Edge> {
        self.edges.insert(ch, edge)
    }

    /// Set suffix link if not already set, return whether link was set.
    pub fn set_suffix(&mut self, link: NodeId) -> bool {
        match self.suffix {
            Some(_) => false,
            None => {
                self.suffix = Some(link);
                true
            }
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }
}
