use std::{convert::TryFrom, mem};

use crate::{
    config::{Config, MIN_QUERY_LEN},
    db::{self, Footprint},
    err_at,
    ukkonen::{Edge, Keys, Label, Node, NodeId, Stats, Values, ROOT},
    util::{self, Depth},
    Error, Result,
};

/// SuffixTree type, a generalized suffix tree indexing every suffix of
/// every key added to it.
///
/// Mutation is single writer, [SuffixTree::add] requires a mutable
/// reference. Once built, the tree can be shared across threads, say via
/// `Arc`, and retrieved from concurrently.
#[derive(Clone)]
pub struct SuffixTree<V> {
    name: String,
    min_query_len: usize,

    keys: Keys,
    nodes: Vec<Node<V>>,
    // most recently created leaf still waiting for its suffix-link.
    active_leaf: NodeId,
    seqno: u64,
    n_count: usize,
}

impl<V> SuffixTree<V> {
    /// Create a new suffix tree. Queries shorter than `min_query_len`
    /// always return empty result.
    pub fn new(name: &str, min_query_len: usize) -> SuffixTree<V> {
        log::debug!(
            target: "sstrie",
            "{}, new suffix tree min_query_len:{}", name, min_query_len
        );

        SuffixTree {
            name: name.to_string(),
            min_query_len,

            keys: Keys::default(),
            nodes: vec![Node::default()],
            active_leaf: ROOT,
            seqno: 0,
            n_count: 0,
        }
    }

    pub fn from_config(config: &Config) -> SuffixTree<V> {
        SuffixTree::new(&config.name, config.min_query_len)
    }

    /// Return name of this index instance.
    #[inline]
    pub fn to_name(&self) -> String {
        self.name.clone()
    }

    #[inline]
    pub fn to_min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// Return number of entries added to this index, including the ones
    /// with empty key.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }
}

impl<V> Default for SuffixTree<V> {
    fn default() -> SuffixTree<V> {
        SuffixTree::new(crate::config::DEFAULT_NAME, MIN_QUERY_LEN)
    }
}

impl<V> SuffixTree<V> {
    /// Add `{key, value}` into the index. Every suffix of key shall
    /// henceforth match `value`. Adding the same pair again shall attach
    /// another copy of `value`. Empty key is ignored.
    pub fn add(&mut self, key: &str, value: V)
    where
        V: Clone,
    {
        self.n_count += 1;
        self.seqno += 1;

        let chars = util::as_chars(key);
        if chars.is_empty() {
            return;
        }

        let key = self.keys.push(chars);
        let n = self.keys.to_label(key).len();

        self.active_leaf = ROOT;
        let (mut s, mut start) = (ROOT, 0);
        for i in 0..n {
            let text = Label::new(key, start, (i + 1).saturating_sub(start));
            let rest = Label::new(key, i, n - i);

            let (node, off1) = self.update(s, text, rest, &value);
            let (node, off2) = self.canonize(node, text.tail(off1));
            s = node;
            start += off1 + off2;
        }

        let leaf = self.active_leaf;
        if leaf != ROOT && leaf != s {
            self.set_suffix(leaf, s);
        }

        if cfg!(feature = "debug") {
            if let Err(err) = self.validate() {
                log::error!(target: "sstrie", "{}, add {:?}", self.name, err);
            }
        }
    }

    /// Retrieve all values whose key contain `query` as sub-string. Values
    /// are returned in subtree order and the same value may be returned more
    /// than once, either because it was added more than once or because
    /// `query` occur at several positions within the key.
    ///
    /// Query shorter than the configured minimum length returns empty. So
    /// does an empty query, even when minimum length is ZERO.
    pub fn retrieve(&self, query: &str) -> Values<'_, V> {
        let query = util::as_chars(query);
        let node = match query.len() {
            n if n < self.min_query_len => None,
            _ => self.search(&query),
        };
        Values::new(&self.nodes, node)
    }

    // locate the node whose subtree covers all occurrences of `query`.
    fn search(&self, query: &[char]) -> Option<NodeId> {
        let (mut node, mut i) = (ROOT, 0);
        while let Some(ch) = query.get(i) {
            let edge = self.nodes.get(node)?.as_edge(*ch)?;
            let label = self.keys.as_chars(&edge.label);
            let query = &query[i..];

            let n = usize::min(query.len(), label.len());
            if n == 0 || query[..n] != label[..n] {
                return None;
            } else if label.len() >= query.len() {
                return Some(edge.target);
            }
            node = edge.target;
            i += n;
        }

        None
    }

    // descend from `node` along full edges spelled by `text`, return the
    // deepest explicit node reached and the number of characters consumed.
    fn canonize(&self, mut node: NodeId, text: Label) -> (NodeId, usize) {
        let text = self.keys.as_chars(&text);
        let mut off = 0;
        while let Some(ch) = text.get(off) {
            let edge = match self.nodes.get(node).and_then(|n| n.as_edge(*ch)) {
                Some(edge) => edge,
                None => break,
            };
            let label = self.keys.as_chars(&edge.label);
            if label.is_empty() || !text[off..].starts_with(label) {
                break;
            }
            off += label.len();
            node = edge.target;
        }

        (node, off)
    }

    // check whether `prefix` extended by `t` is present below `node`. If
    // not, make room for the extension and return the node where the new
    // edge should hang.
    fn test_and_split(
        &mut self,
        node: NodeId,
        prefix: Label,
        t: char,
        remainder: Label,
        value: &V,
    ) -> (bool, NodeId)
    where
        V: Clone,
    {
        let (s, off) = self.canonize(node, prefix);
        let prefix = prefix.tail(off);

        if let Some(ch) = self.keys.first(&prefix) {
            // point lies inside the edge starting with `ch`.
            let edge = match self.nodes[s].as_edge(ch) {
                Some(edge) => *edge,
                None => return (false, s),
            };
            let n = prefix.len();
            if self.keys.as_chars(&edge.label).get(n) == Some(&t) {
                return (true, s);
            }

            let (head, tail) = (edge.label.head(n), edge.label.tail(n));
            let tail_ch = match self.keys.first(&tail) {
                Some(tail_ch) => tail_ch,
                None => return (true, s),
            };
            let r = self.new_node();
            self.nodes[r].set_edge(tail_ch, Edge::new(tail, edge.target));
            self.nodes[s].set_edge(ch, Edge::new(head, r));
            return (false, r);
        }

        let edge = match self.nodes[s].as_edge(t) {
            Some(edge) => *edge,
            None => return (false, s),
        };

        let (equal, ends_inside) = {
            let label = self.keys.as_chars(&edge.label);
            let remainder = self.keys.as_chars(&remainder);
            (
                label == remainder,
                remainder.len() < label.len() && label.starts_with(remainder),
            )
        };

        if equal {
            self.attach(edge.target, value);
            (true, s)
        } else if ends_inside {
            let tail = edge.label.tail(remainder.len());
            let tail_ch = match self.keys.first(&tail) {
                Some(tail_ch) => tail_ch,
                None => return (true, s),
            };
            let r = self.new_node();
            self.attach(r, value);
            self.nodes[r].set_edge(tail_ch, Edge::new(tail, edge.target));
            self.nodes[s].set_edge(t, Edge::new(remainder, r));
            (false, s)
        } else {
            // remainder extends beyond the label, or diverge from it, in
            // both cases the mid-edge rule handles the extension later.
            (true, s)
        }
    }

    // extend every pending suffix of the current key by the last character
    // of `text`, `rest` is the key from that character onwards. Return the
    // reference point for the next extension.
    fn update(&mut self, node: NodeId, text: Label, rest: Label, value: &V) -> (NodeId, usize)
    where
        V: Clone,
    {
        let t = match self.keys.last(&text) {
            Some(t) => t,
            None => return (node, 0),
        };
        let n = text.len() - 1;

        let (mut s, mut off) = (node, 0);
        let mut oldroot = ROOT;

        let (mut endpoint, mut r) = self.test_and_split(s, text.head(n), t, rest, value);
        while !endpoint {
            let leaf = match self.nodes[r].as_edge(t) {
                Some(edge) => edge.target,
                None => {
                    let leaf = self.new_node();
                    self.attach(leaf, value);
                    self.nodes[r].set_edge(t, Edge::new(rest, leaf));
                    leaf
                }
            };

            if self.active_leaf != ROOT {
                self.set_suffix(self.active_leaf, leaf);
            }
            self.active_leaf = leaf;

            if oldroot != ROOT {
                self.set_suffix(oldroot, r);
            }
            oldroot = r;

            match self.nodes[s].suffix {
                // root sentinel, consume one character instead of moving up.
                None => off += 1,
                Some(link) => {
                    let text = text.tail(off).head(n.saturating_sub(off));
                    let (node, m) = self.canonize(link, text);
                    s = node;
                    off += m;
                }
            }

            let prefix = text.tail(off).head(n.saturating_sub(off));
            let res = self.test_and_split(s, prefix, t, rest, value);
            endpoint = res.0;
            r = res.1;
        }

        if oldroot != ROOT {
            self.set_suffix(oldroot, r);
        }

        (s, off)
    }

    // attach value to `node` and to the nodes along its suffix-links,
    // stop at nodes already attached with value from the on-going add.
    fn attach(&mut self, mut node: NodeId, value: &V)
    where
        V: Clone,
    {
        let seqno = self.seqno;
        while node != ROOT {
            let n = match self.nodes.get_mut(node) {
                Some(n) if n.seqno != seqno => n,
                _ => break,
            };
            n.values.push(value.clone());
            n.seqno = seqno;
            match n.suffix {
                Some(link) => node = link,
                None => break,
            }
        }
    }

    fn set_suffix(&mut self, node: NodeId, link: NodeId) {
        if node != ROOT {
            if let Some(n) = self.nodes.get_mut(node) {
                n.set_suffix(link);
            }
        }
    }

    fn new_node(&mut self) -> NodeId {
        self.nodes.push(Node::default());
        self.nodes.len() - 1
    }
}

impl<V> SuffixTree<V> {
    /// Return quickly with basic statistics, depth histograms are computed
    /// only by [SuffixTree::validate].
    pub fn to_stats(&self) -> Stats {
        let mut stats = Stats::new(&self.name, self.min_query_len);
        stats.node_size = mem::size_of::<Node<V>>();
        stats.n_count = self.n_count;
        stats.n_keys = self.keys.len();
        stats.n_chars = self.keys.to_chars();
        stats.n_nodes = self.nodes.len();
        for node in self.nodes.iter() {
            stats.n_leaves += if node.is_leaf() { 1 } else { 0 };
            stats.n_values += node.values.len();
            stats.n_suffixes += node.suffix.map(|_| 1).unwrap_or(0);
        }
        stats
    }

    /// Validate the tree structure:
    ///
    /// * Every node, other than root, is owned by exactly one edge.
    /// * Edges are keyed by the first character of their label.
    /// * Labels are non-empty and lie within their key.
    /// * Suffix-links refer to valid nodes, root has no suffix-link.
    /// * No leaf spells more characters than the longest key.
    pub fn validate(&self) -> Result<Stats> {
        let mut owned = vec![false; self.nodes.len()];
        let (mut edge_depths, mut char_depths) = (Depth::default(), Depth::default());
        let max_key_len = self.keys.to_max_len();

        let mut stack = vec![(ROOT, 0_usize, 0_usize)];
        let mut n_visited = 0;
        while let Some((id, depth, n_chars)) = stack.pop() {
            n_visited += 1;

            let node = match self.nodes.get(id) {
                Some(node) => node,
                None => err_at!(Fatal, msg: "{} dangling node {}", self.name, id)?,
            };
            match node.suffix {
                Some(link) if id == ROOT => {
                    err_at!(Fatal, msg: "{} root has suffix-link {}", self.name, link)?
                }
                Some(link) if link >= self.nodes.len() => {
                    err_at!(Fatal, msg: "{} dangling suffix-link {}->{}", self.name, id, link)?
                }
                _ => (),
            }
            if node.is_leaf() {
                if n_chars > max_key_len {
                    err_at!(Fatal, msg: "{} leaf {} spells {} chars", self.name, id, n_chars)?
                }
                edge_depths.sample(depth);
                char_depths.sample(n_chars);
            }

            for (ch, edge) in node.edges.iter() {
                if !self.keys.contains(&edge.label) || edge.label.is_empty() {
                    err_at!(Fatal, msg: "{} node {} invalid label {:?}", self.name, id, edge.label)?
                }
                if self.keys.first(&edge.label) != Some(*ch) {
                    err_at!(Fatal, msg: "{} node {} edge {:?} mis-keyed", self.name, id, ch)?
                }
                match owned.get_mut(edge.target) {
                    Some(true) => {
                        err_at!(Fatal, msg: "{} node {} owned twice", self.name, edge.target)?
                    }
                    Some(o) if edge.target != ROOT => *o = true,
                    _ => err_at!(Fatal, msg: "{} node {} invalid target", self.name, edge.target)?,
                }
                stack.push((edge.target, depth + 1, n_chars + edge.label.len()));
            }
        }

        if n_visited != self.nodes.len() {
            err_at!(
                Fatal,
                msg: "{} unreachable nodes {}/{}", self.name, n_visited, self.nodes.len()
            )?
        }

        let mut stats = self.to_stats();
        stats.edge_depths = Some(edge_depths);
        stats.char_depths = Some(char_depths);

        log::debug!(target: "sstrie", "{}, validated {} nodes", self.name, n_visited);

        Ok(stats)
    }
}

impl<V> Footprint for SuffixTree<V> {
    fn footprint(&self) -> Result<isize> {
        let mut size = mem::size_of::<Self>();
        size += self.nodes.capacity() * mem::size_of::<Node<V>>();
        size += self.keys.to_chars() * mem::size_of::<char>();
        for node in self.nodes.iter() {
            size += node.edges.len() * mem::size_of::<(char, Edge)>();
            size += node.values.capacity() * mem::size_of::<V>();
        }
        err_at!(FailConvert, isize::try_from(size))
    }
}

impl<V> db::Index<V> for SuffixTree<V>
where
    V: Clone,
{
    fn add(&mut self, key: &str, value: V) {
        SuffixTree::add(self, key, value)
    }

    fn retrieve<'a>(&'a self, query: &str) -> Box<dyn Iterator<Item = &'a V> + 'a> {
        Box::new(SuffixTree::retrieve(self, query))
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
