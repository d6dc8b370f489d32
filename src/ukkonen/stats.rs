use std::{fmt, result};

use crate::{db, util::Depth};

/// Statistic type, for [SuffixTree][crate::ukkonen::SuffixTree] type.
#[derive(Clone)]
pub struct Stats {
    pub name: String,
    pub min_query_len: usize,
    pub node_size: usize,
    /// number of add() calls, including the ones with empty key.
    pub n_count: usize,
    pub n_keys: usize,
    pub n_chars: usize,
    pub n_nodes: usize,
    pub n_leaves: usize,
    pub n_values: usize,
    pub n_suffixes: usize,
    /// number of edges from root to each leaf.
    pub edge_depths: Option<Depth>,
    /// number of characters spelled from root to each leaf.
    pub char_depths: Option<Depth>,
}

impl Stats {
    pub(crate) fn new(name: &str, min_query_len: usize) -> Stats {
        Stats {
            name: name.to_string(),
            min_query_len,
            node_size: Default::default(),
            n_count: Default::default(),
            n_keys: Default::default(),
            n_chars: Default::default(),
            n_nodes: Default::default(),
            n_leaves: Default::default(),
            n_values: Default::default(),
            n_suffixes: Default::default(),
            edge_depths: None,
            char_depths: None,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        let (e, c) = (
            self.edge_depths.as_ref().map_or("none".to_string(), |x| x.to_string()),
            self.char_depths.as_ref().map_or("none".to_string(), |x| x.to_string()),
        );
        writeln!(f, "ukkonen.name = {}", self.name)?;
        writeln!(
            f,
            "ukkonen = {{ n_count={}, n_keys={}, n_chars={}, min_query_len={} }}",
            self.n_count, self.n_keys, self.n_chars, self.min_query_len
        )?;
        writeln!(
            f,
            "ukkonen = {{ n_nodes={}, n_leaves={}, n_values={}, n_suffixes={}, node_size={} }}",
            self.n_nodes, self.n_leaves, self.n_values, self.n_suffixes, self.node_size,
        )?;
        writeln!(f, "ukkonen.edge_depths = {}", e)?;
        writeln!(f, "ukkonen.char_depths = {}", c)
    }
}

impl db::ToJson for Stats {
    fn to_json(&self) -> String {
        format!(
            concat!(
                r#"{{ "ukkonen": {{ "name": {:?}, "n_count": {}, "#,
                r#""n_keys": {}, "n_chars": {}, "min_query_len": {}, "#,
                r#""n_nodes": {}, "n_leaves": {}, "n_values": {}, "#,
                r#""n_suffixes": {}, "node_size": {}, "#,
                r#""edge_depths": {}, "char_depths": {} }} }}"#,
            ),
            self.name,
            self.n_count,
            self.n_keys,
            self.n_chars,
            self.min_query_len,
            self.n_nodes,
            self.n_leaves,
            self.n_values,
            self.n_suffixes,
            self.node_size,
            self.edge_depths
                .as_ref()
                .map_or("null".to_string(), |x| x.to_json()),
            self.char_depths
                .as_ref()
                .map_or("null".to_string(), |x| x.to_json()),
        )
    }
}
