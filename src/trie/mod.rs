//! Module `trie` implement a naive trie, holding one key-component per
//! node, and a [SuffixTrie] built on top of it.

mod suffix;
mod trie;

pub use suffix::SuffixTrie;
pub use trie::{Node, Trie, Values};
