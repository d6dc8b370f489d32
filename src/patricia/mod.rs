//! Module `patricia` implement a path compressed trie, where each node hold
//! a partition of the key instead of a single character, and a
//! [PatriciaSuffixTrie] built on top of it.

mod partition;
mod suffix;
mod trie;

pub use partition::{Match, Partition};
pub use suffix::PatriciaSuffixTrie;
pub use trie::{Node, PatriciaTrie, Values};
