//! Module `ukkonen` implement a generalized suffix tree, built online
//! using [Ukkonen's algorithm][ukkonen].
//!
//! Every suffix of every inserted key is represented as a path from the
//! root node. Values are attached to the nodes where the suffixes of their
//! key end, a look-up walks down the query and collects all values in the
//! subtree below the match point.
//!
//! Nodes are held in an arena and addressed by their index, edges own
//! their target node while suffix-links are plain indices into the arena.
//! Keys are copied once into a key arena and edge labels are views into
//! them.
//!
//! [ukkonen]: https://en.wikipedia.org/wiki/Ukkonen%27s_algorithm

mod index;
mod label;
mod node;
mod stats;
mod values;

pub use index::SuffixTree;
pub use stats::Stats;
pub use values::Values;

pub(crate) use label::{Keys, Label};
pub(crate) use node::{Edge, Node, NodeId, ROOT};
