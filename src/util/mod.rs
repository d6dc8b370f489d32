//! Module implement common utility functions and types.

mod depth;
pub mod files;

pub use depth::Depth;

/// Return the char-sequence of `text`, indexes in this package operate on
/// `char` sequences and compare characters by their value.
#[inline]
pub fn as_chars(text: &str) -> Vec<char> {
    text.chars().collect()
}
