//! Traits and Types, related to substring indexing, and required by rest of
//! this package.

use std::hash::Hash;

use crate::Result;

/// Trait shared by all index types in this package.
///
/// Keys are treated as sequence of `char`, values can be any type.
/// Same `{key, value}` pair can be added more than once, and depending on
/// the index type, duplicate values may show up while retrieving.
pub trait Index<V> {
    /// Add a new `{key, value}` pair into the index. Never fails, an empty
    /// key is valid input.
    fn add(&mut self, key: &str, value: V);

    /// Retrieve values whose key contain `query`, as per the index type's
    /// matching rule. Returned iterator is finite and free of side effects.
    fn retrieve<'a>(&'a self, query: &str) -> Box<dyn Iterator<Item = &'a V> + 'a>;
}

/// Trait to be implemented by index-types, to compute their
/// approximate memory foot-print.
///
/// **Note: This can be an approximate measure.**
pub trait Footprint {
    /// Return the approximate size of the underlying type, when
    /// stored in memory.
    ///
    /// NOTE: `isize` is used instead of `usize` to keep it consistent with
    /// delta computation on foot-prints.
    fn footprint(&self) -> Result<isize>;
}

/// Trait to convert statistic types into JSON string.
pub trait ToJson {
    /// Call this method to get the JSON encoded string.
    fn to_json(&self) -> String;
}

/// Remove duplicates from `iter`, preserving the order of first occurrence.
pub(crate) fn distinct<'a, V, I>(iter: I) -> Vec<&'a V>
where
    V: 'a + Eq + Hash,
    I: Iterator<Item = &'a V>,
{
    let mut seen = std::collections::HashSet::new();
    iter.filter(|v| seen.insert(*v)).collect()
}
