//! Package sstrie implement in-memory substring index.
//!
//! Given a growing collection of `{key, value}` pairs, where keys are
//! character sequences, indexes in this package answer the question
//! _which values are associated with a key that contains this query
//! as a sub-string ?_.
//!
//! The primary index is [ukkonen::SuffixTree], a generalized suffix tree
//! built online using [Ukkonen's algorithm][ukkonen]. Every suffix of every
//! inserted key is represented as a path from the root, hence a look-up
//! costs time proportional to the length of the query and the number of
//! matches, independent of the number of keys indexed. Construction is
//! linear in the total length of all inserted keys.
//!
//! Simpler variants sharing the same [db::Index] contract are also
//! available:
//!
//! * [trie::Trie] and [trie::SuffixTrie], naive one-component-per-node trie.
//! * [patricia::PatriciaTrie] and [patricia::PatriciaSuffixTrie], path
//!   compressed trie.
//! * [scan::LinearScan], brute force scan over all inserted keys, useful as
//!   a baseline.
//!
//! Characters are compared by their `char` value, there is no unicode
//! normalization or collation. Indexes are single-writer, mutation
//! requires `&mut self`, while any number of threads can concurrently
//! retrieve from a quiescent index.
//!
//! [ukkonen]: https://en.wikipedia.org/wiki/Ukkonen%27s_algorithm

/// Short form to compose Error values.
///
/// Here are few possible ways:
///
/// ```ignore
/// use crate::Error;
/// err_at!(Fatal, msg: "node {} owned twice", id);
/// ```
///
/// ```ignore
/// use crate::Error;
/// err_at!(IOError, std::fs::read(file));
/// ```
///
/// ```ignore
/// use crate::Error;
/// err_at!(FailConvert, toml::from_str(&text), "config {:?}", file);
/// ```
#[macro_export]
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                Err(Error::$v(prefix, format!("{}", err)))
            }
        }
    }};
    ($v:ident, $e:expr, $($arg:expr),+) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                let msg = format!($($arg),+);
                Err(Error::$v(prefix, format!("{} {}", err, msg)))
            }
        }
    }};
}

mod error;

pub mod config;
pub mod db;
pub mod patricia;
pub mod scan;
pub mod trie;
pub mod ukkonen;
pub mod util;

pub use crate::config::Config;
pub use crate::db::Index;
pub use crate::error::Error;

/// Type alias for Result return type, used by this package.
pub type Result<T> = std::result::Result<T, Error>;
