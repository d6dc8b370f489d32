use std::{cmp, fmt, result, sync::Arc};

/// Partition type, a view into a shared character buffer. Slicing a
/// partition never copies characters.
#[derive(Clone)]
pub struct Partition {
    data: Arc<[char]>,
    start: usize,
    end: usize,
}

/// Result of comparing a partition with another character sequence,
/// refer [Partition::zip_with].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Match {
    /// Both are equal.
    Exact,
    /// Partition is a proper prefix of the other.
    Descend,
    /// Other is a proper prefix of the partition.
    Inside,
    /// Both diverge after a common prefix, which can be empty.
    Partial,
}

impl Default for Partition {
    fn default() -> Partition {
        Partition::new(Arc::from(Vec::<char>::new()))
    }
}

impl From<&str> for Partition {
    fn from(text: &str) -> Partition {
        Partition::new(text.chars().collect::<Vec<char>>().into())
    }
}

impl Partition {
    pub fn new(data: Arc<[char]>) -> Partition {
        let end = data.len();
        Partition {
            data,
            start: 0,
            end,
        }
    }

    /// Create a partition from `start` till the end of `data`, `start` is
    /// clamped to the length of `data`.
    pub fn from_offset(data: Arc<[char]>, start: usize) -> Partition {
        let end = data.len();
        Partition {
            data,
            start: cmp::min(start, end),
            end,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.data[self.start..self.end]
    }

    #[inline]
    pub fn first(&self) -> Option<char> {
        self.as_chars().first().copied()
    }

    pub fn starts_with(&self, other: &[char]) -> bool {
        self.as_chars().starts_with(other)
    }

    /// Split partition into head and rest at offset `at`, which is clamped
    /// to partition's length.
    pub fn split(&self, at: usize) -> (Partition, Partition) {
        let at = self.start + cmp::min(at, self.len());
        let head = Partition {
            data: Arc::clone(&self.data),
            start: self.start,
            end: at,
        };
        let rest = Partition {
            data: Arc::clone(&self.data),
            start: at,
            end: self.end,
        };
        (head, rest)
    }

    /// Compare with `other`, return the length of the common prefix and
    /// how both relate.
    pub fn zip_with(&self, other: &[char]) -> (usize, Match) {
        let this = self.as_chars();
        let n = this
            .iter()
            .zip(other.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let m = match (n == this.len(), n == other.len()) {
            (true, true) => Match::Exact,
            (true, false) => Match::Descend,
            (false, true) => Match::Inside,
            (false, false) => Match::Partial,
        };
        (n, m)
    }
}

impl PartialEq for Partition {
    fn eq(&self, other: &Partition) -> bool {
        self.as_chars() == other.as_chars()
    }
}

impl Eq for Partition {}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        let s: String = self.as_chars().iter().collect();
        write!(f, "{}", s)
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        let s: String = self.as_chars().iter().collect();
        write!(f, "{:?}", s)
    }
}

#[cfg(test)]
#[path = "partition_test.rs"]
mod partition_test;
