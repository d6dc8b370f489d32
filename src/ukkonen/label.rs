use std::cmp;

/// View into one of the keys held by [Keys], a label never copies
/// characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Label {
    key: usize,
    start: usize,
    len: usize,
}

impl Label {
    pub fn new(key: usize, start: usize, len: usize) -> Label {
        Label { key, start, len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a label over the first `n` characters, `n` is clamped to
    /// label's length.
    pub fn head(&self, n: usize) -> Label {
        Label {
            len: cmp::min(n, self.len),
            ..*self
        }
    }

    /// Return a label skipping the first `n` characters, `n` is clamped to
    /// label's length.
    pub fn tail(&self, n: usize) -> Label {
        let n = cmp::min(n, self.len);
        Label {
            key: self.key,
            start: self.start + n,
            len: self.len - n,
        }
    }
}

/// Arena of keys inserted into the tree. Keys are immutable once added.
#[derive(Clone, Default)]
pub struct Keys {
    keys: Vec<Box<[char]>>,
    n_chars: usize,
    max_len: usize,
}

impl Keys {
    /// Add key into the arena, return its id.
    pub fn push(&mut self, key: Vec<char>) -> usize {
        self.n_chars += key.len();
        self.max_len = usize::max(self.max_len, key.len());
        self.keys.push(key.into_boxed_slice());
        self.keys.len() - 1
    }

    /// Return a label spanning the full key.
    pub fn to_label(&self, key: usize) -> Label {
        let len = self.keys.get(key).map(|k| k.len()).unwrap_or(0);
        Label::new(key, 0, len)
    }

    /// Return the characters viewed by `label`. A label that does not fall
    /// within its key is viewed as empty, refer [Keys::contains].
    pub fn as_chars(&self, label: &Label) -> &[char] {
        let end = label.start + label.len;
        match self.keys.get(label.key) {
            Some(key) if end <= key.len() => &key[label.start..end],
            _ => &[],
        }
    }

    /// Return whether `label` lie within the bounds of its key.
    pub fn contains(&self, label: &Label) -> bool {
        match self.keys.get(label.key) {
            Some(key) => (label.start + label.len) <= key.len(),
            None => false,
        }
    }

    #[inline]
    pub fn first(&self, label: &Label) -> Option<char> {
        self.as_chars(label).first().copied()
    }

    #[inline]
    pub fn last(&self, label: &Label) -> Option<char> {
        self.as_chars(label).last().copied()
    }

    /// Return number of keys held by this arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return the total number of characters across all keys.
    #[inline]
    pub fn to_chars(&self) -> usize {
        self.n_chars
    }

    /// Return the length of the longest key.
    #[inline]
    pub fn to_max_len(&self) -> usize {
        self.max_len
    }
}

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;
