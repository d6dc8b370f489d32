use std::{collections::BTreeMap, fmt, result};

use crate::db;

/// Percentiles reported by [Depth] in its `Display` and `ToJson` output.
pub const PERCENTILES: [u8; 3] = [50, 90, 99];

/// Histogram of leaf depth in a tree.
///
/// The same type is used for two measures: the number of edges from root
/// to leaf, and the number of characters spelled along that path. The
/// latter is bounded only by the longest key, so the histogram is sparse.
#[derive(Clone, Default)]
pub struct Depth {
    samples: usize,
    total: usize,
    counts: BTreeMap<usize, usize>,
}

impl Depth {
    pub fn sample(&mut self, depth: usize) {
        self.samples += 1;
        self.total += depth;
        *self.counts.entry(depth).or_insert(0) += 1;
    }

    pub fn to_samples(&self) -> usize {
        self.samples
    }

    pub fn to_min(&self) -> Option<usize> {
        self.counts.keys().next().copied()
    }

    pub fn to_max(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    /// Integer mean, ZERO when there are no samples.
    pub fn to_mean(&self) -> usize {
        match self.samples {
            0 => 0,
            n => self.total / n,
        }
    }

    /// Return the smallest depth that covers at least `perc` percent of
    /// the samples.
    pub fn to_percentile(&self, perc: u8) -> Option<usize> {
        let perc = usize::from(perc.min(100));
        let want = usize::max(1, (self.samples * perc + 99) / 100);

        let mut acc = 0;
        for (depth, count) in self.counts.iter() {
            acc += count;
            if acc >= want {
                return Some(*depth);
            }
        }
        None
    }

    /// Return the number of leaves at each recorded depth, in depth order.
    pub fn to_histogram(&self) -> Vec<(usize, usize)> {
        self.counts.iter().map(|(d, n)| (*d, *n)).collect()
    }
}

fn to_text(val: Option<usize>, none: &str) -> String {
    val.map_or(none.to_string(), |n| n.to_string())
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        let percs: Vec<String> = PERCENTILES
            .iter()
            .map(|p| format!("p{}={}", p, to_text(self.to_percentile(*p), "-")))
            .collect();
        write!(
            f,
            "{{ samples={}, min={}, mean={}, max={}, {} }}",
            self.samples,
            to_text(self.to_min(), "-"),
            self.to_mean(),
            to_text(self.to_max(), "-"),
            percs.join(", ")
        )
    }
}

impl db::ToJson for Depth {
    fn to_json(&self) -> String {
        let percs: Vec<String> = PERCENTILES
            .iter()
            .map(|p| format!(r#""p{}": {}"#, p, to_text(self.to_percentile(*p), "null")))
            .collect();
        format!(
            r#"{{ "samples": {}, "min": {}, "mean": {}, "max": {}, {} }}"#,
            self.samples,
            to_text(self.to_min(), "null"),
            self.to_mean(),
            to_text(self.to_max(), "null"),
            percs.join(", ")
        )
    }
}

#[cfg(test)]
#[path = "depth_test.rs"]
mod depth_test;
