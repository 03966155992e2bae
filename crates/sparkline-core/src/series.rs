// File: crates/sparkline-core/src/series.rs
// Summary: Series model: ordered samples, extrema and a content key for change detection.

use std::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

/// Ordered numeric samples; insertion order is display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

/// Content fingerprint of a series. Two series with the same samples share a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeriesKey(u64);

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Sample at `index`, if any.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn key(&self) -> SeriesKey {
        let mut h = DefaultHasher::new();
        self.values.len().hash(&mut h);
        for v in &self.values {
            v.to_bits().hash(&mut h);
        }
        SeriesKey(h.finish())
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self { Self::new(values) }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self { Self::new(values.to_vec()) }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
