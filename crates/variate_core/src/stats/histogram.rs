//! Bucketed sample counts for comparing empirical and theoretical masses.

use crate::types::{VariateError, VariateResult};

/// Sample counts over ascending checkpoints.
///
/// A value is counted in the first bucket `j` with `value <= checkpoints[j]`.
/// Values above the last checkpoint (or NaN) are tallied separately as
/// overflow and excluded from every bucket.
///
/// # Examples
///
/// ```
/// use variate_core::stats::Histogram;
///
/// let mut histogram = Histogram::with_checkpoints(vec![0.0, 1.0, f64::INFINITY]).unwrap();
/// for value in [-1.0, 0.5, 0.7, 3.0] {
///     histogram.record(value);
/// }
/// assert_eq!(histogram.counts(), &[1, 2, 1]);
/// assert_eq!(histogram.frequencies(), vec![0.25, 0.5, 0.25]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    checkpoints: Vec<f64>,
    counts: Vec<usize>,
    overflow: usize,
    total: usize,
}

impl Histogram {
    /// Creates an empty histogram over the given checkpoints.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if the checkpoints are empty,
    /// contain NaN, or are not strictly ascending.
    pub fn with_checkpoints(checkpoints: Vec<f64>) -> VariateResult<Self> {
        if checkpoints.is_empty() {
            return Err(VariateError::invalid_argument(
                "histogram needs at least one checkpoint",
            ));
        }
        if checkpoints.iter().any(|c| c.is_nan()) {
            return Err(VariateError::invalid_argument(
                "histogram checkpoints must not contain NaN",
            ));
        }
        if let Some(index) = checkpoints.windows(2).position(|w| w[0] >= w[1]) {
            return Err(VariateError::InvalidArgument(format!(
                "histogram checkpoints must be strictly ascending (index {})",
                index + 1
            )));
        }
        let counts = vec![0; checkpoints.len()];
        Ok(Self {
            checkpoints,
            counts,
            overflow: 0,
            total: 0,
        })
    }

    /// Records one sample.
    pub fn record(&mut self, value: f64) {
        self.total += 1;
        match self.checkpoints.iter().position(|&c| value <= c) {
            Some(bucket) => self.counts[bucket] += 1,
            None => self.overflow += 1,
        }
    }

    /// Records every sample of an iterator.
    pub fn record_all<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.record(value);
        }
    }

    /// Checkpoints the histogram was built from.
    #[inline]
    pub fn checkpoints(&self) -> &[f64] {
        &self.checkpoints
    }

    /// Raw bucket counts.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Samples above the last checkpoint.
    #[inline]
    pub fn overflow(&self) -> usize {
        self.overflow
    }

    /// Total samples recorded, overflow included.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Bucket counts divided by the total number of recorded samples.
    ///
    /// An empty histogram yields all zeros.
    pub fn frequencies(&self) -> Vec<f64> {
        normalise(&self.counts, self.total)
    }
}

/// Sample counts over `buckets` equal-width buckets covering `[start, finish)`.
///
/// # Examples
///
/// ```
/// use variate_core::stats::EqualWidthHistogram;
///
/// let mut histogram = EqualWidthHistogram::new(0.0, 1.0, 2).unwrap();
/// histogram.record_all([0.1, 0.6, 0.9, 1.0]);
/// assert_eq!(histogram.counts(), &[1, 2]);
/// assert_eq!(histogram.outside(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EqualWidthHistogram {
    start: f64,
    finish: f64,
    counts: Vec<usize>,
    outside: usize,
    total: usize,
}

impl EqualWidthHistogram {
    /// Creates an empty histogram over `[start, finish)`.
    ///
    /// Bucket `k` covers `[start + k·w, start + (k+1)·w)`, so this variant
    /// counts with a half-open rule rather than the checkpoint rule.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `buckets == 0` or
    /// `start >= finish`, or either end is not finite.
    pub fn new(start: f64, finish: f64, buckets: usize) -> VariateResult<Self> {
        if buckets == 0 {
            return Err(VariateError::invalid_argument("bucket count must be > 0"));
        }
        if !start.is_finite() || !finish.is_finite() || start >= finish {
            return Err(VariateError::InvalidArgument(format!(
                "invalid histogram range [{}, {})",
                start, finish
            )));
        }
        Ok(Self {
            start,
            finish,
            counts: vec![0; buckets],
            outside: 0,
            total: 0,
        })
    }

    /// Records one sample; values outside `[start, finish)` are tallied apart.
    pub fn record(&mut self, value: f64) {
        self.total += 1;
        if !(self.start..self.finish).contains(&value) {
            self.outside += 1;
            return;
        }
        let buckets = self.counts.len();
        let normalised = (value - self.start) / (self.finish - self.start);
        let bucket = ((normalised * buckets as f64) as usize).min(buckets - 1);
        self.counts[bucket] += 1;
    }

    /// Records every sample of an iterator.
    pub fn record_all<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.record(value);
        }
    }

    /// Lower edge of bucket `index`.
    pub fn bucket_start(&self, index: usize) -> f64 {
        self.start + (self.finish - self.start) * index as f64 / self.counts.len() as f64
    }

    /// Raw bucket counts.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Samples outside `[start, finish)`.
    #[inline]
    pub fn outside(&self) -> usize {
        self.outside
    }

    /// Total samples recorded.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Bucket counts divided by the total number of recorded samples.
    pub fn frequencies(&self) -> Vec<f64> {
        normalise(&self.counts, self.total)
    }
}

fn normalise(counts: &[usize], total: usize) -> Vec<f64> {
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts.iter().map(|&c| c as f64 / total as f64).collect()
}
