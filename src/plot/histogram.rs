use std::ops::Range;

use crate::stats::Stats;

#[derive(Debug)]
/// A struct that represents a bucket of an histogram.
pub struct Bucket {
    pub range: Range<f64>,
    pub count: usize,
}

impl Bucket {
    fn new(range: Range<f64>) -> Self {
        Self { range, count: 0 }
    }

    fn inc(&mut self) {
        self.count += 1;
    }
}

#[derive(Debug)]
/// A struct holding the bucket counts of numerical data.
///
/// Buckets are equally wide and span from the minimum to the maximum of the
/// data the histogram is created with.  Values equal to the maximum fall in
/// the last bucket.
pub struct Histogram {
    vec: Vec<Bucket>,
    step: f64,
    // Maximum of all bucket counts
    top: usize,
    last: usize,
    stats: Stats,
}

impl Histogram {
    /// Creates a Histogram from a slice of numerical data, or None if the
    /// slice is empty.
    ///
    /// `bins` is the number of buckets (at least one is always used).
    pub fn new(vec: &[f64], bins: usize) -> Option<Self> {
        let mut histogram = Self::new_with_stats(Stats::new(vec, None)?, bins);
        histogram.load(vec);
        Some(histogram)
    }

    /// Creates a Histogram with no input data.
    ///
    /// A parameter named `stats` is needed to decide how future data (to be
    /// injected with the load method) will be accommodated.
    pub fn new_with_stats(stats: Stats, bins: usize) -> Self {
        let bins = bins.max(1);
        Self {
            vec: Self::build_buckets(stats.range(), bins),
            step: (stats.max - stats.min) / bins as f64,
            top: 0,
            last: bins - 1,
            stats,
        }
    }

    /// Add to the `Histogram` data the values of a slice of numerical data.
    pub fn load(&mut self, vec: &[f64]) {
        for x in vec {
            self.add(*x);
        }
    }

    /// Add to the `Histogram` a single piece of numerical data.
    pub fn add(&mut self, n: f64) {
        if let Some(slot) = self.find_slot(n) {
            self.vec[slot].inc();
            self.top = self.top.max(self.vec[slot].count);
        }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.vec
    }

    /// Largest bucket count.
    pub fn top(&self) -> usize {
        self.top
    }

    /// Number of values accounted for in buckets.
    pub fn total(&self) -> usize {
        self.vec.iter().map(|b| b.count).sum()
    }

    /// Statistics of the data the histogram was created with.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Span from the lower edge of the first bucket to the upper edge of the
    /// last one.
    pub fn edges(&self) -> Range<f64> {
        self.stats.range()
    }

    fn find_slot(&self, n: f64) -> Option<usize> {
        if n < self.stats.min || n > self.stats.max {
            return None;
        }
        if self.step == 0.0 {
            return Some(0);
        }
        Some((((n - self.stats.min) / self.step) as usize).min(self.last))
    }

    fn build_buckets(range: Range<f64>, bins: usize) -> Vec<Bucket> {
        let step = (range.end - range.start) / bins as f64;
        (0..bins)
            .map(|i| {
                let lower = range.start + step * i as f64;
                Bucket::new(lower..lower + step)
            })
            .collect()
    }
}
