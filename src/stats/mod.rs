use std::fmt;
use std::ops::Range;

use yansi::Color::Blue;

use crate::format::F64Formatter;

#[derive(Debug, Clone)]
/// Summary of a sample: extremes, mean and spread.
pub struct Stats {
    pub min: f64,
    pub max: f64,
    /// Arithmetic mean.
    pub avg: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Population variance.
    pub var: f64,
    pub samples: usize,
    // None means the decimals are picked from the magnitude of the range
    precision: Option<usize>,
}

impl Stats {
    /// Summarizes `values`, or returns None when there is nothing to
    /// summarize.
    ///
    /// `precision` fixes the decimals used when displaying min, max and
    /// average.  With None they are chosen from the range of the sample.
    pub fn new(values: &[f64], precision: Option<usize>) -> Option<Self> {
        let first = *values.first()?;
        let samples = values.len();
        let avg = values.iter().sum::<f64>() / samples as f64;
        let (min, max, squares) = values.iter().fold((first, first, 0.0), |acc, v| {
            (acc.0.min(*v), acc.1.max(*v), acc.2 + (v - avg).powi(2))
        });
        let var = squares / samples as f64;
        Some(Self {
            min,
            max,
            avg,
            std: var.sqrt(),
            var,
            samples,
            precision,
        })
    }

    pub fn range(&self) -> Range<f64> {
        self.min..self.max
    }

    fn formatter(&self) -> F64Formatter {
        self.precision
            .map_or_else(|| F64Formatter::new_with_range(self.range()), F64Formatter::new)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatter = self.formatter();
        let value = |v: f64| Blue.paint(formatter.format(v));
        writeln!(
            f,
            "Samples = {}; Min = {}; Max = {}",
            Blue.paint(self.samples),
            value(self.min),
            value(self.max),
        )?;
        writeln!(
            f,
            "Average = {}; Variance = {}; STD = {}",
            value(self.avg),
            Blue.paint(format!("{:.3}", self.var)),
            Blue.paint(format!("{:.3}", self.std)),
        )
    }
}
