use std::ops::Range;

use crate::format::F64Formatter;

// Mantissas a major step may take.
const NICE_STEPS: &[f64] = &[1.0, 2.0, 2.5, 5.0, 10.0];

#[derive(Debug)]
/// Major and minor tick positions for an axis.
pub struct Ticks {
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
    pub step: f64,
}

impl Ticks {
    /// Places ticks on `range`, aiming at about `target` major ticks.
    pub fn new(range: Range<f64>, target: usize) -> Ticks {
        let span = range.end - range.start;
        if !(span > 0.0) || !span.is_finite() {
            return Ticks {
                major: vec![range.start],
                minor: vec![],
                step: 0.0,
            };
        }
        let step = nice_step(span, target.max(1));
        let major = multiples(&range, step);
        let minor_step = step / minor_divisions(step) as f64;
        let minor = multiples(&range, minor_step)
            .into_iter()
            .filter(|v| !major.iter().any(|m| (m - v).abs() < minor_step / 2.0))
            .collect();
        Ticks { major, minor, step }
    }

    /// A formatter with enough decimals for labelling the major ticks.
    pub fn formatter(&self) -> F64Formatter {
        F64Formatter::new_with_step(self.step)
    }
}

fn magnitude(value: f64) -> f64 {
    10_f64.powf(value.log10().floor())
}

fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target as f64;
    let magnitude = magnitude(raw);
    let normalized = raw / magnitude;
    let nice = NICE_STEPS
        .iter()
        .copied()
        .find(|s| *s >= normalized - 1e-9)
        .unwrap_or(10.0);
    nice * magnitude
}

// Major intervals with a mantissa of 1 or 5 split in five, the rest in four.
fn minor_divisions(step: f64) -> usize {
    let mantissa = step / magnitude(step);
    if [1.0, 5.0, 10.0].iter().any(|m| (mantissa - m).abs() < 1e-6) {
        5
    } else {
        4
    }
}

fn multiples(range: &Range<f64>, step: f64) -> Vec<f64> {
    let tolerance = step * 1e-6;
    let first = ((range.start - tolerance) / step).ceil() as i64;
    let last = ((range.end + tolerance) / step).floor() as i64;
    (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            // Keep exact zeros and tidy values like 0.30000000000000004
            (v / step).round() * step
        })
        .collect()
}
