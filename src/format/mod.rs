use std::ops::Range;

// Units-based suffixes for human formatting.
const UNITS: &[&str] = &["", " K", " M", " G", " T", " P", " E", " Z", " Y"];
// No tick step needs more decimals than this to be told apart.
const MAX_STEP_DECIMALS: usize = 8;

#[derive(Debug)]
pub struct F64Formatter {
    /// Decimals digits to be used
    decimals: usize,
    /// Number of times the value will be divided by 1000
    divisor: u8,
    /// Suffix (typycally units) to be printed after number
    suffix: String,
}

impl F64Formatter {
    /// Initializes a new `F64Formatter` with a fixed amount of decimals.
    pub fn new(decimals: usize) -> F64Formatter {
        F64Formatter {
            decimals,
            divisor: 0,
            suffix: "".to_owned(),
        }
    }

    /// Initializes a new `F64Formatter` for formatting numbers in the
    /// provided range.
    pub fn new_with_range(range: Range<f64>) -> F64Formatter {
        let mut decimals = 3;
        let mut divisor = 0_u8;
        let difference = range.end - range.start;
        if difference == 0.0 {
            return F64Formatter::new(decimals);
        }
        let log = difference.abs().log10() as i64;
        if log <= 0 {
            decimals = (-log as usize).min(8) + 3;
        } else {
            decimals = log.rem_euclid(3) as usize;
            divisor = ((log - 1) / 3).min(5) as u8;
        }
        F64Formatter {
            decimals,
            divisor,
            suffix: UNITS[divisor as usize].to_owned(),
        }
    }

    /// Initializes a new `F64Formatter` for labelling ticks that are `step`
    /// apart, with just enough decimals to tell two ticks apart.
    pub fn new_with_step(step: f64) -> F64Formatter {
        let step = step.abs();
        let decimals = (0..MAX_STEP_DECIMALS)
            .find(|d| {
                let scaled = step * 10_f64.powi(*d as i32);
                (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0)
            })
            .unwrap_or(MAX_STEP_DECIMALS);
        F64Formatter::new(decimals)
    }

    pub fn format(&self, number: f64) -> String {
        let value = number / 1000_usize.pow(self.divisor.into()) as f64;
        // Avoid printing "-0.0" for values that round to zero
        let rounded = format!("{:.*}", self.decimals, value);
        let cleaned = match rounded.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_owned(),
            _ => rounded,
        };
        format!("{}{}", cleaned, self.suffix)
    }
}

/// Centers `text` in a field of `width` chars, truncating it if needed.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    format!("{:left$}{}{:right$}", "", text, "", left = left, right = width - len - left)
}
