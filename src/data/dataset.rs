#[derive(Debug, Clone, PartialEq)]
/// A struct holding paired x and y values of a dataset.
///
/// Both sequences are expected to have the same length, but this is not
/// checked.
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    /// Creates a Dataset taking ownership of both sequences.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Square the y values in place.
    ///
    /// Calling this twice leaves every y raised to the fourth power.
    pub fn square_y(&mut self) {
        self.map_y(|y| y.powi(2));
    }

    /// Replace every y value with the result of `f`.
    pub fn map_y<F>(&mut self, f: F)
    where
        F: FnMut(f64) -> f64,
    {
        self.y = self.y.iter().copied().map(f).collect();
    }

    /// Pairs of (x, y) values.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn square_y_leaves_x_alone() {
        let mut data = Dataset::new(vec![0.0, 0.5, 1.0], vec![-2.0, 0.5, 3.0]);
        data.square_y();
        assert_eq!(data.x(), &[0.0, 0.5, 1.0]);
        assert_eq!(data.len(), 3);
        assert_float_eq!(data.y()[0], 4.0, abs <= f64::EPSILON);
        assert_float_eq!(data.y()[1], 0.25, abs <= f64::EPSILON);
        assert_float_eq!(data.y()[2], 9.0, abs <= f64::EPSILON);
    }

    #[test]
    fn square_y_is_not_idempotent() {
        let mut data = Dataset::new(vec![1.0, 2.0], vec![2.0, 3.0]);
        data.square_y();
        data.square_y();
        assert_eq!(data.y(), &[16.0, 81.0]);
    }

    #[test]
    fn square_y_on_empty() {
        let mut data = Dataset::new(vec![], vec![]);
        data.square_y();
        assert!(data.is_empty());
    }

    #[test]
    fn unchecked_lengths() {
        // Mismatched lengths are accepted as is
        let mut data = Dataset::new(vec![1.0], vec![2.0, 3.0]);
        data.square_y();
        assert_eq!(data.x().len(), 1);
        assert_eq!(data.y(), &[4.0, 9.0]);
        assert_eq!(data.points().count(), 1);
    }

    #[test]
    fn map_y() {
        let mut data = Dataset::new(vec![1.0, 2.0], vec![1.0, 2.0]);
        data.map_y(|y| y + 0.5);
        assert_eq!(data.y(), &[1.5, 2.5]);
    }
}
