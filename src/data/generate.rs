use rand::Rng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("invalid normal distribution (mean = {mean}, std = {std_dev})")]
    Normal { mean: f64, std_dev: f64 },
}

/// Returns `n` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            // Exact at both bounds, even when end - start overflows
            (0..n)
                .map(|i| {
                    let t = i as f64 / last;
                    start * (1.0 - t) + end * t
                })
                .collect()
        }
    }
}

/// Adds uniform noise in `[-amplitude / 2, amplitude / 2)` to every value.
pub fn jitter<R: Rng + ?Sized>(values: &[f64], amplitude: f64, rng: &mut R) -> Vec<f64> {
    values
        .iter()
        .map(|v| v + amplitude * (rng.gen::<f64>() - 0.5))
        .collect()
}

/// Returns `n` error magnitudes uniformly drawn from `[0, scale)`.
pub fn uniform_errors<R: Rng + ?Sized>(n: usize, scale: f64, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| scale * rng.gen::<f64>()).collect()
}

/// Returns `n` samples of a normal distribution.
pub fn gaussian_samples<R: Rng + ?Sized>(
    n: usize,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<Vec<f64>, GenerateError> {
    let normal = Normal::new(mean, std_dev).map_err(|_| GenerateError::Normal { mean, std_dev })?;
    Ok(normal.sample_iter(rng).take(n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn linspace_bounds() {
        for n in 2..200 {
            let vec = linspace(0.0, 1.0, n);
            assert_eq!(vec.len(), n);
            assert_eq!(vec[0], 0.0);
            assert_eq!(vec[n - 1], 1.0);
        }
        let vec = linspace(-3.0, 0.3, 50);
        assert_eq!(vec.len(), 50);
        assert_eq!(vec[0], -3.0);
        assert_eq!(vec[49], 0.3);
    }

    #[test]
    fn linspace_huge_bounds() {
        let vec = linspace(-1e308, 1e308, 50);
        assert_eq!(vec.len(), 50);
        assert_eq!(vec[0], -1e308);
        assert_eq!(vec[49], 1e308);
        assert!(vec.iter().all(|v| v.is_finite()));
        assert!(vec.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_steps() {
        let vec = linspace(0.0, 1.0, 5);
        assert_eq!(vec, [0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), [2.0]);
        assert!(linspace(2.0, 3.0, 0).is_empty());
    }

    #[test]
    fn jitter_amplitude() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = linspace(0.0, 1.0, 1000);
        let noisy = jitter(&base, 0.2, &mut rng);
        assert_eq!(noisy.len(), base.len());
        for (a, b) in base.iter().zip(noisy.iter()) {
            assert!((b - a) >= -0.1 && (b - a) < 0.1);
        }
    }

    #[test]
    fn errors_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let errors = uniform_errors(500, 0.2, &mut rng);
        assert_eq!(errors.len(), 500);
        assert!(errors.iter().all(|e| (0.0..0.2).contains(e)));
    }

    #[test]
    fn gaussian() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples = gaussian_samples(50000, 1.0, 0.5, &mut rng).unwrap();
        assert_eq!(samples.len(), 50000);
        let avg = samples.iter().sum::<f64>() / samples.len() as f64;
        assert_float_eq!(avg, 1.0, abs <= 0.02);
    }

    #[test]
    fn gaussian_bad_deviation() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            gaussian_samples(10, 1.0, -0.5, &mut rng),
            Err(GenerateError::Normal {
                mean: 1.0,
                std_dev: -0.5
            })
        );
    }

    #[test]
    fn same_seed_same_samples() {
        let a = gaussian_samples(10, 0.0, 1.0, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = gaussian_samples(10, 0.0, 1.0, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }
}
