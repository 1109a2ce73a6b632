pub use self::dataset::Dataset;
pub use self::generate::{gaussian_samples, jitter, linspace, uniform_errors, GenerateError};

mod dataset;
mod generate;
