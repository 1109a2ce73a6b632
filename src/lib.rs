//! # Getting Started
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! stylecharts = "*"
//! ```
//!
//! ```rust,no_run
//! use stylecharts::data::{linspace, Dataset};
//! use stylecharts::plot::{ErrorBars, Figure, Line};
//! use stylecharts::style::{LineStyle, Style};
//!
//! let x = linspace(0.0, 1.0, 50);
//! let mut data = Dataset::new(x.clone(), x.clone());
//! data.square_y();
//! let mut figure = Figure::new(1, 1, Style::default());
//! let mut fit = Line::new(data);
//! fit.linestyle(LineStyle::Dashed).label("fit line");
//! figure
//!     .subplot(1)
//!     .add(ErrorBars::new(Dataset::new(x.clone(), x), vec![0.1; 50], "d"))
//!     .add(fit)
//!     .set_xlabel("Intensity ($\\phi$)")
//!     .legend()
//!     .grid();
//! print!("{:80}", figure);
//! ```

#[macro_use]
extern crate derive_builder;
#[macro_use]
extern crate log;

pub mod data;
pub mod demo;
mod format;
pub mod plot;
pub mod read;
pub mod stats;
pub mod style;
