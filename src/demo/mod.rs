//! The demonstration figure: two scatter panels with error bars and fit
//! lines, a histogram and two overlaid histograms, all drawn over synthetic
//! data.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{gaussian_samples, jitter, linspace, uniform_errors, Dataset, GenerateError};
use crate::plot::{Bars, ErrorBars, Figure, Histogram, Line, Panel};
use crate::style::colors::{BLACK, GREEN, LIGHT_BLUE, ORANGE};
use crate::style::{LineStyle, Style};

const X_LABEL: &str = "Intensity ($\\phi$)";
const Y_LABEL: &str = "Temperature ($\\Omega$)";
const HIST_X_LABEL: &str = "Chi-square ($\\mu=1$)";
const HIST_Y_LABEL: &str = "Entries ($\\eta$)";
const LINEAR_NOISE: f64 = 0.2;
const QUADRATIC_NOISE: f64 = 0.05;
const ERROR_SCALE: f64 = 0.2;
const FIT_ZORDER: i32 = 999;
const OVERLAY_ALPHA: f64 = 0.7;

#[derive(Debug, Clone, Builder)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct DemoConfig {
    /// Number of points of the scatter panels.
    pub resolution: usize,
    /// Lower bound of the x values.
    pub start: f64,
    /// Upper bound of the x values.
    pub end: f64,
    /// Histogram samples drawn per scatter point.
    pub multiplier: usize,
    pub bins: usize,
    /// Rows of text per panel.
    pub height: usize,
    #[builder(setter(strip_option))]
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            resolution: 50,
            start: 0.0,
            end: 1.0,
            multiplier: 1000,
            bins: 75,
            height: 20,
            seed: None,
        }
    }
}

impl DemoConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(resolution) = self.resolution {
            if resolution < 2 {
                return Err(format!("resolution should be at least 2, not {resolution}"));
            }
        }
        if self.multiplier == Some(0) {
            return Err("multiplier should be positive".to_string());
        }
        if self.bins == Some(0) {
            return Err("bins should be positive".to_string());
        }
        let start = self.start.unwrap_or(0.0);
        let end = self.end.unwrap_or(1.0);
        if !start.is_finite() || !end.is_finite() {
            return Err(format!("start ({start}) and end ({end}) should be finite"));
        }
        if !(end - start).is_finite() {
            return Err(format!("span from {start} to {end} is too large"));
        }
        if !(start < end) {
            return Err(format!("start ({start}) should be smaller than end ({end})"));
        }
        Ok(())
    }
}

impl DemoConfig {
    /// Number of samples of every histogram.
    pub fn samples(&self) -> usize {
        self.resolution * self.multiplier
    }

    /// A random generator, seeded if the configuration says so.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Generates the data and lays out the four panels.
pub fn build_figure<R: Rng + ?Sized>(
    config: &DemoConfig,
    style: Style,
    rng: &mut R,
) -> Result<Figure, GenerateError> {
    let mut figure = Figure::new(2, 2, style);
    figure.panel_height(config.height);
    let x = linspace(config.start, config.end, config.resolution);
    linear_panel(figure.subplot(1), config, &x, rng);
    quadratic_panel(figure.subplot(2), config, &x, rng);
    histogram_panel(figure.subplot(3), config, rng)?;
    overlay_panel(figure.subplot(4), config, rng)?;
    Ok(figure)
}

/// Noisy linear relationship with error bars and its fit line.
fn linear_panel<R: Rng + ?Sized>(panel: &mut Panel, config: &DemoConfig, x: &[f64], rng: &mut R) {
    let y = jitter(x, LINEAR_NOISE, rng);
    let errors = uniform_errors(y.len(), ERROR_SCALE, rng);
    let mut data = ErrorBars::new(Dataset::new(x.to_vec(), y), errors, "d");
    data.color(ORANGE).label("data");

    let mut fit = Line::new(Dataset::new(x.to_vec(), x.to_vec()));
    fit.linestyle(LineStyle::Dashed)
        .color(BLACK)
        .zorder(FIT_ZORDER)
        .label("best fit");

    panel.set_xlim(config.start, config.end).add(data).add(fit);
    decorate(panel, X_LABEL, Y_LABEL);
}

/// Noisy squared relationship with error bars and its fit line.
fn quadratic_panel<R: Rng + ?Sized>(
    panel: &mut Panel,
    config: &DemoConfig,
    x: &[f64],
    rng: &mut R,
) {
    let mut dataset = Dataset::new(x.to_vec(), x.to_vec());
    dataset.square_y();
    dataset.map_y(|y| y + QUADRATIC_NOISE * (rng.gen::<f64>() - 0.5));
    let errors = uniform_errors(dataset.len(), ERROR_SCALE, rng);
    let mut data = ErrorBars::new(dataset, errors, "d");
    data.color(GREEN).label("best fit");

    let mut curve = Dataset::new(x.to_vec(), x.to_vec());
    curve.square_y();
    let mut fit = Line::new(curve);
    fit.linestyle(LineStyle::Dashed)
        .color(BLACK)
        .zorder(FIT_ZORDER)
        .label("fit line");

    panel.set_xlim(config.start, config.end).add(data).add(fit);
    decorate(panel, X_LABEL, Y_LABEL);
}

/// Histogram of normally distributed samples.
fn histogram_panel<R: Rng + ?Sized>(
    panel: &mut Panel,
    config: &DemoConfig,
    rng: &mut R,
) -> Result<(), GenerateError> {
    let samples = gaussian_samples(config.samples(), 1.0, 0.5, rng)?;
    if let Some(histogram) = Histogram::new(&samples, config.bins) {
        let mut bars = Bars::new(histogram);
        bars.color(LIGHT_BLUE).edgecolor(BLACK);
        panel.add(bars);
    }
    decorate(panel, HIST_X_LABEL, HIST_Y_LABEL);
    Ok(())
}

/// Two translucent histograms of samples with different distributions.
fn overlay_panel<R: Rng + ?Sized>(
    panel: &mut Panel,
    config: &DemoConfig,
    rng: &mut R,
) -> Result<(), GenerateError> {
    let first = gaussian_samples(config.samples(), 1.0, 0.5, rng)?;
    let second = gaussian_samples(config.samples(), 1.5, 0.3, rng)?;
    for (samples, color) in [(first, LIGHT_BLUE), (second, ORANGE)] {
        if let Some(histogram) = Histogram::new(&samples, config.bins) {
            let mut bars = Bars::new(histogram);
            bars.color(color).edgecolor(BLACK).alpha(OVERLAY_ALPHA);
            panel.add(bars);
        }
    }
    decorate(panel, HIST_X_LABEL, HIST_Y_LABEL);
    Ok(())
}

fn decorate(panel: &mut Panel, xlabel: &str, ylabel: &str) {
    panel
        .set_xlabel(xlabel)
        .set_ylabel(ylabel)
        .legend()
        .minorticks_on()
        .grid();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::Series;
    use yansi::Paint;

    fn small_config() -> DemoConfig {
        DemoConfigBuilder::default()
            .resolution(20)
            .multiplier(50)
            .bins(30)
            .seed(11)
            .build()
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = DemoConfigBuilder::default().build().unwrap();
        assert_eq!(config.resolution, 50);
        assert_eq!(config.start, 0.0);
        assert_eq!(config.end, 1.0);
        assert_eq!(config.bins, 75);
        assert_eq!(config.samples(), 50000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn invalid_configs() {
        assert!(DemoConfigBuilder::default().resolution(1).build().is_err());
        assert!(DemoConfigBuilder::default().multiplier(0).build().is_err());
        assert!(DemoConfigBuilder::default().bins(0).build().is_err());
        assert!(DemoConfigBuilder::default()
            .start(2.0)
            .end(1.0)
            .build()
            .is_err());
        assert!(DemoConfigBuilder::default()
            .end(f64::INFINITY)
            .build()
            .is_err());
        assert!(DemoConfigBuilder::default()
            .start(f64::NAN)
            .build()
            .is_err());
        assert!(DemoConfigBuilder::default()
            .start(-1e308)
            .end(1e308)
            .build()
            .is_err());
        assert!(DemoConfigBuilder::default()
            .start(-2.0)
            .end(-1.0)
            .build()
            .is_ok());
    }

    #[test]
    fn histogram_sample_counts() {
        let config = small_config();
        let figure = build_figure(&config, Style::default(), &mut config.rng()).unwrap();
        let histograms: Vec<&Histogram> = figure.panels().iter().flat_map(|p| p.histograms()).collect();
        assert_eq!(histograms.len(), 3);
        for histogram in histograms {
            assert_eq!(histogram.stats().samples, config.samples());
            assert_eq!(histogram.total(), 1000);
            assert_eq!(histogram.buckets().len(), 30);
        }
    }

    #[test]
    fn scatter_panels() {
        let config = small_config();
        let figure = build_figure(&config, Style::default(), &mut config.rng()).unwrap();
        for panel in &figure.panels()[..2] {
            let series = panel.series();
            assert_eq!(series.len(), 2);
            assert!(matches!(series[0], Series::ErrorBars(_)));
            assert!(matches!(series[1], Series::Line(_)));
            assert_eq!(panel.limits().0, 0.0..1.0);
        }
        assert_eq!(figure.panels()[0].series()[0].label(), Some("data"));
        assert_eq!(figure.panels()[1].series()[1].label(), Some("fit line"));
        // The squared fit line stays within [0, 1]
        let y = figure.panels()[1].series()[1].y_range().unwrap();
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn same_seed_same_figure() {
        let config = small_config();
        Paint::disable();
        let first = build_figure(&config, Style::default(), &mut config.rng()).unwrap();
        let second = build_figure(&config, Style::default(), &mut config.rng()).unwrap();
        assert_eq!(format!("{:100}", first), format!("{:100}", second));
        assert_eq!(
            format!("{}", first.summary()),
            format!("{}", second.summary())
        );
    }

    #[test]
    fn rendered_labels() {
        let config = small_config();
        Paint::disable();
        let figure = build_figure(&config, Style::default(), &mut config.rng()).unwrap();
        let display = format!("{:110}", figure);
        assert!(display.contains("Temperature (Ω)"));
        assert!(display.contains("Intensity (φ)"));
        assert!(display.contains("Entries (η)"));
        assert!(display.contains("Chi-square (μ=1)"));
        assert!(display.contains("◆  data"));
        assert!(display.contains("╌╌╌ best fit"));
        assert!(display.contains("╌╌╌ fit line"));
    }
}
