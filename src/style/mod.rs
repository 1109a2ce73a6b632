//! The plotting style convention: grid, tick, axes and colour settings.
//!
//! Settings are addressed with the same dotted keys rc files use (for
//! instance `grid.linestyle`), so a `Style` can be tweaked from the command
//! line or from a file with `key: value` lines.
use std::str::FromStr;

use thiserror::Error;
use yansi::Color;

pub use self::colors::{bone_palette, default_palette, parse_color, ColorCycle};
pub use self::mathtext::MathFont;

pub mod colors;
pub mod mathtext;

#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    #[error("unknown style key '{0}'")]
    UnknownKey(String),
    #[error("invalid value '{value}' for style key '{key}'")]
    InvalidValue { key: String, value: String },
    #[error("expected KEY=VALUE, got '{0}'")]
    MalformedOverride(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl FromStr for LineStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "solid" => Ok(LineStyle::Solid),
            "--" | "dashed" => Ok(LineStyle::Dashed),
            ":" | "dotted" => Ok(LineStyle::Dotted),
            "-." | "dashdot" => Ok(LineStyle::DashDot),
            _ => Err(()),
        }
    }
}

impl LineStyle {
    /// Whether the `step`-th cell along a line is inked.
    pub fn is_drawn(&self, step: usize) -> bool {
        match self {
            LineStyle::Solid => true,
            LineStyle::Dashed => step % 3 != 2,
            LineStyle::Dotted => step % 2 == 0,
            LineStyle::DashDot => matches!(step % 5, 0 | 1 | 3),
        }
    }

    pub fn horizontal(&self, heavy: bool) -> char {
        match (self, heavy) {
            (LineStyle::Solid, false) => '─',
            (LineStyle::Solid, true) => '━',
            (LineStyle::Dashed, false) => '╌',
            (LineStyle::Dashed, true) => '╍',
            (LineStyle::Dotted, false) => '┈',
            (LineStyle::Dotted, true) => '┉',
            (LineStyle::DashDot, false) => '┄',
            (LineStyle::DashDot, true) => '┅',
        }
    }

    pub fn vertical(&self, heavy: bool) -> char {
        match (self, heavy) {
            (LineStyle::Solid, false) => '│',
            (LineStyle::Solid, true) => '┃',
            (LineStyle::Dashed, false) => '╎',
            (LineStyle::Dashed, true) => '╏',
            (LineStyle::Dotted, false) => '┊',
            (LineStyle::Dotted, true) => '┋',
            (LineStyle::DashDot, false) => '┆',
            (LineStyle::DashDot, true) => '┇',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickDirection {
    In,
    Out,
    InOut,
}

impl FromStr for TickDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(TickDirection::In),
            "out" => Ok(TickDirection::Out),
            "inout" => Ok(TickDirection::InOut),
            _ => Err(()),
        }
    }
}

// Line widths (in points) from which box drawing switches to heavy glyphs.
const HEAVY_LINEWIDTH: f64 = 1.5;

#[derive(Debug, Clone)]
pub struct Style {
    pub grid_color: Color,
    pub grid_linestyle: LineStyle,
    pub grid_linewidth: f64,
    pub xtick_direction: TickDirection,
    pub ytick_direction: TickDirection,
    pub axes_linewidth: f64,
    /// Draw the grid on every panel, even if not asked for.
    pub axes_grid: bool,
    /// Draw minor ticks on every panel, even if not asked for.
    pub minor_ticks: bool,
    /// Error bar cap size in points; zero means no caps.
    pub errorbar_capsize: f64,
    pub mathtext: MathFont,
    /// Named colours, looked up by `color` before the generic names.
    pub palette: Vec<(String, Color)>,
    /// Colours given to series with no explicit colour.
    pub cycle: Vec<Color>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            grid_color: colors::BLACK,
            grid_linestyle: LineStyle::Dotted,
            grid_linewidth: 0.8,
            xtick_direction: TickDirection::In,
            ytick_direction: TickDirection::In,
            axes_linewidth: 2.0,
            axes_grid: false,
            minor_ticks: false,
            errorbar_capsize: 2.0,
            mathtext: MathFont::Regular,
            palette: default_palette(),
            cycle: bone_palette(8),
        }
    }
}

impl Style {
    /// Changes the setting named by `key`.
    ///
    /// Values may be quoted.  Font settings are accepted but have no effect
    /// on terminal output.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StyleError> {
        let key = key.trim();
        let value = unquote(value.trim());
        let invalid = || StyleError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "grid.color" => self.grid_color = self.color(value).ok_or_else(invalid)?,
            "grid.linestyle" => self.grid_linestyle = value.parse().map_err(|_| invalid())?,
            "grid.linewidth" => self.grid_linewidth = parse_width(value).ok_or_else(invalid)?,
            "axes.linewidth" => self.axes_linewidth = parse_width(value).ok_or_else(invalid)?,
            "errorbar.capsize" => {
                self.errorbar_capsize = parse_width(value).ok_or_else(invalid)?
            }
            "xtick.direction" => self.xtick_direction = value.parse().map_err(|_| invalid())?,
            "ytick.direction" => self.ytick_direction = value.parse().map_err(|_| invalid())?,
            "axes.grid" => self.axes_grid = parse_bool(value).ok_or_else(invalid)?,
            "xtick.minor.visible" | "ytick.minor.visible" => {
                self.minor_ticks = parse_bool(value).ok_or_else(invalid)?
            }
            "mathtext.default" => self.mathtext = value.parse().map_err(|_| invalid())?,
            "font.family" | "font.size" => {
                warn!("Style key {} has no effect on terminal output", key);
            }
            _ => return Err(StyleError::UnknownKey(key.to_string())),
        }
        debug!("Style key {} set to {}", key, value);
        Ok(())
    }

    /// Applies `(key, value)` pairs in order, stopping at the first error.
    pub fn apply_rc<I, K, V>(&mut self, pairs: I) -> Result<(), StyleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            self.set(key.as_ref(), value.as_ref())?;
        }
        Ok(())
    }

    /// Splits a `KEY=VALUE` override.
    pub fn parse_override(string: &str) -> Result<(String, String), StyleError> {
        match string.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(StyleError::MalformedOverride(string.to_string())),
        }
    }

    /// Resolves a colour value: a palette name (optionally prefixed with
    /// `xkcd:`) or anything `parse_color` understands.
    pub fn color(&self, value: &str) -> Option<Color> {
        let lower = value.trim().to_lowercase();
        let name = lower.strip_prefix("xkcd:").unwrap_or(&lower);
        self.palette
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, color)| *color)
            .or_else(|| parse_color(value))
    }

    pub fn heavy_axes(&self) -> bool {
        self.axes_linewidth >= HEAVY_LINEWIDTH
    }

    pub fn heavy_grid(&self) -> bool {
        self.grid_linewidth >= HEAVY_LINEWIDTH
    }

    pub fn color_cycle(&self) -> ColorCycle {
        ColorCycle::new(self.cycle.clone())
    }

    /// Renders the math segments of a label with the configured font.
    pub fn label(&self, text: &str) -> String {
        mathtext::render(text, self.mathtext)
    }
}

fn unquote(value: &str) -> &str {
    for quote in &['"', '\''] {
        if value.len() >= 2 && value.starts_with(*quote) && value.ends_with(*quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn parse_width(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|w| w.is_finite() && *w >= 0.0)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let style = Style::default();
        assert_eq!(style.grid_color, colors::BLACK);
        assert_eq!(style.grid_linestyle, LineStyle::Dotted);
        assert_eq!(style.grid_linewidth, 0.8);
        assert_eq!(style.xtick_direction, TickDirection::In);
        assert_eq!(style.ytick_direction, TickDirection::In);
        assert_eq!(style.axes_linewidth, 2.0);
        assert_eq!(style.errorbar_capsize, 2.0);
        assert_eq!(style.mathtext, MathFont::Regular);
        assert_eq!(style.palette.len(), 5);
        assert_eq!(style.cycle.len(), 8);
        assert!(style.heavy_axes());
        assert!(!style.heavy_grid());
    }

    #[test]
    fn overrides() {
        let mut style = Style::default();
        style.set("grid.linestyle", "--").unwrap();
        style.set("xtick.direction", "out").unwrap();
        style.set("axes.linewidth", "1").unwrap();
        style.set("grid.color", "'#ff0000'").unwrap();
        style.set("axes.grid", "True").unwrap();
        style.set("mathtext.default", "it").unwrap();
        style.set("font.family", "\"Times New Roman\"").unwrap();
        assert_eq!(style.grid_linestyle, LineStyle::Dashed);
        assert_eq!(style.xtick_direction, TickDirection::Out);
        assert_eq!(style.ytick_direction, TickDirection::In);
        assert_eq!(style.grid_color, Color::RGB(255, 0, 0));
        assert!(!style.heavy_axes());
        assert!(style.axes_grid);
        assert_eq!(style.label("$\\phi$"), "𝜑");
    }

    #[test]
    fn palette_colors() {
        let mut style = Style::default();
        assert_eq!(style.color("xkcd:amber"), Some(colors::AMBER));
        assert_eq!(style.color("Dusty Purple"), Some(colors::DUSTY_PURPLE));
        assert_eq!(style.color("g"), Some(Color::Green));
        assert_eq!(style.color("xkcd:not a colour"), None);
        style.set("grid.color", "xkcd:windows blue").unwrap();
        assert_eq!(style.grid_color, colors::WINDOWS_BLUE);
        style.palette.push(("house red".to_string(), Color::RGB(200, 0, 0)));
        style.set("grid.color", "house red").unwrap();
        assert_eq!(style.grid_color, Color::RGB(200, 0, 0));
    }

    #[test]
    fn bad_overrides() {
        let mut style = Style::default();
        assert_eq!(
            style.set("grid.colour", "k"),
            Err(StyleError::UnknownKey("grid.colour".to_string()))
        );
        assert_eq!(
            style.set("axes.linewidth", "-2"),
            Err(StyleError::InvalidValue {
                key: "axes.linewidth".to_string(),
                value: "-2".to_string()
            })
        );
        assert!(style.set("ytick.direction", "up").is_err());
        assert!(style.set("axes.grid", "maybe").is_err());
    }

    #[test]
    fn apply_stops_at_first_error() {
        let mut style = Style::default();
        let result = style.apply_rc(vec![
            ("errorbar.capsize", "0"),
            ("nope", "1"),
            ("axes.linewidth", "0.5"),
        ]);
        assert!(result.is_err());
        assert_eq!(style.errorbar_capsize, 0.0);
        assert_eq!(style.axes_linewidth, 2.0);
    }

    #[test]
    fn override_parsing() {
        assert_eq!(
            Style::parse_override("grid.linestyle = --"),
            Ok(("grid.linestyle".to_string(), "--".to_string()))
        );
        assert_eq!(
            Style::parse_override("=3"),
            Err(StyleError::MalformedOverride("=3".to_string()))
        );
        assert!(Style::parse_override("grid.linestyle").is_err());
    }

    #[test]
    fn dash_patterns() {
        let drawn = |style: LineStyle| (0..6).filter(|i| style.is_drawn(*i)).count();
        assert_eq!(drawn(LineStyle::Solid), 6);
        assert_eq!(drawn(LineStyle::Dashed), 4);
        assert_eq!(drawn(LineStyle::Dotted), 3);
        assert_eq!(drawn(LineStyle::DashDot), 4);
        assert_eq!(LineStyle::Dotted.horizontal(false), '┈');
        assert_eq!(LineStyle::Solid.vertical(true), '┃');
    }
}
