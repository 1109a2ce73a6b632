use std::fmt;

use yansi::Color::Blue;

use crate::plot::panel::Panel;
use crate::style::Style;

// Columns left blank between two panels of a row.
const GAP: usize = 3;
const MIN_PANEL_WIDTH: usize = 24;
const MIN_PANEL_HEIGHT: usize = 10;
const DEFAULT_PANEL_HEIGHT: usize = 20;

#[derive(Debug)]
/// A grid of panels sharing a style.
///
/// Formatting a figure with a width (as in `format!("{:110}", figure)`)
/// spreads the panels of a row over that many columns.
pub struct Figure {
    rows: usize,
    cols: usize,
    panels: Vec<Panel>,
    panel_height: usize,
    style: Style,
}

impl Figure {
    pub fn new(rows: usize, cols: usize, style: Style) -> Self {
        let (rows, cols) = (rows.max(1), cols.max(1));
        Self {
            rows,
            cols,
            panels: (0..rows * cols).map(|_| Panel::new()).collect(),
            panel_height: DEFAULT_PANEL_HEIGHT,
            style,
        }
    }

    /// Number of text rows every panel takes.
    pub fn panel_height(&mut self, height: usize) -> &mut Self {
        self.panel_height = height.max(MIN_PANEL_HEIGHT);
        self
    }

    /// The panel at `index`, counting from 1 left to right and then top to
    /// bottom.
    ///
    /// # Panics
    ///
    /// If `index` is 0 or bigger than the number of panels.
    pub fn subplot(&mut self, index: usize) -> &mut Panel {
        assert!(
            index >= 1 && index <= self.panels.len(),
            "subplot index {} out of 1..={}",
            index,
            self.panels.len()
        );
        &mut self.panels[index - 1]
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Statistics of every histogram in the figure.
    pub fn summary(&self) -> Summary<'_> {
        Summary { figure: self }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = f.width().unwrap_or(110);
        let panel_width =
            (width.saturating_sub(GAP * (self.cols - 1)) / self.cols).max(MIN_PANEL_WIDTH);
        debug!(
            "Drawing {}x{} panels of {}x{} chars",
            self.rows, self.cols, panel_width, self.panel_height
        );
        let gap = " ".repeat(GAP);
        for (r, row) in self.panels.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let rendered: Vec<Vec<String>> = row
                .iter()
                .map(|panel| panel.render(&self.style, panel_width, self.panel_height).rows())
                .collect();
            for line in 0..self.panel_height {
                let parts: Vec<&str> = rendered.iter().map(|rows| rows[line].as_str()).collect();
                writeln!(f, "{}", parts.join(&gap).trim_end())?;
            }
        }
        Ok(())
    }
}

/// Per histogram statistics of a figure.
pub struct Summary<'a> {
    figure: &'a Figure,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, panel) in self.figure.panels.iter().enumerate() {
            for (j, histogram) in panel.histograms().enumerate() {
                writeln!(
                    f,
                    "Panel {}, histogram {} ({} bins)",
                    Blue.paint(i + 1),
                    Blue.paint(j + 1),
                    histogram.buckets().len()
                )?;
                write!(f, "{}", histogram.stats())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{linspace, Dataset};
    use crate::plot::histogram::Histogram;
    use crate::plot::series::{Bars, Line};
    use yansi::Paint;

    fn figure() -> Figure {
        let mut figure = Figure::new(2, 2, Style::default());
        let x = linspace(0.0, 1.0, 10);
        figure
            .subplot(1)
            .add(Line::new(Dataset::new(x.clone(), x.clone())))
            .set_ylabel("first");
        figure.subplot(4).add(Bars::new(Histogram::new(&x, 5).unwrap()));
        figure
    }

    #[test]
    fn layout() {
        let figure = figure();
        Paint::disable();
        let display = format!("{:80}", figure);
        let lines: Vec<&str> = display.lines().collect();
        // Two rows of panels and a blank line between them
        assert_eq!(lines.len(), 2 * DEFAULT_PANEL_HEIGHT + 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 80));
        assert!(lines[0].starts_with("    first"));
        assert_eq!(lines[DEFAULT_PANEL_HEIGHT], "");
    }

    #[test]
    fn narrow_width_is_capped() {
        let mut figure = figure();
        figure.panel_height(3);
        Paint::disable();
        let display = format!("{:10}", figure);
        let lines: Vec<&str> = display.lines().collect();
        assert_eq!(lines.len(), 2 * MIN_PANEL_HEIGHT + 1);
        assert!(lines
            .iter()
            .any(|l| l.chars().count() == 2 * MIN_PANEL_WIDTH + GAP));
    }

    #[test]
    #[should_panic]
    fn subplot_out_of_range() {
        figure().subplot(5);
    }

    #[test]
    fn summary() {
        let figure = figure();
        Paint::disable();
        let summary = format!("{}", figure.summary());
        assert!(summary.contains("Panel 4, histogram 1 (5 bins)"));
        assert!(summary.contains("Samples = 10;"));
        assert!(!summary.contains("Panel 1"));
    }
}
