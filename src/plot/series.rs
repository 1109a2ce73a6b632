use std::ops::Range;

use yansi::Color;

use crate::data::Dataset;
use crate::plot::canvas::{Canvas, Viewport};
use crate::plot::histogram::Histogram;
use crate::stats::Stats;
use crate::style::{LineStyle, Style};

// Base z-orders, following the usual stacking: patches, then lines.
const PATCH_Z: i32 = 10;
const LINE_Z: i32 = 20;
const PARTIAL_BLOCKS: [char; 7] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇'];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    Diamond,
    Circle,
    Square,
    Triangle,
    Cross,
    Plus,
    Star,
    Point,
}

impl Marker {
    /// Marker from a format string such as `"d"` or `"o--"`.
    pub fn from_fmt(fmt: &str) -> Option<Marker> {
        fmt.chars().find_map(|c| match c {
            'd' | 'D' => Some(Marker::Diamond),
            'o' => Some(Marker::Circle),
            's' => Some(Marker::Square),
            '^' => Some(Marker::Triangle),
            'x' => Some(Marker::Cross),
            '+' => Some(Marker::Plus),
            '*' => Some(Marker::Star),
            '.' => Some(Marker::Point),
            _ => None,
        })
    }

    pub fn glyph(&self) -> char {
        match self {
            Marker::Diamond => '◆',
            Marker::Circle => '●',
            Marker::Square => '■',
            Marker::Triangle => '▲',
            Marker::Cross => '×',
            Marker::Plus => '+',
            Marker::Star => '★',
            Marker::Point => '·',
        }
    }
}

#[derive(Debug)]
/// Points with vertical error bars.
pub struct ErrorBars {
    data: Dataset,
    yerr: Vec<f64>,
    marker: Marker,
    color: Option<Color>,
    label: Option<String>,
}

impl ErrorBars {
    /// `fmt` picks the marker (see `Marker::from_fmt`); points are used when
    /// it names none.
    pub fn new(data: Dataset, yerr: Vec<f64>, fmt: &str) -> Self {
        Self {
            data,
            yerr,
            marker: Marker::from_fmt(fmt).unwrap_or(Marker::Point),
            color: None,
            label: None,
        }
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = Some(color);
        self
    }

    pub fn label(&mut self, label: &str) -> &mut Self {
        self.label = Some(label.to_string());
        self
    }

    fn y_extent(&self) -> Vec<f64> {
        self.data
            .y()
            .iter()
            .zip(self.errors())
            .flat_map(|(y, e)| vec![y - e, y + e])
            .collect()
    }

    // Missing error magnitudes count as zero
    fn errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.yerr.iter().copied().chain(std::iter::repeat(0.0))
    }

    fn draw(&self, canvas: &mut Canvas, view: &Viewport, style: &Style, color: Color) {
        let capped = style.errorbar_capsize > 0.0;
        for ((x, y), err) in self.data.points().zip(self.errors()) {
            let col = view.col(x);
            let top = view.row(y + err.abs());
            let bottom = view.row(y - err.abs());
            for row in top..=bottom {
                if view.contains(col, row) {
                    canvas.put(col, row, '│', Some(color), LINE_Z);
                }
            }
            if capped && top < bottom {
                for (row, cap) in [(top, '┬'), (bottom, '┴')] {
                    if view.contains(col, row) {
                        canvas.put(col, row, cap, Some(color), LINE_Z);
                    }
                }
            }
            let row = view.row(y);
            if view.contains(col, row) {
                canvas.put(col, row, self.marker.glyph(), Some(color), LINE_Z + 1);
            }
        }
    }
}

#[derive(Debug)]
/// A polyline through the points of a dataset.
pub struct Line {
    data: Dataset,
    linestyle: LineStyle,
    zorder: Option<i32>,
    color: Option<Color>,
    label: Option<String>,
}

impl Line {
    pub fn new(data: Dataset) -> Self {
        Self {
            data,
            linestyle: LineStyle::Solid,
            zorder: None,
            color: None,
            label: None,
        }
    }

    pub fn linestyle(&mut self, linestyle: LineStyle) -> &mut Self {
        self.linestyle = linestyle;
        self
    }

    /// Stacking order; series with a higher one are drawn on top.
    pub fn zorder(&mut self, zorder: i32) -> &mut Self {
        self.zorder = Some(zorder);
        self
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = Some(color);
        self
    }

    pub fn label(&mut self, label: &str) -> &mut Self {
        self.label = Some(label.to_string());
        self
    }

    fn glyph(&self) -> char {
        match self.linestyle {
            LineStyle::Dotted => '·',
            _ => '•',
        }
    }

    fn draw(&self, canvas: &mut Canvas, view: &Viewport, color: Color) {
        let z = self.zorder.map_or(LINE_Z, |z| z.saturating_mul(10));
        let glyph = self.glyph();
        let points: Vec<(f64, f64)> = self.data.points().collect();
        let mut step = 0;
        let mut previous: Option<isize> = None;
        for pair in points.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            let (c0, c1) = (view.col(x0), view.col(x1));
            let columns = (c1 - c0).abs().max(1);
            for i in 0..=columns {
                if i == 0 && previous.is_some() {
                    continue;
                }
                let t = i as f64 / columns as f64;
                let col = c0 + (c1 - c0).signum() * i;
                let row = view.row(y0 + (y1 - y0) * t);
                // Fill vertical gaps so that steep segments stay connected
                let from = previous.unwrap_or(row);
                let (low, high) = (from.min(row), from.max(row));
                for r in low..=high {
                    let inked = r == row || r != from;
                    if inked && view.contains(col, r) && self.linestyle.is_drawn(step) {
                        canvas.put(col, r, glyph, Some(color), z);
                    }
                }
                previous = Some(row);
                step += 1;
            }
        }
        if let [(x, y)] = points.as_slice() {
            let (col, row) = (view.col(*x), view.row(*y));
            if view.contains(col, row) {
                canvas.put(col, row, glyph, Some(color), z);
            }
        }
    }
}

#[derive(Debug)]
/// Bars of a histogram.
pub struct Bars {
    histogram: Histogram,
    color: Option<Color>,
    edgecolor: Option<Color>,
    alpha: f64,
    label: Option<String>,
}

impl Bars {
    pub fn new(histogram: Histogram) -> Self {
        Self {
            histogram,
            color: None,
            edgecolor: None,
            alpha: 1.0,
            label: None,
        }
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// Colour of the top cell of every bar.
    pub fn edgecolor(&mut self, color: Color) -> &mut Self {
        self.edgecolor = Some(color);
        self
    }

    /// Opacity in `[0, 1]`; translucent bars are drawn with shade glyphs.
    pub fn alpha(&mut self, alpha: f64) -> &mut Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn label(&mut self, label: &str) -> &mut Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    fn fill(&self) -> char {
        match self.alpha {
            a if a >= 0.95 => '█',
            a if a >= 0.6 => '▓',
            a if a >= 0.3 => '▒',
            _ => '░',
        }
    }

    // Tallest bucket count falling on every column of the view
    fn column_counts(&self, view: &Viewport) -> Vec<usize> {
        let mut counts = vec![0; view.width];
        let buckets = self.histogram.buckets();
        for (i, bucket) in buckets.iter().enumerate() {
            let start = view.col_f(bucket.range.start).round().max(0.0) as usize;
            let mut end = view.col_f(bucket.range.end).round().max(0.0) as usize;
            // The upper edge of the last bucket is part of it
            if i + 1 == buckets.len() {
                end += 1;
            }
            for count in counts.iter_mut().take(end.max(start + 1)).skip(start) {
                *count = (*count).max(bucket.count);
            }
        }
        counts
    }

    fn draw(&self, canvas: &mut Canvas, view: &Viewport, color: Color, z: i32) {
        let fill = self.fill();
        for (i, count) in self.column_counts(view).into_iter().enumerate() {
            let col = (view.left + i) as isize;
            let eighths = view.eighths(count as f64);
            let full = eighths / 8;
            let partial = eighths % 8;
            for level in 0..full {
                let row = view.bottom() - level as isize;
                let edge = level + 1 == full && partial == 0;
                let paint = if edge { self.edgecolor.unwrap_or(color) } else { color };
                canvas.put(col, row, fill, Some(paint), z);
            }
            if partial > 0 {
                let row = view.bottom() - full as isize;
                let paint = self.edgecolor.unwrap_or(color);
                canvas.put(col, row, PARTIAL_BLOCKS[partial - 1], Some(paint), z);
            }
        }
    }
}

impl From<ErrorBars> for Series {
    fn from(series: ErrorBars) -> Self {
        Series::ErrorBars(series)
    }
}

impl From<Line> for Series {
    fn from(series: Line) -> Self {
        Series::Line(series)
    }
}

impl From<Bars> for Series {
    fn from(series: Bars) -> Self {
        Series::Bars(series)
    }
}

#[derive(Debug)]
/// Anything that can be drawn on a panel.
pub enum Series {
    ErrorBars(ErrorBars),
    Line(Line),
    Bars(Bars),
}

impl Series {
    pub fn label(&self) -> Option<&str> {
        match self {
            Series::ErrorBars(s) => s.label.as_deref(),
            Series::Line(s) => s.label.as_deref(),
            Series::Bars(s) => s.label.as_deref(),
        }
    }

    pub fn explicit_color(&self) -> Option<Color> {
        match self {
            Series::ErrorBars(s) => s.color,
            Series::Line(s) => s.color,
            Series::Bars(s) => s.color,
        }
    }

    /// Range of x values the series needs to be fully visible.
    pub fn x_range(&self) -> Option<Range<f64>> {
        match self {
            Series::ErrorBars(s) => Stats::new(s.data.x(), None).map(|st| st.range()),
            Series::Line(s) => Stats::new(s.data.x(), None).map(|st| st.range()),
            Series::Bars(s) => Some(s.histogram.edges()),
        }
    }

    /// Range of y values the series needs to be fully visible.
    pub fn y_range(&self) -> Option<Range<f64>> {
        match self {
            Series::ErrorBars(s) => Stats::new(&s.y_extent(), None).map(|st| st.range()),
            Series::Line(s) => Stats::new(s.data.y(), None).map(|st| st.range()),
            Series::Bars(s) => Some(0.0..s.histogram.top() as f64),
        }
    }

    pub fn is_bars(&self) -> bool {
        matches!(self, Series::Bars(_))
    }

    /// A short sample of how the series looks, for legends.
    pub fn legend_glyph(&self) -> String {
        match self {
            Series::ErrorBars(s) => format!(" {} ", s.marker.glyph()),
            Series::Line(s) => {
                let ch = s.linestyle.horizontal(false);
                format!("{ch}{ch}{ch}")
            }
            Series::Bars(s) => {
                let ch = s.fill();
                format!("{ch}{ch}{ch}")
            }
        }
    }

    /// Draws the series.  `index` is its position among the panel series.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        view: &Viewport,
        style: &Style,
        color: Color,
        index: usize,
    ) {
        match self {
            Series::ErrorBars(s) => s.draw(canvas, view, style, color),
            Series::Line(s) => s.draw(canvas, view, color),
            Series::Bars(s) => s.draw(canvas, view, color, PATCH_Z + index as i32),
        }
    }
}
