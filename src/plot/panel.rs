use std::ops::Range;

use yansi::Color;
use yansi::Color::Blue;

use crate::format::center;
use crate::plot::canvas::{Canvas, Viewport};
use crate::plot::histogram::Histogram;
use crate::plot::series::Series;
use crate::plot::ticks::Ticks;
use crate::style::{Style, TickDirection};

// Fraction of the data span added on both sides when autoscaling.
const MARGIN: f64 = 0.05;
const X_TICKS: usize = 5;
const Y_TICKS: usize = 4;
const GRID_Z: i32 = 1;
const FRAME_Z: i32 = 100_000;
const LEGEND_Z: i32 = 200_000;

#[derive(Debug, Default)]
/// A single subplot: series, axes decorations and labels.
pub struct Panel {
    series: Vec<Series>,
    xlim: Option<Range<f64>>,
    xlabel: String,
    ylabel: String,
    legend: bool,
    minor_ticks: bool,
    grid: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a series on top of the existing ones.
    pub fn add<S: Into<Series>>(&mut self, series: S) -> &mut Self {
        self.series.push(series.into());
        self
    }

    /// Fixes the range of the x axis instead of autoscaling it.
    pub fn set_xlim(&mut self, start: f64, end: f64) -> &mut Self {
        self.xlim = Some(start..end);
        self
    }

    pub fn set_xlabel(&mut self, label: &str) -> &mut Self {
        self.xlabel = label.to_string();
        self
    }

    pub fn set_ylabel(&mut self, label: &str) -> &mut Self {
        self.ylabel = label.to_string();
        self
    }

    /// Shows a legend with the labelled series added so far.
    pub fn legend(&mut self) -> &mut Self {
        if !self.series.iter().any(|s| s.label().is_some()) {
            warn!("No labelled series found to put in legend");
        }
        self.legend = true;
        self
    }

    pub fn minorticks_on(&mut self) -> &mut Self {
        self.minor_ticks = true;
        self
    }

    pub fn grid(&mut self) -> &mut Self {
        self.grid = true;
        self
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn histograms(&self) -> impl Iterator<Item = &Histogram> + '_ {
        self.series.iter().filter_map(|s| match s {
            Series::Bars(bars) => Some(bars.histogram()),
            _ => None,
        })
    }

    /// Ranges of both axes: the fixed x limits if any, and otherwise the
    /// span of the data with a small margin.  Histograms keep zero as the
    /// bottom of the y axis.
    pub fn limits(&self) -> (Range<f64>, Range<f64>) {
        let x = match &self.xlim {
            Some(range) => range.clone(),
            None => pad(union(self.series.iter().filter_map(|s| s.x_range())), false),
        };
        let has_bars = self.series.iter().any(|s| s.is_bars());
        let y = pad(union(self.series.iter().filter_map(|s| s.y_range())), has_bars);
        (x, y)
    }

    /// Draws the panel on a canvas of `width` x `height` chars.
    pub fn render(&self, style: &Style, width: usize, height: usize) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        let (x_range, y_range) = self.limits();
        let x_ticks = Ticks::new(x_range.clone(), X_TICKS);
        let y_ticks = Ticks::new(y_range.clone(), Y_TICKS);
        let y_formatter = y_ticks.formatter();
        let y_labels: Vec<String> = y_ticks.major.iter().map(|v| y_formatter.format(*v)).collect();
        let label_width = y_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let frame = Frame {
            left: label_width + 1,
            top: 1,
            right: width.saturating_sub(1).max(label_width + 4),
            bottom: height.saturating_sub(3).max(4),
        };
        let view = Viewport {
            x: x_range,
            y: y_range,
            left: frame.left + 1,
            top: frame.top + 1,
            width: frame.right - frame.left - 1,
            height: frame.bottom - frame.top - 1,
        };

        if self.grid || style.axes_grid {
            draw_grid(&mut canvas, &view, style, &x_ticks, &y_ticks);
        }
        let mut cycle = style.color_cycle();
        for (index, series) in self.series.iter().enumerate() {
            let color = series
                .explicit_color()
                .or_else(|| cycle.next())
                .unwrap_or(Color::Default);
            series.draw(&mut canvas, &view, style, color, index);
        }
        frame.draw(&mut canvas, style.heavy_axes());
        let minor = self.minor_ticks || style.minor_ticks;
        self.draw_ticks(&mut canvas, &view, &frame, style, &x_ticks, &y_ticks, minor);

        for (value, label) in y_ticks.major.iter().zip(y_labels.iter()) {
            let row = view.row(*value);
            if view.contains(view.left as isize, row) {
                let text = format!("{:>width$}", label, width = label_width);
                canvas.put_str(0, row, &text, Some(Blue), FRAME_Z);
            }
        }
        let x_formatter = x_ticks.formatter();
        let mut free_from = 0;
        for value in &x_ticks.major {
            let label = x_formatter.format(*value);
            let len = label.chars().count() as isize;
            let start = view.col(*value) - len / 2;
            if start >= free_from && start + len <= width as isize {
                canvas.put_str(start, frame.bottom as isize + 1, &label, Some(Blue), FRAME_Z);
                free_from = start + len + 1;
            }
        }

        canvas.put_str(frame.left as isize, 0, &style.label(&self.ylabel), None, FRAME_Z);
        let xlabel = center(&style.label(&self.xlabel), frame.right - frame.left + 1);
        canvas.put_str(frame.left as isize, frame.bottom as isize + 2, &xlabel, None, FRAME_Z);

        if self.legend {
            self.draw_legend(&mut canvas, &view, style);
        }
        canvas
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_ticks(
        &self,
        canvas: &mut Canvas,
        view: &Viewport,
        frame: &Frame,
        style: &Style,
        x_ticks: &Ticks,
        y_ticks: &Ticks,
        minor: bool,
    ) {
        let heavy = style.heavy_axes();
        let mut marks: Vec<(&f64, bool)> = y_ticks.major.iter().map(|v| (v, false)).collect();
        if minor {
            marks.extend(y_ticks.minor.iter().map(|v| (v, true)));
        }
        for (value, is_minor) in marks {
            let row = view.row(*value);
            if view.contains(view.left as isize, row) {
                let glyph = y_tick_glyph(style.ytick_direction, heavy, is_minor);
                canvas.put(frame.left as isize, row, glyph, None, FRAME_Z + 1);
            }
        }
        let mut marks: Vec<(&f64, bool)> = x_ticks.major.iter().map(|v| (v, false)).collect();
        if minor {
            marks.extend(x_ticks.minor.iter().map(|v| (v, true)));
        }
        for (value, is_minor) in marks {
            let col = view.col(*value);
            if view.contains(col, view.top as isize) {
                let glyph = x_tick_glyph(style.xtick_direction, heavy, is_minor);
                canvas.put(col, frame.bottom as isize, glyph, None, FRAME_Z + 1);
            }
        }
    }

    fn draw_legend(&self, canvas: &mut Canvas, view: &Viewport, style: &Style) {
        let mut cycle = style.color_cycle();
        let mut entries = Vec::new();
        for series in &self.series {
            let color = series.explicit_color().or_else(|| cycle.next());
            if let Some(label) = series.label() {
                entries.push((series.legend_glyph(), color, style.label(label)));
            }
        }
        let width = entries
            .iter()
            .map(|(glyph, _, label)| glyph.chars().count() + label.chars().count() + 3)
            .max()
            .unwrap_or(0);
        let left = view.left as isize + 1;
        for (i, (glyph, color, label)) in entries.iter().enumerate() {
            let row = view.top as isize + i as isize;
            canvas.put_str(left, row, &format!("{:width$}", "", width = width), None, LEGEND_Z);
            canvas.put_str(left + 1, row, glyph, *color, LEGEND_Z);
            let label_col = left + glyph.chars().count() as isize + 2;
            canvas.put_str(label_col, row, label, None, LEGEND_Z);
        }
    }
}

// Box drawn around the plot area, in canvas coordinates.
struct Frame {
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
}

impl Frame {
    fn draw(&self, canvas: &mut Canvas, heavy: bool) {
        let (h, v, tl, tr, bl, br) = if heavy {
            ('━', '┃', '┏', '┓', '┗', '┛')
        } else {
            ('─', '│', '┌', '┐', '└', '┘')
        };
        let (left, top, right, bottom) = (
            self.left as isize,
            self.top as isize,
            self.right as isize,
            self.bottom as isize,
        );
        for col in left + 1..right {
            canvas.put(col, top, h, None, FRAME_Z);
            canvas.put(col, bottom, h, None, FRAME_Z);
        }
        for row in top + 1..bottom {
            canvas.put(left, row, v, None, FRAME_Z);
            canvas.put(right, row, v, None, FRAME_Z);
        }
        canvas.put(left, top, tl, None, FRAME_Z);
        canvas.put(right, top, tr, None, FRAME_Z);
        canvas.put(left, bottom, bl, None, FRAME_Z);
        canvas.put(right, bottom, br, None, FRAME_Z);
    }
}

fn draw_grid(canvas: &mut Canvas, view: &Viewport, style: &Style, x_ticks: &Ticks, y_ticks: &Ticks) {
    let heavy = style.heavy_grid();
    let color = Some(style.grid_color);
    let horizontal = style.grid_linestyle.horizontal(heavy);
    let vertical = style.grid_linestyle.vertical(heavy);
    for value in &y_ticks.major {
        let row = view.row(*value);
        for col in view.left..view.left + view.width {
            if view.contains(col as isize, row) {
                canvas.put(col as isize, row, horizontal, color, GRID_Z);
            }
        }
    }
    for value in &x_ticks.major {
        let col = view.col(*value);
        for row in view.top..view.top + view.height {
            if view.contains(col, row as isize) {
                canvas.put(col, row as isize, vertical, color, GRID_Z);
            }
        }
    }
}

fn y_tick_glyph(direction: TickDirection, heavy: bool, minor: bool) -> char {
    match (direction, heavy, minor) {
        (TickDirection::In, false, _) => '├',
        (TickDirection::Out, false, _) => '┤',
        (TickDirection::InOut, false, _) => '┼',
        (TickDirection::In, true, false) => '┣',
        (TickDirection::In, true, true) => '┠',
        (TickDirection::Out, true, false) => '┫',
        (TickDirection::Out, true, true) => '┨',
        (TickDirection::InOut, true, false) => '╋',
        (TickDirection::InOut, true, true) => '╂',
    }
}

fn x_tick_glyph(direction: TickDirection, heavy: bool, minor: bool) -> char {
    match (direction, heavy, minor) {
        (TickDirection::In, false, _) => '┴',
        (TickDirection::Out, false, _) => '┬',
        (TickDirection::InOut, false, _) => '┼',
        (TickDirection::In, true, false) => '┻',
        (TickDirection::In, true, true) => '┷',
        (TickDirection::Out, true, false) => '┳',
        (TickDirection::Out, true, true) => '┯',
        (TickDirection::InOut, true, false) => '╋',
        (TickDirection::InOut, true, true) => '┿',
    }
}

fn union<I: Iterator<Item = Range<f64>>>(ranges: I) -> Option<Range<f64>> {
    ranges.reduce(|a, b| a.start.min(b.start)..a.end.max(b.end))
}

fn pad(range: Option<Range<f64>>, floor_zero: bool) -> Range<f64> {
    let range = match range {
        Some(range) => range,
        None => return 0.0..1.0,
    };
    let span = range.end - range.start;
    if span == 0.0 {
        let pad = if range.start == 0.0 {
            0.5
        } else {
            range.start.abs() * MARGIN
        };
        return range.start - pad..range.end + pad;
    }
    let start = if floor_zero && range.start == 0.0 {
        0.0
    } else {
        range.start - span * MARGIN
    };
    start..range.end + span * MARGIN
}
