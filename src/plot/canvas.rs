use std::ops::Range;

use yansi::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub color: Option<Color>,
    z: i32,
}

impl Cell {
    fn blank() -> Self {
        Self {
            ch: ' ',
            color: None,
            z: i32::MIN,
        }
    }
}

#[derive(Debug)]
/// A fixed size grid of characters, where every cell remembers the z-order of
/// whatever was drawn in it last.
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Draws `ch` at (`col`, `row`) unless something with a higher z-order is
    /// already there.  Out of bounds positions are silently ignored.
    pub fn put(&mut self, col: isize, row: isize, ch: char, color: Option<Color>, z: i32) {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return;
        }
        let cell = &mut self.cells[row as usize * self.width + col as usize];
        if z >= cell.z {
            *cell = Cell { ch, color, z };
        }
    }

    /// Draws `text` left to right starting at (`col`, `row`).
    pub fn put_str(&mut self, col: isize, row: isize, text: &str, color: Option<Color>, z: i32) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as isize, row, ch, color, z);
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col)
    }

    /// Rows of the canvas, with runs of equally coloured cells painted
    /// together.  Every row has exactly `width` visible chars.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(paint_row)
            .collect()
    }

    /// Rows of the canvas with no colour at all.
    pub fn plain_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().map(|cell| cell.ch).collect())
            .collect()
    }
}

fn paint_row(row: &[Cell]) -> String {
    let mut out = String::new();
    let mut start = 0;
    while start < row.len() {
        let color = row[start].color;
        let end = row[start..]
            .iter()
            .position(|cell| cell.color != color)
            .map_or(row.len(), |n| start + n);
        let run: String = row[start..end].iter().map(|cell| cell.ch).collect();
        match color {
            Some(c) => out.push_str(&c.paint(run).to_string()),
            None => out.push_str(&run),
        }
        start = end;
    }
    out
}

#[derive(Debug, Clone)]
/// Maps data coordinates into the cells of a rectangular area of a canvas.
pub struct Viewport {
    pub x: Range<f64>,
    pub y: Range<f64>,
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    /// Fractional column of `x`, relative to the left of the area.
    pub fn col_f(&self, x: f64) -> f64 {
        (x - self.x.start) / (self.x.end - self.x.start) * (self.width - 1) as f64
    }

    /// Column of `x`.  Far away values are clamped to one area width beyond
    /// either side.
    pub fn col(&self, x: f64) -> isize {
        self.left as isize + clamp_cells(self.col_f(x), self.width)
    }

    /// Row of `y`, clamped like `col`.
    pub fn row(&self, y: f64) -> isize {
        let from_bottom = (y - self.y.start) / (self.y.end - self.y.start) * (self.height - 1) as f64;
        self.bottom() - clamp_cells(from_bottom, self.height)
    }

    /// Height of `y` over the bottom of the area, in eighths of a cell.
    pub fn eighths(&self, y: f64) -> usize {
        let fraction = ((y - self.y.start) / (self.y.end - self.y.start)).clamp(0.0, 1.0);
        (fraction * (self.height * 8) as f64).round() as usize
    }

    pub fn bottom(&self) -> isize {
        (self.top + self.height - 1) as isize
    }

    pub fn contains(&self, col: isize, row: isize) -> bool {
        col >= self.left as isize
            && col < (self.left + self.width) as isize
            && row >= self.top as isize
            && row < (self.top + self.height) as isize
    }
}

// Offsets stay within `[-size, 2 * size]`; NaN maps to zero.
fn clamp_cells(offset: f64, size: usize) -> isize {
    let size = size as f64;
    offset.round().clamp(-size, 2.0 * size) as isize
}
