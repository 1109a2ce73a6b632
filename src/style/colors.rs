use yansi::Color;

// Black renders as bright black, since true black vanishes on dark terminals.
pub const BLACK: Color = Color::Fixed(8);
pub const ORANGE: Color = Color::RGB(255, 165, 0);
pub const GREEN: Color = Color::RGB(0, 128, 0);
pub const LIGHT_BLUE: Color = Color::RGB(173, 216, 230);

pub const WINDOWS_BLUE: Color = Color::RGB(55, 120, 191);
pub const AMBER: Color = Color::RGB(254, 179, 8);
pub const GREYISH: Color = Color::RGB(168, 164, 149);
pub const FADED_GREEN: Color = Color::RGB(123, 178, 116);
pub const DUSTY_PURPLE: Color = Color::RGB(130, 95, 135);

const NAMED: &[(&str, Color)] = &[
    ("black", BLACK),
    ("white", Color::White),
    ("red", Color::RGB(255, 0, 0)),
    ("green", GREEN),
    ("blue", Color::RGB(0, 0, 255)),
    ("orange", ORANGE),
    ("lightblue", LIGHT_BLUE),
    ("gray", Color::RGB(128, 128, 128)),
    ("grey", Color::RGB(128, 128, 128)),
    ("purple", Color::RGB(128, 0, 128)),
];

const PALETTE: &[(&str, Color)] = &[
    ("windows blue", WINDOWS_BLUE),
    ("amber", AMBER),
    ("greyish", GREYISH),
    ("faded green", FADED_GREEN),
    ("dusty purple", DUSTY_PURPLE),
];

/// Parses a colour specification.
///
/// Accepted forms are the single letter codes (`b`, `g`, `r`, `c`, `m`, `y`,
/// `k`, `w`), a few CSS names and hexadecimal `#rrggbb` (the `#` may be
/// omitted, as rc files do).  Palette names are resolved by `Style::color`.
pub fn parse_color(spec: &str) -> Option<Color> {
    let spec = spec.trim();
    let single = match spec {
        "b" => Some(Color::Blue),
        "g" => Some(Color::Green),
        "r" => Some(Color::Red),
        "c" => Some(Color::Cyan),
        "m" => Some(Color::Magenta),
        "y" => Some(Color::Yellow),
        "k" => Some(BLACK),
        "w" => Some(Color::White),
        _ => None,
    };
    if single.is_some() {
        return single;
    }
    let name = spec.to_lowercase();
    if let Some((_, color)) = NAMED.iter().find(|(n, _)| *n == name) {
        return Some(*color);
    }
    parse_hex(name.strip_prefix('#').unwrap_or(&name))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::RGB(channel(0)?, channel(2)?, channel(4)?))
}

/// The xkcd colours the style names by default.
pub fn default_palette() -> Vec<(String, Color)> {
    PALETTE
        .iter()
        .map(|(name, color)| (name.to_string(), *color))
        .collect()
}

// Segment data of the "bone" colour map: (position, value) pairs per channel.
const BONE_RED: &[(f64, f64)] = &[(0.0, 0.0), (0.746032, 0.652778), (1.0, 1.0)];
const BONE_GREEN: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.365079, 0.319444),
    (0.746032, 0.777778),
    (1.0, 1.0),
];
const BONE_BLUE: &[(f64, f64)] = &[(0.0, 0.0), (0.365079, 0.444444), (1.0, 1.0)];

fn interpolate(segments: &[(f64, f64)], t: f64) -> f64 {
    for pair in segments.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            return y0 + (y1 - y0) * (t - x0) / (x1 - x0);
        }
    }
    segments.last().map_or(0.0, |s| s.1)
}

/// Samples `n` colours of the "bone" colour map, leaving out both extremes.
pub fn bone_palette(n: usize) -> Vec<Color> {
    let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    (1..=n)
        .map(|i| {
            let t = i as f64 / (n + 1) as f64;
            Color::RGB(
                to_u8(interpolate(BONE_RED, t)),
                to_u8(interpolate(BONE_GREEN, t)),
                to_u8(interpolate(BONE_BLUE, t)),
            )
        })
        .collect()
}

#[derive(Debug, Clone)]
/// An endless iterator over a list of colours.
pub struct ColorCycle {
    colors: Vec<Color>,
    next: usize,
}

impl ColorCycle {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors, next: 0 }
    }
}

impl Iterator for ColorCycle {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        Some(color)
    }
}
