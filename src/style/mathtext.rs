use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Font used for the letters inside `$...$` segments.
pub enum MathFont {
    Regular,
    Italic,
}

impl FromStr for MathFont {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(MathFont::Regular),
            "it" => Ok(MathFont::Italic),
            _ => Err(()),
        }
    }
}

const SYMBOLS: &[(&str, char)] = &[
    ("alpha", 'α'),
    ("beta", 'β'),
    ("gamma", 'γ'),
    ("delta", 'δ'),
    ("epsilon", 'ε'),
    ("zeta", 'ζ'),
    ("eta", 'η'),
    ("theta", 'θ'),
    ("iota", 'ι'),
    ("kappa", 'κ'),
    ("lambda", 'λ'),
    ("mu", 'μ'),
    ("nu", 'ν'),
    ("xi", 'ξ'),
    ("pi", 'π'),
    ("rho", 'ρ'),
    ("sigma", 'σ'),
    ("tau", 'τ'),
    ("upsilon", 'υ'),
    ("phi", 'φ'),
    ("chi", 'χ'),
    ("psi", 'ψ'),
    ("omega", 'ω'),
    ("Gamma", 'Γ'),
    ("Delta", 'Δ'),
    ("Theta", 'Θ'),
    ("Lambda", 'Λ'),
    ("Xi", 'Ξ'),
    ("Pi", 'Π'),
    ("Sigma", 'Σ'),
    ("Upsilon", 'Υ'),
    ("Phi", 'Φ'),
    ("Psi", 'Ψ'),
    ("Omega", 'Ω'),
    ("pm", '±'),
    ("times", '×'),
    ("cdot", '·'),
    ("circ", '°'),
    ("infty", '∞'),
];

fn symbol(name: &str) -> Option<char> {
    SYMBOLS.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

fn italic(c: char) -> char {
    let shifted = match c {
        'h' => return 'ℎ',
        'a'..='z' => 0x1D44E + (c as u32 - 'a' as u32),
        'A'..='Z' => 0x1D434 + (c as u32 - 'A' as u32),
        'α'..='ω' => 0x1D6FC + (c as u32 - 'α' as u32),
        'Α'..='Ω' => 0x1D6E2 + (c as u32 - 'Α' as u32),
        _ => return c,
    };
    std::char::from_u32(shifted).unwrap_or(c)
}

/// Renders the math segments (delimited by `$`) of a label.
///
/// TeX commands naming Greek letters and a few symbols become their Unicode
/// counterparts; unknown commands are left with their backslash.  An
/// unterminated segment is kept literally.
pub fn render(text: &str, font: MathFont) -> String {
    let mut out = String::with_capacity(text.len());
    let mut segments = text.split('$');
    if let Some(head) = segments.next() {
        out.push_str(head);
    }
    let rest: Vec<&str> = segments.collect();
    let closed = rest.len() - rest.len() % 2;
    for pair in rest[..closed].chunks(2) {
        out.push_str(&render_math(pair[0], font));
        out.push_str(pair[1]);
    }
    if closed < rest.len() {
        out.push('$');
        out.push_str(rest[closed]);
    }
    out
}

fn render_math(math: &str, font: MathFont) -> String {
    let mut out = String::with_capacity(math.len());
    let mut chars = math.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_alphabetic() {
                break;
            }
            name.push(next);
            chars.next();
        }
        match symbol(&name) {
            Some(s) => out.push(s),
            None => {
                out.push('\\');
                out.push_str(&name);
            }
        }
    }
    match font {
        MathFont::Regular => out,
        MathFont::Italic => out.chars().map(italic).collect(),
    }
}
