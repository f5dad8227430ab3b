//! SVG output for `glyphtgs` glyphs.
//!
//! Converts traced glyph outlines into self-contained SVG documents using
//! the `svg` crate.
//!
//! Key design points:
//! - Path data is built as raw `d` strings to preserve `f64` precision
//!   (the `svg` crate's `Data` builder uses `f32`).
//! - [`PathSink`] receives outline commands already mapped into canvas
//!   space (Y down); it never flips or offsets coordinates itself.
//! - Each document holds exactly one `<path>` on a square canvas.

use std::fmt::Write;

use glyphtgs_fonts::OutlineSink;
use glyphtgs_graphics::types::{Color, Scalar};
use svg::Document;

/// Default number of decimal places for path coordinates.
pub const DEFAULT_PRECISION: usize = 3;

// ---------------------------------------------------------------------------
// Path sink
// ---------------------------------------------------------------------------

/// An [`OutlineSink`] that records outline commands as SVG path data.
///
/// Emits absolute `M`, `L`, `Q`, `C`, and `Z` commands.
#[derive(Debug, Clone)]
pub struct PathSink {
    d: String,
    precision: usize,
}

impl PathSink {
    #[must_use]
    pub const fn new(precision: usize) -> Self {
        Self {
            d: String::new(),
            precision,
        }
    }

    /// The accumulated path data.
    #[must_use]
    pub fn commands(&self) -> &str {
        &self.d
    }

    /// Consume the sink, returning the path data.
    #[must_use]
    pub fn into_commands(self) -> String {
        self.d
    }

    fn push_points(&mut self, cmd: char, points: &[(Scalar, Scalar)]) {
        self.d.push(cmd);
        for (i, &(x, y)) in points.iter().enumerate() {
            if i > 0 {
                self.d.push(' ');
            }
            write_point(&mut self.d, x, y, self.precision);
        }
    }
}

impl Default for PathSink {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl OutlineSink for PathSink {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push_points('M', &[(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_points('L', &[(x, y)]);
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.push_points('Q', &[(x1, y1), (x, y)]);
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.push_points('C', &[(x1, y1), (x2, y2), (x, y)]);
    }

    fn close(&mut self) {
        self.d.push('Z');
    }
}

// ---------------------------------------------------------------------------
// Style and document
// ---------------------------------------------------------------------------

/// Stroke drawn around the glyph outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Width in canvas units.
    pub width: Scalar,
}

/// Paint applied to the glyph path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub fill: Color,
    /// `None` renders `stroke="none"`.
    pub stroke: Option<Stroke>,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: None,
        }
    }
}

/// A square canvas holding one styled path.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDocument {
    /// Side length of the canvas (the font's units per em).
    pub canvas_size: Scalar,
    /// SVG path data, already in canvas coordinates.
    pub path_data: String,
    pub style: PathStyle,
}

impl VectorDocument {
    /// Build an SVG [`Document`].
    #[must_use]
    pub fn to_svg(&self) -> Document {
        let size = fmt_scalar(self.canvas_size, DEFAULT_PRECISION);
        let mut path = svg::node::element::Path::new()
            .set("d", self.path_data.as_str())
            .set("fill", color_to_svg(self.style.fill));

        if let Some(stroke) = self.style.stroke {
            path = path
                .set("stroke", color_to_svg(stroke.color))
                .set("stroke-width", fmt_scalar(stroke.width, DEFAULT_PRECISION));
        } else {
            path = path.set("stroke", "none");
        }

        Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", size.as_str())
            .set("height", size.as_str())
            .set("viewBox", format!("0 0 {size} {size}"))
            .add(path)
    }

    /// Render to an SVG string.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        self.to_svg().to_string()
    }
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Write "x,y" to the string with the given precision.
///
/// Normalizes negative zero to positive zero for cleaner output.
fn write_point(d: &mut String, x: Scalar, y: Scalar, precision: usize) {
    let _ = write!(d, "{},{}", fmt_scalar(x, precision), fmt_scalar(y, precision));
}

/// Convert a [`Color`] to an SVG color string.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "color components are clamped to [0, 255]"
)]
#[must_use]
pub fn color_to_svg(c: Color) -> String {
    let r = (c.r.clamp(0.0, 1.0) * 255.0).round() as u8;
    let g = (c.g.clamp(0.0, 1.0) * 255.0).round() as u8;
    let b = (c.b.clamp(0.0, 1.0) * 255.0).round() as u8;
    if r == 0 && g == 0 && b == 0 {
        "black".to_owned()
    } else if r == 255 && g == 255 && b == 255 {
        "white".to_owned()
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Format a scalar with at most `precision` decimals, trimming zeros.
#[must_use]
pub fn fmt_scalar(v: Scalar, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    // Strip trailing zeros after decimal point, but keep at least one digit.
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    };
    // "-0" after rounding
    if s == "-0" {
        "0".to_owned()
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
