//! Glyph outline extraction.
//!
//! Defines [`OutlineSink`], a trait for receiving glyph outline commands.
//! This is our own trait (not `ttf_parser::OutlineBuilder`) so that
//! consumers do not need to depend on `ttf-parser` directly, and so that
//! sinks can be stacked (a coordinate-mapping sink forwarding to a
//! path-emitting sink, for example).

/// Receiver for glyph outline commands.
///
/// Coordinates are in font design units, Y-up (font convention).
pub trait OutlineSink {
    /// Start a new contour at the given point.
    fn move_to(&mut self, x: f64, y: f64);
    /// Draw a straight line to the given point.
    fn line_to(&mut self, x: f64, y: f64);
    /// Draw a quadratic Bezier curve (TrueType-style).
    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64);
    /// Draw a cubic Bezier curve (CFF/OpenType-style).
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);
    /// Close the current contour.
    fn close(&mut self);
}

impl<S: OutlineSink + ?Sized> OutlineSink for &mut S {
    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y);
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        (**self).quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        (**self).curve_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        (**self).close();
    }
}
