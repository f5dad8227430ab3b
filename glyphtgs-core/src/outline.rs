//! Outline sinks bridging font tracing and geometry.
//!
//! A glyph is traced twice: once into a [`BoundsSink`] to measure it, and
//! once into a [`TransformSink`] wrapping the path-emitting sink from
//! `glyphtgs-svg`.

use glyphtgs_fonts::OutlineSink;
use glyphtgs_graphics::bbox::BoundingBox;
use glyphtgs_graphics::types::{Point, Transform};
use kurbo::Affine;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Accumulates the ink bounds of everything drawn into it.
#[derive(Debug, Clone, Default)]
pub struct BoundsSink {
    bounds: BoundingBox,
    current: Point,
}

impl BoundsSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bounds, or `None` if no contour was traced.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds.non_empty()
    }
}

impl OutlineSink for BoundsSink {
    fn move_to(&mut self, x: f64, y: f64) {
        self.current = Point::new(x, y);
        self.bounds.include_point(self.current);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.current = Point::new(x, y);
        self.bounds.include_point(self.current);
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        let end = Point::new(x, y);
        self.bounds.include_quad(self.current, Point::new(x1, y1), end);
        self.current = end;
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        let end = Point::new(x, y);
        self.bounds.include_cubic(
            self.current,
            Point::new(x1, y1),
            Point::new(x2, y2),
            end,
        );
        self.current = end;
    }

    fn close(&mut self) {}
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Maps every coordinate through an affine transform before forwarding it.
pub struct TransformSink<S> {
    inner: S,
    affine: Affine,
}

impl<S: OutlineSink> TransformSink<S> {
    #[must_use]
    pub fn new(inner: S, transform: Transform) -> Self {
        Self {
            inner,
            affine: transform.to_affine(),
        }
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn map(&self, x: f64, y: f64) -> Point {
        self.affine * Point::new(x, y)
    }
}

impl<S: OutlineSink> OutlineSink for TransformSink<S> {
    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.map(x, y);
        self.inner.move_to(p.x, p.y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.map(x, y);
        self.inner.line_to(p.x, p.y);
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        let c = self.map(x1, y1);
        let p = self.map(x, y);
        self.inner.quad_to(c.x, c.y, p.x, p.y);
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let p = self.map(x, y);
        self.inner.curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
    }

    fn close(&mut self) {
        self.inner.close();
    }
}
