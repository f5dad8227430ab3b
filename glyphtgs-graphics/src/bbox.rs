//! Axis-aligned bounding box accumulation.
//!
//! Provides [`BoundingBox`], which grows to cover points and curve
//! segments. Curve segments contribute their exact extrema (not their
//! control polygon), so a glyph's bounds hug the drawn ink.

use kurbo::{CubicBez, ParamCurveExtrema, QuadBez, Rect};

use crate::types::{Point, Scalar};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: Scalar,
    pub min_y: Scalar,
    pub max_x: Scalar,
    pub max_y: Scalar,
}

impl BoundingBox {
    /// An empty (inverted) bounding box.
    pub const EMPTY: Self = Self {
        min_x: Scalar::INFINITY,
        min_y: Scalar::INFINITY,
        max_x: Scalar::NEG_INFINITY,
        max_y: Scalar::NEG_INFINITY,
    };

    /// Build a box from its four extents.
    #[must_use]
    pub const fn new(min_x: Scalar, min_y: Scalar, max_x: Scalar, max_y: Scalar) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Check if this bounding box is valid (non-empty).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Center point `((min_x + max_x) / 2, (min_y + max_y) / 2)`.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grow to include a point.
    pub fn include_point(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Grow to include a rectangle.
    pub fn include_rect(&mut self, r: Rect) {
        self.include_point(Point::new(r.x0, r.y0));
        self.include_point(Point::new(r.x1, r.y1));
    }

    /// Grow to include the ink of a quadratic segment.
    pub fn include_quad(&mut self, p0: Point, p1: Point, p2: Point) {
        self.include_rect(QuadBez::new(p0, p1, p2).bounding_box());
    }

    /// Grow to include the ink of a cubic segment.
    pub fn include_cubic(&mut self, p0: Point, p1: Point, p2: Point, p3: Point) {
        self.include_rect(CubicBez::new(p0, p1, p2, p3).bounding_box());
    }

    /// `Some(self)` if valid, `None` if nothing was ever included.
    #[must_use]
    pub fn non_empty(self) -> Option<Self> {
        self.is_valid().then_some(self)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}
