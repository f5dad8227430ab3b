//! Core value types: scalars, points, transforms, and colours.

use std::str::FromStr;

pub use kurbo::Point;
use kurbo::Affine;

use crate::error::GraphicsError;

/// Scalar type used throughout.
pub type Scalar = f64;

// ---------------------------------------------------------------------------
// Transform (6-component affine)
// ---------------------------------------------------------------------------

/// An affine transform with named components.
///
/// Maps point (x, y) to:
///   (tx + txx*x + txy*y, ty + tyx*x + tyy*y)
///
/// This directly wraps `kurbo::Affine`; [`Transform::coeffs`] returns the
/// conventional `[a, b, c, d, e, f]` ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub tx: Scalar,
    pub ty: Scalar,
    pub txx: Scalar,
    pub txy: Scalar,
    pub tyx: Scalar,
    pub tyy: Scalar,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        tx: 0.0,
        ty: 0.0,
        txx: 1.0,
        txy: 0.0,
        tyx: 0.0,
        tyy: 1.0,
    };

    /// Convert to a kurbo `Affine`.
    ///
    /// kurbo Affine coefficients: [a, b, c, d, e, f]
    /// mapping: x' = a*x + c*y + e,  y' = b*x + d*y + f
    #[inline]
    #[must_use]
    pub const fn to_affine(self) -> Affine {
        Affine::new(self.coeffs())
    }

    /// The six coefficients `[a, b, c, d, e, f]`.
    #[inline]
    #[must_use]
    pub const fn coeffs(self) -> [Scalar; 6] {
        [self.txx, self.tyx, self.txy, self.tyy, self.tx, self.ty]
    }

    /// Apply this transform to a point.
    #[inline]
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        self.to_affine() * p
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: Scalar,
    pub g: Scalar,
    pub b: Scalar,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: Scalar, g: Scalar, b: Scalar) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    fn named(name: &str) -> Option<Self> {
        let c = match name {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::new(1.0, 0.0, 0.0),
            "green" => Self::new(0.0, 1.0, 0.0),
            "blue" => Self::new(0.0, 0.0, 1.0),
            "yellow" => Self::new(1.0, 1.0, 0.0),
            "cyan" => Self::new(0.0, 1.0, 1.0),
            "magenta" => Self::new(1.0, 0.0, 1.0),
            "gray" | "grey" => Self::from_rgb8(128, 128, 128),
            _ => return None,
        };
        Some(c)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = GraphicsError;

    /// Parse `#rgb`, `#rrggbb`, or a basic colour name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GraphicsError::InvalidColor(s.to_owned());
        let spec = s.trim().to_ascii_lowercase();

        let Some(hex) = spec.strip_prefix('#') else {
            return Self::named(&spec).ok_or_else(invalid);
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                // #abc == #aabbcc
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::from_rgb8(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::from_rgb8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
