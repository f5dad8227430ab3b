//! Glyph centering transform.
//!
//! Font outlines live in design space (Y up, origin at the baseline).
//! Output canvases are squares of side `units_per_em` with Y pointing
//! down. [`derive_transform`] builds the affine map that flips a glyph
//! vertically, optionally scales it uniformly, and moves its bounding-box
//! center onto the canvas center.

use crate::bbox::BoundingBox;
use crate::types::{Scalar, Transform};

/// Derive the transform that centers a glyph on a square canvas.
///
/// For scale `s`, canvas size `C`, and bounds center `(cx, cy)`:
///
/// ```text
/// x' =  s*x + (C/2 - s*cx)
/// y' = -s*y + (C/2 + s*cy)
/// ```
///
/// Scaling happens around the glyph center, so the center lands on
/// `(C/2, C/2)` for every `s`. At `s == 1.0` no scale arithmetic is
/// performed at all.
#[must_use]
#[expect(clippy::float_cmp, reason = "1.0 is the exact no-scale sentinel")]
pub fn derive_transform(bounds: &BoundingBox, canvas_size: Scalar, scale: Scalar) -> Transform {
    let center = bounds.center();
    let half = canvas_size / 2.0;

    if scale == 1.0 {
        return Transform {
            tx: half - center.x,
            ty: half + center.y,
            txx: 1.0,
            txy: 0.0,
            tyx: 0.0,
            tyy: -1.0,
        };
    }

    Transform {
        tx: half - scale * center.x,
        ty: half + scale * center.y,
        txx: scale,
        txy: 0.0,
        tyx: 0.0,
        tyy: -scale,
    }
}
