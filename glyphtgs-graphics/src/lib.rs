//! Geometry primitives for `glyphtgs`: scalars, affine transforms,
//! bounding boxes, colours, and the per-glyph centering transform.

pub mod types;

pub mod bbox;
pub mod error;
pub mod transform;
