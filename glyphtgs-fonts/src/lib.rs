//! Font loading and glyph outline tracing for `glyphtgs`.
//!
//! This crate wraps `ttf-parser` to provide OpenType/TrueType support.
//! It is intentionally independent of `glyphtgs-graphics`: outline
//! coordinates are plain `f64` values in font design units. Bridging to
//! geometry types happens in the consuming crates.

pub mod data;
pub mod error;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixture;
pub mod outline;
pub mod source;

pub use data::FontData;
pub use error::FontError;
pub use outline::OutlineSink;
pub use source::GlyphSource;
