//! Glyph-to-normalized-outline export pipeline.
//!
//! Turns a list of characters and a font into one centered SVG document
//! per glyph, then hands each document to an optional [`Converter`].

pub mod artifacts;
pub mod charset;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod naming;
pub mod outline;
pub mod pipeline;

#[cfg(test)]
mod testing;

pub use artifacts::{ArtifactStore, MemoryStore};
pub use charset::CharacterSet;
pub use config::{ExportConfig, StyleSpec};
pub use convert::{ConvertError, Converter};
pub use error::{Diagnostic, Severity};
pub use export::{ExportedGlyph, GlyphExporter, SkipReason};
pub use pipeline::{ExportRecord, RunReport, run};
