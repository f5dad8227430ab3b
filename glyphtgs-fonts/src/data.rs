//! Font data wrapper around `ttf-parser`.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::FontError;
use crate::outline::OutlineSink;
use crate::source::GlyphSource;

/// Parsed font data.
///
/// Stores owned font bytes and cached global metrics. Creates a
/// `ttf_parser::Face` on demand for individual queries; parsing is cheap
/// (no allocation, just header validation and offset table construction).
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<[u8]>,
    /// Font units per em (design coordinate space).
    units_per_em: u16,
    /// Number of glyphs in the font.
    glyph_count: u16,
}

impl FontData {
    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::ParseError`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|e| FontError::ParseError(e.to_string()))?;
        Ok(Self {
            units_per_em: face.units_per_em(),
            glyph_count: face.number_of_glyphs(),
            bytes,
        })
    }

    /// Read and parse a font file.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Io`] if the file cannot be read and
    /// [`FontError::ParseError`] if it is not a valid font.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let bytes = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(Arc::from(bytes.into_boxed_slice()))
    }

    /// Create a temporary `Face` reference for queries.
    #[expect(clippy::expect_used, reason = "bytes were validated at construction")]
    fn face(&self) -> ttf_parser::Face<'_> {
        ttf_parser::Face::parse(&self.bytes, 0).expect("font bytes validated at construction")
    }

    /// Font units per em (design coordinate space).
    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Number of glyphs in the font.
    #[must_use]
    pub const fn glyph_count(&self) -> u16 {
        self.glyph_count
    }

    /// Map a character to its glyph ID. Returns `None` if not in the cmap.
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|g| g.0)
    }

    /// Extract the outline of a glyph into the given sink, in design units.
    ///
    /// Returns `false` if the glyph has no outline (e.g., space character).
    pub fn outline(&self, glyph_id: u16, sink: &mut dyn OutlineSink) -> bool {
        let face = self.face();
        let mut adapter = OutlineAdapter { sink };
        face.outline_glyph(ttf_parser::GlyphId(glyph_id), &mut adapter)
            .is_some()
    }
}

impl GlyphSource for FontData {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<u16> {
        Self::glyph_id(self, ch)
    }

    fn outline(&self, glyph_id: u16, sink: &mut dyn OutlineSink) -> bool {
        Self::outline(self, glyph_id, sink)
    }
}

/// Adapter from [`OutlineSink`] to `ttf_parser::OutlineBuilder`.
struct OutlineAdapter<'a> {
    sink: &'a mut dyn OutlineSink,
}

impl ttf_parser::OutlineBuilder for OutlineAdapter<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.sink.move_to(f64::from(x), f64::from(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.sink.line_to(f64::from(x), f64::from(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.sink.quad_to(f64::from(x1), f64::from(y1), f64::from(x), f64::from(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.sink.curve_to(
            f64::from(x1),
            f64::from(y1),
            f64::from(x2),
            f64::from(y2),
            f64::from(x),
            f64::from(y),
        );
    }

    fn close(&mut self) {
        self.sink.close();
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("units_per_em", &self.units_per_em)
            .field("glyph_count", &self.glyph_count)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}
