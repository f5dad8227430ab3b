//! Glyph source trait.

use crate::outline::OutlineSink;

/// Anything that can resolve characters to glyphs and trace their outlines.
///
/// [`FontData`](crate::FontData) is the production implementation; tests
/// use small in-memory fakes. Everything the exporter needs from a font
/// goes through this trait.
pub trait GlyphSource {
    /// Font units per em (design coordinate space).
    fn units_per_em(&self) -> u16;

    /// Map a character to its glyph ID. Returns `None` if not in the cmap.
    fn glyph_id(&self, ch: char) -> Option<u16>;

    /// Trace the outline of a glyph into the given sink, in design units.
    ///
    /// Returns `false` if the glyph has no outline (e.g., space character).
    fn outline(&self, glyph_id: u16, sink: &mut dyn OutlineSink) -> bool;
}
