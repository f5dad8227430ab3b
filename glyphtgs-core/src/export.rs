//! Per-character glyph export.
//!
//! For one character: resolve the glyph, measure it, derive its centering
//! transform, re-trace it through that transform into SVG path data, and
//! write the resulting document. Characters that cannot be drawn are
//! reported as warnings and produce no artifact.

use std::fmt;
use std::path::PathBuf;

use glyphtgs_fonts::GlyphSource;
use glyphtgs_graphics::transform::derive_transform;
use glyphtgs_svg::{PathSink, PathStyle, VectorDocument};
use log::debug;

use crate::artifacts::ArtifactStore;
use crate::config::ExportConfig;
use crate::error::Diagnostic;
use crate::naming;

/// Extension of the vector artifacts written by the exporter.
pub const VECTOR_EXTENSION: &str = "svg";

/// Why a character produced no document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The font's character map has no entry for the character.
    Unmapped,
    /// The glyph exists but has no contours (e.g. a space).
    EmptyOutline,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmapped => write!(f, "no glyph found for the character"),
            Self::EmptyOutline => write!(f, "glyph has no outline"),
        }
    }
}

/// A successfully written vector artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedGlyph {
    /// 1-based position in the character set.
    pub index: usize,
    pub character: char,
    /// File stem shared by all artifacts of this character.
    pub stem: String,
    pub vector_path: PathBuf,
}

/// Exports glyphs of one font with one configuration.
pub struct GlyphExporter<'a> {
    font: &'a dyn GlyphSource,
    config: &'a ExportConfig,
    style: PathStyle,
}

impl<'a> GlyphExporter<'a> {
    #[must_use]
    pub fn new(font: &'a dyn GlyphSource, config: &'a ExportConfig) -> Self {
        Self {
            font,
            config,
            style: config.path_style(),
        }
    }

    /// Build the centered document for `ch` without writing anything.
    ///
    /// # Errors
    ///
    /// Returns the [`SkipReason`] when the character has no drawable glyph.
    pub fn render(&self, ch: char) -> Result<VectorDocument, SkipReason> {
        let glyph_id = self.font.glyph_id(ch).ok_or(SkipReason::Unmapped)?;

        let mut bounds_sink = crate::outline::BoundsSink::new();
        let traced = self.font.outline(glyph_id, &mut bounds_sink);
        let bounds = bounds_sink
            .bounds()
            .filter(|_| traced)
            .ok_or(SkipReason::EmptyOutline)?;

        let canvas_size = f64::from(self.font.units_per_em());
        let transform = derive_transform(&bounds, canvas_size, self.config.scale());
        debug!(
            "'{ch}': glyph {glyph_id}, bounds {bounds:?}, transform {:?}",
            transform.coeffs()
        );

        let mut path_sink = crate::outline::TransformSink::new(
            PathSink::new(self.config.precision),
            transform,
        );
        self.font.outline(glyph_id, &mut path_sink);

        Ok(VectorDocument {
            canvas_size,
            path_data: path_sink.into_inner().into_commands(),
            style: self.style,
        })
    }

    /// Render `ch` and write it as `{index}_{name}.svg`.
    ///
    /// Returns `None` when the character was skipped or the write failed.
    /// The reason is logged and pushed onto `diagnostics`. Nothing is
    /// written for a skipped character.
    pub fn export(
        &self,
        ch: char,
        index: usize,
        store: &dyn ArtifactStore,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<ExportedGlyph> {
        let doc = match self.render(ch) {
            Ok(doc) => doc,
            Err(reason) => {
                Diagnostic::warning(reason.to_string())
                    .with_character(ch)
                    .emit(diagnostics);
                return None;
            }
        };

        let stem = naming::artifact_stem(index, ch);
        let file_name = format!("{stem}.{VECTOR_EXTENSION}");
        match store.write_artifact(&file_name, doc.to_svg_string().as_bytes()) {
            Ok(vector_path) => {
                debug!("wrote {}", vector_path.display());
                Some(ExportedGlyph {
                    index,
                    character: ch,
                    stem,
                    vector_path,
                })
            }
            Err(e) => {
                Diagnostic::error(format!("cannot write {file_name}: {e}"))
                    .with_character(ch)
                    .emit(diagnostics);
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;

    use glyphtgs_graphics::types::Color;

    use super::*;
    use crate::artifacts::MemoryStore;
    use crate::error::Severity;
    use crate::testing::{Cmd, FakeFont};

    fn font() -> FakeFont {
        FakeFont::new(1000)
            .with_rect('A', 0.0, 0.0, 500.0, 700.0)
            .with_rect('/', 100.0, -200.0, 300.0, 600.0)
            .with_glyph(' ', Vec::new())
    }

    struct ReadOnlyStore;

    impl ArtifactStore for ReadOnlyStore {
        fn write_artifact(&self, _file_name: &str, _contents: &[u8]) -> io::Result<PathBuf> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn remove_artifact(&self, _path: &Path) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn render_centers_glyph_on_canvas() {
        let font = font();
        let config = ExportConfig::default();
        let doc = GlyphExporter::new(&font, &config)
            .render('A')
            .unwrap_or_else(|r| panic!("A should render: {r}"));
        assert_eq!(doc.canvas_size, 1000.0);
        assert_eq!(doc.path_data, "M250,850L750,850L750,150L250,150Z");
    }

    #[test]
    fn render_scaled_glyph_stays_centered() {
        let font = font();
        let config = ExportConfig::default().with_scale(0.5);
        let doc = GlyphExporter::new(&font, &config)
            .render('A')
            .unwrap_or_else(|r| panic!("A should render: {r}"));
        assert_eq!(doc.path_data, "M375,675L625,675L625,325L375,325Z");
    }

    #[test]
    fn render_uses_curve_extrema_for_centering() {
        // A hump from (0,0) to (400,0) peaking at y=100 (control at 200).
        let font = FakeFont::new(1000).with_glyph(
            'n',
            vec![
                Cmd::Move(0.0, 0.0),
                Cmd::Quad(200.0, 200.0, 400.0, 0.0),
                Cmd::Close,
            ],
        );
        let config = ExportConfig::default();
        let doc = GlyphExporter::new(&font, &config)
            .render('n')
            .unwrap_or_else(|r| panic!("n should render: {r}"));
        // center (200, 50) -> tx 300, ty 550
        assert_eq!(doc.path_data, "M300,550Q500,350 700,550Z");
    }

    #[test]
    fn render_traces_cubic_segments() {
        // An arch from (0,0) to (100,0) peaking at y=75.
        let font = FakeFont::new(1000).with_glyph(
            'c',
            vec![
                Cmd::Move(0.0, 0.0),
                Cmd::Cubic(0.0, 100.0, 100.0, 100.0, 100.0, 0.0),
                Cmd::Close,
            ],
        );
        let config = ExportConfig::default();
        let doc = GlyphExporter::new(&font, &config)
            .render('c')
            .unwrap_or_else(|r| panic!("c should render: {r}"));
        // center (50, 37.5) -> tx 450, ty 537.5
        assert_eq!(doc.path_data, "M450,537.5C450,437.5 550,437.5 550,537.5Z");
    }

    #[test]
    fn unmapped_character_is_skipped() {
        let font = font();
        let config = ExportConfig::default();
        let exporter = GlyphExporter::new(&font, &config);
        assert_eq!(exporter.render('Z'), Err(SkipReason::Unmapped));

        let store = MemoryStore::new();
        let mut diagnostics = Vec::new();
        assert!(exporter.export('Z', 1, &store, &mut diagnostics).is_none());
        assert!(store.is_empty(), "no artifact for a skipped character");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].character, Some('Z'));
    }

    #[test]
    fn empty_glyph_is_skipped() {
        let font = font();
        let config = ExportConfig::default();
        let exporter = GlyphExporter::new(&font, &config);
        assert_eq!(exporter.render(' '), Err(SkipReason::EmptyOutline));

        let store = MemoryStore::new();
        let mut diagnostics = Vec::new();
        assert!(exporter.export(' ', 4, &store, &mut diagnostics).is_none());
        assert!(store.is_empty());
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].message.contains("no outline"));
    }

    #[test]
    fn export_writes_named_svg() {
        let font = font();
        let config = ExportConfig::default();
        let store = MemoryStore::new();
        let mut diagnostics = Vec::new();
        let exported = GlyphExporter::new(&font, &config)
            .export('/', 3, &store, &mut diagnostics)
            .unwrap_or_else(|| panic!("export failed: {diagnostics:?}"));

        assert_eq!(exported.stem, "3_slash_47");
        assert_eq!(exported.vector_path, PathBuf::from("3_slash_47.svg"));
        assert!(diagnostics.is_empty());

        let svg = store.read_to_string("3_slash_47.svg").unwrap_or_default();
        assert!(svg.contains("width=\"1000\""), "missing canvas: {svg}");
        assert!(svg.contains("d=\"M400,900L600,900L600,100L400,100Z\""), "bad path: {svg}");
        assert!(svg.contains("fill=\"black\""), "missing fill: {svg}");
        assert!(svg.contains("stroke=\"none\""), "missing stroke: {svg}");
    }

    #[test]
    fn export_applies_outline_style() {
        let font = font();
        let mut config = ExportConfig::default().with_scale(0.5);
        config.style.outline = true;
        config.style.outline_color = Color::new(1.0, 0.0, 0.0);
        config.style.outline_width = 30.0;
        let store = MemoryStore::new();
        let mut diagnostics = Vec::new();
        GlyphExporter::new(&font, &config).export('A', 1, &store, &mut diagnostics);

        let svg = store.read_to_string("1_A_65.svg").unwrap_or_default();
        assert!(svg.contains("fill=\"white\""), "outline mode fills white: {svg}");
        assert!(svg.contains("stroke=\"#ff0000\""), "missing stroke: {svg}");
        assert!(svg.contains("stroke-width=\"15\""), "width not scaled: {svg}");
    }

    #[test]
    fn write_failure_is_reported_not_raised() {
        let font = font();
        let config = ExportConfig::default();
        let mut diagnostics = Vec::new();
        let exported =
            GlyphExporter::new(&font, &config).export('A', 1, &ReadOnlyStore, &mut diagnostics);
        assert!(exported.is_none());
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert!(diagnostics[0].message.contains("1_A_65.svg"));
    }

    #[test]
    fn truetype_font_is_centered_end_to_end() {
        let bytes = glyphtgs_fonts::fixture::rect_font();
        let font = glyphtgs_fonts::FontData::from_bytes(std::sync::Arc::from(bytes))
            .unwrap_or_else(|e| panic!("fixture font should parse: {e}"));
        let config = ExportConfig::default();
        let exporter = GlyphExporter::new(&font, &config);

        let doc = exporter
            .render('A')
            .unwrap_or_else(|r| panic!("A should render: {r}"));
        assert_eq!(doc.canvas_size, 1000.0);
        assert!(
            doc.path_data.starts_with("M250,850L750,850L750,150L250,150"),
            "bad path: {}",
            doc.path_data
        );
        assert!(doc.path_data.ends_with('Z'), "open path: {}", doc.path_data);

        assert_eq!(exporter.render(' '), Err(SkipReason::EmptyOutline));
        assert_eq!(exporter.render('B'), Err(SkipReason::Unmapped));
    }
}
