//! Run driver: export every character, then convert each artifact.
//!
//! Characters are processed strictly in order, one at a time. Nothing a
//! single character does can stop the run; its problems end up in the
//! [`RunReport`].

use std::path::{Path, PathBuf};

use glyphtgs_fonts::GlyphSource;
use log::{debug, info};

use crate::artifacts::ArtifactStore;
use crate::charset::CharacterSet;
use crate::config::ExportConfig;
use crate::convert::Converter;
use crate::error::{Diagnostic, Severity};
use crate::export::{ExportedGlyph, GlyphExporter};

/// What happened to one exported character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub glyph: ExportedGlyph,
    /// Converted artifact, if a converter ran successfully.
    pub converted_path: Option<PathBuf>,
    /// Whether the vector artifact is still in the store.
    pub vector_kept: bool,
}

impl ExportRecord {
    /// The final artifact: the converted file if there is one, else the SVG.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        self.converted_path
            .as_deref()
            .unwrap_or(&self.glyph.vector_path)
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub exported: Vec<ExportRecord>,
    /// Characters that produced no artifact, in order.
    pub skipped: Vec<char>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunReport {
    /// Whether any character failed (as opposed to being skipped).
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= Severity::Error)
    }
}

/// Export every character of `chars`, numbering them from 1.
///
/// A skipped character still consumes its index, so a character's
/// artifact name depends only on its position in the list. Each
/// character is logged as soon as it is done.
pub fn run(
    font: &dyn GlyphSource,
    chars: &CharacterSet,
    config: &ExportConfig,
    store: &dyn ArtifactStore,
    converter: Option<&dyn Converter>,
) -> RunReport {
    let exporter = GlyphExporter::new(font, config);
    let mut report = RunReport::default();

    for (i, &ch) in chars.iter().enumerate() {
        let index = i + 1;
        let Some(glyph) = exporter.export(ch, index, store, &mut report.diagnostics) else {
            report.skipped.push(ch);
            continue;
        };

        let record = match converter {
            Some(converter) => {
                convert_one(glyph, converter, config, store, &mut report.diagnostics)
            }
            None => ExportRecord {
                glyph,
                converted_path: None,
                vector_kept: true,
            },
        };
        info!(
            "Exported character '{ch}' to {}",
            record.output_path().display()
        );
        report.exported.push(record);
    }

    debug!(
        "run finished: {} exported, {} skipped",
        report.exported.len(),
        report.skipped.len()
    );
    report
}

fn convert_one(
    glyph: ExportedGlyph,
    converter: &dyn Converter,
    config: &ExportConfig,
    store: &dyn ArtifactStore,
    diagnostics: &mut Vec<Diagnostic>,
) -> ExportRecord {
    let target = glyph.vector_path.with_extension(converter.extension());

    if let Err(e) = converter.convert(&glyph.vector_path, &target) {
        Diagnostic::error(e.to_string())
            .with_character(glyph.character)
            .emit(diagnostics);
        return ExportRecord {
            glyph,
            converted_path: None,
            vector_kept: true,
        };
    }

    let mut vector_kept = true;
    if !config.keep_vector {
        match store.remove_artifact(&glyph.vector_path) {
            Ok(()) => vector_kept = false,
            Err(e) => {
                let message = format!("cannot remove {}: {e}", glyph.vector_path.display());
                Diagnostic::warning(message)
                    .with_character(glyph.character)
                    .emit(diagnostics);
            }
        }
    }

    ExportRecord {
        glyph,
        converted_path: Some(target),
        vector_kept,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::artifacts::MemoryStore;
    use crate::convert::ConvertError;
    use crate::testing::FakeFont;

    /// Records conversions and fails for targets containing `fail_on`.
    #[derive(Default)]
    struct RecordingConverter {
        calls: RefCell<Vec<(PathBuf, PathBuf)>>,
        fail_on: Option<&'static str>,
    }

    impl Converter for RecordingConverter {
        fn extension(&self) -> &str {
            "tgs"
        }

        fn convert(&self, source: &Path, target: &Path) -> Result<(), ConvertError> {
            self.calls
                .borrow_mut()
                .push((source.to_path_buf(), target.to_path_buf()));
            match self.fail_on {
                Some(pat) if target.to_string_lossy().contains(pat) => {
                    Err(ConvertError::Failed {
                        target: target.to_path_buf(),
                        detail: "boom".to_owned(),
                    })
                }
                _ => Ok(()),
            }
        }
    }

    fn font() -> FakeFont {
        FakeFont::new(1000)
            .with_rect('A', 0.0, 0.0, 500.0, 700.0)
            .with_rect('B', 0.0, 0.0, 400.0, 700.0)
            .with_glyph('.', Vec::new())
    }

    #[test]
    fn characters_are_exported_in_order_with_indices() {
        let chars = CharacterSet::load("A A B");
        let store = MemoryStore::new();
        let report = run(&font(), &chars, &ExportConfig::default(), &store, None);

        let names: Vec<_> = report
            .exported
            .iter()
            .map(|r| r.glyph.stem.as_str())
            .collect();
        assert_eq!(names, ["1_A_65", "2_B_66"]);
        assert_eq!(store.file_names(), ["1_A_65.svg", "2_B_66.svg"]);
        assert!(report.skipped.is_empty());
        assert!(!report.has_errors());
    }

    #[test]
    fn skipped_characters_keep_their_index() {
        let chars = CharacterSet::load("A?.B");
        let store = MemoryStore::new();
        let report = run(&font(), &chars, &ExportConfig::default(), &store, None);

        assert_eq!(report.skipped, ['?', '.']);
        assert_eq!(store.file_names(), ["1_A_65.svg", "4_B_66.svg"]);
        assert_eq!(report.diagnostics.len(), 2);
        assert!(!report.has_errors(), "skips are warnings, not errors");
    }

    #[test]
    fn visible_whitespace_marks_are_exported() {
        let font = font().with_rect('\u{1680}', 0.0, 300.0, 500.0, 400.0);
        let chars = CharacterSet::load("A\u{1680}\tB");
        let store = MemoryStore::new();
        let report = run(&font, &chars, &ExportConfig::default(), &store, None);

        assert_eq!(
            store.file_names(),
            ["1_A_65.svg", "2_\u{1680}_5760.svg", "4_B_66.svg"]
        );
        assert_eq!(report.skipped, ['\t']);
    }

    #[test]
    fn output_path_prefers_converted_artifact() {
        let chars = CharacterSet::load("AB");
        let store = MemoryStore::new();
        let converter = RecordingConverter {
            fail_on: Some("B_66"),
            ..RecordingConverter::default()
        };
        let report = run(
            &font(),
            &chars,
            &ExportConfig::default(),
            &store,
            Some(&converter),
        );

        assert_eq!(report.exported[0].output_path(), Path::new("1_A_65.tgs"));
        assert_eq!(report.exported[1].output_path(), Path::new("2_B_66.svg"));
    }

    #[test]
    fn converted_vectors_are_removed_by_default() {
        let chars = CharacterSet::load("AB");
        let store = MemoryStore::new();
        let converter = RecordingConverter::default();
        let report = run(
            &font(),
            &chars,
            &ExportConfig::default(),
            &store,
            Some(&converter),
        );

        assert!(store.is_empty(), "vectors should be discarded");
        assert_eq!(
            converter.calls.borrow().as_slice(),
            [
                (PathBuf::from("1_A_65.svg"), PathBuf::from("1_A_65.tgs")),
                (PathBuf::from("2_B_66.svg"), PathBuf::from("2_B_66.tgs")),
            ]
        );
        assert!(report.exported.iter().all(|r| !r.vector_kept));
        assert_eq!(
            report.exported[0].converted_path,
            Some(PathBuf::from("1_A_65.tgs"))
        );
    }

    #[test]
    fn keep_vector_retains_svg() {
        let chars = CharacterSet::load("A");
        let store = MemoryStore::new();
        let converter = RecordingConverter::default();
        let mut config = ExportConfig::default();
        config.keep_vector = true;
        let report = run(&font(), &chars, &config, &store, Some(&converter));

        assert_eq!(store.file_names(), ["1_A_65.svg"]);
        assert!(report.exported[0].vector_kept);
    }

    #[test]
    fn failed_conversion_keeps_vector_and_continues() {
        let chars = CharacterSet::load("AB");
        let store = MemoryStore::new();
        let converter = RecordingConverter {
            fail_on: Some("A_65"),
            ..RecordingConverter::default()
        };
        let report = run(
            &font(),
            &chars,
            &ExportConfig::default(),
            &store,
            Some(&converter),
        );

        assert_eq!(store.file_names(), ["1_A_65.svg"], "failed one is kept");
        assert_eq!(converter.calls.borrow().len(), 2, "run continued");
        assert!(report.has_errors());
        assert_eq!(report.exported[0].converted_path, None);
        assert_eq!(
            report.exported[1].converted_path,
            Some(PathBuf::from("2_B_66.tgs"))
        );
    }

    #[test]
    fn empty_character_set_does_nothing() {
        let store = MemoryStore::new();
        let report = run(
            &font(),
            &CharacterSet::load("\n"),
            &ExportConfig::default(),
            &store,
            None,
        );
        assert_eq!(report, RunReport::default());
        assert!(store.is_empty());
    }
}
