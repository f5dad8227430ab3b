//! Run-wide export configuration.
//!
//! Built once before iteration starts and passed by reference to every
//! stage; nothing here is mutated during a run.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use glyphtgs_graphics::types::{Color, Scalar};
use glyphtgs_svg::{PathStyle, Stroke};

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "./tgs";

/// Accepted range for the geometry scale factor.
pub const SCALE_RANGE: RangeInclusive<Scalar> = 0.1..=1.0;

/// Accepted range for the outline width, before scaling.
pub const OUTLINE_WIDTH_RANGE: RangeInclusive<Scalar> = 1.0..=100.0;

/// Outline width used when none is given, in design units.
pub const DEFAULT_OUTLINE_WIDTH: Scalar = 10.0;

/// Clamp a requested scale factor into [`SCALE_RANGE`].
///
/// Non-finite input falls back to `1.0`.
#[must_use]
pub fn clamp_scale(scale: Scalar) -> Scalar {
    if scale.is_finite() {
        scale.clamp(*SCALE_RANGE.start(), *SCALE_RANGE.end())
    } else {
        1.0
    }
}

/// Clamp a requested outline width into [`OUTLINE_WIDTH_RANGE`].
///
/// Non-finite input falls back to [`DEFAULT_OUTLINE_WIDTH`].
#[must_use]
pub fn clamp_outline_width(width: Scalar) -> Scalar {
    if width.is_finite() {
        width.clamp(*OUTLINE_WIDTH_RANGE.start(), *OUTLINE_WIDTH_RANGE.end())
    } else {
        DEFAULT_OUTLINE_WIDTH
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Requested paint for glyph paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSpec {
    /// Explicit fill colour. When `None` the fill is white in outline
    /// mode and black otherwise.
    pub fill: Option<Color>,
    pub outline: bool,
    pub outline_color: Color,
    /// Requested outline width in design units (clamped on resolve).
    pub outline_width: Scalar,
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            fill: None,
            outline: false,
            outline_color: Color::BLACK,
            outline_width: DEFAULT_OUTLINE_WIDTH,
        }
    }
}

impl StyleSpec {
    /// Resolve defaults and the outline width for a given geometry scale.
    ///
    /// The width is clamped first and multiplied by `scale` afterwards.
    #[must_use]
    pub fn resolve(&self, scale: Scalar) -> PathStyle {
        let fill = self
            .fill
            .unwrap_or(if self.outline { Color::WHITE } else { Color::BLACK });
        let stroke = self.outline.then(|| Stroke {
            color: self.outline_color,
            width: clamp_outline_width(self.outline_width) * scale,
        });
        PathStyle { fill, stroke }
    }
}

// ---------------------------------------------------------------------------
// Export configuration
// ---------------------------------------------------------------------------

/// Everything a run needs besides the font and the character list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    /// Geometry scale factor, always within [`SCALE_RANGE`].
    scale: Scalar,
    /// Keep the intermediate SVG after a successful conversion.
    pub keep_vector: bool,
    pub style: StyleSpec,
    /// Decimal places for path coordinates.
    pub precision: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            scale: 1.0,
            keep_vector: false,
            style: StyleSpec::default(),
            precision: glyphtgs_svg::DEFAULT_PRECISION,
        }
    }
}

impl ExportConfig {
    /// Set the scale factor, clamped into [`SCALE_RANGE`].
    #[must_use]
    pub fn with_scale(mut self, scale: Scalar) -> Self {
        self.scale = clamp_scale(scale);
        self
    }

    #[must_use]
    pub const fn scale(&self) -> Scalar {
        self.scale
    }

    /// The path style for this run.
    #[must_use]
    pub fn path_style(&self) -> PathStyle {
        self.style.resolve(self.scale)
    }
}
