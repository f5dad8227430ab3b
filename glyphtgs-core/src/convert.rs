//! Vector-to-animation conversion seam.
//!
//! Converting an SVG into an animation file is done by an external tool.
//! The pipeline only knows this trait.

use std::fmt;
use std::path::{Path, PathBuf};

/// Converts a written vector artifact into another format.
pub trait Converter {
    /// Extension of the produced artifact, without the dot (e.g. `tgs`).
    fn extension(&self) -> &str;

    /// Convert `source` into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] if the conversion could not be started or
    /// did not succeed.
    fn convert(&self, source: &Path, target: &Path) -> Result<(), ConvertError>;
}

/// Why a conversion failed.
#[derive(Debug)]
pub enum ConvertError {
    /// The converter could not be started.
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The converter ran but reported failure.
    Failed { target: PathBuf, detail: String },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, source } => {
                write!(f, "cannot run converter `{program}`: {source}")
            }
            Self::Failed { target, detail } => {
                write!(f, "conversion to {} failed: {detail}", target.display())
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::Failed { .. } => None,
        }
    }
}
