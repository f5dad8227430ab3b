//! Font loading and parsing errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur when loading fonts.
#[derive(Debug)]
pub enum FontError {
    /// The font file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The font data could not be parsed.
    ParseError(String),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read font file {}: {source}", path.display())
            }
            Self::ParseError(msg) => write!(f, "font parse error: {msg}"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::ParseError(_) => None,
        }
    }
}
