use std::fmt;

/// Errors returned by graphics value parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// A colour specification could not be parsed.
    InvalidColor(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(spec) => write!(
                f,
                "invalid color \"{spec}\": expected #rgb, #rrggbb or a color name"
            ),
        }
    }
}

impl std::error::Error for GraphicsError {}
