//! Diagnostics produced while exporting glyphs.
//!
//! Per-character problems never abort a run. They are logged as soon as
//! they happen and recorded as [`Diagnostic`] values in the run report.

use std::fmt;

use log::{error, warn};

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The character was skipped (unmapped or empty glyph).
    Warning,
    /// Something failed for this character (write or conversion).
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

// ---------------------------------------------------------------------------
// Diagnostic
// ---------------------------------------------------------------------------

/// A message about one character of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The character concerned, if any.
    pub character: Option<char>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            character: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Attach the character this diagnostic is about.
    #[must_use]
    pub const fn with_character(mut self, ch: char) -> Self {
        self.character = Some(ch);
        self
    }

    /// Log this diagnostic at its severity and append it to `diagnostics`.
    pub fn emit(self, diagnostics: &mut Vec<Self>) {
        match self.severity {
            Severity::Warning => warn!("{self}"),
            Severity::Error => error!("{self}"),
        }
        diagnostics.push(self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ch) = self.character {
            write!(f, "'{ch}' (U+{:04X}): ", u32::from(ch))?;
        }
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_display_with_character() {
        let d = Diagnostic::warning("no glyph in font").with_character('A');
        assert_eq!(d.to_string(), "'A' (U+0041): no glyph in font");
    }

    #[test]
    fn diagnostic_display_without_character() {
        let d = Diagnostic::error("disk full");
        assert_eq!(d.to_string(), "disk full");
        assert_eq!(d.severity, Severity::Error);
    }

    #[test]
    fn severity_orders_by_gravity() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn emit_appends_in_order() {
        let mut diagnostics = Vec::new();
        Diagnostic::warning("first").emit(&mut diagnostics);
        Diagnostic::error("second").with_character('x').emit(&mut diagnostics);
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
        assert_eq!(diagnostics[1].character, Some('x'));
    }
}
