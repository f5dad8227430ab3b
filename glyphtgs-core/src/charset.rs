//! Character list loading.

use std::collections::HashSet;

/// An ordered list of distinct characters to export.
///
/// Order is first-occurrence order in the source text. Spaces, carriage
/// returns and line feeds are never content and are dropped before
/// deduplication. Every other character, including tabs and other
/// Unicode whitespace, is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Build a character set from raw text.
    #[must_use]
    pub fn load(source: &str) -> Self {
        let mut seen = HashSet::new();
        let chars = source
            .chars()
            .filter(|c| !matches!(c, ' ' | '\r' | '\n'))
            .filter(|c| seen.insert(*c))
            .collect();
        Self { chars }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, char> {
        self.chars.iter()
    }
}

impl<'a> IntoIterator for &'a CharacterSet {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter()
    }
}
