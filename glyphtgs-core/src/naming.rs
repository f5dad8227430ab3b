//! Filesystem-safe, collision-free names for characters.

/// Mnemonic words for characters that are unsafe in file names on common
/// platforms.
const MNEMONICS: &[(char, &str)] = &[
    ('\\', "backslash"),
    ('/', "slash"),
    (':', "colon"),
    ('*', "star"),
    ('?', "question"),
    ('"', "quote"),
    ('<', "lt"),
    ('>', "gt"),
    ('|', "pipe"),
];

/// Encode a character as `{char-or-mnemonic}_{codepoint}`.
///
/// `A` becomes `A_65`, `/` becomes `slash_47`. The decimal code point
/// suffix keeps names unique even though mnemonics are lossy.
#[must_use]
pub fn encode(ch: char) -> String {
    let code = u32::from(ch);
    match MNEMONICS.iter().find(|(c, _)| *c == ch) {
        Some((_, word)) => format!("{word}_{code}"),
        None => format!("{ch}_{code}"),
    }
}

/// Artifact stem for the `index`th character: `{index}_{encode(ch)}`.
#[must_use]
pub fn artifact_stem(index: usize, ch: char) -> String {
    format!("{index}_{}", encode(ch))
}
