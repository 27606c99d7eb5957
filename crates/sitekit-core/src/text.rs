//! Text helpers shared by the form rules and the TOC

/// Strip leading and trailing whitespace the way the browser's string trim
/// does, which also drops the byte order mark (U+FEFF)
pub fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
