/// Tokens that parse as `true`.
pub const TRUE_VALUES: [&str; 6] = ["true", "yes", "on", "t", "y", "1"];

/// Tokens that parse as `false`.
pub const FALSE_VALUES: [&str; 6] = ["false", "no", "off", "f", "n", "0"];

/// Parses text against the lexicon.
///
/// Surrounding ASCII whitespace and NUL are ignored and the comparison is
/// case-insensitive. Returns `None` when the text is in neither vocabulary.
pub fn parse_strict<S: AsRef<str>>(text: S) -> Option<bool> {
    let token = text.as_ref().trim_matches(is_blank);
    if contains(&TRUE_VALUES, token) {
        Some(true)
    } else if contains(&FALSE_VALUES, token) {
        Some(false)
    } else {
        None
    }
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r' | '\0')
}

fn contains(vocabulary: &[&str], token: &str) -> bool {
    // every token is ASCII, so ASCII case folding equals full lowercasing
    vocabulary
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(token))
}
