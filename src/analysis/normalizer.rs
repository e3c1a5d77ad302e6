//! URL normalization and sanitization.
//!
//! Turns arbitrary user input into a canonical string that is either empty or
//! starts with a `<scheme>://` prefix. Normalization never fails: the worst
//! case is an empty string.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a leading `<word-characters>://` scheme prefix.
pub(crate) static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+://").unwrap());

/// Invisible characters stripped anywhere in the input.
const INVISIBLE_CHARS: [char; 5] = [
    '\u{200B}', // zero-width space
    '\u{200C}', // zero-width non-joiner
    '\u{200D}', // zero-width joiner
    '\u{FEFF}', // byte order mark
    '\u{00AD}', // soft hyphen
];

/// Trims whitespace and the ASCII information separators `\x1c`..=`\x1f`.
pub(crate) fn trim_blank(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Raw input as it arrives at the boundary, before any cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    /// Textual input.
    Text(&'a str),
    /// Bytes of unknown quality, decoded as UTF-8 dropping invalid sequences.
    Bytes(&'a [u8]),
    /// Anything that is not text (numbers, nulls, objects).
    NonText,
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a [u8]> for RawInput<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<Option<&'a str>> for RawInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::NonText, Self::Text)
    }
}

impl<'a> From<&'a serde_json::Value> for RawInput<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Text(s),
            _ => Self::NonText,
        }
    }
}

/// Normalizes a URL-like string.
///
/// # Normalization Rules
///
/// 1. **Invisible characters**: zero-width space/joiner/non-joiner, BOM and
///    soft hyphen are removed anywhere in the string
/// 2. **Whitespace**: leading and trailing whitespace and ASCII separators
///    (`\x1c`..=`\x1f`) are trimmed
/// 3. **Scheme**: `http://` is prepended when no `<word>://` prefix is present
///
/// Empty input (after cleaning) stays empty. The function is idempotent:
/// `normalize_url(&normalize_url(x)) == normalize_url(x)`.
///
/// # Examples
///
/// ```
/// use phishing_detector::analysis::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "http://example.com");
/// assert_eq!(normalize_url("  example.com\u{200B} "), "http://example.com");
/// assert_eq!(normalize_url("https://example.com"), "https://example.com");
/// assert_eq!(normalize_url(""), "");
/// ```
pub fn normalize_url(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| !INVISIBLE_CHARS.contains(c))
        .collect();
    let trimmed = trim_blank(&cleaned);

    if trimmed.is_empty() {
        return String::new();
    }

    if SCHEME_PREFIX.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Normalizes boundary input of any shape.
///
/// Non-textual input becomes the empty string; byte input is decoded as UTF-8
/// with invalid sequences discarded before [`normalize_url`] runs.
pub fn normalize_raw(input: RawInput<'_>) -> String {
    match input {
        RawInput::Text(text) => normalize_url(text),
        RawInput::Bytes(bytes) => normalize_url(&decode_lossless_utf8(bytes)),
        RawInput::NonText => String::new(),
    }
}

/// Decodes UTF-8, dropping bytes that are not part of a valid sequence.
fn decode_lossless_utf8(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_adds_scheme() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_keeps_existing_scheme() {
        assert_eq!(normalize_url("https://example.com/a"), "https://example.com/a");
        assert_eq!(normalize_url("ftp://files.example.com"), "ftp://files.example.com");
    }

    #[test]
    fn test_normalize_empty_string() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   "), "");
        assert_eq!(normalize_url("\u{200B}\u{FEFF}"), "");
    }

    #[test]
    fn test_normalize_trims_and_strips_invisible() {
        assert_eq!(normalize_url("  example.com\u{200B} "), "http://example.com");
        assert_eq!(normalize_url("exa\u{00AD}mple.com"), "http://example.com");
        assert_eq!(normalize_url("\u{FEFF}https://a\u{200D}b.com"), "https://ab.com");
    }

    #[test]
    fn test_normalize_trims_ascii_separators() {
        assert_eq!(normalize_url("\u{1f}"), "");
        assert_eq!(normalize_url("\u{1c}example.com\u{1d}\u{1e}"), "http://example.com");
        assert_eq!(normalize_url("exa\u{1f}mple.com"), "http://exa\u{1f}mple.com");
    }

    #[test]
    fn test_normalize_invisible_before_whitespace() {
        // The zero-width space hides the trailing space from trimming until removed
        assert_eq!(normalize_url("example.com \u{200C}"), "http://example.com");
    }

    #[test]
    fn test_normalize_unicode_scheme_word() {
        assert_eq!(normalize_url("hxxp_1://x"), "hxxp_1://x");
    }

    #[test]
    fn test_normalize_scheme_must_be_leading() {
        assert_eq!(normalize_url("://example.com"), "http://://example.com");
        assert_eq!(normalize_url("a b://c"), "http://a b://c");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "",
            " ",
            "example.com",
            "  https://EXAMPLE.com/Path?q=1 ",
            "://weird",
            "\u{200B}  \u{FEFF}x",
            "192.168.0.1",
            "2001:db8::1",
            "[::1]:8080/a",
            "пример.рф",
            "\t\nmixed\u{00AD}case.COM\t",
        ];

        for sample in samples {
            let once = normalize_url(sample);
            assert_eq!(normalize_url(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_normalize_raw_non_text() {
        assert_eq!(normalize_raw(RawInput::NonText), "");
        assert_eq!(normalize_raw(RawInput::from(None)), "");
        assert_eq!(normalize_raw(RawInput::from(&json!(42))), "");
        assert_eq!(normalize_raw(RawInput::from(&json!(null))), "");
    }

    #[test]
    fn test_normalize_raw_text_value() {
        assert_eq!(
            normalize_raw(RawInput::from(&json!("example.com"))),
            "http://example.com"
        );
    }

    #[test]
    fn test_normalize_raw_drops_invalid_bytes() {
        let bytes = b"exa\xFFmple.com\xC3";
        assert_eq!(normalize_raw(RawInput::from(&bytes[..])), "http://example.com");
    }

    #[test]
    fn test_normalize_raw_keeps_valid_multibyte() {
        let bytes = "münchen.de".as_bytes();
        assert_eq!(normalize_raw(RawInput::Bytes(bytes)), "http://münchen.de");
    }
}
