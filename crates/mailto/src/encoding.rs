//! Percent-encoding and decoding for mailto URI components.
//!
//! Decoding is a single lenient pass; encoding always emits uppercase hex.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes left literal when encoding: RFC 3986 unreserved characters plus
/// `!'()*`. Everything else, including `@`, `,`, `&`, `=`, `%` and CR/LF,
/// is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// Percent-decodes a URI component.
///
/// `%XY` with two hex digits becomes the byte `0xXY`. A `%` not followed by
/// two hex digits is kept as is. The result is never decoded again, so
/// `%2525` yields `%25`. Byte sequences that are not valid UTF-8 are
/// replaced with U+FFFD.
#[must_use]
pub fn percent_decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

/// Percent-encodes a URI component (e.g., `a@b c` -> `a%40b%20c`).
#[must_use]
pub fn percent_encode(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain() {
        assert_eq!(percent_decode("hello"), "hello");
        assert_eq!(percent_decode(""), "");
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(percent_decode("send%20index"), "send index");
        assert_eq!(percent_decode("a%0D%0Ab"), "a\r\nb");
        assert_eq!(percent_decode("a%3db"), "a=b");
    }

    #[test]
    fn test_decode_single_pass() {
        assert_eq!(percent_decode("%2525"), "%25");
    }

    #[test]
    fn test_decode_malformed_escape_kept() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%4"), "%4");
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(percent_decode("H%C3%A9llo"), "Héllo");
        assert_eq!(percent_decode("%FF"), "\u{FFFD}");
    }

    #[test]
    fn test_encode_reserved() {
        assert_eq!(percent_encode("chris@example.com"), "chris%40example.com");
        assert_eq!(percent_encode(", joe"), "%2C%20joe");
        assert_eq!(percent_encode("a\r\nb"), "a%0D%0Ab");
        assert_eq!(percent_encode("a&b=c%"), "a%26b%3Dc%25");
    }

    #[test]
    fn test_encode_unreserved_kept() {
        assert_eq!(percent_encode("current-issue"), "current-issue");
        assert_eq!(percent_encode("a_b.c~d!e'f(g)h*"), "a_b.c~d!e'f(g)h*");
    }

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(percent_encode("é"), "%C3%A9");
    }
}
