//! Best-effort base64 decoding of variable values.
//!
//! A value is written decoded when it parses as standard, padded base64 and
//! verbatim otherwise. There is no marker distinguishing the two: a literal
//! value that happens to be valid base64 is decoded as well.
//!
//! # Accepted input
//!
//! - Standard alphabet (`+` and `/`), padding required
//! - CR and LF are skipped, so wrapped output of `base64` decodes
//! - Non-zero trailing bits in the last quantum are tolerated

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use std::borrow::Cow;

const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode `value` as base64 if possible, otherwise return its bytes unchanged.
///
/// # Example
///
/// ```
/// use substantiate::decode::maybe_decode;
///
/// assert_eq!(&*maybe_decode(b"aGVsbG8="), b"hello");
/// assert_eq!(&*maybe_decode(b"not-base64!!"), b"not-base64!!");
/// ```
pub fn maybe_decode(value: &[u8]) -> Cow<'_, [u8]> {
    match try_decode(value) {
        Some(decoded) => Cow::Owned(decoded),
        None => Cow::Borrowed(value),
    }
}

/// Strict half of [`maybe_decode`]: `None` when `value` is not base64.
pub fn try_decode(value: &[u8]) -> Option<Vec<u8>> {
    let is_line_break = |b: &u8| *b == b'\r' || *b == b'\n';
    let unwrapped: Cow<'_, [u8]> = if value.iter().any(is_line_break) {
        Cow::Owned(value.iter().copied().filter(|b| !is_line_break(b)).collect())
    } else {
        Cow::Borrowed(value)
    };

    LENIENT_STANDARD.decode(&unwrapped).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_valid_base64() {
        assert_eq!(&*maybe_decode(b"aGVsbG8="), b"hello");
        assert_eq!(&*maybe_decode(b"c2stbGl2ZS0xMjM0NQ=="), b"sk-live-12345");
    }

    #[test]
    fn test_invalid_characters_pass_through() {
        assert_eq!(&*maybe_decode(b"not-base64!!"), b"not-base64!!");
        assert!(matches!(maybe_decode(b"not-base64!!"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_missing_padding_passes_through() {
        assert_eq!(&*maybe_decode(b"aGVsbG8"), b"aGVsbG8");
    }

    #[test]
    fn test_url_safe_alphabet_passes_through() {
        // "-" and "_" are not part of the standard alphabet
        assert_eq!(&*maybe_decode(b"ab-_"), b"ab-_");
    }

    #[test]
    fn test_wrapped_base64_decodes() {
        assert_eq!(&*maybe_decode(b"aGVs\nbG8=\n"), b"hello");
        assert_eq!(&*maybe_decode(b"aGVs\r\nbG8="), b"hello");
    }

    #[test]
    fn test_trailing_bits_tolerated() {
        // "aGVsbG9=" carries non-zero bits after "hello"
        assert_eq!(&*maybe_decode(b"aGVsbG9="), b"hello");
    }

    #[test]
    fn test_binary_output_is_byte_exact() {
        assert_eq!(&*maybe_decode(b"AP/+"), &[0x00u8, 0xff, 0xfe]);
    }

    #[test]
    fn test_empty_value_decodes_to_nothing() {
        assert!(maybe_decode(b"").is_empty());
        assert_eq!(try_decode(b""), Some(Vec::new()));
    }

    #[test]
    fn test_non_utf8_passes_through() {
        let raw = b"k\xff\xfe!";
        assert_eq!(&*maybe_decode(raw), raw);
        assert_eq!(try_decode(raw), None);
    }

    #[test]
    fn test_literal_that_looks_like_base64_is_decoded() {
        // "test" is four valid base64 characters
        assert_ne!(&*maybe_decode(b"test"), b"test");
    }
}
