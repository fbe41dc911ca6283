//! Input classification and one-call transcoding.
//!
//! A raw submission is either a codeword sequence (every space-separated
//! token a base-10 integer) or free text. Classification is an explicit
//! predicate returning a tagged value, so callers branch on data instead
//! of driving control flow through parse failures.

use crate::codec::{decode, encode};
use crate::error::{CodecError, Error, Result};

/// Classification of a raw submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Every token parsed as a base-10 integer; decode direction.
    AllIntegers(Vec<u128>),
    /// Anything else; encode direction.
    FreeText(String),
}

/// Classify `input` as a codeword sequence or free text.
///
/// Tokens are separated by single ASCII spaces, matching the interchange
/// format. An empty token (leading, trailing, or doubled separator), any
/// non-digit character, or a value too wide even for `u128` makes the
/// whole input free text — a value that wide can never decode, so it
/// routes to the encode direction either way.
pub fn classify(input: &str) -> Classified {
    let mut codes = Vec::new();
    for token in input.split(' ') {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Classified::FreeText(input.to_string());
        }
        match token.parse::<u128>() {
            Ok(value) => codes.push(value),
            Err(_) => return Classified::FreeText(input.to_string()),
        }
    }
    Classified::AllIntegers(codes)
}

/// Apply the full boundary contract: classify, run the codec in the
/// matching direction, and render the result in the interchange format.
///
/// A "codeword sequence" containing a value wider than 32 bits was never
/// really one; it falls back to encoding the input as literal text, the
/// same route a non-integer token takes.
pub fn transcode(input: &str) -> Result<String> {
    match classify(input) {
        Classified::AllIntegers(codes) => match decode(&codes) {
            Ok(text) => Ok(text),
            Err(Error::Codec(CodecError::IntegerTooWide { .. })) => {
                Ok(render_codes(&encode(input)?))
            }
            Err(err) => Err(err),
        },
        Classified::FreeText(text) => Ok(render_codes(&encode(&text)?)),
    }
}

/// Render codes as decimal integers separated by single spaces.
///
/// A single code renders as one bare integer; an empty sequence renders
/// as the empty string.
pub fn render_codes(codes: &[u32]) -> String {
    let rendered: Vec<String> = codes.iter().map(u32::to_string).collect();
    rendered.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_integers() {
        assert_eq!(
            classify("251792692"),
            Classified::AllIntegers(vec![251792692])
        );
        assert_eq!(
            classify("267487694 125043731"),
            Classified::AllIntegers(vec![267487694, 125043731])
        );
    }

    #[test]
    fn test_classify_free_text() {
        assert_eq!(classify("FRED"), Classified::FreeText("FRED".into()));
        // Mixed tokens are text, not a partial sequence
        assert_eq!(classify("12 ab"), Classified::FreeText("12 ab".into()));
        // Signs and decimal points are not part of the format
        assert_eq!(classify("-5"), Classified::FreeText("-5".into()));
        assert_eq!(classify("1.5"), Classified::FreeText("1.5".into()));
    }

    #[test]
    fn test_classify_empty_tokens() {
        assert_eq!(classify(""), Classified::FreeText("".into()));
        assert_eq!(classify("1  2"), Classified::FreeText("1  2".into()));
        assert_eq!(classify(" 12"), Classified::FreeText(" 12".into()));
    }

    #[test]
    fn test_classify_oversized_integer_still_integers() {
        // Wider than 32 bits but parseable: classified as integers, and
        // decode is where the width check happens
        assert_eq!(
            classify("1659684413514848461451648"),
            Classified::AllIntegers(vec![1659684413514848461451648])
        );
    }

    #[test]
    fn test_transcode_encode_direction() {
        assert_eq!(transcode("A").unwrap(), "16777217");
        assert_eq!(transcode("tacocat").unwrap(), "267487694 125043731");
    }

    #[test]
    fn test_transcode_decode_direction() {
        assert_eq!(transcode("16777217").unwrap(), "A");
        assert_eq!(transcode("267487694 125043731").unwrap(), "tacocat");
    }

    #[test]
    fn test_transcode_width_fallback() {
        // An oversized "integer" was never a codeword sequence; the
        // digits themselves get encoded
        assert_eq!(
            transcode("1659684413514848461451648").unwrap(),
            "16746029 16723216 16712751 16753920 16714532 16715075 1118208"
        );
    }

    #[test]
    fn test_transcode_empty() {
        assert_eq!(transcode("").unwrap(), "");
    }

    #[test]
    fn test_render_codes() {
        assert_eq!(render_codes(&[]), "");
        assert_eq!(render_codes(&[7]), "7");
        assert_eq!(render_codes(&[1, 2, 3]), "1 2 3");
    }
}
