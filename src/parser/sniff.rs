//! Format sniffing: character encoding and field delimiter inference.
//!
//! Both guesses are best-effort and final. A wrong guess is not retried;
//! it surfaces downstream as rows failing the minimum-field filter or as
//! garbled text fields.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, WINDOWS_1251};

use crate::config::SNIFF_LEN;

/// Field delimiter, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Tab character.
    Tab,
    /// Comma followed by a space.
    CommaSpace,
    /// Bare comma.
    Comma,
    /// Single space (default for whitespace-aligned files).
    Space,
}

impl Delimiter {
    /// The literal delimiter string used when splitting rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Tab => "\t",
            Delimiter::CommaSpace => ", ",
            Delimiter::Comma => ",",
            Delimiter::Space => " ",
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delimiter::Tab => write!(f, "tab"),
            Delimiter::CommaSpace => write!(f, "comma+space"),
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Space => write!(f, "space"),
        }
    }
}

/// Guess the character encoding from the leading bytes of the file.
///
/// At most [`SNIFF_LEN`] bytes are consulted. Input that is entirely 7-bit
/// ASCII is assumed to actually be a legacy 8-bit file whose high bytes
/// simply did not show up in the sample, and windows-1251 is substituted.
pub fn detect_encoding(head: &[u8]) -> &'static Encoding {
    let head = &head[..head.len().min(SNIFF_LEN)];
    if head.is_ascii() {
        return WINDOWS_1251;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(head, true);
    detector.guess(None, true)
}

/// Decode the full file content with the guessed encoding.
///
/// Malformed sequences are replaced rather than rejected; garbled fields
/// are filtered later by row length, not here.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

/// Choose the field delimiter from the first non-blank decoded line.
///
/// Priority: tab, then ", ", then ",", then a single space. The order is
/// fixed; a whitespace-aligned line falls through to the space default.
pub fn detect_delimiter(line: &str) -> Delimiter {
    if line.contains('\t') {
        Delimiter::Tab
    } else if line.contains(", ") {
        Delimiter::CommaSpace
    } else if line.contains(',') {
        Delimiter::Comma
    } else {
        Delimiter::Space
    }
}
