//! List loading
//!
//! Decodes uploaded text and splits it into trimmed, non-blank lines.
//! Decoding tries UTF-8, then UTF-16, then Windows-1252, and uses the first
//! one that succeeds without replacement characters.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use std::fmt;
use tracing::debug;

use crate::error::{Error, Result};

/// Encodings attempted by [`decode_text`], in order
pub const ENCODING_ORDER: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Utf16,
    TextEncoding::Windows1252,
];

/// Bytes Windows-1252 leaves unassigned
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Text encoding used to decode an input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8, with an optional BOM
    Utf8,
    /// UTF-16, byte order from the BOM, little-endian without one
    Utf16,
    /// Windows code page 1252
    Windows1252,
}

impl TextEncoding {
    /// Label used in logs and errors
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
            Self::Windows1252 => "windows-1252",
        }
    }

    fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => {
                let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                strict(UTF_8, body)
            }
            Self::Utf16 => {
                let (encoding, body) = match Encoding::for_bom(bytes) {
                    Some((enc, len)) if enc == UTF_16LE || enc == UTF_16BE => (enc, &bytes[len..]),
                    _ => (UTF_16LE, bytes),
                };
                strict(encoding, body)
            }
            Self::Windows1252 => {
                if bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
                    return None;
                }
                strict(WINDOWS_1252, bytes)
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// Decoded text together with the encoding that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Decoded text
    pub text: String,
    /// Encoding that succeeded
    pub encoding: TextEncoding,
}

/// Decode a byte buffer with the first encoding that accepts it
pub fn decode_text(bytes: &[u8]) -> Result<Decoded> {
    for encoding in ENCODING_ORDER {
        if let Some(text) = encoding.decode(bytes) {
            debug!("Decoded {} bytes as {}", bytes.len(), encoding);
            return Ok(Decoded { text, encoding });
        }
    }

    let attempted: Vec<&'static str> = ENCODING_ORDER.iter().map(|e| e.label()).collect();
    Err(Error::decoding(&attempted))
}

/// Decode a byte buffer and return its non-blank lines, trimmed, in order
pub fn load_lines(bytes: &[u8]) -> Result<Vec<String>> {
    let decoded = decode_text(bytes)?;
    Ok(split_lines(&decoded.text))
}

/// Split text on line boundaries, trimming each line and dropping blank ones
pub fn split_lines(text: &str) -> Vec<String> {
    text.split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `\r\n` splits into a line and an empty remainder, which is dropped as blank
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
