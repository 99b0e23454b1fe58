// src/convert.rs: multi-format byte converter
//
// Every conversion goes through a raw byte buffer: decode the input in its
// source format, then encode the bytes in the target format.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Text,
    Hex,
    Binary,
    Decimal,
    Base64,
}

impl FormatTag {
    pub const ALL: [FormatTag; 5] = [
        FormatTag::Text,
        FormatTag::Hex,
        FormatTag::Binary,
        FormatTag::Decimal,
        FormatTag::Base64,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatTag::Text => "text",
            FormatTag::Hex => "hex",
            FormatTag::Binary => "binary",
            FormatTag::Decimal => "decimal",
            FormatTag::Base64 => "base64",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormatTag::Text => "Text (ASCII)",
            FormatTag::Hex => "Hexadecimal",
            FormatTag::Binary => "Binary",
            FormatTag::Decimal => "Decimal",
            FormatTag::Base64 => "Base64",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown format {0:?}")]
pub struct UnknownFormat(pub String);

impl FromStr for FormatTag {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatTag::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Machine-readable class of a [`FormatError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatErrorKind {
    InvalidCharacterSet,
    OddLength,
    OutOfRange,
    InvalidBase64,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid {format} input: unexpected {found}")]
    InvalidCharacterSet { format: FormatTag, found: String },

    #[error("Hex string must have an even number of digits (got {digits})")]
    OddLength { digits: usize },

    #[error("Decimal values must be between 0 and 255 (got {value})")]
    OutOfRange { value: String },

    #[error("Invalid Base64 input: {reason}")]
    InvalidBase64 { reason: String },
}

impl FormatError {
    pub fn kind(&self) -> FormatErrorKind {
        match self {
            FormatError::InvalidCharacterSet { .. } => FormatErrorKind::InvalidCharacterSet,
            FormatError::OddLength { .. } => FormatErrorKind::OddLength,
            FormatError::OutOfRange { .. } => FormatErrorKind::OutOfRange,
            FormatError::InvalidBase64 { .. } => FormatErrorKind::InvalidBase64,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.kind() {
            FormatErrorKind::InvalidCharacterSet => "invalid_character_set",
            FormatErrorKind::OddLength => "odd_length",
            FormatErrorKind::OutOfRange => "out_of_range",
            FormatErrorKind::InvalidBase64 => "invalid_base64",
        }
    }
}

/// Converts `input` from one textual byte encoding to another.
///
/// Blank input converts to an empty string. Decoding is strict: any
/// violation aborts the whole conversion and nothing is encoded.
pub fn convert(input: &str, from: FormatTag, to: FormatTag) -> Result<String, FormatError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let bytes = decode(input, from)?;
    Ok(encode(&bytes, to))
}

/// Decodes `input` into raw bytes according to `from`.
///
/// `text` is one byte per character and only accepts U+0000..=U+00FF;
/// anything wider has no single-byte representation and is rejected.
pub fn decode(input: &str, from: FormatTag) -> Result<Vec<u8>, FormatError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    match from {
        FormatTag::Text => decode_text(input),
        FormatTag::Hex => decode_hex(input),
        FormatTag::Binary => decode_binary(input),
        FormatTag::Decimal => decode_decimal(input),
        FormatTag::Base64 => decode_base64(input),
    }
}

pub fn encode(bytes: &[u8], to: FormatTag) -> String {
    match to {
        FormatTag::Text => bytes.iter().map(|&b| char::from(b)).collect(),
        FormatTag::Hex => hex_lower(bytes),
        FormatTag::Binary => bytes
            .iter()
            .map(|b| format!("{b:08b}"))
            .collect::<Vec<_>>()
            .join(" "),
        FormatTag::Decimal => bytes
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        FormatTag::Base64 => STANDARD.encode(bytes),
    }
}

pub fn hex_lower(bytes: &[u8]) -> String {
    const LUT: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(LUT[(b >> 4) as usize] as char);
        s.push(LUT[(b & 0x0f) as usize] as char);
    }
    s
}

/* ---------- decoders ---------- */

fn unexpected_char(format: FormatTag, c: char) -> FormatError {
    FormatError::InvalidCharacterSet {
        format,
        found: format!("character {c:?} (U+{:04X})", c as u32),
    }
}

fn decode_text(input: &str) -> Result<Vec<u8>, FormatError> {
    input
        .chars()
        .map(|c| u8::try_from(c).map_err(|_| unexpected_char(FormatTag::Text, c)))
        .collect()
}

fn nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

fn decode_hex(input: &str) -> Result<Vec<u8>, FormatError> {
    let nibbles = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| nibble(c).ok_or_else(|| unexpected_char(FormatTag::Hex, c)))
        .collect::<Result<Vec<u8>, _>>()?;

    if nibbles.len() % 2 != 0 {
        return Err(FormatError::OddLength {
            digits: nibbles.len(),
        });
    }

    Ok(nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

fn decode_binary(input: &str) -> Result<Vec<u8>, FormatError> {
    let bits = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(0u8),
            '1' => Ok(1u8),
            other => Err(unexpected_char(FormatTag::Binary, other)),
        })
        .collect::<Result<Vec<u8>, _>>()?;

    // A short final group is padded on the right: "1" reads as 10000000.
    Ok(bits
        .chunks(8)
        .map(|group| {
            let value = group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
            value << (8 - group.len())
        })
        .collect())
}

fn decode_decimal(input: &str) -> Result<Vec<u8>, FormatError> {
    let normalized = input.trim().replace(',', " ");

    // A comma at either end becomes a separator with nothing on its outer side.
    if normalized.starts_with(char::is_whitespace) || normalized.ends_with(char::is_whitespace) {
        return Err(FormatError::InvalidCharacterSet {
            format: FormatTag::Decimal,
            found: "empty value".to_string(),
        });
    }

    normalized.split_whitespace().map(decimal_byte).collect()
}

fn decimal_byte(token: &str) -> Result<u8, FormatError> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormatError::InvalidCharacterSet {
            format: FormatTag::Decimal,
            found: format!("value {token:?}"),
        });
    }
    // All digits, so the only way to fail is overflow.
    token.parse::<u8>().map_err(|_| FormatError::OutOfRange {
        value: token.to_string(),
    })
}

fn decode_base64(input: &str) -> Result<Vec<u8>, FormatError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| FormatError::InvalidBase64 {
            reason: e.to_string(),
        })
}
