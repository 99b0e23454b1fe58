// src/url.rs: URL encode/decode (encodeURI / encodeURIComponent semantics)

use thiserror::Error;
use urlencoding::{decode, encode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlScope {
    /// A whole URI: reserved delimiters survive.
    Uri,
    /// A single component: everything but the unreserved marks is escaped.
    Component,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("URI malformed: {0}")]
    Malformed(String),
}

const COMPONENT_MARKS: &str = "-_.!~*'()";
const URI_RESERVED: &str = ";,/?:@&=+$#";

fn unescaped(c: char, scope: UrlScope) -> bool {
    c.is_ascii_alphanumeric()
        || COMPONENT_MARKS.contains(c)
        || (scope == UrlScope::Uri && URI_RESERVED.contains(c))
}

pub fn encode_url(input: &str, scope: UrlScope) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];
    for c in input.chars() {
        if unescaped(c, scope) {
            out.push(c);
        } else {
            out.push_str(&encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}

pub fn decode_url(input: &str, scope: UrlScope) -> Result<String, UrlError> {
    match scope {
        UrlScope::Component => decode_piece(input),
        UrlScope::Uri => {
            // Escapes of reserved delimiters are copied through verbatim.
            let mut out = String::with_capacity(input.len());
            let mut piece_start = 0;
            let bytes = input.as_bytes();
            let mut i = 0;
            while i < bytes.len() {
                if bytes[i] == b'%' && i + 3 <= bytes.len() && is_reserved_escape(&bytes[i + 1..i + 3]) {
                    out.push_str(&decode_piece(&input[piece_start..i])?);
                    out.push_str(&input[i..i + 3]);
                    i += 3;
                    piece_start = i;
                } else {
                    i += 1;
                }
            }
            out.push_str(&decode_piece(&input[piece_start..])?);
            Ok(out)
        }
    }
}

fn is_reserved_escape(hex: &[u8]) -> bool {
    if !hex.iter().all(u8::is_ascii_hexdigit) {
        return false;
    }
    let value = hex.iter().fold(0u8, |acc, &h| {
        let digit = char::from(h).to_digit(16).unwrap_or(0) as u8;
        (acc << 4) | digit
    });
    URI_RESERVED.contains(char::from(value))
}

fn decode_piece(piece: &str) -> Result<String, UrlError> {
    decode(piece)
        .map(|s| s.into_owned())
        .map_err(|e| UrlError::Malformed(e.to_string()))
}
