// src/base64.rs: text <-> Base64

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Base64Error {
    #[error("base64 decode error: {0}")]
    Decode(String),
    #[error("utf8 error: {0} (decoded bytes aren't UTF-8)")]
    NotUtf8(String),
}

pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn decode(input: &str) -> Result<String, Base64Error> {
    let bytes = STANDARD
        .decode(input.trim().as_bytes())
        .map_err(|e| Base64Error::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Base64Error::NotUtf8(e.to_string()))
}
