// src/xor.rs: repeating-key XOR

use thiserror::Error;

use crate::convert::hex_lower;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyFormat {
    Text,
    Hex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XorOutput {
    Text,
    Hex,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum XorError {
    #[error("Invalid key: the key is empty")]
    EmptyKey,
}

/// Text keys are their UTF-8 bytes. Hex keys keep only hex digits and read
/// them two at a time; a dangling last digit is a byte of its own.
pub fn parse_key(key: &str, format: KeyFormat) -> Result<Vec<u8>, XorError> {
    let bytes = match format {
        KeyFormat::Text => key.as_bytes().to_vec(),
        KeyFormat::Hex => {
            let digits: Vec<u8> = key
                .chars()
                .filter_map(|c| c.to_digit(16))
                .map(|d| d as u8)
                .collect();
            digits
                .chunks(2)
                .map(|chunk| chunk.iter().fold(0u8, |acc, &d| (acc << 4) | d))
                .collect()
        }
    };
    if bytes.is_empty() {
        return Err(XorError::EmptyKey);
    }
    Ok(bytes)
}

pub fn xor_bytes(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(b, k)| b ^ k)
        .collect()
}

pub fn apply(
    input: &str,
    key: &str,
    key_format: KeyFormat,
    output: XorOutput,
) -> Result<String, XorError> {
    let key = parse_key(key, key_format)?;
    let out = xor_bytes(input.as_bytes(), &key);
    Ok(match output {
        XorOutput::Hex => hex_lower(&out),
        XorOutput::Text => String::from_utf8_lossy(&out).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_key_hex_output() {
        assert_eq!(
            apply("flag", "k", KeyFormat::Text, XorOutput::Hex).unwrap(),
            "0d070a0c"
        );
    }

    #[test]
    fn key_repeats() {
        assert_eq!(xor_bytes(&[1, 2, 3, 4, 5], &[0xff, 0x00]), vec![0xfe, 2, 0xfc, 4, 0xfa]);
    }

    #[test]
    fn applying_twice_restores() {
        let data = b"CTF{x0r_is_its_own_inverse}";
        let key = parse_key("s3cr3t", KeyFormat::Text).unwrap();
        assert_eq!(xor_bytes(&xor_bytes(data, &key), &key), data.to_vec());
    }

    #[test]
    fn hex_key_parsing() {
        assert_eq!(parse_key("de:ad be-ef", KeyFormat::Hex).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(parse_key("abc", KeyFormat::Hex).unwrap(), vec![0xab, 0x0c]);
        assert_eq!(parse_key("0x41", KeyFormat::Hex).unwrap(), vec![0x04, 0x01]);
    }

    #[test]
    fn empty_keys_are_rejected() {
        assert_eq!(parse_key("", KeyFormat::Text), Err(XorError::EmptyKey));
        assert_eq!(parse_key("zz", KeyFormat::Hex), Err(XorError::EmptyKey));
        assert!(apply("data", "", KeyFormat::Text, XorOutput::Hex).is_err());
    }

    #[test]
    fn text_output_is_lossy() {
        let out = apply("A", "80", KeyFormat::Hex, XorOutput::Text).unwrap();
        assert_eq!(out, "\u{fffd}");
        let out = apply("a", " ", KeyFormat::Text, XorOutput::Text).unwrap();
        assert_eq!(out, "A");
    }
}
