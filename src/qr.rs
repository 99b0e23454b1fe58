// src/qr.rs: QR code rendering to SVG

use qrcode::render::svg;
use qrcode::QrCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_SIZE: u32 = 100;
pub const MAX_SIZE: u32 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl EcLevel {
    pub const ALL: [EcLevel; 4] = [EcLevel::L, EcLevel::M, EcLevel::Q, EcLevel::H];

    pub fn label(self) -> &'static str {
        match self {
            EcLevel::L => "Low (7%)",
            EcLevel::M => "Medium (15%)",
            EcLevel::Q => "Quartile (25%)",
            EcLevel::H => "High (30%)",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        }
    }

    /// Unknown letters fall back to `M`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "L" => EcLevel::L,
            "Q" => EcLevel::Q,
            "H" => EcLevel::H,
            _ => EcLevel::M,
        }
    }

    fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    pub size: u32,
    pub dark: String,
    pub light: String,
    pub ec_level: EcLevel,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: 300,
            dark: "#000000".to_string(),
            light: "#ffffff".to_string(),
            ec_level: EcLevel::M,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QrError {
    #[error("Please enter some text to encode")]
    EmptyInput,
    #[error("invalid color `{0}` (expected #rrggbb)")]
    InvalidColor(String),
    #[error("invalid QR content: {0}")]
    Encode(String),
}

/// Accepts `#rrggbb` in either case and returns it lowercased.
pub fn parse_color(raw: &str) -> Result<String, QrError> {
    let s = raw.trim();
    match s.strip_prefix('#') {
        Some(digits) if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
            Ok(s.to_ascii_lowercase())
        }
        _ => Err(QrError::InvalidColor(raw.to_string())),
    }
}

pub fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

pub fn generate_svg(input: &str, options: &QrOptions) -> Result<String, QrError> {
    if input.is_empty() {
        return Err(QrError::EmptyInput);
    }
    let dark = parse_color(&options.dark)?;
    let light = parse_color(&options.light)?;
    let size = clamp_size(options.size);

    let code = QrCode::with_error_correction_level(input.as_bytes(), options.ec_level.to_qrcode())
        .map_err(|e| QrError::Encode(e.to_string()))?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .quiet_zone(true)
        .dark_color(svg::Color(&dark))
        .light_color(svg::Color(&light))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_svg_with_colors() {
        let opts = QrOptions {
            dark: "#FF0000".into(),
            ..QrOptions::default()
        };
        let svg = generate_svg("flag{qr}", &opts).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#ff0000"));
        assert!(svg.contains("#ffffff"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            generate_svg("", &QrOptions::default()),
            Err(QrError::EmptyInput)
        );
    }

    #[test]
    fn bad_colors() {
        for c in ["000000", "#00000", "#gggggg", "red"] {
            assert!(matches!(parse_color(c), Err(QrError::InvalidColor(_))), "{c}");
        }
        let opts = QrOptions {
            light: "white".into(),
            ..QrOptions::default()
        };
        assert_eq!(
            generate_svg("x", &opts),
            Err(QrError::InvalidColor("white".into()))
        );
    }

    #[test]
    fn data_too_long() {
        let opts = QrOptions {
            ec_level: EcLevel::H,
            ..QrOptions::default()
        };
        let big = "a".repeat(5000);
        assert!(matches!(generate_svg(&big, &opts), Err(QrError::Encode(_))));
    }

    #[test]
    fn size_is_clamped() {
        assert_eq!(clamp_size(10), MIN_SIZE);
        assert_eq!(clamp_size(5000), MAX_SIZE);
        assert_eq!(clamp_size(300), 300);
    }

    #[test]
    fn ec_level_parse() {
        assert_eq!(EcLevel::parse("h"), EcLevel::H);
        assert_eq!(EcLevel::parse("?"), EcLevel::M);
        for level in EcLevel::ALL {
            assert_eq!(EcLevel::parse(level.as_str()), level);
        }
    }
}
