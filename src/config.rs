// src/config.rs: embedded tool defaults

use serde::{Deserialize, Serialize};

use crate::catalog::ToolId;
use crate::convert::FormatTag;
use crate::frequency::FrequencyOptions;
use crate::qr::QrOptions;

const EMBEDDED: &str = include_str!("../assets/defaults.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolDefaults {
    pub caesar_rotation: u8,
    pub converter_from: FormatTag,
    pub converter_to: FormatTag,
    pub regex_flags: String,
    pub frequency: FrequencyOptions,
    pub qr: QrOptions,
    pub start_tool: ToolId,
}

impl Default for ToolDefaults {
    fn default() -> Self {
        Self {
            caesar_rotation: 13,
            converter_from: FormatTag::Text,
            converter_to: FormatTag::Hex,
            regex_flags: "g".to_string(),
            frequency: FrequencyOptions::default(),
            qr: QrOptions::default(),
            start_tool: ToolId::Converter,
        }
    }
}

impl ToolDefaults {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut defaults: ToolDefaults = serde_json::from_str(raw)?;
        defaults.caesar_rotation = defaults.caesar_rotation.min(25);
        Ok(defaults)
    }

    /// Parses the bundled `defaults.json`, falling back to the compiled-in
    /// values if it is broken.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED) {
            Ok(d) => d,
            Err(e) => {
                gloo::console::warn!(format!("defaults.json unreadable, using built-ins: {e}"));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_matches_builtin() {
        assert_eq!(ToolDefaults::from_json(EMBEDDED).unwrap(), ToolDefaults::default());
    }

    #[test]
    fn partial_document_fills_in() {
        let d = ToolDefaults::from_json(r#"{"converter_to":"base64","qr":{"size":500}}"#).unwrap();
        assert_eq!(d.converter_to, FormatTag::Base64);
        assert_eq!(d.converter_from, FormatTag::Text);
        assert_eq!(d.qr.size, 500);
        assert_eq!(d.qr.dark, "#000000");
    }

    #[test]
    fn rotation_clamped() {
        let d = ToolDefaults::from_json(r#"{"caesar_rotation":40}"#).unwrap();
        assert_eq!(d.caesar_rotation, 25);
    }

    #[test]
    fn bad_document_errors() {
        assert!(ToolDefaults::from_json(r#"{"start_tool":"uuid"}"#).is_err());
        assert!(ToolDefaults::from_json("not json").is_err());
    }
}
