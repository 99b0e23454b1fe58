// src/catalog.rs: tool registry, categories and CTF challenge types

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Base64,
    Rot13,
    Xor,
    Hash,
    Reverse,
    Regex,
    Frequency,
    Diff,
    Url,
    Html,
    Converter,
    QrCode,
}

impl ToolId {
    pub const ALL: [ToolId; 12] = [
        ToolId::Base64,
        ToolId::Rot13,
        ToolId::Xor,
        ToolId::Hash,
        ToolId::Reverse,
        ToolId::Regex,
        ToolId::Frequency,
        ToolId::Diff,
        ToolId::Url,
        ToolId::Html,
        ToolId::Converter,
        ToolId::QrCode,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ToolId::Base64 => "base64",
            ToolId::Rot13 => "rot13",
            ToolId::Xor => "xor",
            ToolId::Hash => "hash",
            ToolId::Reverse => "reverse",
            ToolId::Regex => "regex",
            ToolId::Frequency => "frequency",
            ToolId::Diff => "diff",
            ToolId::Url => "url",
            ToolId::Html => "html",
            ToolId::Converter => "converter",
            ToolId::QrCode => "qrcode",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ToolId> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    pub fn tool(self) -> &'static Tool {
        // TOOLS is in ALL order.
        &TOOLS[self as usize]
    }

    pub fn title(self) -> &'static str {
        self.tool().title
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tool {
    pub id: ToolId,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub tools: &'static [ToolId],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChallengeType {
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static [ToolId],
}

pub static TOOLS: [Tool; 12] = [
    Tool {
        id: ToolId::Base64,
        title: "Base64 Encoder/Decoder",
        description: "Convert text to and from Base64 encoding.",
    },
    Tool {
        id: ToolId::Rot13,
        title: "ROT13/Caesar Cipher",
        description: "Encrypt and decrypt using the Caesar cipher with custom rotation.",
    },
    Tool {
        id: ToolId::Xor,
        title: "XOR Encoder/Decoder",
        description: "Apply XOR operations with custom keys to encrypt and decrypt data.",
    },
    Tool {
        id: ToolId::Hash,
        title: "Hash Generator",
        description: "Generate MD5, SHA1, SHA256 and other hashes from text input.",
    },
    Tool {
        id: ToolId::Reverse,
        title: "Reverse String",
        description: "Reverse text, words, or lines with additional transformations.",
    },
    Tool {
        id: ToolId::Regex,
        title: "Regex Tester",
        description: "Test regular expressions with live highlighting and matching.",
    },
    Tool {
        id: ToolId::Frequency,
        title: "Frequency Analysis",
        description: "Analyze character and word frequency in text for cryptanalysis.",
    },
    Tool {
        id: ToolId::Diff,
        title: "Text Diff Viewer",
        description: "Compare two texts and highlight the differences between them.",
    },
    Tool {
        id: ToolId::Url,
        title: "URL Encode/Decode",
        description: "Encode and decode URL components with proper escaping.",
    },
    Tool {
        id: ToolId::Html,
        title: "HTML Encode/Decode",
        description: "Convert special characters to HTML entities and back.",
    },
    Tool {
        id: ToolId::Converter,
        title: "ASCII/Hex/Binary Converter",
        description: "Convert between ASCII, hexadecimal, binary and Unicode formats.",
    },
    Tool {
        id: ToolId::QrCode,
        title: "QR Code Generator",
        description: "Generate QR codes from text, URLs, or custom data.",
    },
];

pub static CATEGORIES: [ToolCategory; 3] = [
    ToolCategory {
        name: "Crypto & Encoding",
        description: "Encrypt, decrypt, and encode data with various algorithms",
        tools: &[ToolId::Base64, ToolId::Rot13, ToolId::Xor, ToolId::Hash],
    },
    ToolCategory {
        name: "Text Manipulation",
        description: "Analyze and manipulate text for cryptanalysis",
        tools: &[ToolId::Reverse, ToolId::Regex, ToolId::Frequency, ToolId::Diff],
    },
    ToolCategory {
        name: "Misc Utilities",
        description: "Additional utilities for various CTF tasks",
        tools: &[ToolId::Url, ToolId::Html, ToolId::Converter, ToolId::QrCode],
    },
];

pub static CHALLENGES: [ChallengeType; 4] = [
    ChallengeType {
        title: "Web Exploitation",
        description: "Explore vulnerabilities in web applications like SQL injection, XSS, CSRF attacks",
        tools: &[ToolId::Url, ToolId::Html, ToolId::Hash],
    },
    ChallengeType {
        title: "Cryptography",
        description: "Decode encrypted messages, break ciphers, analyze patterns",
        tools: &[ToolId::Rot13, ToolId::Base64, ToolId::Xor, ToolId::Frequency],
    },
    ChallengeType {
        title: "Forensics",
        description: "Examine files, network captures, memory dumps to find hidden data",
        tools: &[ToolId::Converter, ToolId::Hash],
    },
    ChallengeType {
        title: "Reverse Engineering",
        description: "Analyze compiled binaries to understand their functionality",
        tools: &[ToolId::Converter, ToolId::Diff],
    },
];

pub fn category_of(id: ToolId) -> Option<&'static ToolCategory> {
    CATEGORIES.iter().find(|c| c.tools.contains(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tools_table_in_id_order() {
        for (i, id) in ToolId::ALL.into_iter().enumerate() {
            assert_eq!(TOOLS[i].id, id);
            assert_eq!(id.tool().id, id);
        }
    }

    #[test]
    fn slugs_round_trip() {
        for id in ToolId::ALL {
            assert_eq!(ToolId::from_slug(id.slug()), Some(id));
        }
        assert_eq!(ToolId::from_slug("uuid"), None);
        assert_eq!(ToolId::QrCode.to_string(), "qrcode");
    }

    #[test]
    fn every_tool_in_exactly_one_category() {
        for id in ToolId::ALL {
            let n = CATEGORIES.iter().filter(|c| c.tools.contains(&id)).count();
            assert_eq!(n, 1, "{id}");
        }
        assert_eq!(category_of(ToolId::Diff).map(|c| c.name), Some("Text Manipulation"));
    }

    #[test]
    fn serde_uses_slugs() {
        assert_eq!(serde_json::to_string(&ToolId::QrCode).unwrap(), "\"qrcode\"");
        let id: ToolId = serde_json::from_str("\"converter\"").unwrap();
        assert_eq!(id, ToolId::Converter);
    }
}
