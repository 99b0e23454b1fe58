// src/hash.rs: digest helpers

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::convert::hex_lower;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha512 => "SHA512",
        }
    }
}

pub fn digest_hex(algorithm: HashAlgorithm, input: &str) -> String {
    let data = input.as_bytes();
    match algorithm {
        HashAlgorithm::Md5 => format!("{:x}", md5::compute(data)),
        HashAlgorithm::Sha1 => hex_lower(&Sha1::digest(data)),
        HashAlgorithm::Sha256 => hex_lower(&Sha256::digest(data)),
        HashAlgorithm::Sha512 => hex_lower(&Sha512::digest(data)),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashDigests {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    pub sha512: String,
}

impl HashDigests {
    pub fn compute(input: &str) -> Self {
        Self {
            md5: digest_hex(HashAlgorithm::Md5, input),
            sha1: digest_hex(HashAlgorithm::Sha1, input),
            sha256: digest_hex(HashAlgorithm::Sha256, input),
            sha512: digest_hex(HashAlgorithm::Sha512, input),
        }
    }

    pub fn get(&self, algorithm: HashAlgorithm) -> &str {
        match algorithm {
            HashAlgorithm::Md5 => &self.md5,
            HashAlgorithm::Sha1 => &self.sha1,
            HashAlgorithm::Sha256 => &self.sha256,
            HashAlgorithm::Sha512 => &self.sha512,
        }
    }

    pub fn is_empty(&self) -> bool {
        HashAlgorithm::ALL.iter().all(|&a| self.get(a).is_empty())
    }

    /// `"MD5: …"` lines, for copy-all and download.
    pub fn render(&self) -> String {
        HashAlgorithm::ALL
            .iter()
            .map(|&a| format!("{}: {}", a.label(), self.get(a)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abc_vectors() {
        let d = HashDigests::compute("abc");
        assert_eq!(d.md5, "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(d.sha1, "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(
            d.sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            d.sha512,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn hashes_utf8_bytes() {
        // "é" is two bytes in UTF-8.
        assert_eq!(
            digest_hex(HashAlgorithm::Md5, "é"),
            format!("{:x}", md5::compute([0xc3, 0xa9]))
        );
    }

    #[test]
    fn render_lists_every_algorithm() {
        let out = HashDigests::compute("").render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "MD5: d41d8cd98f00b204e9800998ecf8427e");
        assert!(lines[1].starts_with("SHA1: da39a3ee"));
        assert!(lines[2].starts_with("SHA256: e3b0c442"));
        assert!(lines[3].starts_with("SHA512: cf83e135"));
    }

    #[test]
    fn default_is_empty() {
        assert!(HashDigests::default().is_empty());
        assert!(!HashDigests::compute("x").is_empty());
    }
}
