// src/caesar.rs: ROT13 / Caesar shift

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaesarMode {
    Encrypt,
    Decrypt,
}

impl CaesarMode {
    pub fn flipped(self) -> Self {
        match self {
            CaesarMode::Encrypt => CaesarMode::Decrypt,
            CaesarMode::Decrypt => CaesarMode::Encrypt,
        }
    }
}

pub const ROT13: u8 = 13;

/// Rotates ASCII letters by `n` places, keeping case. Everything else passes through.
pub fn shift(text: &str, n: u8) -> String {
    let n = n % 26;
    text.chars()
        .map(|c| {
            let base = if c.is_ascii_uppercase() {
                b'A'
            } else if c.is_ascii_lowercase() {
                b'a'
            } else {
                return c;
            };
            char::from((c as u8 - base + n) % 26 + base)
        })
        .collect()
}

pub fn apply(text: &str, rotation: u8, mode: CaesarMode) -> String {
    let rotation = rotation % 26;
    match mode {
        CaesarMode::Encrypt => shift(text, rotation),
        CaesarMode::Decrypt => shift(text, (26 - rotation) % 26),
    }
}

/// Reads the rotation field: garbage is 0, numbers are clamped to 0..=25.
pub fn clamp_rotation(raw: &str) -> u8 {
    match raw.trim().parse::<i64>() {
        Ok(v) => v.clamp(0, 25) as u8,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rot13_known_vector() {
        assert_eq!(shift("Hello, World!", ROT13), "Uryyb, Jbeyq!");
    }

    #[test]
    fn rot13_is_an_involution() {
        let s = "synt{ebg13_vf_abg_rapelcgvba}";
        assert_eq!(shift(&shift(s, ROT13), ROT13), s);
    }

    #[test]
    fn decrypt_undoes_encrypt() {
        for rotation in 0..26u8 {
            let plain = "The quick brown fox, 42 jumps!";
            let cipher = apply(plain, rotation, CaesarMode::Encrypt);
            assert_eq!(apply(&cipher, rotation, CaesarMode::Decrypt), plain);
        }
    }

    #[test]
    fn caesar_three() {
        assert_eq!(apply("xyz ABC", 3, CaesarMode::Encrypt), "abc DEF");
        assert_eq!(apply("abc DEF", 3, CaesarMode::Decrypt), "xyz ABC");
    }

    #[test]
    fn non_ascii_letters_untouched() {
        assert_eq!(shift("é ß 9", 5), "é ß 9");
    }

    #[test]
    fn rotation_field_parsing() {
        assert_eq!(clamp_rotation("13"), 13);
        assert_eq!(clamp_rotation(" 7 "), 7);
        assert_eq!(clamp_rotation("99"), 25);
        assert_eq!(clamp_rotation("-4"), 0);
        assert_eq!(clamp_rotation("abc"), 0);
        assert_eq!(clamp_rotation(""), 0);
    }

    #[test]
    fn mode_flip() {
        assert_eq!(CaesarMode::Encrypt.flipped(), CaesarMode::Decrypt);
        assert_eq!(CaesarMode::Decrypt.flipped().flipped(), CaesarMode::Decrypt);
    }
}
