// src/html.rs: HTML entity encode/decode

use html_escape::decode_html_entities;

/// Escapes the five characters that matter in markup and attribute values.
pub fn encode(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Decodes named (`&lt;`), decimal (`&#60;`) and hex (`&#x3c;`) references.
/// Unknown references are left as written.
pub fn decode(input: &str) -> String {
    decode_html_entities(input).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_markup() {
        assert_eq!(
            encode(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn ampersand_first() {
        assert_eq!(encode("&lt;"), "&amp;lt;");
    }

    #[test]
    fn decodes_all_reference_kinds() {
        assert_eq!(decode("&lt;b&gt; &#65;&#x42; &quot;&amp;&#039;"), "<b> AB \"&'");
        assert_eq!(decode("&copy; &nbsp;"), "\u{a9} \u{a0}");
    }

    #[test]
    fn unknown_reference_untouched() {
        assert_eq!(decode("&notanentity; & plain"), "&notanentity; & plain");
    }

    #[test]
    fn round_trip() {
        let s = r#"<script>alert('xss' && "1")</script>"#;
        assert_eq!(decode(&encode(s)), s);
    }
}
