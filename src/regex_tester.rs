// src/regex_tester.rs: regex sandbox helpers

use std::collections::BTreeMap;
use std::ops::Range;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegexError {
    #[error("Invalid regular expression: {0}")]
    InvalidPattern(String),
}

/// JS-style flags: `g` all matches, `i` case-insensitive, `m` multi-line
/// anchors, `s` dot matches newline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegexFlags {
    pub global: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_all: bool,
}

impl Default for RegexFlags {
    fn default() -> Self {
        Self {
            global: true,
            case_insensitive: false,
            multi_line: false,
            dot_all: false,
        }
    }
}

impl RegexFlags {
    pub const LETTERS: [char; 4] = ['g', 'i', 'm', 's'];

    /// Unknown letters are ignored.
    pub fn parse(s: &str) -> Self {
        Self {
            global: s.contains('g'),
            case_insensitive: s.contains('i'),
            multi_line: s.contains('m'),
            dot_all: s.contains('s'),
        }
    }

    pub fn has(&self, flag: char) -> bool {
        match flag {
            'g' => self.global,
            'i' => self.case_insensitive,
            'm' => self.multi_line,
            's' => self.dot_all,
            _ => false,
        }
    }

    pub fn toggled(mut self, flag: char) -> Self {
        match flag {
            'g' => self.global = !self.global,
            'i' => self.case_insensitive = !self.case_insensitive,
            'm' => self.multi_line = !self.multi_line,
            's' => self.dot_all = !self.dot_all,
            _ => {}
        }
        self
    }

    pub fn as_flag_string(&self) -> String {
        Self::LETTERS.iter().filter(|&&f| self.has(f)).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegexMatch {
    pub text: String,
    /// Character offsets into the haystack.
    pub start: usize,
    pub end: usize,
    pub groups: BTreeMap<String, String>,
    #[serde(skip)]
    pub byte_range: Range<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

pub fn compile(pattern: &str, flags: RegexFlags) -> Result<Regex, RegexError> {
    RegexBuilder::new(pattern)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_all)
        .build()
        .map_err(|e| RegexError::InvalidPattern(e.to_string()))
}

/// Runs `pattern` over `text`. Without the `g` flag only the first match is
/// reported. An empty pattern or empty text is not run at all.
pub fn find_matches(
    pattern: &str,
    text: &str,
    flags: RegexFlags,
) -> Result<Vec<RegexMatch>, RegexError> {
    if pattern.is_empty() || text.is_empty() {
        return Ok(vec![]);
    }
    let re = compile(pattern, flags)?;
    let names: Vec<&str> = re.capture_names().flatten().collect();
    let limit = if flags.global { usize::MAX } else { 1 };

    let mut out = vec![];
    for caps in re.captures_iter(text).take(limit) {
        let Some(m0) = caps.get(0) else { continue };
        let groups = names
            .iter()
            .filter_map(|&name| caps.name(name).map(|g| (name.to_string(), g.as_str().to_string())))
            .collect();
        let start = text[..m0.start()].chars().count();
        out.push(RegexMatch {
            text: m0.as_str().to_string(),
            start,
            end: start + m0.as_str().chars().count(),
            groups,
            byte_range: m0.range(),
        });
    }
    Ok(out)
}

/// Splits `text` into plain and matched runs. Empty matches are not highlighted.
pub fn highlight(text: &str, matches: &[RegexMatch]) -> Vec<Segment> {
    let mut ranges: Vec<&Range<usize>> = matches
        .iter()
        .map(|m| &m.byte_range)
        .filter(|r| !r.is_empty())
        .collect();
    ranges.sort_by_key(|r| r.start);

    let mut out = vec![];
    let mut last = 0;
    for r in ranges {
        if r.start < last || r.end > text.len() {
            continue;
        }
        if r.start > last {
            out.push(Segment {
                text: text[last..r.start].to_string(),
                matched: false,
            });
        }
        out.push(Segment {
            text: text[r.clone()].to_string(),
            matched: true,
        });
        last = r.end;
    }
    if last < text.len() {
        out.push(Segment {
            text: text[last..].to_string(),
            matched: false,
        });
    }
    out
}

/// One matched string per line, for the copy button.
pub fn render_matches(matches: &[RegexMatch]) -> String {
    matches
        .iter()
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_finds_all() {
        let m = find_matches(r"\d+", "a1b22c333", RegexFlags::parse("g")).unwrap();
        let texts: Vec<&str> = m.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["1", "22", "333"]);
        assert_eq!((m[1].start, m[1].end), (3, 5));
    }

    #[test]
    fn without_global_only_first() {
        let m = find_matches(r"\d+", "a1b22c333", RegexFlags::parse("")).unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].text, "1");
    }

    #[test]
    fn case_insensitive_flag() {
        assert!(find_matches("flag", "FLAG{x}", RegexFlags::parse("g"))
            .unwrap()
            .is_empty());
        assert_eq!(
            find_matches("flag", "FLAG{x}", RegexFlags::parse("gi"))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn multi_line_and_dot_all() {
        let text = "one\ntwo";
        assert!(find_matches("^two$", text, RegexFlags::parse("g"))
            .unwrap()
            .is_empty());
        assert_eq!(find_matches("^two$", text, RegexFlags::parse("gm")).unwrap().len(), 1);
        assert!(find_matches("one.two", text, RegexFlags::parse("g")).unwrap().is_empty());
        assert_eq!(find_matches("one.two", text, RegexFlags::parse("gs")).unwrap().len(), 1);
    }

    #[test]
    fn named_groups() {
        let m = find_matches(
            r"(?P<key>\w+)=(?P<val>\d+)?",
            "a=1 b=",
            RegexFlags::default(),
        )
        .unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m[0].groups.get("key").map(String::as_str), Some("a"));
        assert_eq!(m[0].groups.get("val").map(String::as_str), Some("1"));
        assert_eq!(m[1].groups.get("key").map(String::as_str), Some("b"));
        assert!(!m[1].groups.contains_key("val"));
    }

    #[test]
    fn invalid_pattern() {
        let err = find_matches("(", "x", RegexFlags::default()).unwrap_err();
        assert!(matches!(err, RegexError::InvalidPattern(_)));
        assert!(err.to_string().starts_with("Invalid regular expression"));
    }

    #[test]
    fn empty_inputs_do_not_run() {
        assert!(find_matches("", "text", RegexFlags::default()).unwrap().is_empty());
        assert!(find_matches("(", "", RegexFlags::default()).unwrap().is_empty());
    }

    #[test]
    fn character_offsets() {
        let m = find_matches("b", "ééb", RegexFlags::default()).unwrap();
        assert_eq!((m[0].start, m[0].end), (2, 3));
        assert_eq!(m[0].byte_range, 4..5);
    }

    #[test]
    fn highlight_covers_text() {
        let text = "x1y22";
        let m = find_matches(r"\d+", text, RegexFlags::default()).unwrap();
        let segs = highlight(text, &m);
        let joined: String = segs.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text);
        assert_eq!(
            segs.iter().map(|s| s.matched).collect::<Vec<_>>(),
            vec![false, true, false, true]
        );
    }

    #[test]
    fn highlight_skips_empty_matches() {
        let text = "ab";
        let m = find_matches("x*", text, RegexFlags::default()).unwrap();
        assert!(!m.is_empty());
        assert_eq!(
            highlight(text, &m),
            vec![Segment {
                text: "ab".into(),
                matched: false
            }]
        );
    }

    #[test]
    fn flag_string_round_trip() {
        let flags = RegexFlags::parse("smgx");
        assert_eq!(flags.as_flag_string(), "gms");
        assert_eq!(flags.toggled('i').as_flag_string(), "gims");
        assert_eq!(flags.toggled('g').as_flag_string(), "ms");
    }

    #[test]
    fn copy_rendering() {
        let m = find_matches(r"[a-z]+", "ab 12 cd", RegexFlags::default()).unwrap();
        assert_eq!(render_matches(&m), "ab\ncd");
    }
}
