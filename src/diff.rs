// src/diff.rs: line diff with greedy character highlighting
//
// Lines are compared by index, not aligned: line N of the left text is
// always compared with line N of the right text. Inside a changed pair the
// characters are lined up with a greedy forward scan, which is good enough
// for eyeballing two short strings but is not a minimal edit script.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    Same,
    Removed,
    Added,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiffSpan {
    pub text: String,
    pub changed: bool,
}

impl DiffSpan {
    pub fn new(text: impl Into<String>, changed: bool) -> Self {
        Self {
            text: text.into(),
            changed,
        }
    }

    fn unchanged_char(c: char) -> Self {
        Self::new(c, false)
    }

    fn changed_char(c: char) -> Self {
        Self::new(c, true)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineContent {
    Literal(String),
    Spans(Vec<DiffSpan>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    /// 1-based line number, shared by the removed/added pair of a changed line.
    pub number: usize,
    pub status: DiffStatus,
    pub content: LineContent,
}

impl DiffLine {
    fn same(number: usize, line: &str) -> Self {
        Self {
            number,
            status: DiffStatus::Same,
            content: LineContent::Literal(line.to_string()),
        }
    }

    fn spans(number: usize, status: DiffStatus, spans: Vec<DiffSpan>) -> Self {
        Self {
            number,
            status,
            content: LineContent::Spans(spans),
        }
    }

    /// The full line text, whatever the content shape.
    pub fn text(&self) -> String {
        match &self.content {
            LineContent::Literal(s) => s.clone(),
            LineContent::Spans(spans) => spans.iter().map(|s| s.text.as_str()).collect(),
        }
    }
}

/// Compares two texts line by line.
///
/// Identical lines yield one `Same` row. A line present on both sides but
/// different yields a `Removed` row followed by an `Added` row carrying
/// per-character spans. A line present on one side only is a single changed
/// span on that side.
pub fn diff_lines(text_a: &str, text_b: &str) -> Vec<DiffLine> {
    let lines_a: Vec<&str> = text_a.split('\n').collect();
    let lines_b: Vec<&str> = text_b.split('\n').collect();
    let count = lines_a.len().max(lines_b.len());

    let mut out = Vec::with_capacity(count);
    for idx in 0..count {
        let number = idx + 1;
        match (lines_a.get(idx), lines_b.get(idx)) {
            (Some(a), Some(b)) if a == b => out.push(DiffLine::same(number, a)),
            (Some(a), Some(b)) => {
                let (left, right) = align_chars(a, b);
                out.push(DiffLine::spans(number, DiffStatus::Removed, left));
                out.push(DiffLine::spans(number, DiffStatus::Added, right));
            }
            (Some(a), None) => out.push(DiffLine::spans(
                number,
                DiffStatus::Removed,
                vec![DiffSpan::new(*a, true)],
            )),
            (None, Some(b)) => out.push(DiffLine::spans(
                number,
                DiffStatus::Added,
                vec![DiffSpan::new(*b, true)],
            )),
            (None, None) => break,
        }
    }
    out
}

/// Lines up the characters of two strings, one span per character.
///
/// On a mismatch the scan jumps to the first position pair `(k, l)` with
/// `a[k] == b[l]`, trying every `l` for the smallest `k` first. Everything
/// skipped over is marked changed. With no common character left, the rest
/// of both sides is changed.
pub fn align_chars(a: &str, b: &str) -> (Vec<DiffSpan>, Vec<DiffSpan>) {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut left = Vec::with_capacity(a.len());
    let mut right = Vec::with_capacity(b.len());
    let (mut i, mut j) = (0usize, 0usize);

    while i < a.len() || j < b.len() {
        if i < a.len() && j < b.len() && a[i] == b[j] {
            left.push(DiffSpan::unchanged_char(a[i]));
            right.push(DiffSpan::unchanged_char(b[j]));
            i += 1;
            j += 1;
            continue;
        }

        match next_match(&a, &b, i, j) {
            Some((k, l)) => {
                left.extend(a[i..k].iter().copied().map(DiffSpan::changed_char));
                right.extend(b[j..l].iter().copied().map(DiffSpan::changed_char));
                i = k;
                j = l;
            }
            None => {
                left.extend(a[i..].iter().copied().map(DiffSpan::changed_char));
                right.extend(b[j..].iter().copied().map(DiffSpan::changed_char));
                break;
            }
        }
    }

    (left, right)
}

fn next_match(a: &[char], b: &[char], i: usize, j: usize) -> Option<(usize, usize)> {
    (i..a.len()).find_map(|k| (j..b.len()).find(|&l| a[k] == b[l]).map(|l| (k, l)))
}

/// Merges neighbouring spans with the same flag, for rendering.
pub fn coalesce(spans: &[DiffSpan]) -> Vec<DiffSpan> {
    let mut out: Vec<DiffSpan> = Vec::new();
    for span in spans {
        match out.last_mut() {
            Some(last) if last.changed == span.changed => last.text.push_str(&span.text),
            _ => out.push(span.clone()),
        }
    }
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub same: usize,
    pub removed: usize,
    pub added: usize,
}

pub fn summarize(lines: &[DiffLine]) -> DiffSummary {
    lines.iter().fold(DiffSummary::default(), |mut acc, line| {
        match line.status {
            DiffStatus::Same => acc.same += 1,
            DiffStatus::Removed => acc.removed += 1,
            DiffStatus::Added => acc.added += 1,
        }
        acc
    })
}

/// Plain-text rendering for the clipboard: `"  3 | text"`, `"- 3 | text"`, `"+ 3 | text"`.
pub fn render_plain(lines: &[DiffLine]) -> String {
    let width = lines
        .iter()
        .map(|l| l.number.to_string().len())
        .max()
        .unwrap_or(1);
    lines
        .iter()
        .map(|line| {
            let marker = match line.status {
                DiffStatus::Same => ' ',
                DiffStatus::Removed => '-',
                DiffStatus::Added => '+',
            };
            format!("{marker} {:>width$} | {}", line.number, line.text())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, changed: bool) -> DiffSpan {
        DiffSpan::new(text, changed)
    }

    fn spans_of(line: &DiffLine) -> &[DiffSpan] {
        match &line.content {
            LineContent::Spans(s) => s,
            LineContent::Literal(_) => panic!("expected spans on line {}", line.number),
        }
    }

    #[test]
    fn identical_texts_are_all_same() {
        let text = "flag{one}\n\nsecond line\nthird";
        let lines = diff_lines(text, text);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.status == DiffStatus::Same));
        assert_eq!(lines[2].content, LineContent::Literal("second line".into()));
        assert_eq!(
            lines.iter().map(|l| l.number).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn cat_vs_bat() {
        let lines = diff_lines("cat", "bat");
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0].status, DiffStatus::Removed);
        assert_eq!(lines[0].number, 1);
        assert_eq!(
            spans_of(&lines[0]),
            &[span("c", true), span("a", false), span("t", false)]
        );

        assert_eq!(lines[1].status, DiffStatus::Added);
        assert_eq!(lines[1].number, 1);
        assert_eq!(
            spans_of(&lines[1]),
            &[span("b", true), span("a", false), span("t", false)]
        );
    }

    #[test]
    fn extra_line_on_the_left() {
        let lines = diff_lines("a\nb", "a");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], DiffLine::same(1, "a"));
        assert_eq!(lines[1].status, DiffStatus::Removed);
        assert_eq!(lines[1].number, 2);
        assert_eq!(spans_of(&lines[1]), &[span("b", true)]);
    }

    #[test]
    fn extra_line_on_the_right() {
        let lines = diff_lines("a", "a\nnew");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].status, DiffStatus::Added);
        assert_eq!(spans_of(&lines[1]), &[span("new", true)]);
    }

    #[test]
    fn greedy_tie_break_prefers_smallest_left_index() {
        // At the mismatch (x vs b) the scan tries k=0 ('x') first and finds it
        // at l=2, even though k=1 ('b') would have matched l=0.
        let (left, right) = align_chars("xbc", "bcx");
        assert_eq!(coalesce(&left), vec![span("x", false), span("bc", true)]);
        assert_eq!(coalesce(&right), vec![span("bc", true), span("x", false)]);
    }

    #[test]
    fn greedy_not_lcs() {
        // "abcd" vs "dabc": k=0 ('a') first matches l=1, so 'd' is an insertion
        // at the front and the trailing 'd' on the left is a deletion.
        let (left, right) = align_chars("abcd", "dabc");
        assert_eq!(coalesce(&left), vec![span("abc", false), span("d", true)]);
        assert_eq!(coalesce(&right), vec![span("d", true), span("abc", false)]);
    }

    #[test]
    fn nothing_in_common() {
        let (left, right) = align_chars("abc", "xy");
        assert_eq!(coalesce(&left), vec![span("abc", true)]);
        assert_eq!(coalesce(&right), vec![span("xy", true)]);
    }

    #[test]
    fn one_side_empty() {
        let (left, right) = align_chars("", "hi");
        assert!(left.is_empty());
        assert_eq!(coalesce(&right), vec![span("hi", true)]);
    }

    #[test]
    fn spans_reassemble_the_lines() {
        let a = "CTF{s0me_fl4g}";
        let b = "CTF{some_flag!}";
        let lines = diff_lines(a, b);
        assert_eq!(lines[0].text(), a);
        assert_eq!(lines[1].text(), b);
    }

    #[test]
    fn multibyte_characters_are_single_units() {
        let (left, right) = align_chars("héllo", "hallo");
        assert_eq!(
            coalesce(&left),
            vec![span("h", false), span("é", true), span("llo", false)]
        );
        assert_eq!(
            coalesce(&right),
            vec![span("h", false), span("a", true), span("llo", false)]
        );
    }

    #[test]
    fn summary_and_plain_rendering() {
        let lines = diff_lines("same\nold", "same\nnew\nextra");
        assert_eq!(
            summarize(&lines),
            DiffSummary {
                same: 1,
                removed: 1,
                added: 2
            }
        );
        assert_eq!(
            render_plain(&lines),
            "  1 | same\n- 2 | old\n+ 2 | new\n+ 3 | extra"
        );
    }

    #[test]
    fn serializes_for_json_copy() {
        let lines = diff_lines("a", "b");
        let json = serde_json::to_value(&lines).unwrap();
        assert_eq!(json[0]["status"], "removed");
        assert_eq!(json[0]["content"]["spans"][0]["changed"], true);
    }
}
