// src/frequency.rs: character frequency analysis

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyOptions {
    pub ignore_case: bool,
    pub ignore_spaces: bool,
    pub ignore_punctuation: bool,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            ignore_spaces: false,
            ignore_punctuation: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub ch: char,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FrequencyReport {
    pub total: usize,
    pub entries: Vec<FrequencyEntry>,
}

fn keep(c: char, options: &FrequencyOptions) -> bool {
    if options.ignore_punctuation && !(c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()) {
        return false;
    }
    if options.ignore_spaces && c.is_whitespace() {
        return false;
    }
    true
}

pub fn analyze(text: &str, options: &FrequencyOptions) -> FrequencyReport {
    let processed: String = if options.ignore_case {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    // (char, count) in first-appearance order.
    let mut counts: Vec<(char, usize)> = Vec::new();
    let mut total = 0usize;
    for c in processed.chars().filter(|&c| keep(c, options)) {
        total += 1;
        match counts.iter_mut().find(|(seen, _)| *seen == c) {
            Some((_, n)) => *n += 1,
            None => counts.push((c, 1)),
        }
    }
    // Ties: ASCII digits first in ascending order, then first appearance.
    counts.sort_by_key(|&(c, _)| if c.is_ascii_digit() { (0, c) } else { (1, '\0') });
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let entries = counts
        .into_iter()
        .map(|(ch, count)| FrequencyEntry {
            ch,
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();

    FrequencyReport { total, entries }
}

/// Visible label for whitespace characters in the result table.
pub fn display_char(c: char) -> String {
    match c {
        ' ' => "␣".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        other => other.to_string(),
    }
}

impl FrequencyReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest count, used to scale the bars.
    pub fn max_count(&self) -> usize {
        self.entries.first().map(|e| e.count).unwrap_or(0)
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}: {} ({:.2}%)", e.ch, e.count, e.percentage))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_fold_case_and_drop_punctuation() {
        let r = analyze("Aa, b!", &FrequencyOptions::default());
        // "aa b" -> a:2, ' ':1, b:1
        assert_eq!(r.total, 4);
        assert_eq!(r.entries[0].ch, 'a');
        assert_eq!(r.entries[0].count, 2);
        assert!((r.entries[0].percentage - 50.0).abs() < 1e-9);
        assert_eq!(
            r.entries.iter().map(|e| e.ch).collect::<String>(),
            "a b"
        );
    }

    #[test]
    fn ignore_spaces() {
        let opts = FrequencyOptions {
            ignore_spaces: true,
            ..FrequencyOptions::default()
        };
        let r = analyze("a b\nc\ta", &opts);
        assert_eq!(r.total, 4);
        assert!(r.entries.iter().all(|e| !e.ch.is_whitespace()));
    }

    #[test]
    fn keep_everything() {
        let opts = FrequencyOptions {
            ignore_case: false,
            ignore_spaces: false,
            ignore_punctuation: false,
        };
        let r = analyze("Aa!", &opts);
        assert_eq!(r.total, 3);
        assert_eq!(r.entries.len(), 3);
    }

    #[test]
    fn non_ascii_counts_as_punctuation() {
        let r = analyze("éa", &FrequencyOptions::default());
        assert_eq!(r.total, 1);
        assert_eq!(r.entries[0].ch, 'a');
    }

    #[test]
    fn ties_keep_first_appearance() {
        let r = analyze("zyxzyx", &FrequencyOptions::default());
        assert_eq!(r.entries.iter().map(|e| e.ch).collect::<String>(), "zyx");
    }

    #[test]
    fn tied_digits_come_first_in_ascending_order() {
        let r = analyze("b1b1", &FrequencyOptions::default());
        assert_eq!(r.entries.iter().map(|e| e.ch).collect::<String>(), "1b");
        let r = analyze("zz9a3a93", &FrequencyOptions::default());
        assert_eq!(r.entries.iter().map(|e| e.ch).collect::<String>(), "39za");
    }

    #[test]
    fn empty_after_processing() {
        let r = analyze("!!!", &FrequencyOptions::default());
        assert_eq!(r, FrequencyReport::default());
        assert_eq!(r.max_count(), 0);
    }

    #[test]
    fn render_format() {
        let r = analyze("aab", &FrequencyOptions::default());
        assert_eq!(r.render(), "a: 2 (66.67%)\nb: 1 (33.33%)");
        assert_eq!(r.max_count(), 2);
    }

    #[test]
    fn whitespace_labels() {
        assert_eq!(display_char(' '), "␣");
        assert_eq!(display_char('\n'), "\\n");
        assert_eq!(display_char('q'), "q");
    }
}
