// src/reverse.rs: string reversal

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReverseMode {
    Chars,
    Words,
    Lines,
}

impl ReverseMode {
    pub const ALL: [ReverseMode; 3] = [ReverseMode::Chars, ReverseMode::Words, ReverseMode::Lines];

    pub fn label(self) -> &'static str {
        match self {
            ReverseMode::Chars => "Reverse All",
            ReverseMode::Words => "Reverse Words",
            ReverseMode::Lines => "Reverse Lines",
        }
    }
}

pub fn apply(input: &str, mode: ReverseMode, toggle_case: bool) -> String {
    let reversed = match mode {
        ReverseMode::Chars => reverse_chars(input),
        ReverseMode::Words => reverse_words(input),
        ReverseMode::Lines => input
            .split('\n')
            .map(reverse_chars)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    if toggle_case {
        swap_ascii_case(&reversed)
    } else {
        reversed
    }
}

fn reverse_chars(s: &str) -> String {
    s.chars().rev().collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Reverses each word in place. Only whitespace runs with a word character
/// on both sides separate words; a segment that still holds whitespace
/// (after punctuation, at the ends) is left as it is.
fn reverse_words(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut segment_start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_whitespace() {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        let bounded = run_start > 0
            && is_word_char(chars[run_start - 1])
            && i < chars.len()
            && is_word_char(chars[i]);
        if bounded {
            push_segment(&mut out, &chars[segment_start..run_start]);
            out.extend(&chars[run_start..i]);
            segment_start = i;
        }
    }
    push_segment(&mut out, &chars[segment_start..]);
    out
}

fn push_segment(out: &mut String, segment: &[char]) {
    if segment.iter().any(|c| c.is_whitespace()) {
        out.extend(segment);
    } else {
        out.extend(segment.iter().rev());
    }
}

fn swap_ascii_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}
