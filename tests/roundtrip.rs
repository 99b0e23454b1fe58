use ctf_toolbox::convert::{convert, decode, encode, FormatTag};
use ctf_toolbox::diff::{align_chars, diff_lines, DiffStatus};
use proptest::prelude::*;

fn format_tag() -> impl Strategy<Value = FormatTag> {
    prop::sample::select(FormatTag::ALL.to_vec())
}

proptest! {
    #[test]
    fn any_bytes_survive_any_format_pair(
        bytes in prop::collection::vec(any::<u8>(), 1..64),
        from in format_tag(),
        to in format_tag(),
    ) {
        // Blank text converts to "", so all-whitespace buffers can't round-trip through `text`.
        prop_assume!(!bytes.iter().all(|&b| char::from(b).is_whitespace()));

        let source = encode(&bytes, from);
        let converted = convert(&source, from, to).unwrap();
        prop_assert_eq!(decode(&converted, to).unwrap(), bytes);
    }

    #[test]
    fn aligned_spans_rebuild_both_lines(a in "[a-d]{0,12}", b in "[a-d]{0,12}") {
        let (left, right) = align_chars(&a, &b);
        prop_assert_eq!(left.iter().map(|s| s.text.as_str()).collect::<String>(), a.clone());
        prop_assert_eq!(right.iter().map(|s| s.text.as_str()).collect::<String>(), b.clone());
        if a == b {
            prop_assert!(left.iter().chain(&right).all(|s| !s.changed));
        }
    }

    #[test]
    fn identical_texts_are_all_same(text in "[a-z \n]{0,40}") {
        let lines = diff_lines(&text, &text);
        prop_assert_eq!(lines.len(), text.split('\n').count());
        prop_assert!(lines.iter().all(|l| l.status == DiffStatus::Same));
    }
}

#[test]
fn flag_through_every_format() {
    let flag = "flag{h3x_k1t}";
    let mut current = flag.to_string();
    let mut from = FormatTag::Text;
    for to in [FormatTag::Hex, FormatTag::Binary, FormatTag::Decimal, FormatTag::Base64, FormatTag::Text] {
        current = convert(&current, from, to).unwrap();
        from = to;
    }
    assert_eq!(current, flag);
}
