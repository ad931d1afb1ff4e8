//! Property tests for the pure header splice.

use proptest::prelude::*;

use fix_includes::domain::header::split_lines;
use fix_includes::{replace_header, HEADER_BLOCK, HEADER_LEN};

fn line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~\t]{0,40}\n")
        .unwrap()
}

fn file_lines() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(line(), 0..32)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the first seven output lines are the header block and the
    /// rest are the input's lines from index 7 on, in order.
    #[test]
    fn property_header_then_body(lines in file_lines()) {
        let input = lines.concat();
        let output = replace_header(&input);
        let out_lines = split_lines(&output);

        prop_assert_eq!(&out_lines[..HEADER_LEN], &HEADER_BLOCK[..]);
        let body: Vec<&str> = lines.iter().skip(HEADER_LEN).map(String::as_str).collect();
        prop_assert_eq!(&out_lines[HEADER_LEN..], &body[..]);
    }

    /// PROPERTY: running twice equals running once.
    #[test]
    fn property_idempotent(input in "(?s).{0,512}") {
        let once = replace_header(&input);
        prop_assert_eq!(replace_header(&once), once.clone());
    }

    /// PROPERTY: inputs shorter than the header collapse to the header.
    #[test]
    fn property_short_input_is_header_only(lines in proptest::collection::vec(line(), 0..HEADER_LEN)) {
        prop_assert_eq!(replace_header(&lines.concat()), HEADER_BLOCK.concat());
    }

    /// PROPERTY: splitting never loses characters.
    #[test]
    fn property_split_lines_concat_round_trip(input in "(?s).{0,256}") {
        prop_assert_eq!(split_lines(&input).concat(), input);
    }
}
