//! Property tests for inventory value matching.

use proptest::prelude::*;

use ansible_preflight::layout::EXPECTED_VALUES;

fn filler() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 #;\\[\\]\n]{0,64}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a needle is found wherever it appears in the inventory text.
    #[test]
    fn property_needle_found_anywhere(before in filler(), after in filler(), idx in 0usize..4) {
        let expected = EXPECTED_VALUES[idx];
        let content = format!("{before}{}{after}", expected.needle);
        prop_assert!(expected.is_present_in(&content));
    }

    /// PROPERTY: text without `=` never satisfies any expected value.
    #[test]
    fn property_no_equals_never_matches(content in filler()) {
        prop_assert!(EXPECTED_VALUES.iter().all(|v| !v.is_present_in(&content)));
    }
}
