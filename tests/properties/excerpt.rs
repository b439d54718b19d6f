//! Property tests for YAML error excerpts.

use proptest::prelude::*;

use ansible_preflight::verify::{excerpt, ERROR_EXCERPT_CHARS};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an excerpt never exceeds the character limit, even for multibyte input.
    #[test]
    fn property_excerpt_respects_char_limit(s in "(?s).{0,200}") {
        let out = excerpt(&s, ERROR_EXCERPT_CHARS);
        prop_assert!(out.chars().count() <= ERROR_EXCERPT_CHARS);
    }

    /// PROPERTY: an excerpt is a prefix of the original message.
    #[test]
    fn property_excerpt_is_prefix(s in "(?s).{0,200}") {
        let out = excerpt(&s, ERROR_EXCERPT_CHARS);
        prop_assert!(s.starts_with(&out));
    }

    /// PROPERTY: short messages pass through untouched.
    #[test]
    fn property_short_message_unchanged(s in "[a-z ]{0,40}") {
        prop_assert_eq!(excerpt(&s, ERROR_EXCERPT_CHARS), s);
    }
}
