//! Property tests for slug generation.

use apidb::slugify;
use proptest::prelude::*;

proptest! {
    /// Slugs only ever contain `[a-z0-9/-]`, with no hyphen runs and no
    /// hyphens at either end, whatever the input label.
    #[test]
    fn slug_alphabet_is_url_safe(label in ".*") {
        let slug = slugify(&label);
        prop_assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '/' || c == '-'),
            "bad slug {slug:?} for {label:?}"
        );
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    /// An ampersand between two words always spells out as `-and-`.
    #[test]
    fn ampersand_spells_out(a in "[A-Za-z]{1,12}", b in "[A-Za-z]{1,12}") {
        let slug = slugify(&format!("{a} & {b}"));
        prop_assert_eq!(slug, format!("{}-and-{}", a.to_lowercase(), b.to_lowercase()));
    }

    /// Slugging is idempotent: a slug slugs to itself.
    #[test]
    fn slug_is_fixed_point(label in "[ A-Za-z0-9&/,!-]{0,40}") {
        let slug = slugify(&label);
        prop_assert_eq!(slugify(&slug), slug);
    }
}
