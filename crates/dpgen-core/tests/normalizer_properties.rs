//! Property-based tests for input normalization.
//!
//! Normalization must accept any string and always produce a config whose
//! fields satisfy their invariants.

use dpgen_core::domain::{
    DomainValidator, FORBIDDEN_NAME_CHARS, InputNormalizer, LATEST_PACK_FORMAT,
};
use proptest::prelude::*;

/// Strings biased towards the interesting characters: separators, forbidden
/// filesystem characters, digits, case and whitespace.
fn raw_input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(','),
            prop::sample::select(FORBIDDEN_NAME_CHARS.to_vec()),
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
            prop::char::range('0', '9'),
            prop::sample::select(vec![' ', '_', '-', '+', '\t', 'é', 'ß']),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

#[test]
fn prop_normalize_never_fails_and_keeps_invariants() {
    proptest!(|(raw in raw_input_strategy())| {
        let config = InputNormalizer::normalize(&raw);

        prop_assert!(
            config.namespace().chars().all(|c| c.is_ascii_lowercase()),
            "namespace {:?} must match ^[a-z]*$", config.namespace()
        );
        prop_assert!(
            !config.name().chars().any(|c| FORBIDDEN_NAME_CHARS.contains(&c)),
            "name {:?} must not contain forbidden characters", config.name()
        );
        prop_assert!(!config.name().trim().is_empty());
        prop_assert!(!config.description().is_empty());
        prop_assert!(DomainValidator::validate_config(&config).is_ok());
    });
}

#[test]
fn prop_arbitrary_unicode_never_fails() {
    proptest!(|(raw in any::<String>())| {
        let config = InputNormalizer::normalize(&raw);
        prop_assert!(DomainValidator::validate_namespace(config.namespace()));
    });
}

#[test]
fn prop_numeric_pack_format_round_trips() {
    proptest!(|(format in any::<i64>())| {
        let config = InputNormalizer::normalize(&format!("P,ns,d,{format}"));
        prop_assert_eq!(config.pack_format(), format);
    });
}

#[test]
fn prop_non_numeric_pack_format_falls_back() {
    proptest!(|(garbage in "[a-zA-Z ]{0,12}")| {
        let config = InputNormalizer::normalize(&format!("P,ns,d,{garbage}"));
        prop_assert_eq!(config.pack_format(), LATEST_PACK_FORMAT);
    });
}
