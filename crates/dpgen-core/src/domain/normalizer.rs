//! Turns the raw prompt string into a [`ScaffoldConfig`].
//!
//! The raw format is `<name>,<namespace>,<description>,<pack_format>`.
//! Every field is optional, the split is a plain split on `,` (there is no
//! escaping, so a comma inside the description shifts the remaining
//! fields), and no input can make normalization fail.

use tracing::debug;

use crate::domain::entities::scaffold_config::{
    DEFAULT_DESCRIPTION, DEFAULT_NAME, DEFAULT_NAMESPACE, FORBIDDEN_NAME_CHARS,
    LATEST_PACK_FORMAT, ScaffoldConfig,
};

/// Stateless input normalizer.
pub struct InputNormalizer;

impl InputNormalizer {
    /// Parse a raw comma-delimited string into a defaulted config.
    pub fn normalize(raw: &str) -> ScaffoldConfig {
        let mut fields = raw.split(',');
        let (name, namespace, description, pack_format) =
            (fields.next(), fields.next(), fields.next(), fields.next());

        Self::from_fields(name, namespace, description, pack_format)
    }

    /// Apply the per-field rules to already separated fields.
    ///
    /// `None` and `Some("")` are treated the same.
    pub fn from_fields(
        name: Option<&str>,
        namespace: Option<&str>,
        description: Option<&str>,
        pack_format: Option<&str>,
    ) -> ScaffoldConfig {
        let name = name.and_then(Self::sanitize_name).unwrap_or_else(|| {
            debug!(default = DEFAULT_NAME, "Using default pack name");
            DEFAULT_NAME.to_string()
        });

        let namespace = namespace
            .and_then(Self::sanitize_namespace)
            .unwrap_or_else(|| {
                debug!(default = DEFAULT_NAMESPACE, "Using default namespace");
                DEFAULT_NAMESPACE.to_string()
            });

        let description = description
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                debug!("Using default description");
                DEFAULT_DESCRIPTION.to_string()
            });

        let pack_format = pack_format
            .and_then(Self::parse_pack_format)
            .unwrap_or_else(|| {
                debug!(default = LATEST_PACK_FORMAT, "Using latest pack format");
                LATEST_PACK_FORMAT
            });

        ScaffoldConfig::from_parts(name, namespace, description, pack_format)
    }

    /// Replace every forbidden filesystem character with `-`.
    ///
    /// Returns `None` when nothing usable is left (empty or whitespace).
    pub fn sanitize_name(raw: &str) -> Option<String> {
        if raw.trim().is_empty() {
            return None;
        }

        Some(
            raw.chars()
                .map(|c| if FORBIDDEN_NAME_CHARS.contains(&c) { '-' } else { c })
                .collect(),
        )
    }

    /// Lowercase, then drop everything outside `a-z`.
    ///
    /// Digits, underscores and dashes vanish rather than being rejected.
    pub fn sanitize_namespace(raw: &str) -> Option<String> {
        let namespace: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase())
            .collect();

        (!namespace.is_empty()).then_some(namespace)
    }

    /// Parse the leading integer of `raw`.
    ///
    /// Leading whitespace and a sign are accepted and trailing garbage is
    /// ignored, so `"15abc"` is 15. No digits, or overflow, yields `None`.
    pub fn parse_pack_format(raw: &str) -> Option<i64> {
        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        if end == 0 {
            return None;
        }

        let digits = &unsigned[..end];
        let signed = if negative {
            format!("-{digits}")
        } else {
            digits.to_string()
        };
        signed.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_input_is_taken_verbatim() {
        let config = InputNormalizer::normalize("MyPack,myns,A cool pack,15");

        assert_eq!(config.name(), "MyPack");
        assert_eq!(config.namespace(), "myns");
        assert_eq!(config.description(), "A cool pack");
        assert_eq!(config.pack_format(), 15);
    }

    #[test]
    fn all_commas_yield_defaults() {
        assert_eq!(InputNormalizer::normalize(",,,"), ScaffoldConfig::default());
    }

    #[test]
    fn empty_string_yields_defaults() {
        assert_eq!(InputNormalizer::normalize(""), ScaffoldConfig::default());
    }

    #[test]
    fn forbidden_characters_are_replaced_and_namespace_stripped() {
        let config = InputNormalizer::normalize("My<Pack>,My_NS-1,,abc");

        assert_eq!(config.name(), "My-Pack-");
        assert_eq!(config.namespace(), "myns");
        assert_eq!(config.description(), DEFAULT_DESCRIPTION);
        assert_eq!(config.pack_format(), LATEST_PACK_FORMAT);
    }

    #[test]
    fn every_forbidden_character_is_replaced() {
        let name = InputNormalizer::sanitize_name(r#"a<b>c:d"e/f\g|h?i"#).unwrap();
        assert_eq!(name, "a-b-c-d-e-f-g-h-i");
    }

    #[test]
    fn whitespace_name_falls_back() {
        let config = InputNormalizer::normalize("   ,x");
        assert_eq!(config.name(), DEFAULT_NAME);
    }

    #[test]
    fn namespace_that_strips_to_nothing_falls_back() {
        let config = InputNormalizer::normalize("Pack,123_-");
        assert_eq!(config.namespace(), DEFAULT_NAMESPACE);
    }

    #[test]
    fn uppercase_namespace_is_lowercased_not_dropped() {
        assert_eq!(
            InputNormalizer::sanitize_namespace("MyPack").as_deref(),
            Some("mypack")
        );
    }

    #[test]
    fn missing_trailing_fields_default() {
        let config = InputNormalizer::normalize("OnlyName");

        assert_eq!(config.name(), "OnlyName");
        assert_eq!(config.namespace(), DEFAULT_NAMESPACE);
        assert_eq!(config.description(), DEFAULT_DESCRIPTION);
        assert_eq!(config.pack_format(), LATEST_PACK_FORMAT);
    }

    #[test]
    fn embedded_comma_in_description_mis_splits() {
        let config = InputNormalizer::normalize("Pack,ns,Hello, world,12");

        assert_eq!(config.description(), "Hello");
        // " world" has no leading digits
        assert_eq!(config.pack_format(), LATEST_PACK_FORMAT);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let config = InputNormalizer::normalize("Pack,ns,desc,10,extra,fields");
        assert_eq!(config.pack_format(), 10);
    }

    #[test]
    fn pack_format_leading_integer() {
        assert_eq!(InputNormalizer::parse_pack_format("15"), Some(15));
        assert_eq!(InputNormalizer::parse_pack_format(" 12"), Some(12));
        assert_eq!(InputNormalizer::parse_pack_format("15abc"), Some(15));
        assert_eq!(InputNormalizer::parse_pack_format("-3"), Some(-3));
        assert_eq!(InputNormalizer::parse_pack_format("+7"), Some(7));
        assert_eq!(InputNormalizer::parse_pack_format("abc"), None);
        assert_eq!(InputNormalizer::parse_pack_format(""), None);
        assert_eq!(InputNormalizer::parse_pack_format("-"), None);
        assert_eq!(
            InputNormalizer::parse_pack_format("99999999999999999999999"),
            None
        );
    }

    #[test]
    fn description_whitespace_is_kept() {
        let config = InputNormalizer::normalize("Pack,ns,  spaced  ,1");
        assert_eq!(config.description(), "  spaced  ");
    }

    #[test]
    fn from_fields_matches_normalize() {
        let from_fields =
            InputNormalizer::from_fields(Some("A|B"), Some("Foo9"), None, Some("x"));
        assert_eq!(from_fields, InputNormalizer::normalize("A|B,Foo9,,x"));
    }
}
