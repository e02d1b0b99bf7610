//! Domain value objects: OpenWindowPolicy.
//!
//! # Design
//!
//! These are pure value types: `Copy`, compared by value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

// ── OpenWindowPolicy ─────────────────────────────────────────────────────────

/// What to do with a freshly created pack folder.
///
/// The core only returns the created root; this policy is forwarded to the
/// post-action collaborator that decides whether to open it.
///
/// Serializes as `ask`/`always`/`never`. Deserializing also takes the
/// tri-state form, so `open_new_window = false` in a config file (or
/// `DPGEN__GENERATOR__OPEN_NEW_WINDOW=false`) means [`Self::Never`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenWindowPolicy {
    /// Ask the user every time (the tri-state `null`).
    #[default]
    Ask,
    /// Always open (`true`).
    Always,
    /// Never open (`false`).
    Never,
}

impl OpenWindowPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ask => "ask",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl From<Option<bool>> for OpenWindowPolicy {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Ask,
            Some(true) => Self::Always,
            Some(false) => Self::Never,
        }
    }
}

impl From<OpenWindowPolicy> for Option<bool> {
    fn from(policy: OpenWindowPolicy) -> Self {
        match policy {
            OpenWindowPolicy::Ask => None,
            OpenWindowPolicy::Always => Some(true),
            OpenWindowPolicy::Never => Some(false),
        }
    }
}

impl fmt::Display for OpenWindowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OpenWindowPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PolicyVisitor)
    }
}

struct PolicyVisitor;

impl<'de> de::Visitor<'de> for PolicyVisitor {
    type Value = OpenWindowPolicy;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ask, always, never, a boolean, or null")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(OpenWindowPolicy::from(Some(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OpenWindowPolicy::Ask)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OpenWindowPolicy::Ask)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl FromStr for OpenWindowPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ask" | "null" | "prompt" => Ok(Self::Ask),
            "always" | "true" | "yes" => Ok(Self::Always),
            "never" | "false" | "no" => Ok(Self::Never),
            other => Err(DomainError::InvalidConfig {
                field: "open_new_window",
                reason: format!("'{}' is not one of: ask, always, never", other),
            }),
        }
    }
}
