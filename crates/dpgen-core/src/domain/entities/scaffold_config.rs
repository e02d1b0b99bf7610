//! The validated, defaulted configuration a data pack is generated from.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Pack name used when the name field is missing or blank.
pub const DEFAULT_NAME: &str = "Datapack";

/// Namespace used when the namespace field is missing or strips to nothing.
pub const DEFAULT_NAMESPACE: &str = "ns";

/// Description used when the description field is empty.
pub const DEFAULT_DESCRIPTION: &str = "Generated using Datapack Generator";

/// Latest pack format this tool knows about.
pub const LATEST_PACK_FORMAT: i64 = 15;

/// Characters that are replaced with `-` in pack names.
pub const FORBIDDEN_NAME_CHARS: [char; 8] = ['<', '>', ':', '"', '/', '\\', '|', '?'];

/// Configuration for one generated data pack.
///
/// Built once per invocation, either by [`InputNormalizer`] (which never
/// fails) or by [`ScaffoldConfig::new`] (which checks the invariants), and
/// never mutated afterwards.
///
/// Invariants:
/// - `name` contains none of [`FORBIDDEN_NAME_CHARS`]
/// - `namespace` matches `^[a-z]*$`
///
/// [`InputNormalizer`]: crate::domain::InputNormalizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldConfig {
    name: String,
    namespace: String,
    description: String,
    pack_format: i64,
}

impl ScaffoldConfig {
    /// Construct a config from already-clean values.
    ///
    /// Unlike normalization this rejects values that break the invariants
    /// instead of repairing them.
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        description: impl Into<String>,
        pack_format: i64,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let namespace = namespace.into();

        if let Some(c) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
            return Err(DomainError::InvalidConfig {
                field: "name",
                reason: format!("'{}' contains forbidden character '{}'", name, c),
            });
        }

        if !is_valid_namespace(&namespace) {
            return Err(DomainError::InvalidConfig {
                field: "namespace",
                reason: format!("'{}' must only contain lowercase letters a-z", namespace),
            });
        }

        Ok(Self::from_parts(name, namespace, description.into(), pack_format))
    }

    /// Assemble without checking; callers guarantee the invariants.
    pub(crate) fn from_parts(
        name: String,
        namespace: String,
        description: String,
        pack_format: i64,
    ) -> Self {
        Self {
            name,
            namespace,
            description,
            pack_format,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn pack_format(&self) -> i64 {
        self.pack_format
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self::from_parts(
            DEFAULT_NAME.into(),
            DEFAULT_NAMESPACE.into(),
            DEFAULT_DESCRIPTION.into(),
            LATEST_PACK_FORMAT,
        )
    }
}

impl fmt::Display for ScaffoldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}:*, pack_format {})",
            self.name, self.namespace, self.pack_format
        )
    }
}

pub(crate) fn is_valid_namespace(namespace: &str) -> bool {
    namespace.chars().all(|c| c.is_ascii_lowercase())
}
