use crate::domain::{
    entities::{FileTree, ScaffoldConfig, scaffold_config},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Re-check the config invariants.
    ///
    /// Normalized configs always pass; this guards configs assembled by
    /// other means before anything touches the disk.
    pub fn validate_config(config: &ScaffoldConfig) -> Result<(), DomainError> {
        ScaffoldConfig::new(
            config.name(),
            config.namespace(),
            config.description(),
            config.pack_format(),
        )
        .map(|_| ())
    }

    pub fn validate_namespace(namespace: &str) -> bool {
        scaffold_config::is_valid_namespace(namespace)
    }

    pub fn validate_file_tree(tree: &FileTree) -> Result<(), DomainError> {
        tree.validate()
    }
}
