// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// There is intentionally no "invalid input" variant: raw prompt input is
/// always normalized to defaults, never rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Duplicate path in file tree: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed in file tree: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("File tree is empty")]
    EmptyTree,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfig { field, .. } => match *field {
                "name" => vec![
                    "Pack names cannot contain < > : \" / \\ | ?".into(),
                    "Pass the name through the prompt to have it sanitized".into(),
                ],
                "namespace" => vec![
                    "Namespaces may only contain lowercase letters a-z".into(),
                    "Example: mypack".into(),
                ],
                _ => vec![format!("Check the value given for '{}'", field)],
            },
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyTree => {
                vec!["The generated layout is inconsistent; please report this issue".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
