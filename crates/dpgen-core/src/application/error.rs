//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// The kind of filesystem step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    CreateDirectory,
    WriteFile,
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDirectory => f.write_str("create directory"),
            Self::WriteFile => f.write_str("write file"),
        }
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A directory creation or file write failed.
    ///
    /// Earlier steps are not rolled back.
    #[error("Failed to {operation} at {path}: {reason}")]
    ScaffoldWrite {
        path: PathBuf,
        operation: WriteOperation,
        reason: String,
    },

    /// A template store could not provide a template body.
    #[error("Template '{template}' unavailable: {reason}")]
    TemplateUnavailable { template: String, reason: String },

    /// The input collaborator failed (not the same as the user cancelling).
    #[error("Could not read input: {reason}")]
    InputFailed { reason: String },

    /// The post-action collaborator failed after the pack was written.
    #[error("Post action failed for {path}: {reason}")]
    PostActionFailed { path: PathBuf, reason: String },

    /// Shared adapter state is unusable (lock poisoned, etc.).
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ScaffoldWrite {
                path, operation, ..
            } => vec![
                format!("Could not {}: {}", operation, path.display()),
                "Check that you have write permissions".into(),
                "Check that the path is valid on this platform".into(),
                "Files written before the failure were kept; re-running is safe".into(),
            ],
            Self::TemplateUnavailable { template, .. } => vec![
                format!("Template '{}' could not be loaded", template),
                "Check templates.local_path in your configuration".into(),
                "Remove the override to fall back to the built-in templates".into(),
            ],
            Self::InputFailed { .. } => vec![
                "Pass the input as an argument instead: dpgen new \"Name,ns,Description,15\""
                    .into(),
            ],
            Self::PostActionFailed { path, .. } => vec![
                format!("The pack was created at {}", path.display()),
                "Open it manually, or check generator.open_command".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ScaffoldWrite { .. } => ErrorCategory::Filesystem,
            Self::TemplateUnavailable { .. } => ErrorCategory::NotFound,
            Self::InputFailed { .. } | Self::PostActionFailed { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
