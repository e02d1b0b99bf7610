//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `dpgen-adapters` crate provides implementations.

use crate::domain::{RenderContext, TemplateKind};
use crate::error::DpgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dpgen_adapters::filesystem::LocalFilesystem` (production)
/// - `dpgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - `create_dir_all` is idempotent: an existing directory is not an error
/// - `write_file` overwrites silently and does not create parents
/// - Failures should be `ApplicationError::ScaffoldWrite` carrying the path
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DpgenResult<()>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, contents: &[u8]) -> DpgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `dpgen_adapters::template_store::BuiltinTemplates` (compiled in)
/// - `dpgen_adapters::template_store::DirectoryTemplates` (user overrides)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get the raw body of a named template.
    fn get(&self, kind: TemplateKind) -> DpgenResult<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `dpgen_adapters::renderer::PlaceholderRenderer` (`{{name}}` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template body against a context.
    ///
    /// Placeholders with no matching variable are not the renderer's
    /// concern; templates are assumed to be well-formed.
    fn render(&self, source: &str, context: &RenderContext) -> DpgenResult<String>;
}
