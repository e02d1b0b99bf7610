// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for dpgen.
//!
//! This module contains pure business logic with ZERO I/O.
//! Filesystem access, template storage, rendering, prompting, and post
//! actions are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: `ScaffoldConfig` is never mutated once built
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod normalizer;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    file_tree::{CreatedRoot, DirectoryToCreate, FileToWrite, FileTree, FsEntry},
    scaffold_config::{
        DEFAULT_DESCRIPTION, DEFAULT_NAME, DEFAULT_NAMESPACE, FORBIDDEN_NAME_CHARS,
        LATEST_PACK_FORMAT, ScaffoldConfig,
    },
    template::{RenderContext, TemplateKind},
};

pub use error::{DomainError, ErrorCategory};
pub use normalizer::InputNormalizer;
pub use value_objects::OpenWindowPolicy;

pub use validation::DomainValidator;
