//! Application layer for dpgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, the scaffold engine)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Normalization and tree invariants live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ScaffoldOptions, ScaffoldOutcome, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, InputSource, PostActionHook, TemplateRenderer, TemplateStore};

pub use error::{ApplicationError, WriteOperation};
