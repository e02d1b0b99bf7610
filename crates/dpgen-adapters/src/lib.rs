//! Infrastructure adapters for dpgen.
//!
//! This crate implements the output ports defined in
//! `dpgen_core::application::ports`. It owns every `std::fs` call the
//! scaffolder makes.

pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::PlaceholderRenderer;
pub use template_store::{BuiltinTemplates, DirectoryTemplates};
