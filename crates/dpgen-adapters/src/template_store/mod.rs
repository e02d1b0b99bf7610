//! Template stores.
//!
//! - [`BuiltinTemplates`]: the three bodies compiled into the binary
//! - [`DirectoryTemplates`]: user overrides read from disk, falling back to
//!   the built-ins per template

mod builtin;
mod directory;

pub use builtin::BuiltinTemplates;
pub use directory::DirectoryTemplates;
