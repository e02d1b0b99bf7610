pub mod file_tree;
pub mod scaffold_config;
pub mod template;

pub use crate::domain::DomainError;
pub use file_tree::{CreatedRoot, FileTree};
pub use scaffold_config::ScaffoldConfig;
pub use template::{RenderContext, TemplateKind};
