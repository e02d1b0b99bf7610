//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `dpgen-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Infrastructure (output) ports**: implemented in `dpgen-adapters`
//!   - `Filesystem`: Directory creation and file writes
//!   - `TemplateStore`: Template body retrieval
//!   - `TemplateRenderer`: Placeholder substitution
//!
//! - **Interaction ports**: host UI, implemented in `dpgen-cli`
//!   - `InputSource`: Prompt for the raw input string
//!   - `PostActionHook`: Follow-up action on the created folder

pub mod interaction;
pub mod output;

pub use interaction::{InputSource, PostActionHook};
pub use output::{Filesystem, TemplateRenderer, TemplateStore};
