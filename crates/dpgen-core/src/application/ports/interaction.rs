//! Interaction ports - the host UI around the engine.
//!
//! Neither is part of generation itself. The scaffold service only calls
//! them from [`ScaffoldService::run`](crate::application::ScaffoldService::run).

use crate::domain::CreatedRoot;
use crate::error::DpgenResult;

/// Source of the raw `<name>,<namespace>,<description>,<pack_format>` string.
#[cfg_attr(test, mockall::automock)]
pub trait InputSource {
    /// Ask for raw input.
    ///
    /// `Ok(None)` means the user dismissed the prompt; that is a no-op, not
    /// an error.
    fn prompt_for_raw_input(&self) -> DpgenResult<Option<String>>;
}

/// Follow-up action once a pack has been written (e.g. open the folder).
#[cfg_attr(test, mockall::automock)]
pub trait PostActionHook {
    fn on_created(&self, root: &CreatedRoot) -> DpgenResult<()>;
}
