//! `{{name}}` placeholder substitution.

use dpgen_core::{
    application::ports::TemplateRenderer, domain::RenderContext, error::DpgenResult,
};
use tracing::{instrument, trace};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Renderer that replaces `{{name}}` with the matching context variable.
///
/// Whitespace inside the braces is ignored (`{{ name }}`). Placeholders with
/// no matching variable, and an unterminated `{{`, are copied through
/// unchanged. Values are inserted verbatim; there is no escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    /// Create a new placeholder renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    #[instrument(skip_all, fields(variables = context.len()))]
    fn render(&self, source: &str, context: &RenderContext) -> DpgenResult<String> {
        let mut out = String::with_capacity(source.len());
        let mut rest = source;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let Some(end) = after_open.find(CLOSE) else {
                // unterminated
                out.push_str(&rest[start..]);
                return Ok(out);
            };

            let key = after_open[..end].trim();
            match context.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    trace!(placeholder = key, "No variable for placeholder, left as is");
                    out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]);
                }
            }

            rest = &after_open[end + CLOSE.len()..];
        }

        out.push_str(rest);
        Ok(out)
    }
}
