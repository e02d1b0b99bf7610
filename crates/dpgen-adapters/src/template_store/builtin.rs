//! Compiled-in templates.

use dpgen_core::{application::ports::TemplateStore, domain::TemplateKind, error::DpgenResult};

const PACK_META: &str = include_str!("../../templates/pack.mcmeta.mst");
const TAG_LOAD: &str = include_str!("../../templates/load.json.mst");
const TAG_TICK: &str = include_str!("../../templates/tick.json.mst");

/// Template store backed by the `.mst` files shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Raw body for `kind`. Infallible, unlike the port method.
    pub fn source(kind: TemplateKind) -> &'static str {
        match kind {
            TemplateKind::PackMeta => PACK_META,
            TemplateKind::TagLoad => TAG_LOAD,
            TemplateKind::TagTick => TAG_TICK,
        }
    }
}

impl TemplateStore for BuiltinTemplates {
    fn get(&self, kind: TemplateKind) -> DpgenResult<String> {
        Ok(Self::source(kind).to_string())
    }
}
