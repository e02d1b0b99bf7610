//! Template identities and render contexts.
//!
//! Template *bodies* are opaque text owned by a `TemplateStore`; the domain
//! only knows which templates exist and which variables each one receives.
//!
//! | Template    | File               | Variables                      |
//! |-------------|--------------------|--------------------------------|
//! | `pack-meta` | `pack.mcmeta.mst`  | `pack_format`, `description`   |
//! | `tag-load`  | `load.json.mst`    | `namespace`                    |
//! | `tag-tick`  | `tick.json.mst`    | `namespace`                    |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::entities::ScaffoldConfig;

/// The three named templates a data pack is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    PackMeta,
    TagLoad,
    TagTick,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::PackMeta, Self::TagLoad, Self::TagTick];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PackMeta => "pack-meta",
            Self::TagLoad => "tag-load",
            Self::TagTick => "tag-tick",
        }
    }

    /// File name of the template source inside a template directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::PackMeta => "pack.mcmeta.mst",
            Self::TagLoad => "load.json.mst",
            Self::TagTick => "tick.json.mst",
        }
    }

    /// Variables this template is rendered with, and nothing else.
    pub fn variables(self) -> &'static [&'static str] {
        match self {
            Self::PackMeta => &["pack_format", "description"],
            Self::TagLoad | Self::TagTick => &["namespace"],
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.file_name() == s)
            .ok_or_else(|| format!("unknown template '{}'", s))
    }
}

/// Context for template rendering.
///
/// A **Value Object** holding the variables one template is rendered with.
/// Immutable after creation - transformations create new instances (see
/// `with_variable`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the context for `kind`, containing exactly the variables that
    /// template requires.
    pub fn for_template(kind: TemplateKind, config: &ScaffoldConfig) -> Self {
        kind.variables()
            .iter()
            .fold(Self::new(), |ctx, &name| match name {
                "pack_format" => ctx.with_variable(name, config.pack_format().to_string()),
                "description" => ctx.with_variable(name, config.description()),
                "namespace" => ctx.with_variable(name, config.namespace()),
                _ => ctx,
            })
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
