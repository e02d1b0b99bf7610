//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ScaffoldOptions`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `DPGEN__<SECTION>__<KEY>`, e.g.
//!    `DPGEN__GENERATOR__CREATE_NEW_DIRECTORY=false`
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use dpgen_core::{application::ScaffoldOptions, domain::OpenWindowPolicy};

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "DPGEN";
const ENV_SEPARATOR: &str = "__";

/// Every key accepted by `dpgen config get|set`.
pub const KNOWN_KEYS: [&str; 5] = [
    "generator.create_new_directory",
    "generator.open_new_window",
    "generator.open_command",
    "output.no_color",
    "templates.local_path",
];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Placement and post-generation behaviour.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Write into `<target>/<name>` instead of `<target>`.
    pub create_new_directory: bool,
    /// Whether to open the created folder.
    pub open_new_window: OpenWindowPolicy,
    /// Command used to open a folder; the path is appended as the last
    /// argument.
    pub open_command: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            create_new_directory: true,
            open_new_window: OpenWindowPolicy::Ask,
            open_command: "code --new-window".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory with `.mst` overrides.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file);
        debug!(path = %path.display(), "Loading configuration");

        let defaults =
            Config::try_from(&Self::default()).context("failed to build default configuration")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .with_context(|| {
                format!(
                    "invalid configuration in {} or the {ENV_PREFIX}{ENV_SEPARATOR}* environment",
                    path.display()
                )
            })
    }

    /// Read only the file layer (defaults + file, no environment).
    ///
    /// Used by `config set` so environment overrides are never persisted.
    pub fn load_file(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| CliError::IoError {
            message: format!("Failed to read config from '{}'", path.display()),
            source: e,
        })?;

        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Write the configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let toml = toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
                message: format!("Failed to create config directory '{}'", parent.display()),
                source: e,
            })?;
        }

        std::fs::write(path, toml).map_err(|e| CliError::IoError {
            message: format!("Failed to write config to '{}'", path.display()),
            source: e,
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dpgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "dpgen", "dpgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".dpgen.toml"))
    }

    /// `--config` if given, else [`Self::config_path`].
    pub fn resolve_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    pub fn scaffold_options(&self) -> ScaffoldOptions {
        ScaffoldOptions {
            create_new_directory: self.generator.create_new_directory,
        }
    }

    /// Look up one dotted key, rendered as it would be written in TOML.
    pub fn get(&self, key: &str) -> CliResult<String> {
        match key {
            "generator.create_new_directory" => {
                Ok(self.generator.create_new_directory.to_string())
            }
            "generator.open_new_window" => Ok(self.generator.open_new_window.to_string()),
            "generator.open_command" => Ok(self.generator.open_command.clone()),
            "output.no_color" => Ok(self.output.no_color.to_string()),
            "templates.local_path" => Ok(self
                .templates
                .local_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            _ => Err(CliError::UnknownConfigKey { key: key.into() }),
        }
    }

    /// Set one dotted key from its string form.
    ///
    /// An empty value clears `templates.local_path`.
    pub fn set(&mut self, key: &str, value: &str) -> CliResult<()> {
        match key {
            "generator.create_new_directory" => {
                self.generator.create_new_directory = parse_bool(key, value)?;
            }
            "generator.open_new_window" => {
                self.generator.open_new_window =
                    value.parse().map_err(|e| CliError::InvalidInput {
                        message: format!("{key}: {e}"),
                        source: Some(Box::new(e)),
                    })?;
            }
            "generator.open_command" => {
                if value.trim().is_empty() {
                    return Err(CliError::InvalidInput {
                        message: format!("{key} cannot be empty"),
                        source: None,
                    });
                }
                self.generator.open_command = value.into();
            }
            "output.no_color" => self.output.no_color = parse_bool(key, value)?,
            "templates.local_path" => {
                self.templates.local_path = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            _ => return Err(CliError::UnknownConfigKey { key: key.into() }),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        other => Err(CliError::InvalidInput {
            message: format!("{key} expects true or false, got '{other}'"),
            source: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::default();
        assert!(cfg.generator.create_new_directory);
        assert_eq!(cfg.generator.open_new_window, OpenWindowPolicy::Ask);
        assert_eq!(cfg.generator.open_command, "code --new-window");
        assert!(cfg.templates.local_path.is_none());
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load(Some(&temp.path().join("missing.toml"))).unwrap();
        assert_eq!(cfg.generator, GeneratorConfig::default());
    }

    #[test]
    fn load_reads_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[generator]\ncreate_new_directory = false\nopen_new_window = \"never\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(!cfg.generator.create_new_directory);
        assert_eq!(cfg.generator.open_new_window, OpenWindowPolicy::Never);
        assert_eq!(cfg.generator.open_command, "code --new-window");
    }

    #[test]
    fn load_rejects_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[generator\nthis is not toml").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn load_accepts_boolean_open_policy() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        std::fs::write(&path, "[generator]\nopen_new_window = false\n").unwrap();
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.generator.open_new_window, OpenWindowPolicy::Never);
        assert_eq!(AppConfig::load_file(&path).unwrap(), cfg);

        std::fs::write(&path, "[generator]\nopen_new_window = true\n").unwrap();
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.generator.open_new_window, OpenWindowPolicy::Always);
    }

    #[test]
    fn invalid_value_error_names_both_layers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[generator]\nopen_new_window = \"sometimes\"\n").unwrap();

        let message = format!("{:#}", AppConfig::load(Some(&path)).unwrap_err());
        assert!(message.contains("config.toml"), "{message}");
        assert!(message.contains("DPGEN__* environment"), "{message}");
    }

    #[test]
    fn save_then_load_file_preserves_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.set("generator.open_new_window", "always").unwrap();
        cfg.set("templates.local_path", "/srv/templates").unwrap();
        cfg.save(&path).unwrap();

        assert_eq!(AppConfig::load_file(&path).unwrap(), cfg);
    }

    #[test]
    fn get_and_set_round_trip_every_key() {
        let mut cfg = AppConfig::default();
        for key in KNOWN_KEYS {
            let current = cfg.get(key).unwrap();
            cfg.set(key, &current).unwrap();
        }
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn unknown_key_is_error() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            cfg.get("does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
        assert!(cfg.set("does.not.exist", "x").is_err());
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        assert!(cfg.set("generator.create_new_directory", "maybe").is_err());
        assert!(cfg.set("generator.open_new_window", "sometimes").is_err());
        assert!(cfg.set("generator.open_command", "  ").is_err());
    }

    #[test]
    fn scaffold_options_follow_generator_section() {
        let mut cfg = AppConfig::default();
        cfg.set("generator.create_new_directory", "no").unwrap();
        assert!(!cfg.scaffold_options().create_new_directory);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
