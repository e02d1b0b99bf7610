//! Template overrides loaded from a local directory.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use dpgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKind,
    error::DpgenResult,
};
use tracing::{debug, instrument};

use super::BuiltinTemplates;

/// Reads `pack.mcmeta.mst`, `load.json.mst` and `tick.json.mst` from a
/// directory.
///
/// A missing file falls back to the built-in body for that template, so a
/// directory may override just one of the three. An unreadable file (or a
/// missing directory) is an error.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    /// Create a store pointed at `dir`.
    ///
    /// The directory is not touched until [`TemplateStore::get`] is called.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TemplateStore for DirectoryTemplates {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn get(&self, kind: TemplateKind) -> DpgenResult<String> {
        if !self.dir.is_dir() {
            return Err(ApplicationError::TemplateUnavailable {
                template: kind.to_string(),
                reason: format!("templates directory not found: {}", self.dir.display()),
            }
            .into());
        }

        let path = self.dir.join(kind.file_name());
        match fs::read_to_string(&path) {
            Ok(body) => {
                debug!(path = %path.display(), "Using template override");
                Ok(body)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(template = %kind, "No override, using built-in template");
                Ok(BuiltinTemplates::source(kind).to_string())
            }
            Err(e) => Err(ApplicationError::TemplateUnavailable {
                template: kind.to_string(),
                reason: format!("failed to read '{}': {e}", path.display()),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpgen_core::error::DpgenError;
    use tempfile::TempDir;

    fn make_template_dir(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, body) in files {
            fs::write(temp.path().join(name), body).unwrap();
        }
        temp
    }

    #[test]
    fn override_wins_over_builtin() {
        let temp = make_template_dir(&[("load.json.mst", "custom {{namespace}}")]);
        let store = DirectoryTemplates::new(temp.path());

        assert_eq!(
            store.get(TemplateKind::TagLoad).unwrap(),
            "custom {{namespace}}"
        );
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let temp = make_template_dir(&[("load.json.mst", "custom")]);
        let store = DirectoryTemplates::new(temp.path());

        assert_eq!(
            store.get(TemplateKind::TagTick).unwrap(),
            BuiltinTemplates::source(TemplateKind::TagTick)
        );
    }

    #[test]
    fn missing_directory_is_template_unavailable() {
        let store = DirectoryTemplates::new("/absolutely/does/not/exist");

        assert!(matches!(
            store.get(TemplateKind::PackMeta),
            Err(DpgenError::Application(
                ApplicationError::TemplateUnavailable { .. }
            ))
        ));
    }

    #[test]
    fn unreadable_override_is_an_error() {
        // a directory where the file should be cannot be read as a string
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("pack.mcmeta.mst")).unwrap();

        let store = DirectoryTemplates::new(temp.path());
        assert!(store.get(TemplateKind::PackMeta).is_err());
    }
}
