//! Scaffold Service - the data pack generation engine.
//!
//! This service coordinates the entire generation workflow:
//! 1. Render the three named templates against the config
//! 2. Plan the fixed file tree
//! 3. Write it to the filesystem, strictly in order
//!
//! Writing is not transactional. A failure aborts the sequence and leaves
//! everything written so far on disk.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, WriteOperation,
        ports::{Filesystem, InputSource, PostActionHook, TemplateRenderer, TemplateStore},
    },
    domain::{
        CreatedRoot, DomainValidator as validator, FileTree, FsEntry, InputNormalizer,
        RenderContext, ScaffoldConfig, TemplateKind,
    },
    error::{DpgenError, DpgenResult},
};

const DATA_DIR: &str = "data";
const PACK_META_FILE: &str = "pack.mcmeta";

/// Placement options for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Write into `<target>/<name>` (true) or directly into `<target>` (false).
    pub create_new_directory: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            create_new_directory: true,
        }
    }
}

/// Result of an interactive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The prompt was dismissed; nothing was generated.
    Cancelled,
    /// The pack was written to this root.
    Created(CreatedRoot),
}

/// Main scaffolding service.
///
/// Holds no state between calls; every `generate` is an independent,
/// non-resumable sequence run to completion or first failure.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    options: ScaffoldOptions,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use dpgen_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            options: ScaffoldOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScaffoldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ScaffoldOptions {
        self.options
    }

    /// Generate a data pack under `target`.
    ///
    /// Returns the root the pack was written into: `<target>/<name>` or
    /// `<target>` depending on [`ScaffoldOptions::create_new_directory`].
    /// Existing files are overwritten without checks.
    #[instrument(
        skip_all,
        fields(
            pack = %config.name(),
            dest = %target.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        config: &ScaffoldConfig,
        target: impl AsRef<Path>,
    ) -> DpgenResult<CreatedRoot> {
        info!(
            namespace = %config.namespace(),
            pack_format = config.pack_format(),
            "Generating data pack"
        );

        let tree = self.plan(config, target)?;

        match self.apply(&tree) {
            Ok(created) => {
                info!(root = %created, files = tree.files().count(), "Data pack generated");
                Ok(created)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    root = %tree.root().display(),
                    "Generation failed, files written so far were left in place"
                );
                Err(e)
            }
        }
    }

    /// Render the templates and lay out the tree without touching the disk.
    pub fn plan(&self, config: &ScaffoldConfig, target: impl AsRef<Path>) -> DpgenResult<FileTree> {
        validator::validate_config(config).map_err(DpgenError::Domain)?;

        let target = target.as_ref();
        let root = if self.options.create_new_directory {
            target.join(config.name())
        } else {
            target.to_path_buf()
        };

        let pack_meta = self.render(TemplateKind::PackMeta, config)?;
        let tag_load = self.render(TemplateKind::TagLoad, config)?;
        let tag_tick = self.render(TemplateKind::TagTick, config)?;

        let data = PathBuf::from(DATA_DIR);
        let tags = data.join("minecraft").join("tag").join("functions");
        let functions = data.join(config.namespace()).join("functions");

        let tree = FileTree::new(root)
            .with_root_creation(self.options.create_new_directory)
            .with_directory(data)
            .with_file(PACK_META_FILE, pack_meta)
            .with_directory(tags.clone())
            .with_file(tags.join("load.json"), tag_load)
            .with_file(tags.join("tick.json"), tag_tick)
            .with_directory(functions.clone())
            .with_file(functions.join("load.mcfunction"), String::new())
            .with_file(functions.join("tick.mcfunction"), String::new());

        validator::validate_file_tree(&tree).map_err(DpgenError::Domain)?;
        Ok(tree)
    }

    /// Write a planned tree, in order, stopping at the first failure.
    pub fn apply(&self, tree: &FileTree) -> DpgenResult<CreatedRoot> {
        let root = tree.root();

        if self.filesystem.exists(root) {
            debug!(root = %root.display(), "Root already exists, contents will be overwritten");
        }

        if tree.creates_root() {
            self.create_dir(root)?;
        }

        for entry in tree.entries() {
            match entry {
                FsEntry::Directory(dir) => self.create_dir(&root.join(&dir.path))?,
                FsEntry::File(file) => {
                    self.write_file(&root.join(&file.path), file.contents.as_bytes())?
                }
            }
        }

        Ok(CreatedRoot::new(root))
    }

    /// Prompt, normalize, generate, then hand the result to `hook`.
    ///
    /// A dismissed prompt (`None`, or an empty string) is a no-op: the
    /// engine is never invoked and the hook is not called.
    pub fn run(
        &self,
        input: &dyn InputSource,
        hook: &dyn PostActionHook,
        target: impl AsRef<Path>,
    ) -> DpgenResult<ScaffoldOutcome> {
        let raw = match input.prompt_for_raw_input()? {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                info!("Input dismissed, nothing generated");
                return Ok(ScaffoldOutcome::Cancelled);
            }
        };

        let config = InputNormalizer::normalize(&raw);
        let created = self.generate(&config, target)?;
        hook.on_created(&created)?;

        Ok(ScaffoldOutcome::Created(created))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render(&self, kind: TemplateKind, config: &ScaffoldConfig) -> DpgenResult<String> {
        let source = self.store.get(kind)?;
        let context = RenderContext::for_template(kind, config);
        debug!(template = %kind, variables = context.len(), "Rendering template");
        self.renderer.render(&source, &context)
    }

    fn create_dir(&self, path: &Path) -> DpgenResult<()> {
        debug!(path = %path.display(), "Creating directory");
        self.filesystem
            .create_dir_all(path)
            .map_err(|e| as_write_error(path, WriteOperation::CreateDirectory, e))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> DpgenResult<()> {
        debug!(path = %path.display(), bytes = contents.len(), "Writing file");
        self.filesystem
            .write_file(path, contents)
            .map_err(|e| as_write_error(path, WriteOperation::WriteFile, e))
    }
}

/// Funnel every port failure into a single `ScaffoldWrite` error.
fn as_write_error(path: &Path, operation: WriteOperation, err: DpgenError) -> DpgenError {
    match err {
        DpgenError::Application(ApplicationError::ScaffoldWrite { .. }) => err,
        other => ApplicationError::ScaffoldWrite {
            path: path.to_path_buf(),
            operation,
            reason: other.to_string(),
        }
        .into(),
    }
}
