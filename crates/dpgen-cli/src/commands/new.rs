//! Implementation of the `dpgen new` command.
//!
//! Responsibility: pick the input source, wire the adapters into a
//! `ScaffoldService`, and display results. Normalization and writing live in
//! `dpgen-core`.

use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use tracing::{debug, info, instrument};

use dpgen_adapters::{BuiltinTemplates, DirectoryTemplates, LocalFilesystem, PlaceholderRenderer};
use dpgen_core::{
    application::{
        ApplicationError, ScaffoldOptions, ScaffoldOutcome, ScaffoldService,
        ports::{InputSource, PostActionHook, TemplateStore},
    },
    domain::{CreatedRoot, FileTree, FsEntry, InputNormalizer, OpenWindowPolicy, ScaffoldConfig},
    error::DpgenResult,
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const PROMPT: &str =
    "<name:string>,<namespace:string>,<description:string>,<pack_format:integer> (separated by commas)";
const INITIAL_INPUT: &str = ",,,";

/// Execute the `dpgen new` command.
///
/// Dispatch sequence:
/// 1. Resolve placement and open policy (flags over config)
/// 2. Build the template store (`--templates`, `templates.local_path`, or
///    built-ins)
/// 3. Collect input: field flags, a RAW argument, or the prompt
/// 4. `--dry-run`: print the plan and stop
/// 5. Generate, then run the open-folder hook
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = resolve_options(&args, &config);
    let policy = resolve_policy(&args, &config);
    let target = args.target.clone().unwrap_or_else(|| PathBuf::from("."));

    debug!(
        create_new_directory = options.create_new_directory,
        open = %policy,
        target = %target.display(),
        "Resolved options"
    );

    let service = ScaffoldService::new(
        template_store(&args, &config),
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_options(options);

    let hook = OpenFolderHook {
        policy,
        create_new_directory: options.create_new_directory,
        open_command: config.generator.open_command.clone(),
        quiet: output.is_quiet(),
    };

    // Field flags skip the raw-string parsing entirely.
    if args.has_field_flags() {
        let pack = InputNormalizer::from_fields(
            args.name.as_deref(),
            args.namespace.as_deref(),
            args.description.as_deref(),
            args.pack_format.as_deref(),
        );
        if args.dry_run {
            return dry_run(&service, &pack, &target, &output);
        }
        let created = service
            .generate(&pack, &target)
            .with_cli_context(|| "generating data pack")?;
        report_created(&pack, &created, &output)?;
        hook.on_created(&created)?;
        return Ok(());
    }

    let input: Box<dyn InputSource> = match args.raw {
        Some(raw) => Box::new(ArgInput(raw)),
        None => Box::new(PromptInput),
    };

    if args.dry_run {
        return match read_input(input.as_ref())? {
            Some(raw) => dry_run(&service, &InputNormalizer::normalize(&raw), &target, &output),
            None => report_cancelled(&output),
        };
    }

    // Report before the hook runs so the user sees where the pack went
    // before being asked to open it.
    let reporting = ReportingHook {
        inner: &hook,
        output: &output,
    };

    match service.run(input.as_ref(), &reporting, &target)? {
        ScaffoldOutcome::Cancelled => report_cancelled(&output),
        ScaffoldOutcome::Created(root) => {
            info!(root = %root, "Data pack ready");
            Ok(())
        }
    }
}

// ── Option resolution ─────────────────────────────────────────────────────────

fn resolve_options(args: &NewArgs, config: &AppConfig) -> ScaffoldOptions {
    let mut options = config.scaffold_options();
    if args.here {
        options.create_new_directory = false;
    } else if args.new_dir {
        options.create_new_directory = true;
    }
    options
}

fn resolve_policy(args: &NewArgs, config: &AppConfig) -> OpenWindowPolicy {
    if args.open {
        OpenWindowPolicy::Always
    } else if args.no_open {
        OpenWindowPolicy::Never
    } else {
        config.generator.open_new_window
    }
}

fn template_store(args: &NewArgs, config: &AppConfig) -> Box<dyn TemplateStore> {
    match args.templates.as_ref().or(config.templates.local_path.as_ref()) {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template overrides");
            Box::new(DirectoryTemplates::new(dir))
        }
        None => Box::new(BuiltinTemplates::new()),
    }
}

/// Same cancel rule as `ScaffoldService::run`.
fn read_input(input: &dyn InputSource) -> DpgenResult<Option<String>> {
    Ok(input.prompt_for_raw_input()?.filter(|raw| !raw.is_empty()))
}

// ── Input sources ─────────────────────────────────────────────────────────────

/// Input given on the command line.
struct ArgInput(String);

impl InputSource for ArgInput {
    fn prompt_for_raw_input(&self) -> DpgenResult<Option<String>> {
        Ok(Some(self.0.clone()))
    }
}

/// Interactive prompt, pre-filled with `,,,`.
///
/// Falls back to reading one line from stdin when stdin is not a terminal
/// (or the `interactive` feature is off). EOF counts as a dismissed prompt.
struct PromptInput;

impl InputSource for PromptInput {
    fn prompt_for_raw_input(&self) -> DpgenResult<Option<String>> {
        if io::stdin().is_terminal() {
            return prompt_terminal();
        }
        read_stdin_line()
    }
}

#[cfg(feature = "interactive")]
fn prompt_terminal() -> DpgenResult<Option<String>> {
    dialoguer::Input::<String>::new()
        .with_prompt(PROMPT)
        .with_initial_text(INITIAL_INPUT)
        .allow_empty(true)
        .interact_text()
        .map(Some)
        .map_err(|e| {
            ApplicationError::InputFailed {
                reason: e.to_string(),
            }
            .into()
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt_terminal() -> DpgenResult<Option<String>> {
    eprintln!("{PROMPT}");
    eprintln!("(leave empty to cancel, e.g. {INITIAL_INPUT} for all defaults)");
    read_stdin_line()
}

fn read_stdin_line() -> DpgenResult<Option<String>> {
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| ApplicationError::InputFailed {
            reason: e.to_string(),
        })?;

    if read == 0 {
        debug!("Stdin closed before any input");
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

// ── Post actions ──────────────────────────────────────────────────────────────

/// Opens the created folder according to [`OpenWindowPolicy`].
///
/// Does nothing when the pack was written in place, since the target is
/// already the folder the user is working in.
struct OpenFolderHook {
    policy: OpenWindowPolicy,
    create_new_directory: bool,
    open_command: String,
    quiet: bool,
}

impl OpenFolderHook {
    fn should_open(&self) -> DpgenResult<bool> {
        if !self.create_new_directory {
            return Ok(false);
        }
        match self.policy {
            OpenWindowPolicy::Never => Ok(false),
            OpenWindowPolicy::Always => Ok(true),
            OpenWindowPolicy::Ask if self.quiet || !io::stdin().is_terminal() => {
                debug!("Cannot ask to open the pack without a terminal");
                Ok(false)
            }
            OpenWindowPolicy::Ask => confirm_open(),
        }
    }

    fn open(&self, root: &CreatedRoot) -> DpgenResult<()> {
        let mut parts = self.open_command.split_whitespace();
        let failed = |reason: String| ApplicationError::PostActionFailed {
            path: root.path().to_path_buf(),
            reason,
        };

        let program = parts
            .next()
            .ok_or_else(|| failed("generator.open_command is empty".into()))?;

        info!(command = %self.open_command, root = %root, "Opening data pack");
        let status = Command::new(program)
            .args(parts)
            .arg(root.path())
            .status()
            .map_err(|e| failed(format!("could not run '{program}': {e}")))?;

        if !status.success() {
            return Err(failed(format!("'{}' exited with {status}", self.open_command)).into());
        }
        Ok(())
    }
}

impl PostActionHook for OpenFolderHook {
    fn on_created(&self, root: &CreatedRoot) -> DpgenResult<()> {
        if self.should_open()? {
            self.open(root)?;
        }
        Ok(())
    }
}

#[cfg(feature = "interactive")]
fn confirm_open() -> DpgenResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Open datapack in new window?")
        .default(true)
        .interact()
        .map_err(|e| {
            ApplicationError::InputFailed {
                reason: e.to_string(),
            }
            .into()
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_open() -> DpgenResult<bool> {
    use std::io::Write;

    eprint!("Open datapack in new window? [Y/n] ");
    io::stderr()
        .flush()
        .map_err(|e| ApplicationError::InputFailed {
            reason: e.to_string(),
        })?;

    let answer = read_stdin_line()?.unwrap_or_default();
    Ok(parse_answer(&answer))
}

/// Anything but an explicit "no" opens, matching the prompt's default.
#[cfg_attr(feature = "interactive", allow(dead_code))]
fn parse_answer(answer: &str) -> bool {
    !matches!(answer.trim().to_ascii_lowercase().as_str(), "n" | "no")
}

/// Prints the success summary, then defers to the wrapped hook.
struct ReportingHook<'a> {
    inner: &'a dyn PostActionHook,
    output: &'a OutputManager,
}

impl PostActionHook for ReportingHook<'_> {
    fn on_created(&self, root: &CreatedRoot) -> DpgenResult<()> {
        self.output
            .success(&format!("Data pack created at {root}"))
            .and_then(|()| {
                self.output.json(&CreatedReport {
                    status: "created",
                    root: root.path(),
                    config: None,
                })
            })
            .map_err(|e| ApplicationError::PostActionFailed {
                path: root.path().to_path_buf(),
                reason: e.to_string(),
            })?;
        self.inner.on_created(root)
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CreatedReport<'a> {
    status: &'static str,
    root: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a ScaffoldConfig>,
}

#[derive(Serialize)]
struct PlanReport<'a> {
    status: &'static str,
    config: &'a ScaffoldConfig,
    plan: &'a FileTree,
}

fn report_created(
    config: &ScaffoldConfig,
    created: &CreatedRoot,
    output: &OutputManager,
) -> CliResult<()> {
    output.success(&format!("Data pack '{}' created at {created}", config.name()))?;
    output.json(&CreatedReport {
        status: "created",
        root: created.path(),
        config: Some(config),
    })?;
    Ok(())
}

fn report_cancelled(output: &OutputManager) -> CliResult<()> {
    output.info("Cancelled: no input given, nothing created")?;
    output.json(&serde_json::json!({ "status": "cancelled" }))?;
    Ok(())
}

fn dry_run(
    service: &ScaffoldService,
    config: &ScaffoldConfig,
    target: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = service
        .plan(config, target)
        .with_cli_context(|| "planning data pack")?;

    output.json(&PlanReport {
        status: "dry-run",
        config,
        plan: &plan,
    })?;

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        config.name(),
        plan.root().display()
    ))?;
    output.header("Configuration")?;
    output.print(&format!("  Name:         {}", config.name()))?;
    output.print(&format!("  Namespace:    {}", config.namespace()))?;
    output.print(&format!("  Description:  {}", config.description()))?;
    output.print(&format!("  Pack format:  {}", config.pack_format()))?;
    output.header("Plan")?;
    if plan.creates_root() {
        output.print(&format!("  mkdir  {}", plan.root().display()))?;
    }
    for entry in plan.entries() {
        let line = match entry {
            FsEntry::Directory(dir) => format!("  mkdir  {}", dir.path.display()),
            FsEntry::File(file) => {
                format!("  write  {} ({} bytes)", file.path.display(), file.size())
            }
        };
        output.print(&line)?;
    }
    debug!(entries = plan.entry_count(), "Dry run complete, nothing written");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    fn new_args(argv: &[&str]) -> NewArgs {
        let mut full = vec!["dpgen", "new"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::New(args) => args,
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn config_controls_placement_by_default() {
        let mut config = AppConfig::default();
        assert!(resolve_options(&new_args(&[]), &config).create_new_directory);

        config.generator.create_new_directory = false;
        assert!(!resolve_options(&new_args(&[]), &config).create_new_directory);
    }

    #[test]
    fn here_and_new_dir_override_config() {
        let mut config = AppConfig::default();
        assert!(!resolve_options(&new_args(&["--here"]), &config).create_new_directory);

        config.generator.create_new_directory = false;
        assert!(resolve_options(&new_args(&["--new-dir"]), &config).create_new_directory);
    }

    #[test]
    fn open_flags_override_policy() {
        let config = AppConfig::default();
        assert_eq!(resolve_policy(&new_args(&[]), &config), OpenWindowPolicy::Ask);
        assert_eq!(
            resolve_policy(&new_args(&["--open"]), &config),
            OpenWindowPolicy::Always
        );
        assert_eq!(
            resolve_policy(&new_args(&["--no-open"]), &config),
            OpenWindowPolicy::Never
        );
    }

    #[test]
    fn arg_input_returns_raw_verbatim() {
        let input = ArgInput("A,b,,".into());
        assert_eq!(input.prompt_for_raw_input().unwrap().as_deref(), Some("A,b,,"));
    }

    #[test]
    fn empty_raw_counts_as_cancelled() {
        assert_eq!(read_input(&ArgInput(String::new())).unwrap(), None);
        assert_eq!(
            read_input(&ArgInput(",,,".into())).unwrap().as_deref(),
            Some(",,,")
        );
    }

    #[test]
    fn hook_never_opens_in_place() {
        let hook = OpenFolderHook {
            policy: OpenWindowPolicy::Always,
            create_new_directory: false,
            open_command: "definitely-not-a-real-binary".into(),
            quiet: false,
        };
        assert!(!hook.should_open().unwrap());
        assert!(hook.on_created(&CreatedRoot::new("/tmp/x")).is_ok());
    }

    #[test]
    fn hook_respects_never() {
        let hook = OpenFolderHook {
            policy: OpenWindowPolicy::Never,
            create_new_directory: true,
            open_command: "definitely-not-a-real-binary".into(),
            quiet: false,
        };
        assert!(hook.on_created(&CreatedRoot::new("/tmp/x")).is_ok());
    }

    #[test]
    fn failing_open_command_is_post_action_error() {
        let hook = OpenFolderHook {
            policy: OpenWindowPolicy::Always,
            create_new_directory: true,
            open_command: "definitely-not-a-real-binary --flag".into(),
            quiet: false,
        };
        let err = hook.on_created(&CreatedRoot::new("/tmp/x")).unwrap_err();
        assert!(matches!(
            err,
            dpgen_core::error::DpgenError::Application(ApplicationError::PostActionFailed { .. })
        ));
    }

    #[test]
    fn answers_default_to_yes() {
        assert!(parse_answer(""));
        assert!(parse_answer("y"));
        assert!(parse_answer("Yes"));
        assert!(!parse_answer("n"));
        assert!(!parse_answer(" NO "));
    }
}
