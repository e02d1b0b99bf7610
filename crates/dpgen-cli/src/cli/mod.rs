//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dpgen",
    bin_name = "dpgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Minecraft data pack scaffolding",
    long_about = "dpgen generates the skeleton of a Minecraft data pack: \
                  pack.mcmeta, the load/tick function tags, and empty \
                  load/tick functions for your namespace.",
    after_help = "EXAMPLES:\n\
        \x20 dpgen new \"MyPack,myns,A cool pack,15\"\n\
        \x20 dpgen new --name MyPack --namespace myns -o ./packs\n\
        \x20 dpgen new                      # interactive prompt\n\
        \x20 dpgen completions bash > /usr/share/bash-completion/completions/dpgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new data pack.
    #[command(
        visible_alias = "n",
        about = "Generate a new data pack",
        after_help = "INPUT:\n\
            \x20 <name>,<namespace>,<description>,<pack_format>\n\
            \x20 Every field is optional. Commas cannot be escaped.\n\n\
            EXAMPLES:\n\
            \x20 dpgen new \"MyPack,myns,A cool pack,15\"\n\
            \x20 dpgen new \",,,\" --here          # defaults, in the current directory\n\
            \x20 dpgen new --name MyPack --pack-format 48 --dry-run"
    )]
    New(NewArgs),

    /// Initialise a dpgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 dpgen init                    # default location\n\
            \x20 dpgen init --force            # overwrite an existing file\n\
            \x20 dpgen -c ./dpgen.toml init    # explicit location"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dpgen completions bash > ~/.local/share/bash-completion/completions/dpgen\n\
            \x20 dpgen completions zsh  > ~/.zfunc/_dpgen\n\
            \x20 dpgen completions fish > ~/.config/fish/completions/dpgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the dpgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dpgen config get generator.open_new_window\n\
            \x20 dpgen config set generator.create_new_directory false\n\
            \x20 dpgen config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `dpgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Raw comma-delimited input. Omit it (and the field flags) to be
    /// prompted.
    #[arg(
        value_name = "RAW",
        help = "<name>,<namespace>,<description>,<pack_format>",
        conflicts_with_all = ["name", "namespace", "description", "pack_format"]
    )]
    pub raw: Option<String>,

    /// Pack name (also the folder name).
    #[arg(long = "name", value_name = "NAME", help = "Pack name")]
    pub name: Option<String>,

    /// Namespace for the pack's functions.
    #[arg(long = "namespace", value_name = "NS", help = "Function namespace")]
    pub namespace: Option<String>,

    /// Text written to pack.mcmeta.
    #[arg(long = "description", value_name = "TEXT", help = "Pack description")]
    pub description: Option<String>,

    /// Pack format. Kept as text so that the same leading-integer rule
    /// applies as for raw input.
    #[arg(long = "pack-format", value_name = "N", help = "Pack format number")]
    pub pack_format: Option<String>,

    /// Where to generate (default: current directory).
    #[arg(
        short = 'o',
        long = "target",
        value_name = "DIR",
        help = "Target directory (default: current directory)"
    )]
    pub target: Option<PathBuf>,

    /// Write directly into the target directory.
    #[arg(long = "here", conflicts_with = "new_dir", help = "Write into the target itself")]
    pub here: bool,

    /// Write into `<target>/<name>`.
    #[arg(long = "new-dir", help = "Write into a new <name> folder under the target")]
    pub new_dir: bool,

    /// Open the created folder without asking.
    #[arg(long = "open", conflicts_with = "no_open", help = "Open the pack when done")]
    pub open: bool,

    /// Never open the created folder.
    #[arg(long = "no-open", help = "Do not open the pack when done")]
    pub no_open: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Directory holding template overrides.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Directory with pack.mcmeta.mst / load.json.mst / tick.json.mst overrides"
    )]
    pub templates: Option<PathBuf>,
}

impl NewArgs {
    /// `true` when any of the per-field flags was given.
    pub fn has_field_flags(&self) -> bool {
        self.name.is_some()
            || self.namespace.is_some()
            || self.description.is_some()
            || self.pack_format.is_some()
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dpgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dpgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dpgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.open_new_window`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
