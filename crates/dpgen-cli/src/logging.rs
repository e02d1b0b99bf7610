//! Tracing setup for the `dpgen` binary.
//!
//! `dpgen-core` and `dpgen-adapters` only emit events; this module installs
//! the single subscriber. Everything goes to stderr so that stdout carries
//! nothing but command results, which `--output-format json` relies on.
//!
//! `RUST_LOG`, when set, replaces the level chosen by `-v`/`-q`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at the chosen level.
const TARGETS: [&str; 3] = ["dpgen", "dpgen_core", "dpgen_adapters"];

/// Install the global subscriber. Call once, before any event fires.
pub fn init_logging(level: LevelFilter, ansi: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(level >= LevelFilter::DEBUG)
        .with_ansi(ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `dpgen=<level>,dpgen_core=<level>,...`; other crates stay silent.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_dpgen_crate() {
        assert_eq!(
            directives(LevelFilter::DEBUG),
            "dpgen=debug,dpgen_core=debug,dpgen_adapters=debug"
        );
    }

    #[test]
    fn directives_parse_as_env_filter() {
        for level in [LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::TRACE] {
            assert!(EnvFilter::try_new(directives(level)).is_ok());
        }
    }
}
