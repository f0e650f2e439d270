//! cli
//!
//! Command-line interface layer for gobj.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the log subscriber
//! - Delegate to command handlers
//!
//! The CLI layer is thin: handlers read through [`crate::git::Git`] and
//! print through [`crate::ui::output`]. Nothing here mutates the repository.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "GOBJ_LOG";

/// Execution context for commands, derived from global flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode from the command line; `None` defers to config.
    pub quiet: Option<bool>,
    /// JSON output from the command line; `None` defers to config.
    pub json: Option<bool>,
}

impl Context {
    /// Effective JSON mode: the command line wins over `config_json`.
    pub fn json_or(&self, config_json: bool) -> bool {
        self.json.unwrap_or(config_json)
    }

    /// Effective quiet mode: the command line wins over `config_quiet`.
    pub fn quiet_or(&self, config_quiet: bool) -> bool {
        self.quiet.unwrap_or(config_quiet)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet_override(),
        json: cli.json_override(),
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install a stderr `tracing` subscriber.
///
/// `$GOBJ_LOG` wins when set; otherwise `--debug` selects `debug` and the
/// default is `warn`.
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));

    // A subscriber may already be installed when embedded or under test.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
