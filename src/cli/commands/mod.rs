//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler:
//! 1. Opens the repository and loads configuration (when it needs them)
//! 2. Reads through the git layer
//! 3. Formats and displays output, as text or JSON

mod branch_config;
mod commits;
mod completion;
mod parse_ref;
mod remotes;
mod show_ref;
mod tracking;

pub use branch_config::branch_config;
pub use commits::commits;
pub use completion::completion;
pub use parse_ref::parse_ref;
pub use remotes::remotes;
pub use show_ref::show_ref;
pub use tracking::tracking;

use anyhow::{Context as _, Result};

use super::args::Command;
use super::Context;
use crate::core::config::Config;
use crate::git::Git;
use crate::ui::output::Verbosity;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    tracing::debug!(?command, "dispatching");
    match command {
        Command::Remotes { names } => remotes(ctx, names),
        Command::ParseRef { text } => parse_ref(ctx, &text),
        Command::BranchConfig { branch } => branch_config(ctx, branch.as_deref()),
        Command::Commits { head, base } => commits(ctx, head.as_deref(), base.as_deref()),
        Command::ShowRef { refs } => show_ref(ctx, &refs),
        Command::Tracking => tracking(ctx),
        Command::Completion { shell } => completion(shell),
    }
}

/// An opened repository with its configuration and effective output flags.
pub(crate) struct Session {
    pub git: Git,
    pub config: Config,
    pub json: bool,
    pub verbosity: Verbosity,
}

impl Session {
    /// Open the repository at the context's working directory.
    pub fn open(ctx: &Context) -> Result<Self> {
        let cwd = match &ctx.cwd {
            Some(path) => path.clone(),
            None => std::env::current_dir().context("failed to read current directory")?,
        };
        let git = Git::open(&cwd)?;
        let config = Config::load(Some(git.git_dir())).context("failed to load configuration")?;
        Ok(Self::with(git, config, ctx))
    }

    fn with(git: Git, config: Config, ctx: &Context) -> Self {
        let json = ctx.json_or(config.json());
        let verbosity = Verbosity::from_quiet(ctx.quiet_or(config.quiet()));
        Self {
            git,
            config,
            json,
            verbosity,
        }
    }

    /// The named branch, or the current one.
    pub fn branch_or_current(&self, branch: Option<&str>) -> Result<String> {
        match branch {
            Some(name) => Ok(name.to_string()),
            None => self
                .git
                .current_branch()?
                .context("not on any branch and no branch specified"),
        }
    }
}

/// Effective output flags for commands that run without a repository.
pub(crate) fn output_flags(ctx: &Context) -> Result<(bool, Verbosity)> {
    let config = Config::load(None).context("failed to load configuration")?;
    Ok((
        ctx.json_or(config.json()),
        Verbosity::from_quiet(ctx.quiet_or(config.quiet())),
    ))
}
