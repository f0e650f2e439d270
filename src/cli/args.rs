//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output
//! - `--no-quiet` / `--no-json`: Override `quiet`/`json` set in config

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gobj - Inspect git remotes, refs, and branch configuration
#[derive(Parser, Debug)]
#[command(name = "gobj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gobj was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "no_quiet")]
    pub quiet: bool,

    /// Normal output, even if config sets quiet
    #[arg(long, global = true)]
    pub no_quiet: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true, conflicts_with = "no_json")]
    pub json: bool,

    /// Emit text, even if config sets json
    #[arg(long, global = true)]
    pub no_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Quiet mode as chosen on the command line, `None` to defer to config.
    pub fn quiet_override(&self) -> Option<bool> {
        flag_pair(self.quiet, self.no_quiet)
    }

    /// JSON output as chosen on the command line, `None` to defer to config.
    pub fn json_override(&self) -> Option<bool> {
        flag_pair(self.json, self.no_json)
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List remotes in display order
    #[command(
        name = "remotes",
        long_about = "List the repository's remotes in display order.\n\n\
            Remotes named upstream come first, then github, then origin, then \
            everything else in configuration order. Names are matched without \
            regard to case.",
        after_help = "\
EXAMPLES:
    # Remotes with fetch and push addresses
    gobj remotes

    # Just the names, best first
    gobj remotes --names

    # Machine-readable
    gobj remotes --json"
    )]
    Remotes {
        /// Print only remote names
        #[arg(long)]
        names: bool,
    },

    /// Split a remote-tracking ref into remote and branch
    #[command(
        name = "parse-ref",
        after_help = "\
EXAMPLES:
    gobj parse-ref refs/remotes/origin/main
    gobj parse-ref refs/remotes/upstream/feature/login"
    )]
    ParseRef {
        /// Ref of the form refs/remotes/<remote>/<branch>
        text: String,
    },

    /// Show a branch's remote and merge configuration
    #[command(
        name = "branch-config",
        long_about = "Show the branch.<name>.* configuration for a branch.\n\n\
            Prints the tracked remote (or remote address), the upstream merge ref, \
            the configured merge base, and the derived remote-tracking ref."
    )]
    BranchConfig {
        /// Branch to inspect (defaults to the current branch)
        branch: Option<String>,
    },

    /// List commits between a base and a head revision
    #[command(
        name = "commits",
        long_about = "List commits reachable from HEAD but not from BASE, newest first.\n\n\
            When --base is omitted, the head branch's merge-base configuration is \
            used, then the repository config's `base` setting.",
        after_help = "\
EXAMPLES:
    gobj commits --base main
    gobj commits feature/x"
    )]
    Commits {
        /// Head revision (defaults to the current branch)
        head: Option<String>,

        /// Base revision to exclude
        #[arg(long)]
        base: Option<String>,
    },

    /// Resolve full ref names to commit hashes
    #[command(name = "show-ref")]
    ShowRef {
        /// Full ref names, e.g. refs/heads/main
        #[arg(required = true)]
        refs: Vec<String>,
    },

    /// List remote-tracking refs
    #[command(name = "tracking")]
    Tracking,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    gobj completion bash > /etc/bash_completion.d/gobj
    gobj completion zsh > \"${fpath[1]}/_gobj\"
    gobj completion fish > ~/.config/fish/completions/gobj.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
