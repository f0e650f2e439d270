//! commits command - List commits between a base and a head revision

use anyhow::{bail, Result};

use super::Session;
use crate::cli::Context;
use crate::ui::output;

/// List commits reachable from `head` but not from `base`.
///
/// Base resolution: explicit `--base`, then the head branch's merge base,
/// then the repository config's `base`.
pub fn commits(ctx: &Context, head: Option<&str>, base: Option<&str>) -> Result<()> {
    let session = Session::open(ctx)?;
    let head = session.branch_or_current(head)?;

    let base = match base {
        Some(base) => base.to_string(),
        None => {
            let from_branch = session.git.branch_config(&head)?.merge_base;
            match from_branch.or_else(|| session.config.base().map(String::from)) {
                Some(base) => base,
                None => bail!(
                    "no base for '{}': pass --base, set branch.{}.merge-base, or set `base` in repo config",
                    head,
                    head
                ),
            }
        }
    };

    tracing::debug!(%base, %head, "resolved commit range");
    let commits = session.git.commits(&base, &head)?;

    if session.json {
        output::json(&commits)?;
        return Ok(());
    }

    output::print(
        format!("{} commit(s) in {}..{}", commits.len(), base, head),
        session.verbosity,
    );
    for commit in &commits {
        output::result(format!("{} {}", commit.short_sha(7), commit.title));
    }
    Ok(())
}
