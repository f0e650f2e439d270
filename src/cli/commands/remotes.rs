//! remotes command - List remotes in display order

use anyhow::Result;

use super::Session;
use crate::cli::Context;
use crate::ui::output;

/// List the repository's remotes, best first.
pub fn remotes(ctx: &Context, names_only: bool) -> Result<()> {
    let session = Session::open(ctx)?;
    let remotes = session.git.remotes(session.config.resolved_key())?;

    if session.json {
        output::json(&remotes)?;
        return Ok(());
    }

    if remotes.is_empty() {
        output::print("No remotes configured.", session.verbosity);
        return Ok(());
    }

    for remote in &remotes {
        if names_only {
            output::result(remote);
            continue;
        }

        output::result(format!(
            "{}\t{} (fetch)",
            remote,
            output::or_dash(remote.fetch_url.as_ref())
        ));
        output::result(format!(
            "{}\t{} (push)",
            remote,
            output::or_dash(remote.push_url.as_ref())
        ));
        if !remote.resolved.is_empty() {
            output::print(
                format!("{}\tresolved: {}", remote, remote.resolved),
                session.verbosity,
            );
        }
    }

    Ok(())
}
