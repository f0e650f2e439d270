//! tracking command - List remote-tracking refs

use anyhow::Result;

use super::Session;
use crate::cli::Context;
use crate::ui::output;

/// List every remote-tracking ref in the repository.
pub fn tracking(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx)?;
    let refs = session.git.tracking_refs()?;

    if session.json {
        output::json(&refs)?;
        return Ok(());
    }

    if refs.is_empty() {
        output::print("No remote-tracking refs.", session.verbosity);
        return Ok(());
    }

    for tracking in &refs {
        output::result(format!(
            "{}\t{}\t{}",
            tracking.remote_name(),
            tracking.branch_name(),
            tracking
        ));
    }
    Ok(())
}
