//! parse-ref command - Split a remote-tracking ref into remote and branch

use anyhow::Result;
use serde_json::json;

use super::output_flags;
use crate::cli::Context;
use crate::core::refs::parse_tracking_ref;
use crate::ui::output;

/// Parse a remote-tracking ref and print its parts.
///
/// Runs without a repository.
pub fn parse_ref(ctx: &Context, text: &str) -> Result<()> {
    let (json, verbosity) = output_flags(ctx)?;
    let tracking = parse_tracking_ref(text)?;

    if json {
        output::json(&json!({
            "ref": tracking,
            "remote": tracking.remote_name(),
            "branch": tracking.branch_name(),
        }))?;
        return Ok(());
    }

    output::print(format!("Ref:    {}", tracking), verbosity);
    output::result(format!("Remote: {}", tracking.remote_name()));
    output::result(format!("Branch: {}", tracking.branch_name()));
    Ok(())
}
