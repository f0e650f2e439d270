//! branch-config command - Show a branch's remote and merge configuration

use anyhow::Result;
use serde_json::json;

use super::Session;
use crate::cli::Context;
use crate::ui::output;

/// Show `branch.<name>.*` configuration and the derived tracking ref.
pub fn branch_config(ctx: &Context, branch: Option<&str>) -> Result<()> {
    let session = Session::open(ctx)?;
    let branch = session.branch_or_current(branch)?;
    let config = session.git.branch_config(&branch)?;
    let tracking = config.tracking_ref();

    if session.json {
        output::json(&json!({
            "branch": branch,
            "config": config,
            "tracking_ref": tracking,
        }))?;
        return Ok(());
    }

    output::result(format!("Branch:     {}", branch));
    output::result(format!(
        "Remote:     {}",
        output::or_dash(config.remote_name.as_deref())
    ));
    if let Some(url) = &config.remote_url {
        output::result(format!("Remote URL: {}", url));
    }
    output::result(format!(
        "Merge ref:  {}",
        output::or_dash(config.merge_ref.as_deref())
    ));
    output::result(format!(
        "Merge base: {}",
        output::or_dash(config.merge_base.as_deref())
    ));
    output::result(format!("Tracking:   {}", output::or_dash(tracking)));
    Ok(())
}
