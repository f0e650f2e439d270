//! show-ref command - Resolve full ref names to commit hashes

use anyhow::Result;

use super::Session;
use crate::cli::Context;
use crate::ui::output;

/// Resolve refs; missing refs are reported and skipped.
pub fn show_ref(ctx: &Context, refnames: &[String]) -> Result<()> {
    let session = Session::open(ctx)?;
    let refs = session.git.show_refs(refnames)?;

    for name in refnames {
        if !refs.iter().any(|r| &r.name == name) {
            output::warn(format!("ref not found: {}", name), session.verbosity);
        }
    }

    if session.json {
        output::json(&refs)?;
        return Ok(());
    }

    for r in &refs {
        output::result(format!("{} {}", r.hash, r.name));
    }
    Ok(())
}
