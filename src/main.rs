//! gobj binary entry point.

use std::process::ExitCode;

use gitobjects::cli;
use gitobjects::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
