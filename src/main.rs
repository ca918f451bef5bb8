//! Huewheel command-line entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    match huewheel::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
