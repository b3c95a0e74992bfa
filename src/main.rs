//! Estate CLI - Flat-file property-listing manager

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = estate_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
