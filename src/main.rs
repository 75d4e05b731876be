//! Binary entrypoint for the trilipi server.

use std::process::ExitCode;

use trilipi::startup;

fn main() -> ExitCode {
    startup::run()
}
