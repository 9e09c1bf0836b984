//! Generate the fully written-out speaker script.

use std::process::ExitCode;

use ave_docgen::cli;
use ave_docgen::generators::FullScript;

fn main() -> ExitCode {
    cli::run(FullScript)
}
