//! Generate the speaker script with click moments.

use std::process::ExitCode;

use ave_docgen::cli;
use ave_docgen::generators::ClickScript;

fn main() -> ExitCode {
    cli::run(ClickScript)
}
