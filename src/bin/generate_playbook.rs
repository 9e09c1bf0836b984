//! Generate the run-of-show playbook.

use std::process::ExitCode;

use ave_docgen::cli;
use ave_docgen::generators::Playbook;

fn main() -> ExitCode {
    cli::run(Playbook)
}
