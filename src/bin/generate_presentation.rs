//! Generate the internship presentation deck.

use std::process::ExitCode;

use ave_docgen::cli;
use ave_docgen::generators::Presentation;

fn main() -> ExitCode {
    cli::run(Presentation)
}
