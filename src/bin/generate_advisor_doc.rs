//! Generate the AVE CRM business case for financial advisors.

use std::process::ExitCode;

use ave_docgen::cli;
use ave_docgen::generators::BusinessCase;

fn main() -> ExitCode {
    cli::run(BusinessCase)
}
