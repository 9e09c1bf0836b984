//! Shared command line for the generator binaries.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::common::Result;
use crate::generators::Generator;
use crate::render::Render;

/// Options accepted by every generator binary.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory to write the document into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Re-open the written file and check it against the outline
    #[arg(long)]
    pub verify: bool,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Parse the process arguments and run `generator`.
pub fn run<G: Generator>(generator: G) -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    match execute(&generator, &args) {
        Ok(()) => {
            println!("{}", generator.confirmation());
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Error: {}", error_chain(&err));
            ExitCode::FAILURE
        },
    }
}

/// Generate into `args.output_dir`, then verify when asked.
pub fn execute<G: Generator>(generator: &G, args: &Args) -> Result<()> {
    let (document, path) = generator.generate_document(&args.output_dir)?;
    if args.verify {
        document.verify(&path)?;
        log::info!("verified {}", path.display());
    }
    Ok(())
}

/// Format an error followed by its sources, outermost first. A source whose
/// text the message already ends with is not repeated.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
