//! Transposer CLI - transpose a comma-delimited text matrix
//!
//! ```bash
//! transposer                          # inputMatrix.txt -> outputMatrix.txt
//! transposer in.txt out.txt           # explicit paths
//! transposer -v --json in.txt out.txt # log progress, print a JSON summary
//! ```
//!
//! Exits with status 1 if the input cannot be read, is not rectangular, or
//! the output cannot be written.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use transposer::{transpose_file, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "transposer")]
#[command(about = "Transpose a comma-delimited text matrix", long_about = None)]
struct Cli {
    /// Input matrix file
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output matrix file (created or truncated)
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print a JSON summary of the run on stdout
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let summary = transpose_file(&cli.input, &cli.output)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
