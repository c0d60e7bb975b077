//! Anchor Rules CLI
//!
//! Usage:
//!   anchor-rules [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Layout configuration (TOML format)
//!       --constraints    Print activated constraints instead of frames
//!   -h, --help           Print help
//!
//! Set `RUST_LOG=anchor_rules=debug` to trace every activated constraint.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use anchor_rules::{load_config, solve_with_config, LayoutConfig};

#[derive(Parser)]
#[command(name = "anchor-rules")]
#[command(about = "Solve declarative view layouts described in TOML")]
struct Cli {
    /// Layout document (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Layout configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every activated constraint in activation order
    #[arg(long)]
    constraints: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => LayoutConfig::default(),
    };

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            buffer
        }
    };

    let layout = match solve_with_config(&source, &config) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.constraints {
        for constraint in layout.constraints() {
            println!("{}", constraint);
        }
    } else {
        for (name, frame) in layout.frames() {
            println!("{} {}", name, frame);
        }
    }

    ExitCode::SUCCESS
}
