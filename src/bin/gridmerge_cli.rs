//! CLI tool for gridmerge - replays a selection scenario and outputs JSON
//!
//! Usage:
//!   gridmerge_cli <scenario.json>              # Output report to stdout
//!   gridmerge_cli <scenario.json> -o out.json  # Output report to file
//!
//! Set `RUST_LOG=gridmerge=debug` to see merge events on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use gridmerge::scenario::{replay, Scenario};
use std::env;
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: gridmerge_cli <scenario.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(args[3].as_str())
    } else {
        None
    };

    if let Err(e) = run(input_path, output_path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(input_path: &str, output_path: Option<&str>) -> gridmerge::Result<()> {
    let scenario = Scenario::from_file(input_path)?;
    let report = replay(&scenario)?;
    let json = serde_json::to_string_pretty(&report)?;

    match output_path {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Written: {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
