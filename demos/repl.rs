//! Interactive simplysp calculator.
//!
//! Run as:                  `RUST_LOG=info cargo run --example repl`.
//! Keep history across runs: `cargo run --example repl -- --history .simplysp_history`.
//! Evaluate a file:         `cargo run --example repl -- --file input.lisp`.

use clap::{Arg, Command};
use log::{info, LevelFilter};
use std::fs;
use std::path::PathBuf;

use simplysp::repl::{run_file, Repl, ReplOptions};


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("simplysp")
        .version("0.0.0.0.1")
        .about("Calculator for parenthesized prefix arithmetic")
        .arg(
            Arg::new("history")
                .long("history")
                .takes_value(true)
                .value_name("PATH")
                .help("Load and save line history at PATH"),
        )
        .arg(
            Arg::new("reset")
                .short('r')
                .long("reset")
                .requires("history")
                .help("Delete saved history before starting"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Print results without color"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .takes_value(true)
                .value_name("PATH")
                .help("Evaluate each line of PATH instead of reading interactively"),
        )
        .get_matches();

    let color = !matches.is_present("no-color");
    if let Some(path) = matches.value_of("file") {
        return run_file(path, color).map_err(|err| err.to_string());
    }

    let history = matches.value_of("history").map(PathBuf::from);
    if matches.is_present("reset") {
        if let Some(path) = &history {
            if path.exists() {
                info!("Removing history at {}", path.to_string_lossy());
                if let Err(err) = fs::remove_file(path) {
                    return Err(format!("Resetting history failed: {}", err));
                }
            }
        }
    }

    let options = ReplOptions {
        history,
        color,
        ..ReplOptions::default()
    };
    let mut repl = Repl::new(options);
    repl.run().map_err(|err| err.to_string())
}
