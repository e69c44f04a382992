//! anchorfix - rewrite HTML anchors into sequential identifiers
//!
//! Prints the rewritten document to stdout; errors go to stderr with a
//! non-zero exit status.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
