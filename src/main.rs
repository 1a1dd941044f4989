//! # wordlist-generator
//!
//! Command-line front end for the `wordlist` library.
//!
//! ## Usage
//!
//! ```bash
//! # Prompt for the prefix, write to ~/.wordlist-generator
//! wordlist-generator
//!
//! # Non-interactive, custom output directory
//! wordlist-generator --prefix 053 --output ./my-wordlists
//! ```

use clap::Parser;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());

    match cli::dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
