use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod generate;
mod prompt;

/// Generate a wordlist of every 7-digit number behind a custom prefix
#[derive(Parser)]
#[command(name = "wordlist-generator")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example:\n  wordlist-generator --output ./my-wordlists\n\n\
Default output directory: ~/.wordlist-generator")]
pub struct Cli {
    /// Output directory (default: ~/.wordlist-generator)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Prefix for every line; prompted for on stdin when omitted
    #[arg(short, long)]
    prefix: Option<String>,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    // === Advanced tuning flags (hidden from --help) ===
    /// Number of render workers
    #[arg(long, hide = true)]
    workers: Option<usize>,

    /// Lines per batch
    #[arg(long, hide = true)]
    batch_size: Option<u64>,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    generate::run(generate::Options {
        output: cli.output,
        prefix: cli.prefix,
        config: cli.config,
        workers: cli.workers,
        batch_size: cli.batch_size,
    })
}

pub use generate::print_error;
