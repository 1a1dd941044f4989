use anyhow::{Context, Result};
use log::info;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use wordlist::generator::WordlistGenerator;
use wordlist::output::default_output_dir;
use wordlist::pipeline::PipelineConfig;
use wordlist::prefix::Prefix;

use super::config::Config;
use super::prompt::read_prefix;

/// Command-line options relevant to a generation run
pub struct Options {
    pub output: Option<PathBuf>,
    pub prefix: Option<String>,
    pub config: Option<PathBuf>,
    pub workers: Option<usize>,
    pub batch_size: Option<u64>,
}

/// Generate one wordlist
pub fn run(options: Options) -> Result<()> {
    let file_config = match &options.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // CLI flags > config file > defaults
    let mut pipeline_config = file_config.generation.apply(PipelineConfig::default());
    if let Some(workers) = options.workers {
        pipeline_config.num_workers = workers;
    }
    if let Some(batch_size) = options.batch_size {
        pipeline_config.batch_size = batch_size;
    }

    let output_dir = options
        .output
        .or(file_config.generation.output_dir)
        .unwrap_or_else(default_output_dir);

    let prefix = match options.prefix {
        Some(raw) => Prefix::parse(&raw).context("Invalid prefix")?,
        None => {
            print_banner(pipeline_config.width());
            read_prefix(io::stdin().lock(), io::stdout())?
        }
    };

    info!("Output directory: {}", output_dir.display());
    info!("Workers: {}", pipeline_config.num_workers);
    info!("Batch size: {}", pipeline_config.batch_size);

    let start = Instant::now();
    let generator = WordlistGenerator::new(pipeline_config);
    let report = generator.generate(&prefix, &output_dir)?;

    println!(
        "{}",
        success(&format!(
            "Generated {} combinations in {}",
            report.stats.lines_written,
            report.path.display()
        ))
    );
    println!("Completed in: {:?}", start.elapsed());
    info!(
        "{} ({:.0} lines/s)",
        report.stats,
        report.stats.lines_per_second()
    );

    Ok(())
}

fn print_banner(width: usize) {
    let example = "053";
    println!(
        "{}",
        headline(&format!(
            "Welcome! This tool generates every {}-digit combination behind a custom prefix.",
            width
        ))
    );
    println!(
        "{}",
        headline(&format!(
            "For example, entering '{0}' generates lines like '{0}{1}', '{0}{2}', etc.",
            example,
            "0".repeat(width),
            format!("{:0width$}", 1, width = width)
        ))
    );
}

/// Print a fatal error with its cause chain to stderr
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{}", failure(&format!("Error: {:#}", err)));
}

#[cfg(feature = "colorized_output")]
fn headline(msg: &str) -> String {
    console::style(msg).green().bold().to_string()
}

#[cfg(feature = "colorized_output")]
fn success(msg: &str) -> String {
    console::style(msg).green().to_string()
}

#[cfg(feature = "colorized_output")]
fn failure(msg: &str) -> String {
    console::style(msg).red().to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn headline(msg: &str) -> String {
    msg.to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn success(msg: &str) -> String {
    msg.to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn failure(msg: &str) -> String {
    msg.to_string()
}
