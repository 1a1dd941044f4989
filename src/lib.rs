//! # wordlist - Prefixed Numeric Wordlist Generator
//!
//! `wordlist` enumerates every integer in `[0, total)`, renders each one as a
//! zero-padded decimal appended to a user-supplied prefix, and streams the
//! lines to a single file as fast as the disk allows.
//!
//! With the default configuration a run writes 10,000,000 lines, covering
//! every 7-digit suffix:
//!
//! ```text
//! 0530000000
//! 0530000001
//! ...
//! 0539999999
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wordlist::generator::WordlistGenerator;
//! use wordlist::output::default_output_dir;
//! use wordlist::pipeline::PipelineConfig;
//! use wordlist::prefix::Prefix;
//!
//! let prefix = Prefix::parse("053")?;
//! let generator = WordlistGenerator::new(PipelineConfig::default());
//!
//! let report = generator.generate(&prefix, &default_output_dir())?;
//! println!("{} -> {}", report.stats, report.path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prefix`]: prefix validation
//! - [`output`]: output directory and file creation (never overwrites)
//! - [`render`]: fixed-width line rendering
//! - [`batch`]: batches and range partitioning
//! - [`pipeline`]: producer, render workers, writer and orchestration
//! - [`generator`]: facade running the pipeline into a fresh output file
//!
//! ## Output Order
//!
//! Batches are rendered in parallel and written in completion order. Every
//! line appears exactly once and lines inside a batch are ascending, but the
//! file as a whole is not sorted.

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod generator;
pub mod output;
pub mod pipeline;
pub mod prefix;
pub mod render;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::batch::{partition, Batch};
    pub use crate::generator::{GenerateError, GenerationReport, WordlistGenerator};
    pub use crate::output::{create_output_file, default_output_dir, output_file_name, OutputError};
    pub use crate::pipeline::{
        GenerationStats, Pipeline, PipelineConfig, PipelineError, PipelineOutput, Stage,
    };
    pub use crate::prefix::{Prefix, PrefixError, MAX_PREFIX_LEN};
    pub use crate::render::{digit_width, LineRenderer};
}
