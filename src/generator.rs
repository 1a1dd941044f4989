//! Wordlist generation facade.
//!
//! Ties the output location handling to the pipeline: prepares the directory,
//! creates the file (never overwriting), runs the pipeline into it and reports
//! where the wordlist ended up.

use std::path::{Path, PathBuf};

use log::info;

use crate::output::{create_output_file, OutputError};
use crate::pipeline::{GenerationStats, Pipeline, PipelineConfig, PipelineError};
use crate::prefix::Prefix;

/// Errors from a full generation run
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Output directory or file could not be prepared
    #[error(transparent)]
    Output(#[from] OutputError),

    /// The pipeline failed; partial output is left on disk
    #[error("generation failed: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Outcome of a successful generation
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Path of the written wordlist
    pub path: PathBuf,
    /// Pipeline statistics
    pub stats: GenerationStats,
}

/// Generates wordlist files with a fixed pipeline configuration
#[derive(Debug, Clone, Default)]
pub struct WordlistGenerator {
    config: PipelineConfig,
}

impl WordlistGenerator {
    /// Create a generator with the given pipeline configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Pipeline configuration used for every run
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Generate the wordlist for `prefix` into `output_dir`.
    ///
    /// Creates `output_dir` if needed and writes `{prefix}-XXX-XXXX.txt`.
    ///
    /// # Errors
    ///
    /// Fails with [`OutputError::AlreadyExists`] if the target file exists
    /// (the file is not touched), or with the pipeline's first fatal error. A
    /// failed pipeline leaves the partially written file in place.
    pub fn generate(
        &self,
        prefix: &Prefix,
        output_dir: &Path,
    ) -> Result<GenerationReport, GenerateError> {
        let pipeline = Pipeline::new(prefix, self.config.clone())?;
        let (file, path) = create_output_file(output_dir, prefix)?;
        info!("Writing wordlist to {}", path.display());

        let output = pipeline.run(file)?;

        Ok(GenerationReport {
            path,
            stats: output.stats,
        })
    }
}
