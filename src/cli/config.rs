//! TOML configuration file support.
//!
//! Instead of passing tuning flags on every run, settings can live in a file:
//!
//! ```toml
//! # wordlist.toml
//! [generation]
//! output_dir = "/data/wordlists"
//! workers = 8
//! batch_size = 50000
//! write_buffer_size = 33554432
//! producer_timeout_secs = 5
//! result_timeout_secs = 10
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use wordlist::pipeline::PipelineConfig;

/// Root configuration structure for wordlist.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Generation settings.
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Settings for a generation run. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct GenerationConfig {
    /// Directory the wordlist is written to.
    pub output_dir: Option<PathBuf>,

    /// Number of render workers.
    pub workers: Option<usize>,

    /// Number of lines per batch.
    pub batch_size: Option<u64>,

    /// Output write buffer size in bytes.
    pub write_buffer_size: Option<usize>,

    /// Deadline in seconds for queueing a batch.
    pub producer_timeout_secs: Option<u64>,

    /// Deadline in seconds for queueing a rendered batch.
    pub result_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

impl GenerationConfig {
    /// Overlay the values present in the file onto `base`.
    pub fn apply(&self, mut base: PipelineConfig) -> PipelineConfig {
        if let Some(workers) = self.workers {
            base.num_workers = workers;
        }
        if let Some(batch_size) = self.batch_size {
            base.batch_size = batch_size;
        }
        if let Some(size) = self.write_buffer_size {
            base.write_buffer_size = size;
        }
        if let Some(secs) = self.producer_timeout_secs {
            base.producer_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.result_timeout_secs {
            base.result_timeout = Duration::from_secs(secs);
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [generation]
            output_dir = "/tmp/lists"
            workers = 8
            batch_size = 50000
            write_buffer_size = 1048576
            producer_timeout_secs = 2
            result_timeout_secs = 3
        "#;

        let config = Config::from_str(toml).unwrap();
        let gen = &config.generation;
        assert_eq!(gen.output_dir, Some(PathBuf::from("/tmp/lists")));
        assert_eq!(gen.workers, Some(8));
        assert_eq!(gen.batch_size, Some(50_000));
        assert_eq!(gen.write_buffer_size, Some(1_048_576));
        assert_eq!(gen.producer_timeout_secs, Some(2));
        assert_eq!(gen.result_timeout_secs, Some(3));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml = r#"
            [generation]
            workers = 2
        "#;

        let config = Config::from_str(toml).unwrap();
        let pipeline = config.generation.apply(PipelineConfig::default());
        assert_eq!(pipeline.num_workers, 2);
        assert_eq!(pipeline.batch_size, PipelineConfig::default().batch_size);
        assert_eq!(pipeline.total, 10_000_000);
    }

    #[test]
    fn test_timeouts_applied() {
        let toml = r#"
            [generation]
            producer_timeout_secs = 1
            result_timeout_secs = 20
        "#;

        let pipeline = Config::from_str(toml)
            .unwrap()
            .generation
            .apply(PipelineConfig::default());
        assert_eq!(pipeline.producer_timeout, Duration::from_secs(1));
        assert_eq!(pipeline.result_timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_zero_timeout_rejected_on_validate() {
        let toml = r#"
            [generation]
            result_timeout_secs = 0
        "#;

        let pipeline = Config::from_str(toml)
            .unwrap()
            .generation
            .apply(PipelineConfig::default());
        assert!(pipeline.validate().is_err());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.generation.workers, None);
        assert_eq!(config.generation.output_dir, None);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_str("[generation\nworkers = ").is_err());
    }
}
