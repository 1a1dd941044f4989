use std::time::Duration;

use super::error::PipelineError;
use crate::render::digit_width;

/// Number of lines in a full wordlist (every 7-digit suffix)
pub const DEFAULT_TOTAL: u64 = 10_000_000;

/// Default number of render workers
pub const DEFAULT_WORKERS: usize = 4;

/// Default number of indices per batch
pub const DEFAULT_BATCH_SIZE: u64 = 100_000;

/// Default output write buffer (32 MiB)
pub const DEFAULT_WRITE_BUFFER_SIZE: usize = 32 * 1024 * 1024;

/// Default deadline for pushing a batch onto the batch queue
pub const DEFAULT_PRODUCER_TIMEOUT: Duration = Duration::from_secs(5);

/// Default deadline for pushing a rendered buffer onto the result queue
pub const DEFAULT_RESULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the generation pipeline.
///
/// Immutable once handed to [`Pipeline::new`](super::Pipeline::new); the
/// `with_*` methods consume and return the config for chaining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Number of lines to generate, covering indices `[0, total)`
    pub total: u64,

    /// Number of render worker threads
    pub num_workers: usize,

    /// Indices per batch; the last batch may be shorter
    pub batch_size: u64,

    /// Capacity of the batch and result queues.
    /// `None` uses twice the worker count.
    pub queue_capacity: Option<usize>,

    /// Size of the buffered writer in front of the output stream
    pub write_buffer_size: usize,

    /// Deadline for the producer to push one batch
    pub producer_timeout: Duration,

    /// Deadline for a worker to push one rendered buffer
    pub result_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            total: DEFAULT_TOTAL,
            num_workers: DEFAULT_WORKERS,
            batch_size: DEFAULT_BATCH_SIZE,
            queue_capacity: None,
            write_buffer_size: DEFAULT_WRITE_BUFFER_SIZE,
            producer_timeout: DEFAULT_PRODUCER_TIMEOUT,
            result_timeout: DEFAULT_RESULT_TIMEOUT,
        }
    }
}

impl PipelineConfig {
    /// Set the number of lines to generate
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    /// Set the worker count
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set an explicit queue capacity
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Set the output write buffer size
    pub fn with_write_buffer_size(mut self, size: usize) -> Self {
        self.write_buffer_size = size;
        self
    }

    /// Set the producer push deadline
    pub fn with_producer_timeout(mut self, timeout: Duration) -> Self {
        self.producer_timeout = timeout;
        self
    }

    /// Set the worker push deadline
    pub fn with_result_timeout(mut self, timeout: Duration) -> Self {
        self.result_timeout = timeout;
        self
    }

    /// Effective capacity of both hand-off queues
    pub fn effective_queue_capacity(&self) -> usize {
        self.queue_capacity
            .unwrap_or_else(|| self.num_workers.saturating_mul(2))
    }

    /// Digit width of the numeric suffix, derived from `total`
    pub fn width(&self) -> usize {
        digit_width(self.total)
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.num_workers == 0 {
            return Err(PipelineError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(PipelineError::InvalidConfig(
                "batch size must be at least 1".to_string(),
            ));
        }
        if self.effective_queue_capacity() == 0 {
            return Err(PipelineError::InvalidConfig(
                "queue capacity must be at least 1".to_string(),
            ));
        }
        if self.producer_timeout.is_zero() {
            return Err(PipelineError::InvalidConfig(
                "producer timeout must be greater than zero".to_string(),
            ));
        }
        if self.result_timeout.is_zero() {
            return Err(PipelineError::InvalidConfig(
                "result timeout must be greater than zero".to_string(),
            ));
        }
        // Batches never exceed the total, so only that many lines are buffered
        if usize::try_from(self.batch_size.min(self.total)).is_err() {
            return Err(PipelineError::InvalidConfig(format!(
                "batch size {} does not fit in memory",
                self.batch_size
            )));
        }
        Ok(())
    }
}
