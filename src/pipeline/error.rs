use std::fmt;
use std::time::Duration;

/// Pipeline stage that hit a backpressure timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Batch producer pushing onto the batch queue
    Producer,
    /// Render worker pushing onto the result queue
    Worker(usize),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Producer => f.write_str("producer"),
            Stage::Worker(id) => write!(f, "worker {}", id),
        }
    }
}

/// Errors that can occur while generating a wordlist
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Batch range outside `0 <= start <= end <= total`
    #[error("invalid batch range: {start}-{end} (total {total})")]
    InvalidBatch {
        /// Batch start
        start: u64,
        /// Batch end
        end: u64,
        /// Expected total number of lines
        total: u64,
    },

    /// Renderer asked for an index outside `[0, total)`
    #[error("number out of range: {index} (total {total})")]
    OutOfRange {
        /// Offending index
        index: u64,
        /// Expected total number of lines
        total: u64,
    },

    /// A worker's render buffer would have grown past its reserved size
    #[error("buffer overflow prevented at line {index} (capacity {capacity} bytes)")]
    BufferOverflow {
        /// Index being rendered when the guard tripped
        index: u64,
        /// Reserved capacity in bytes
        capacity: usize,
    },

    /// A push onto a bounded queue stayed blocked past its deadline
    #[error("{stage}: timeout after {timeout:?} sending batch {start}-{end}")]
    BackpressureTimeout {
        /// Stage whose push timed out
        stage: Stage,
        /// Start of the batch being handed off
        start: u64,
        /// End of the batch being handed off
        end: u64,
        /// Deadline that elapsed
        timeout: Duration,
    },

    /// The output stream rejected a write or flush
    #[error("failed to write batch: {0}")]
    WriteFailure(#[source] std::io::Error),

    /// Writer finished but the line count does not match the expected total
    #[error("safety check failed: expected {expected} lines, wrote {actual}")]
    CountMismatch {
        /// Expected number of lines
        expected: u64,
        /// Lines actually written
        actual: u64,
    },

    /// Configuration rejected before starting any thread
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A pipeline thread could not be spawned
    #[error("failed to spawn {name} thread: {source}")]
    ThreadSpawn {
        /// Thread name
        name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A pipeline thread panicked or exited without reporting
    #[error("{0} thread exited unexpectedly")]
    ThreadPanicked(&'static str),
}
