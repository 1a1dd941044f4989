use std::fmt;
use std::time::Duration;

/// Statistics from a completed generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// Number of lines written (equals the configured total on success)
    pub lines_written: u64,
    /// Total bytes written to the output stream
    pub bytes_written: u64,
    /// Number of rendered batches appended
    pub batches_written: u64,
    /// Wall-clock time from start to the verified finish
    pub elapsed: Duration,
}

impl GenerationStats {
    /// Throughput in lines per second (0 for an instantaneous run)
    pub fn lines_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.lines_written as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} lines ({} bytes) in {} batches",
            self.lines_written, self.bytes_written, self.batches_written
        )
    }
}
