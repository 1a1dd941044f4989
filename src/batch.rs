//! Batches and range partitioning.

use std::ops::Range;

use crate::pipeline::PipelineError;

/// A half-open range `[start, end)` of indices rendered as one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// First index (inclusive)
    pub start: u64,
    /// Last index (exclusive)
    pub end: u64,
}

impl Batch {
    /// Create a batch. No validation happens here, see [`Batch::validate`].
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of indices in the batch (0 for a malformed batch)
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the batch holds no indices
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indices covered by the batch
    pub fn indices(&self) -> Range<u64> {
        self.start..self.end
    }

    /// Check `start <= end <= total`
    pub fn validate(&self, total: u64) -> Result<(), PipelineError> {
        if self.start > self.end || self.end > total {
            return Err(PipelineError::InvalidBatch {
                start: self.start,
                end: self.end,
                total,
            });
        }
        Ok(())
    }
}

/// Iterator over consecutive batches covering `[0, total)`.
///
/// Created by [`partition`].
#[derive(Debug, Clone)]
pub struct Batches {
    next: u64,
    total: u64,
    batch_size: u64,
}

impl Iterator for Batches {
    type Item = Batch;

    fn next(&mut self) -> Option<Batch> {
        if self.next >= self.total {
            return None;
        }
        let start = self.next;
        let end = start.saturating_add(self.batch_size).min(self.total);
        self.next = end;
        Some(Batch { start, end })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next.min(self.total)).div_ceil(self.batch_size);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Split `[0, total)` into ascending batches of `batch_size` indices.
///
/// The last batch is shorter when `total` is not a multiple of `batch_size`.
/// A `batch_size` of 0 is treated as 1.
pub fn partition(total: u64, batch_size: u64) -> Batches {
    Batches {
        next: 0,
        total,
        batch_size: batch_size.max(1),
    }
}
