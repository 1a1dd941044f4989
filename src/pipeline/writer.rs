//! Background writer for rendered batches.
//!
//! A single thread owns the output stream and its write buffer. It drains the
//! result queue in arrival order, appends each buffer, and tallies the lines
//! it wrote.
//!
//! ```text
//! ┌────────────┐   bounded channel    ┌─────────────────┐
//! │  Workers   │ ──RenderedBatch───▶  │ Writer thread   │──▶ BufWriter<W>
//! │            │   (pointer move)     │ (count + write) │
//! └────────────┘                      └───────┬─────────┘
//!                                             │ done signal
//!                                             ▼
//!                                       Orchestrator
//! ```

use std::io::{BufWriter, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use log::{debug, trace, warn};

use super::error::PipelineError;
use super::error_slot::ErrorSlot;
use super::worker::RenderedBatch;

/// Totals tallied by the writer thread
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct WriterSummary {
    pub(crate) lines_written: u64,
    pub(crate) bytes_written: u64,
    pub(crate) batches_written: u64,
}

/// How the writer thread ended
#[derive(Debug)]
pub(crate) enum WriterExit {
    /// Queue closed, everything written and flushed
    Completed(WriterSummary),
    /// Stopped early; the cause is in the error slot
    Aborted,
}

/// Handle to the background writer thread
pub(crate) struct BatchWriter<W: Write + Send + 'static> {
    handle: Option<JoinHandle<Option<W>>>,
    done: Receiver<WriterExit>,
}

impl<W: Write + Send + 'static> BatchWriter<W> {
    /// Spawn the writer thread (`wordlist-writer`).
    ///
    /// The sink is wrapped in a `BufWriter` of `buffer_size` bytes. On a clean
    /// drain the buffer is flushed and the sink handed back through
    /// [`finish`](Self::finish).
    pub(crate) fn spawn(
        sink: W,
        buffer_size: usize,
        results: Receiver<RenderedBatch>,
        errors: Arc<ErrorSlot>,
    ) -> Result<Self, PipelineError> {
        let (done_tx, done_rx) = bounded(1);
        let name = "wordlist-writer".to_string();

        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                let out = BufWriter::with_capacity(buffer_size, sink);
                drain(out, results, &errors, &done_tx)
            })
            .map_err(|source| PipelineError::ThreadSpawn { name, source })?;

        Ok(Self {
            handle: Some(handle),
            done: done_rx,
        })
    }

    /// Completion signal; yields exactly one [`WriterExit`], or disconnects if
    /// the thread panicked
    pub(crate) fn done(&self) -> &Receiver<WriterExit> {
        &self.done
    }

    /// Join the thread after a completed drain and recover the sink
    pub(crate) fn finish(mut self) -> Result<W, PipelineError> {
        let handle = self
            .handle
            .take()
            .ok_or(PipelineError::ThreadPanicked("writer"))?;

        match handle.join() {
            Ok(Some(sink)) => Ok(sink),
            Ok(None) | Err(_) => Err(PipelineError::ThreadPanicked("writer")),
        }
    }

    /// Give the thread up to `grace` to wind down after a failure.
    ///
    /// A writer stuck on a stalled sink is left detached; it releases the
    /// stream once the sink unblocks.
    pub(crate) fn abandon(mut self, grace: Duration) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        match self.done.recv_timeout(grace) {
            Ok(_) | Err(RecvTimeoutError::Disconnected) => {
                if handle.join().is_err() {
                    warn!("Writer thread panicked while shutting down");
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!("Writer thread still busy after {:?}; detaching", grace);
            }
        }
    }
}

fn drain<W: Write>(
    mut out: BufWriter<W>,
    results: Receiver<RenderedBatch>,
    errors: &ErrorSlot,
    done: &Sender<WriterExit>,
) -> Option<W> {
    let mut summary = WriterSummary::default();

    for rendered in results.iter() {
        if errors.is_tripped() {
            debug!(
                "Writer stopping after {} batches: pipeline failed",
                summary.batches_written
            );
            let _ = done.send(WriterExit::Aborted);
            return None;
        }

        if let Err(e) = out.write_all(&rendered.data) {
            errors.record(PipelineError::WriteFailure(e));
            let _ = done.send(WriterExit::Aborted);
            return None;
        }

        summary.lines_written += count_lines(&rendered.data);
        summary.bytes_written += rendered.data.len() as u64;
        summary.batches_written += 1;
        trace!(
            "Wrote batch {}-{} ({} bytes)",
            rendered.batch.start,
            rendered.batch.end,
            rendered.data.len()
        );
    }

    match out.into_inner() {
        Ok(sink) => {
            debug!(
                "Writer finished: {} lines in {} batches",
                summary.lines_written, summary.batches_written
            );
            let _ = done.send(WriterExit::Completed(summary));
            Some(sink)
        }
        Err(e) => {
            errors.record(PipelineError::WriteFailure(e.into_error()));
            let _ = done.send(WriterExit::Aborted);
            None
        }
    }
}

/// Number of newline bytes in `data`
pub(crate) fn count_lines(data: &[u8]) -> u64 {
    data.iter().filter(|&&b| b == b'\n').count() as u64
}
