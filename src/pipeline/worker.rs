//! Render workers.
//!
//! Each worker pulls batches, renders every line of a batch into a private
//! reusable buffer, then copies the result into an immutable buffer whose
//! ownership moves to the writer through the result queue.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, SendTimeoutError, Sender};
use log::{debug, trace};

use super::error::{PipelineError, Stage};
use super::error_slot::ErrorSlot;
use crate::batch::Batch;
use crate::render::LineRenderer;

/// The rendered lines of one batch, handed from a worker to the writer
#[derive(Debug)]
pub(crate) struct RenderedBatch {
    pub(crate) batch: Batch,
    pub(crate) data: Box<[u8]>,
}

pub(crate) struct RenderWorker {
    pub(crate) id: usize,
    pub(crate) renderer: LineRenderer,
    pub(crate) batch_size: u64,
    pub(crate) timeout: Duration,
    pub(crate) batches: Receiver<Batch>,
    pub(crate) results: Sender<RenderedBatch>,
    pub(crate) errors: Arc<ErrorSlot>,
}

impl RenderWorker {
    /// Start the worker on a thread named `wordlist-worker-{id}`
    pub(crate) fn spawn(self) -> Result<JoinHandle<()>, PipelineError> {
        let name = format!("wordlist-worker-{}", self.id);
        thread::Builder::new()
            .name(name.clone())
            .spawn(move || self.run())
            .map_err(|source| PipelineError::ThreadSpawn { name, source })
    }

    fn run(self) {
        // Worst case for a full batch, reserved once and reused
        let mut buf =
            Vec::with_capacity(batch_buffer_len(self.batch_size, &self.renderer).unwrap_or(0));
        let mut rendered = 0u64;

        for batch in self.batches.iter() {
            if self.errors.is_tripped() {
                debug!("Worker {} stopping: pipeline failed", self.id);
                return;
            }

            if let Err(e) = render_batch(&self.renderer, batch, &mut buf) {
                self.errors.record(e);
                return;
            }

            let result = RenderedBatch {
                batch,
                data: Box::from(buf.as_slice()),
            };
            match self.results.send_timeout(result, self.timeout) {
                Ok(()) => {
                    trace!("Worker {} rendered batch {}-{}", self.id, batch.start, batch.end);
                    rendered += 1;
                }
                Err(SendTimeoutError::Timeout(_)) => {
                    self.errors.record(PipelineError::BackpressureTimeout {
                        stage: Stage::Worker(self.id),
                        start: batch.start,
                        end: batch.end,
                        timeout: self.timeout,
                    });
                    return;
                }
                Err(SendTimeoutError::Disconnected(_)) => {
                    debug!("Worker {}: result queue closed", self.id);
                    return;
                }
            }
        }

        debug!("Worker {} finished: {} batches rendered", self.id, rendered);
    }
}

/// Bytes needed for the largest batch the producer can emit.
///
/// No batch holds more than `total` lines, whatever the batch size. `None`
/// when the size does not fit in memory.
pub(crate) fn batch_buffer_len(batch_size: u64, renderer: &LineRenderer) -> Option<usize> {
    usize::try_from(batch_size.min(renderer.total()))
        .ok()?
        .checked_mul(renderer.line_len())
}

/// Render every line of `batch` into `buf`, replacing its previous content.
///
/// `buf` is grown to the batch's worst-case footprint up front; the per-line
/// capacity check only trips if that sizing is wrong.
pub(crate) fn render_batch(
    renderer: &LineRenderer,
    batch: Batch,
    buf: &mut Vec<u8>,
) -> Result<(), PipelineError> {
    batch.validate(renderer.total())?;

    let line_len = renderer.line_len();
    let needed = usize::try_from(batch.len())
        .ok()
        .and_then(|lines| lines.checked_mul(line_len))
        .ok_or(PipelineError::BufferOverflow {
            index: batch.start,
            capacity: buf.capacity(),
        })?;

    buf.clear();
    buf.reserve(needed);
    let capacity = buf.capacity();

    for index in batch.indices() {
        if buf.len() + line_len > capacity {
            return Err(PipelineError::BufferOverflow { index, capacity });
        }
        renderer.render_into(index, buf)?;
    }

    Ok(())
}
