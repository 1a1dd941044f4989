//! Batch producer: partitions the index range and feeds the batch queue.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{SendTimeoutError, Sender};
use log::debug;

use super::error::{PipelineError, Stage};
use super::error_slot::ErrorSlot;
use crate::batch::{partition, Batch};

pub(crate) struct BatchProducer {
    pub(crate) total: u64,
    pub(crate) batch_size: u64,
    pub(crate) timeout: Duration,
    pub(crate) batches: Sender<Batch>,
    pub(crate) errors: Arc<ErrorSlot>,
}

impl BatchProducer {
    /// Start the producer on a thread named `wordlist-producer`.
    ///
    /// The batch queue is closed when the thread returns, which tells the
    /// workers no more input will arrive.
    pub(crate) fn spawn(self) -> Result<JoinHandle<()>, PipelineError> {
        let name = "wordlist-producer".to_string();
        thread::Builder::new()
            .name(name.clone())
            .spawn(move || self.run())
            .map_err(|source| PipelineError::ThreadSpawn { name, source })
    }

    fn run(self) {
        let mut emitted = 0u64;

        for batch in partition(self.total, self.batch_size) {
            if self.errors.is_tripped() {
                debug!("Producer stopping after {} batches: pipeline failed", emitted);
                return;
            }

            match self.batches.send_timeout(batch, self.timeout) {
                Ok(()) => emitted += 1,
                Err(SendTimeoutError::Timeout(batch)) => {
                    self.errors.record(PipelineError::BackpressureTimeout {
                        stage: Stage::Producer,
                        start: batch.start,
                        end: batch.end,
                        timeout: self.timeout,
                    });
                    return;
                }
                Err(SendTimeoutError::Disconnected(_)) => {
                    debug!("Batch queue closed, producer stopping after {} batches", emitted);
                    return;
                }
            }
        }

        debug!("Producer finished: {} batches emitted", emitted);
    }
}
