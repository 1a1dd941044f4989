//! First-error-wins slot shared by every pipeline stage.
//!
//! The first call to [`ErrorSlot::record`] wins: it flips an atomic flag and
//! hands the error to a capacity-one channel the orchestrator waits on. Every
//! later error is logged and dropped. Stages poll [`ErrorSlot::is_tripped`]
//! before taking new work so a failure halts submission pipeline-wide.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, Sender};

use super::error::PipelineError;

pub(crate) struct ErrorSlot {
    tripped: AtomicBool,
    sender: Sender<PipelineError>,
}

impl ErrorSlot {
    /// Create a slot and the receiver that yields the winning error
    pub(crate) fn new() -> (Arc<Self>, Receiver<PipelineError>) {
        let (sender, receiver) = bounded(1);
        let slot = Arc::new(Self {
            tripped: AtomicBool::new(false),
            sender,
        });
        (slot, receiver)
    }

    /// Record `err` if no error has been recorded yet.
    ///
    /// Returns `true` when this call won the slot.
    pub(crate) fn record(&self, err: PipelineError) -> bool {
        if self
            .tripped
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            // Single winner and capacity one: never full here
            let _ = self.sender.try_send(err);
            true
        } else {
            log::debug!("Discarding secondary pipeline error: {}", err);
            false
        }
    }

    pub(crate) fn is_tripped(&self) -> bool {
        self.tripped.load(Ordering::Acquire)
    }
}
