//! # Generation Pipeline
//!
//! Renders every index in `[0, total)` as a prefixed, fixed-width line and
//! streams the lines to a single output sink.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐  batch queue  ┌──────────┐  result queue  ┌──────────┐
//! │ Producer │ ──Batch────▶  │ Worker 0 │ ──rendered───▶ │  Writer  │──▶ sink
//! │          │  (bounded,    │ Worker 1 │   (bounded,    │ (single  │
//! │          │   timeout)    │ Worker N │    timeout)    │  owner)  │
//! └──────────┘               └──────────┘                └──────────┘
//!       │                         │                           │
//!       └──────── first error ────┴───────────────────────────┘
//!                      ▼
//!                 Orchestrator (races error slot vs writer done)
//! ```
//!
//! Batches are emitted in ascending order, but workers finish at different
//! speeds, so the output is grouped by batch in completion order. Within a
//! batch lines are strictly ascending.
//!
//! The first fatal error from any stage wins; later errors are dropped. After
//! the writer drains the queue, the number of lines written is checked against
//! the configured total before the run is reported as successful.

mod config;
mod error;
mod error_slot;
mod producer;
mod stats;
mod worker;
mod writer;


pub use config::{
    PipelineConfig, DEFAULT_BATCH_SIZE, DEFAULT_PRODUCER_TIMEOUT, DEFAULT_RESULT_TIMEOUT,
    DEFAULT_TOTAL, DEFAULT_WORKERS, DEFAULT_WRITE_BUFFER_SIZE,
};
pub use error::{PipelineError, Stage};
pub use stats::GenerationStats;

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, select, Receiver};
use log::{info, warn};

use crate::batch::Batch;
use crate::prefix::Prefix;
use crate::render::LineRenderer;
use error_slot::ErrorSlot;
use producer::BatchProducer;
use worker::{batch_buffer_len, RenderWorker, RenderedBatch};
use writer::{BatchWriter, WriterExit};

/// Upper bound on how long a failed run waits for the writer to release the sink
const WRITER_SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Result of a successful run
#[derive(Debug)]
pub struct PipelineOutput<W> {
    /// The sink, flushed, handed back by the writer
    pub sink: W,
    /// Run statistics
    pub stats: GenerationStats,
}

/// Parallel render-and-write pipeline for one prefix.
///
/// # Example
///
/// ```rust
/// use wordlist::pipeline::{Pipeline, PipelineConfig};
/// use wordlist::prefix::Prefix;
///
/// let prefix = Prefix::parse("test")?;
/// let config = PipelineConfig::default().with_total(10).with_batch_size(3);
///
/// let output = Pipeline::new(&prefix, config)?.run(Vec::new())?;
/// assert_eq!(output.stats.lines_written, 10);
/// assert_eq!(output.sink.len(), 10 * "test0\n".len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    renderer: LineRenderer,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline, rejecting unusable configuration up front
    pub fn new(prefix: &Prefix, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        let renderer = LineRenderer::new(prefix, config.total);
        if batch_buffer_len(config.batch_size, &renderer).is_none() {
            return Err(PipelineError::InvalidConfig(format!(
                "batch size {} does not fit in memory",
                config.batch_size
            )));
        }
        Ok(Self { renderer, config })
    }

    /// The configuration this pipeline runs with
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The line renderer shared by all workers
    pub fn renderer(&self) -> &LineRenderer {
        &self.renderer
    }

    /// Generate every line into `sink`.
    ///
    /// Spawns the producer, `num_workers` render workers and the writer, then
    /// blocks until either the first fatal error is recorded or the writer
    /// reports completion. On success the line count is verified against the
    /// configured total and the flushed sink is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error recorded by any stage, or
    /// [`PipelineError::CountMismatch`] when the writer finished with the wrong
    /// number of lines. Output already written to the sink is left as is.
    pub fn run<W>(&self, sink: W) -> Result<PipelineOutput<W>, PipelineError>
    where
        W: Write + Send + 'static,
    {
        let start = Instant::now();
        let config = &self.config;
        let capacity = config.effective_queue_capacity();

        info!(
            "Generating {} lines ({} workers, batch size {}, {}-digit suffix)",
            config.total,
            config.num_workers,
            config.batch_size,
            self.renderer.width()
        );

        let (batch_tx, batch_rx) = bounded::<Batch>(capacity);
        let (result_tx, result_rx) = bounded::<RenderedBatch>(capacity);
        let (errors, error_rx) = ErrorSlot::new();

        let writer = BatchWriter::spawn(
            sink,
            config.write_buffer_size,
            result_rx,
            Arc::clone(&errors),
        )?;

        let mut workers = Vec::with_capacity(config.num_workers);
        for id in 0..config.num_workers {
            let worker = RenderWorker {
                id,
                renderer: self.renderer.clone(),
                batch_size: config.batch_size,
                timeout: config.result_timeout,
                batches: batch_rx.clone(),
                results: result_tx.clone(),
                errors: Arc::clone(&errors),
            };
            workers.push(worker.spawn()?);
        }
        // Queues close once the producer and all workers let go of them
        drop(batch_rx);
        drop(result_tx);

        let producer = BatchProducer {
            total: config.total,
            batch_size: config.batch_size,
            timeout: config.producer_timeout,
            batches: batch_tx,
            errors: Arc::clone(&errors),
        }
        .spawn()?;

        let outcome = select! {
            recv(error_rx) -> err => Err(err.unwrap_or(PipelineError::ThreadPanicked("pipeline"))),
            recv(writer.done()) -> exit => match exit {
                Ok(WriterExit::Completed(summary)) if !errors.is_tripped() => Ok(summary),
                Ok(_) => Err(recorded_error(&error_rx)),
                Err(_) => Err(PipelineError::ThreadPanicked("writer")),
            },
        };

        let summary = match outcome {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Generation failed: {}", e);
                writer.abandon(config.result_timeout.min(WRITER_SHUTDOWN_GRACE));
                return Err(e);
            }
        };

        for handle in workers {
            handle
                .join()
                .map_err(|_| PipelineError::ThreadPanicked("worker"))?;
        }
        producer
            .join()
            .map_err(|_| PipelineError::ThreadPanicked("producer"))?;
        let sink = writer.finish()?;

        check_line_count(config.total, summary.lines_written)?;

        let stats = GenerationStats {
            lines_written: summary.lines_written,
            bytes_written: summary.bytes_written,
            batches_written: summary.batches_written,
            elapsed: start.elapsed(),
        };
        info!("{} in {:.2?}", stats, stats.elapsed);

        Ok(PipelineOutput { sink, stats })
    }
}

/// Final integrity check: the writer must have written exactly `expected` lines
fn check_line_count(expected: u64, actual: u64) -> Result<(), PipelineError> {
    if actual != expected {
        return Err(PipelineError::CountMismatch { expected, actual });
    }
    Ok(())
}

/// Wait for the error that a stage has recorded (or is about to)
fn recorded_error(error_rx: &Receiver<PipelineError>) -> PipelineError {
    error_rx
        .recv()
        .unwrap_or(PipelineError::ThreadPanicked("pipeline"))
}
