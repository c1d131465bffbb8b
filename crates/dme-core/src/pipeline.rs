//! Read, extract, serialize and submit one physician note.

use tracing::{error, info, warn};

use crate::error::{DmeError, ExtractionError, Result};
use crate::extraction::OrderExtractor;
use crate::models::order::Order;
use crate::sink::OrderSink;
use crate::source::NoteSource;

/// Why a run ended without submitting anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The source had no note.
    NoNote,
    /// The note contained only whitespace.
    EmptyNote,
}

/// Outcome of a pipeline run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The order was delivered to the sink.
    Submitted(Order),
    /// Nothing to submit. Not a failure.
    Skipped(SkipReason),
    /// The run failed. Nothing was submitted.
    Failed(DmeError),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Single-note order pipeline with injected collaborators.
pub struct OrderPipeline {
    source: Box<dyn NoteSource>,
    extractor: Box<dyn OrderExtractor>,
    sink: Box<dyn OrderSink>,
    destination: String,
}

impl OrderPipeline {
    pub fn new(
        source: Box<dyn NoteSource>,
        extractor: Box<dyn OrderExtractor>,
        sink: Box<dyn OrderSink>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            source,
            extractor,
            sink,
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Process one note end to end. Never panics on collaborator errors.
    pub fn run(&self) -> RunOutcome {
        info!("Starting physician note processing");

        match self.try_run() {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, destination = %self.destination, "Failed to process physician note");
                RunOutcome::Failed(e)
            }
        }
    }

    fn try_run(&self) -> Result<RunOutcome> {
        let note = match self.source.read_note()? {
            Some(note) if !note.is_empty() => note,
            _ => {
                warn!("No physician note content available");
                return Ok(RunOutcome::Skipped(SkipReason::NoNote));
            }
        };

        let order = match self.extractor.extract(&note) {
            Ok(order) => order,
            Err(ExtractionError::EmptyNote) => {
                warn!("Physician note is blank, no order extracted");
                return Ok(RunOutcome::Skipped(SkipReason::EmptyNote));
            }
            Err(e) => return Err(e.into()),
        };

        let order_json = order.to_json()?;
        info!(order = %order_json, "Parsed order details");

        info!(destination = %self.destination, "Submitting order");
        self.sink.submit(&order_json, &self.destination)?;

        info!("Successfully processed physician note");
        Ok(RunOutcome::Submitted(order))
    }
}
