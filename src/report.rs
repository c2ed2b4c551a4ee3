//! Per-run conversion report.
//!
//! Every record produces an explicit outcome instead of a swallowed
//! exception, so callers and tests can assert on aggregate results
//! without parsing log output.

use serde::Serialize;

/// Outcome of emitting one canonical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordOutcome {
    /// Point geometry and annotations were emitted.
    Success,
    /// Coordinates did not parse; a single comment-only annotation was
    /// emitted at the origin instead.
    FallbackEmitted,
    /// Emission failed for another reason; nothing further was emitted
    /// for this record and the run continued.
    Skipped { message: String },
}

/// Aggregate outcomes for one conversion run, in record order.
#[derive(Debug, Default, Serialize)]
pub struct ConversionReport {
    pub outcomes: Vec<RecordOutcome>,
}

impl ConversionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RecordOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of records processed.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RecordOutcome::Success))
            .count()
    }

    pub fn fallbacks(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RecordOutcome::FallbackEmitted))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RecordOutcome::Skipped { .. }))
            .count()
    }

    /// Zero-based indices of records that were skipped.
    pub fn skipped_indices(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| matches!(o, RecordOutcome::Skipped { .. }))
            .map(|(i, _)| i)
            .collect()
    }
}
