use std::sync::Arc;

use serde::Serialize;

use super::record::JobRecord;

/// Immutable, cheaply shareable view of a dataset for one pipeline request.
pub type DatasetSnapshot = Arc<[JobRecord]>;

/// Per-criterion score contributions for one record under one sort
/// configuration, retained for display alongside their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub degree: f64,
    pub location: f64,
    pub terms: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    /// Combine the three contributions; the total is always their sum.
    #[must_use]
    pub fn new(degree: f64, location: f64, terms: f64) -> Self {
        Self {
            degree,
            location,
            terms,
            total: degree + location + terms,
        }
    }
}

/// A record's position-independent scoring outcome: its index into the
/// snapshot plus the breakdown it was scored with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredRecord {
    pub index: usize,
    pub breakdown: ScoreBreakdown,
}

/// The ordered outcome of one completed pipeline pass.
///
/// Superseded wholesale by the next delivery; never mutated in place.
#[derive(Debug, Clone)]
pub struct RankedResult {
    sequence: u64,
    snapshot: DatasetSnapshot,
    entries: Vec<ScoredRecord>,
}

impl RankedResult {
    #[must_use]
    pub(crate) fn new(sequence: u64, snapshot: DatasetSnapshot, entries: Vec<ScoredRecord>) -> Self {
        Self {
            sequence,
            snapshot,
            entries,
        }
    }

    /// Sequence number of the request that produced this result.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The snapshot the result was computed against.
    #[must_use]
    pub fn snapshot(&self) -> &DatasetSnapshot {
        &self.snapshot
    }

    /// Scored entries in rank order.
    #[must_use]
    pub fn entries(&self) -> &[ScoredRecord] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the ranked records paired with their scoring breakdowns.
    pub fn records(&self) -> impl Iterator<Item = (&JobRecord, &ScoredRecord)> {
        self.entries
            .iter()
            .map(|entry| (&self.snapshot[entry.index], entry))
    }
}
