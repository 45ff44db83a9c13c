//! Deterministic ordering of scored records.

use std::cmp::Ordering;

use crate::types::{JobRecord, ScoredRecord};

/// Order scored entries descending by composite score.
///
/// Ties are broken in order by posted date (most recent first, undated
/// last), location contribution (descending) and finally record identifier
/// (ascending), which makes the order total for distinct identifiers.
pub fn rank(records: &[JobRecord], scored: &mut [ScoredRecord]) {
    scored.sort_by(|a, b| compare(records, a, b));
}

fn compare(records: &[JobRecord], a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    let (left, right) = (&records[a.index], &records[b.index]);
    b.breakdown
        .total
        .total_cmp(&a.breakdown.total)
        .then_with(|| right.posted.cmp(&left.posted))
        .then_with(|| b.breakdown.location.total_cmp(&a.breakdown.location))
        .then_with(|| left.id.cmp(&right.id))
}
