//! Chunked, cooperatively cancellable filter → score → rank pass.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use tracing::trace;

use super::{FILTER_CHUNK_SIZE, SCORE_CHUNK_SIZE, filter, rank, score};
use crate::config::{FilterConfig, SortConfig};
use crate::types::{JobRecord, ScoredRecord};

/// Run the full pipeline for `sequence`, checking for supersession between
/// chunks. Returns `None` when a newer sequence arrived mid-computation; the
/// partial work is abandoned, never delivered.
pub(crate) fn run(
    sequence: u64,
    records: &[JobRecord],
    filter_cfg: &FilterConfig,
    sort_cfg: &SortConfig,
    latest_sequence: &AtomicU64,
) -> Option<Vec<ScoredRecord>> {
    if should_abort(sequence, latest_sequence) {
        return None;
    }

    // Filter stage.
    let mut kept = Vec::new();
    let mut offset = 0;
    while offset < records.len() {
        let end = (offset + FILTER_CHUNK_SIZE).min(records.len());
        for (index, record) in records[offset..end].iter().enumerate() {
            if filter::accepts(record, filter_cfg) {
                kept.push(offset + index);
            }
        }
        offset = end;
        if should_abort(sequence, latest_sequence) {
            trace!(sequence, stage = "filter", "pipeline superseded");
            return None;
        }
    }

    // Score stage.
    let mut scored = Vec::with_capacity(kept.len());
    for chunk in kept.chunks(SCORE_CHUNK_SIZE) {
        for &index in chunk {
            scored.push(ScoredRecord {
                index,
                breakdown: score::breakdown(&records[index], sort_cfg),
            });
        }
        if should_abort(sequence, latest_sequence) {
            trace!(sequence, stage = "score", "pipeline superseded");
            return None;
        }
    }

    // Rank stage runs as one unit; a final check still drops a result that
    // became stale while sorting.
    rank::rank(records, &mut scored);
    if should_abort(sequence, latest_sequence) {
        trace!(sequence, stage = "rank", "pipeline superseded");
        return None;
    }

    Some(scored)
}

fn should_abort(sequence: u64, latest_sequence: &AtomicU64) -> bool {
    latest_sequence.load(AtomicOrdering::Acquire) != sequence
}
