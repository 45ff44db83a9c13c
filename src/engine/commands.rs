use crate::config::{FilterConfig, SortConfig};
use crate::types::DatasetSnapshot;

/// Commands understood by the background pipeline worker.
#[derive(Debug)]
pub(crate) enum PipelineCommand {
    /// Run filter, score and rank for one immutable request snapshot.
    Request {
        /// Monotonically increasing identifier; the basis for supersession.
        sequence: u64,
        /// Read-only dataset view for the duration of the computation.
        snapshot: DatasetSnapshot,
        /// Inclusion/exclusion rules, copied at submit time.
        filter: FilterConfig,
        /// Scoring criteria, copied at submit time.
        sort: SortConfig,
    },
    /// Stop the background worker thread.
    Shutdown,
}
