//! Live recompute coordination.
//!
//! The coordinator owns the background worker and the supersession protocol:
//! every submitted request gets a fresh sequence number, the shared
//! latest-sequence cell flips stale in-flight work to abandoned at its next
//! chunk boundary, and only the newest completed computation is delivered.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::Sender;

use tracing::debug;

use super::commands::PipelineCommand;
use super::worker::{self, ResultSlot};
use crate::config::{FilterConfig, SortConfig};
use crate::types::{DatasetSnapshot, RankedResult};

/// Callback invoked on the worker thread once per delivered result, in
/// strictly increasing sequence order.
pub type ResultCallback = Box<dyn FnMut(&RankedResult) + Send>;

/// Handle for submitting pipeline requests and reading the latest result.
pub struct Coordinator {
    command_tx: Sender<PipelineCommand>,
    latest_sequence: Arc<AtomicU64>,
    latest_result: ResultSlot,
    next_sequence: AtomicU64,
}

impl Coordinator {
    /// Spawn the worker thread and register the delivery callback.
    ///
    /// The callback observes every non-superseded result exactly once;
    /// superseded computations are discarded without a call.
    #[must_use]
    pub fn spawn(on_result: impl FnMut(&RankedResult) + Send + 'static) -> Self {
        let (command_tx, latest_sequence, latest_result) = worker::spawn(Box::new(on_result));
        Self {
            command_tx,
            latest_sequence,
            latest_result,
            next_sequence: AtomicU64::new(0),
        }
    }

    /// Submit a recompute request; never blocks on the computation.
    ///
    /// Configurations are moved (or cloned by the caller) into the request,
    /// so live edits on the submitting side cannot touch in-flight work. Any
    /// computation for an earlier sequence is superseded from this point on.
    pub fn submit(
        &self,
        snapshot: DatasetSnapshot,
        filter: FilterConfig,
        sort: SortConfig,
    ) -> u64 {
        let sequence = self.next_sequence.fetch_add(1, AtomicOrdering::Relaxed) + 1;
        self.latest_sequence.store(sequence, AtomicOrdering::Release);
        debug!(sequence, records = snapshot.len(), "submitting pipeline request");
        let _ = self.command_tx.send(PipelineCommand::Request {
            sequence,
            snapshot,
            filter,
            sort,
        });
        sequence
    }

    /// Most recently delivered result, if any request has completed yet.
    #[must_use]
    pub fn latest_result(&self) -> Option<RankedResult> {
        self.latest_result.lock().ok().and_then(|slot| slot.clone())
    }

    /// Sequence number of the newest submitted request.
    #[must_use]
    pub fn latest_sequence(&self) -> u64 {
        self.latest_sequence.load(AtomicOrdering::Acquire)
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        let _ = self.command_tx.send(PipelineCommand::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use super::*;
    use crate::config::TermSet;
    use crate::types::{JobRecord, RawRecord};

    fn snapshot(count: usize) -> DatasetSnapshot {
        (0..count)
            .map(|i| {
                JobRecord::from_raw(RawRecord {
                    id: Some(format!("id-{i:05}")),
                    title: Some("Engineer".into()),
                    description: Some("rust all day".into()),
                    ..RawRecord::default()
                })
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn single_request_is_delivered_and_cached() {
        let (tx, rx) = mpsc::channel();
        let coordinator = Coordinator::spawn(move |result: &RankedResult| {
            let _ = tx.send(result.sequence());
        });
        let sequence = coordinator.submit(snapshot(10), FilterConfig::new(), SortConfig::new());
        assert_eq!(sequence, 1);
        assert_eq!(coordinator.latest_sequence(), 1);

        let delivered = rx.recv_timeout(Duration::from_secs(5)).expect("delivered");
        assert_eq!(delivered, 1);
        let latest = coordinator.latest_result().expect("cached");
        assert_eq!(latest.sequence(), 1);
        assert_eq!(latest.len(), 10);
    }

    #[test]
    fn deliveries_arrive_in_increasing_sequence_order() {
        let (tx, rx) = mpsc::channel();
        let coordinator = Coordinator::spawn(move |result: &RankedResult| {
            let _ = tx.send(result.sequence());
        });

        let data = snapshot(2_000);
        for _ in 0..5 {
            coordinator.submit(Arc::clone(&data), FilterConfig::new(), SortConfig::new());
        }
        let last = coordinator.submit(data, FilterConfig::new(), SortConfig::new());
        assert_eq!(last, 6);

        let mut delivered = Vec::new();
        loop {
            let sequence = rx.recv_timeout(Duration::from_secs(5)).expect("delivered");
            delivered.push(sequence);
            if sequence == last {
                break;
            }
        }
        let mut sorted = delivered.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(delivered, sorted, "each sequence at most once, in order");
        assert_eq!(coordinator.latest_result().expect("cached").sequence(), last);
    }

    #[test]
    fn queued_stale_requests_are_never_delivered() {
        let (tx, rx) = mpsc::channel();
        let coordinator = Coordinator::spawn(move |result: &RankedResult| {
            let _ = tx.send(result.sequence());
        });

        // Large enough that later submissions land while earlier
        // computations are still queued or in flight.
        let data = snapshot(50_000);
        let filter = FilterConfig::new()
            .with_requisites(TermSet::parse("rust").expect("parses"));
        coordinator.submit(Arc::clone(&data), filter.clone(), SortConfig::new());
        coordinator.submit(Arc::clone(&data), filter.clone(), SortConfig::new());
        let last = coordinator.submit(data, filter, SortConfig::new());

        let mut final_sequence = 0;
        while let Ok(sequence) = rx.recv_timeout(Duration::from_secs(10)) {
            assert!(sequence > final_sequence, "deliveries strictly increase");
            final_sequence = sequence;
            if sequence == last {
                break;
            }
        }
        assert_eq!(final_sequence, last);
    }
}
