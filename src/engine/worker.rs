use std::sync::atomic::AtomicU64;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use tracing::debug;

use super::commands::PipelineCommand;
use super::coordinator::ResultCallback;
use super::pipeline;
use crate::types::RankedResult;

/// Shared slot holding the most recently delivered result.
pub(crate) type ResultSlot = Arc<Mutex<Option<RankedResult>>>;

/// Launch the background pipeline worker thread.
///
/// Returns the command channel, the shared latest-sequence cell used for
/// supersession and the slot the worker publishes delivered results into.
pub(crate) fn spawn(
    on_result: ResultCallback,
) -> (Sender<PipelineCommand>, Arc<AtomicU64>, ResultSlot) {
    let (command_tx, command_rx) = mpsc::channel();
    let latest_sequence = Arc::new(AtomicU64::new(0));
    let latest_result: ResultSlot = Arc::new(Mutex::new(None));

    let thread_latest = Arc::clone(&latest_sequence);
    let thread_slot = Arc::clone(&latest_result);
    thread::spawn(move || worker_loop(&command_rx, &thread_latest, &thread_slot, on_result));

    (command_tx, latest_sequence, latest_result)
}

fn worker_loop(
    command_rx: &Receiver<PipelineCommand>,
    latest_sequence: &AtomicU64,
    latest_result: &ResultSlot,
    mut on_result: ResultCallback,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(command, latest_sequence, latest_result, &mut on_result) {
            break;
        }
    }
}

fn handle_command(
    command: PipelineCommand,
    latest_sequence: &AtomicU64,
    latest_result: &ResultSlot,
    on_result: &mut ResultCallback,
) -> bool {
    match command {
        PipelineCommand::Request {
            sequence,
            snapshot,
            filter,
            sort,
        } => {
            match pipeline::run(sequence, &snapshot, &filter, &sort, latest_sequence) {
                Some(entries) => {
                    let result = RankedResult::new(sequence, snapshot, entries);
                    if let Ok(mut slot) = latest_result.lock() {
                        *slot = Some(result.clone());
                    }
                    on_result(&result);
                }
                // Superseded: silently discarded, a newer request is queued
                // or already running.
                None => debug!(sequence, "discarding superseded pipeline result"),
            }
            true
        }
        PipelineCommand::Shutdown => false,
    }
}
