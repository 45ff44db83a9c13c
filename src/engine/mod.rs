//! The filter → score → rank pipeline and its live recompute coordinator.
//!
//! The three stages are pure functions over immutable inputs; the
//! coordinator owns their invocation, chunking and cancellation.

mod commands;
mod coordinator;
mod pipeline;
mod worker;

pub mod filter;
pub mod rank;
pub mod score;

pub use coordinator::{Coordinator, ResultCallback};

/// Records examined per supersession check during the filter stage.
pub(crate) const FILTER_CHUNK_SIZE: usize = 512;
/// Records scored per supersession check.
pub(crate) const SCORE_CHUNK_SIZE: usize = 256;
