//! Filtering, scoring and live-ranking engine for scraped job listings.
//!
//! The root module re-exports the record model, the validated configuration
//! types and the recompute coordinator so that embedders can drive the
//! pipeline without digging through the module hierarchy.

pub mod app_dirs;
pub mod config;
pub mod engine;
pub mod logging;
pub mod profiles;
pub mod types;

pub use config::{ConfigError, FilterConfig, MatchScope, SortConfig, Term, TermSet, TermTier};
pub use engine::{Coordinator, ResultCallback};
pub use profiles::{Profile, ProfileStore};
pub use types::{
    DatasetSnapshot, Degree, DegreeMentions, JobRecord, JobType, RankedResult, RawRecord,
    ScoreBreakdown, ScoredRecord, SourceInfo, WorkModel,
};
