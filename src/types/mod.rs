//! Record model shared by the filter, score and rank engines.

mod degrees;
mod location;
mod record;
mod scored;

pub use degrees::{Degree, DegreeMentions};
pub use location::state_token;
pub(crate) use location::normalize_region;
pub use record::{JobRecord, JobType, RawRecord, SourceInfo, WorkModel};
pub use scored::{DatasetSnapshot, RankedResult, ScoreBreakdown, ScoredRecord};
