//! Validated configuration structures for the filter and score engines.
//!
//! Construction is the validation boundary: every error a user-editable
//! configuration can produce surfaces here, synchronously, before a request
//! is ever submitted. The pipeline itself is total over validated inputs.

mod error;
mod filter;
mod sort;
mod term;

pub use error::ConfigError;
pub use filter::{FilterConfig, MatchScope};
pub use sort::{SortConfig, TermTier};
pub use term::{Term, TermSet};
