//! Tracing subscriber setup for the binary surface.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "JOBSIEVE_LOG";

/// Initialize the global subscriber, preferring an explicit directive over
/// the `JOBSIEVE_LOG` environment variable and defaulting to `info`.
///
/// Logs go to stderr so pipeline output on stdout stays machine-readable.
pub fn initialize(directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{directive}'"))?,
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
