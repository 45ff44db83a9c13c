//! Settings loading and resolution for the binary.
//!
//! `load` is the primary entry point: it layers default configuration files,
//! explicit `--config` files and `JOBSIEVE`-prefixed environment variables,
//! applies CLI overrides and returns a validated [`ResolvedSettings`].

mod raw;
mod resolved;
mod sources;

use anyhow::{Result, anyhow};

pub(crate) use resolved::ResolvedSettings;

use raw::RawSettings;
use sources::build_config;

use crate::cli::CliArgs;

/// Load settings by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedSettings> {
    let builder = build_config(cli)?;
    let mut raw: RawSettings = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize settings: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}
