//! Named configuration profiles.
//!
//! A profile is a persistable `(FilterConfig, SortConfig)` pair stored as one
//! JSON file per name. The serde representation stays raw (plain strings and
//! numbers) and only becomes engine configuration through
//! [`Profile::resolve`], so every validation error surfaces before a request
//! is submitted.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app_dirs;
use crate::config::{ConfigError, FilterConfig, MatchScope, SortConfig, TermSet, TermTier};
use crate::types::{Degree, JobType, WorkModel};

/// Raw serde form of a filter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFilterConfig {
    pub work_models: Vec<WorkModel>,
    pub job_types: Vec<JobType>,
    pub requisites: Vec<String>,
    pub blacklist: Vec<String>,
    pub scope: MatchScope,
}

/// Raw serde form of one term-weight tier. The weight is required; a tier
/// without one is a malformed profile, not a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTermTier {
    #[serde(default)]
    pub terms: Vec<String>,
    pub weight: f64,
}

/// Raw serde form of a sort configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSortConfig {
    pub location_priority: Vec<String>,
    pub degree_weights: BTreeMap<Degree, f64>,
    pub tiers: Vec<RawTermTier>,
}

/// A named pair of filter and sort configurations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub filter: RawFilterConfig,
    pub sort: RawSortConfig,
}

impl Profile {
    /// Validate the raw values into engine configurations.
    pub fn resolve(&self) -> Result<(FilterConfig, SortConfig), ConfigError> {
        let filter = FilterConfig::new()
            .with_work_models(self.filter.work_models.iter().copied())
            .with_job_types(self.filter.job_types.iter().copied())
            .with_requisites(TermSet::from_strings(self.filter.requisites.iter().cloned())?)
            .with_blacklist(TermSet::from_strings(self.filter.blacklist.iter().cloned())?)
            .with_scope(self.filter.scope);

        let mut sort =
            SortConfig::new().with_location_priority(self.sort.location_priority.iter());
        for (&degree, &weight) in &self.sort.degree_weights {
            sort = sort.with_degree_weight(degree, weight)?;
        }
        for tier in &self.sort.tiers {
            let terms = TermSet::from_strings(tier.terms.iter().cloned())?;
            sort = sort.with_tier(TermTier::new(terms, tier.weight)?);
        }

        Ok((filter, sort))
    }
}

/// Load, save and enumerate profiles in a directory.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// Store rooted at the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::at(app_dirs::get_data_dir()?.join("profiles")))
    }

    /// Store rooted at an explicit directory.
    #[must_use]
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Load a profile by name.
    pub fn load(&self, name: &str) -> Result<Profile> {
        let path = self.path_for(name);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("no profile '{name}' at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("profile '{name}' is malformed"))
    }

    /// Save a profile under a name, replacing any previous version.
    pub fn save(&self, name: &str, profile: &Profile) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("cannot create profile directory {}", self.dir.display()))?;
        let path = self.path_for(name);
        let serialized = serde_json::to_string_pretty(profile)?;
        fs::write(&path, serialized)
            .with_context(|| format!("cannot write profile to {}", path.display()))?;
        info!(name, path = %path.display(), "saved profile");
        Ok(())
    }

    /// Names of all stored profiles, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(names),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("cannot read profile directory {}", self.dir.display())
                });
            }
        };
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
