use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::term::TermSet;
use crate::types::{JobType, WorkModel};

/// Which record text term filters are matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchScope {
    Title,
    Description,
    #[default]
    TitleAndDescription,
}

/// Inclusion/exclusion rules for one pipeline request.
///
/// Empty inclusion sets mean "no restriction" and an empty requisite set
/// means "no requirement"; the default configuration passes every record.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub work_models: BTreeSet<WorkModel>,
    pub job_types: BTreeSet<JobType>,
    pub requisites: TermSet,
    pub blacklist: TermSet,
    pub scope: MatchScope,
}

impl FilterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to the given work models.
    #[must_use]
    pub fn with_work_models(mut self, models: impl IntoIterator<Item = WorkModel>) -> Self {
        self.work_models = models.into_iter().collect();
        self
    }

    /// Restrict results to the given job types.
    #[must_use]
    pub fn with_job_types(mut self, types: impl IntoIterator<Item = JobType>) -> Self {
        self.job_types = types.into_iter().collect();
        self
    }

    /// Require every given term to be present.
    #[must_use]
    pub fn with_requisites(mut self, requisites: TermSet) -> Self {
        self.requisites = requisites;
        self
    }

    /// Exclude records matching any given term.
    #[must_use]
    pub fn with_blacklist(mut self, blacklist: TermSet) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Set the record text the term rules are matched against.
    #[must_use]
    pub fn with_scope(mut self, scope: MatchScope) -> Self {
        self.scope = scope;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unrestricted() {
        let cfg = FilterConfig::new();
        assert!(cfg.work_models.is_empty());
        assert!(cfg.job_types.is_empty());
        assert!(cfg.requisites.is_empty());
        assert!(cfg.blacklist.is_empty());
        assert_eq!(cfg.scope, MatchScope::TitleAndDescription);
    }

    #[test]
    fn builders_replace_sets() {
        let cfg = FilterConfig::new()
            .with_work_models([WorkModel::Remote, WorkModel::Hybrid])
            .with_job_types([JobType::FullTime]);
        assert_eq!(cfg.work_models.len(), 2);
        assert!(cfg.job_types.contains(&JobType::FullTime));
    }
}
