//! Boolean inclusion tests over the record model.

use crate::config::{FilterConfig, MatchScope};
use crate::types::JobRecord;

/// Whether a single record passes the filter configuration.
///
/// Exclusion wins: a blacklist hit rejects the record even when the same
/// term also satisfies a requisite.
#[must_use]
pub fn accepts(record: &JobRecord, cfg: &FilterConfig) -> bool {
    if !cfg.work_models.is_empty() && !cfg.work_models.contains(&record.work_model) {
        return false;
    }
    if !cfg.job_types.is_empty() && !cfg.job_types.contains(&record.job_type) {
        return false;
    }
    let texts = scope_texts(record, cfg.scope);
    if cfg.blacklist.any_match_in(&texts) {
        return false;
    }
    cfg.requisites.all_match_in(&texts)
}

/// Order-preserving indices of the records passing the configuration.
#[must_use]
pub fn filter(records: &[JobRecord], cfg: &FilterConfig) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| accepts(record, cfg))
        .map(|(index, _)| index)
        .collect()
}

/// The lowercase record texts a scope matches against.
pub(crate) fn scope_texts(record: &JobRecord, scope: MatchScope) -> Vec<&str> {
    match scope {
        MatchScope::Title => vec![record.title_lc()],
        MatchScope::Description => vec![record.description_lc()],
        MatchScope::TitleAndDescription => vec![record.title_lc(), record.description_lc()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TermSet;
    use crate::types::{RawRecord, WorkModel};

    fn record(title: &str, description: &str) -> JobRecord {
        JobRecord::from_raw(RawRecord {
            id: Some(title.to_lowercase()),
            title: Some(title.into()),
            description: Some(description.into()),
            is_remote: Some(true),
            ..RawRecord::default()
        })
    }

    #[test]
    fn empty_config_passes_everything() {
        let records = [record("Engineer", "Rust"), record("Manager", "People")];
        assert_eq!(filter(&records, &FilterConfig::new()), vec![0, 1]);
    }

    #[test]
    fn inclusion_sets_restrict_only_when_non_empty() {
        let records = [record("Engineer", "Rust")];
        let cfg = FilterConfig::new().with_work_models([WorkModel::OnSite]);
        assert!(filter(&records, &cfg).is_empty());
        let cfg = FilterConfig::new().with_work_models([WorkModel::Remote, WorkModel::OnSite]);
        assert_eq!(filter(&records, &cfg), vec![0]);
    }

    #[test]
    fn all_requisites_must_match_somewhere_in_scope() {
        let records = [record("Senior Engineer", "Ships Rust services")];
        let cfg = FilterConfig::new()
            .with_requisites(TermSet::parse("senior rust").expect("parses"));
        assert_eq!(filter(&records, &cfg), vec![0]);
        let cfg = FilterConfig::new()
            .with_requisites(TermSet::parse("senior cobol").expect("parses"));
        assert!(filter(&records, &cfg).is_empty());
    }

    #[test]
    fn blacklist_wins_over_requisites() {
        let records = [record("Engineer", "clearance required")];
        let terms = TermSet::parse("clearance").expect("parses");
        let cfg = FilterConfig::new()
            .with_requisites(terms.clone())
            .with_blacklist(terms);
        assert!(filter(&records, &cfg).is_empty());
    }

    #[test]
    fn scope_limits_where_terms_match() {
        let records = [record("Engineer", "mentions python only")];
        let requisites = TermSet::parse("python").expect("parses");
        let title_only = FilterConfig::new()
            .with_requisites(requisites.clone())
            .with_scope(MatchScope::Title);
        assert!(filter(&records, &title_only).is_empty());
        let descr_only = FilterConfig::new()
            .with_requisites(requisites)
            .with_scope(MatchScope::Description);
        assert_eq!(filter(&records, &descr_only), vec![0]);
    }

    #[test]
    fn growing_the_blacklist_never_grows_the_result() {
        let records = [
            record("Engineer", "Rust"),
            record("Manager", "Agile"),
            record("Analyst", "Excel"),
        ];
        let small = FilterConfig::new().with_blacklist(TermSet::parse("agile").expect("parses"));
        let large =
            FilterConfig::new().with_blacklist(TermSet::parse("agile excel").expect("parses"));
        assert!(filter(&records, &large).len() <= filter(&records, &small).len());
    }
}
