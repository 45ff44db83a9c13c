//! Composite scoring of single records.

use crate::config::SortConfig;
use crate::types::{JobRecord, ScoreBreakdown};

/// Contribution of an unranked (or unknown) location, below every ranked
/// priority tier.
pub const UNRANKED_LOCATION_SCORE: f64 = -1.0;

/// Compute the per-criterion contributions and their sum for one record.
///
/// Deterministic: identical record and configuration always produce an
/// identical breakdown.
#[must_use]
pub fn breakdown(record: &JobRecord, cfg: &SortConfig) -> ScoreBreakdown {
    ScoreBreakdown::new(
        degree_contribution(record, cfg),
        location_contribution(record, cfg),
        term_contribution(record, cfg),
    )
}

fn degree_contribution(record: &JobRecord, cfg: &SortConfig) -> f64 {
    record
        .degrees
        .iter()
        .map(|degree| cfg.degree_weight(degree))
        .sum()
}

/// Ranked locations contribute `max_index - rank`, so the last ranked entry
/// scores 0 and everything unranked sits at the floor below it.
fn location_contribution(record: &JobRecord, cfg: &SortConfig) -> f64 {
    let rank = record
        .state
        .as_deref()
        .and_then(|token| cfg.location_rank(token));
    match rank {
        Some(rank) => (cfg.location_priority().len() - 1 - rank) as f64,
        None => UNRANKED_LOCATION_SCORE,
    }
}

/// Each tier contributes its weight once when any of its terms occurs in the
/// record's title or description, regardless of repeat matches.
fn term_contribution(record: &JobRecord, cfg: &SortConfig) -> f64 {
    let texts = [record.title_lc(), record.description_lc()];
    cfg.tiers()
        .iter()
        .filter(|tier| tier.terms().any_match_in(&texts))
        .map(|tier| tier.weight())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TermSet, TermTier};
    use crate::types::{Degree, RawRecord};

    fn record(location: &str, description: &str) -> JobRecord {
        JobRecord::from_raw(RawRecord {
            id: Some("r".into()),
            title: Some("Engineer".into()),
            location: Some(location.into()),
            description: Some(description.into()),
            ..RawRecord::default()
        })
    }

    fn tier(terms: &str, weight: f64) -> TermTier {
        TermTier::new(TermSet::parse(terms).expect("parses"), weight).expect("finite")
    }

    #[test]
    fn ranked_locations_decrease_with_priority_index() {
        let cfg = SortConfig::new().with_location_priority(["California", "Texas"]);
        assert_eq!(breakdown(&record("California", ""), &cfg).location, 1.0);
        assert_eq!(breakdown(&record("Texas", ""), &cfg).location, 0.0);
        assert_eq!(
            breakdown(&record("New York", ""), &cfg).location,
            UNRANKED_LOCATION_SCORE
        );
        assert_eq!(
            breakdown(&record("Anywhere", ""), &cfg).location,
            UNRANKED_LOCATION_SCORE
        );
    }

    #[test]
    fn degree_weights_sum_over_mentioned_classes() {
        let cfg = SortConfig::new()
            .with_degree_weight(Degree::Bachelor, 2.0)
            .and_then(|cfg| cfg.with_degree_weight(Degree::Doctorate, 10.0))
            .expect("valid");
        let scored = breakdown(&record("", "BS required, PhD preferred"), &cfg);
        assert_eq!(scored.degree, 12.0);
        // Master is mentioned nowhere and carries no weight anyway.
        let scored = breakdown(&record("", "no degree needed"), &cfg);
        assert_eq!(scored.degree, 0.0);
    }

    #[test]
    fn tiers_contribute_at_most_once_per_record() {
        let cfg = SortConfig::new().with_tier(tier("rust tokio", 3.0));
        let scored = breakdown(&record("", "rust and tokio and more rust"), &cfg);
        assert_eq!(scored.terms, 3.0);
    }

    #[test]
    fn zero_weight_tiers_are_no_ops() {
        let cfg = SortConfig::new()
            .with_tier(tier("rust", 0.0))
            .with_tier(tier("legacy", -2.0));
        let scored = breakdown(&record("", "rust on a legacy stack"), &cfg);
        assert_eq!(scored.terms, -2.0);
    }

    #[test]
    fn total_is_the_sum_of_the_three_contributions() {
        let cfg = SortConfig::new()
            .with_location_priority(["Texas"])
            .with_degree_weight(Degree::Master, 4.0)
            .expect("valid")
            .with_tier(tier("rust", 3.0));
        let scored = breakdown(&record("Austin, TX", "MS and rust"), &cfg);
        assert_eq!(scored.degree, 4.0);
        assert_eq!(scored.location, 0.0);
        assert_eq!(scored.terms, 3.0);
        assert_eq!(scored.total, scored.degree + scored.location + scored.terms);
    }
}
