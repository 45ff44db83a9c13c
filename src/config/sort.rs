use std::collections::BTreeMap;

use super::error::ConfigError;
use super::term::TermSet;
use crate::types::{Degree, normalize_region};

/// A group of terms sharing one scoring weight.
///
/// A tier contributes its weight at most once per record, no matter how many
/// of its terms match. A tier with weight 0 is a valid no-op: its terms are
/// still tracked by the editing surface without influencing the order.
#[derive(Debug, Clone)]
pub struct TermTier {
    terms: TermSet,
    weight: f64,
}

impl TermTier {
    /// Build a tier, rejecting non-finite weights. Negative weights are
    /// valid and deprioritize matching records.
    pub fn new(terms: TermSet, weight: f64) -> Result<Self, ConfigError> {
        if !weight.is_finite() {
            return Err(ConfigError::NonFiniteWeight {
                context: "term tier",
                value: weight,
            });
        }
        Ok(Self { terms, weight })
    }

    #[must_use]
    pub fn terms(&self) -> &TermSet {
        &self.terms
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Weighted scoring criteria for one pipeline request.
#[derive(Debug, Clone, Default)]
pub struct SortConfig {
    location_priority: Vec<String>,
    degree_weights: BTreeMap<Degree, f64>,
    tiers: Vec<TermTier>,
}

impl SortConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the location priority order, earlier entries ranking higher.
    /// Entries are normalized to the record model's state token space.
    #[must_use]
    pub fn with_location_priority<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.location_priority = entries
            .into_iter()
            .map(|entry| normalize_region(entry.as_ref()))
            .collect();
        self
    }

    /// Assign a weight to a degree class. Weights must be finite and
    /// non-negative; degrees left unassigned contribute nothing.
    pub fn with_degree_weight(mut self, degree: Degree, weight: f64) -> Result<Self, ConfigError> {
        if !weight.is_finite() {
            return Err(ConfigError::NonFiniteWeight {
                context: "degree",
                value: weight,
            });
        }
        if weight < 0.0 {
            return Err(ConfigError::NegativeDegreeWeight { degree, value: weight });
        }
        self.degree_weights.insert(degree, weight);
        Ok(self)
    }

    /// Append a term-weight tier.
    #[must_use]
    pub fn with_tier(mut self, tier: TermTier) -> Self {
        self.tiers.push(tier);
        self
    }

    #[must_use]
    pub fn location_priority(&self) -> &[String] {
        &self.location_priority
    }

    /// Priority rank of a state token, 0 being the highest priority.
    #[must_use]
    pub fn location_rank(&self, token: &str) -> Option<usize> {
        self.location_priority.iter().position(|entry| entry == token)
    }

    /// Weight assigned to a degree class, 0 when unassigned.
    #[must_use]
    pub fn degree_weight(&self, degree: Degree) -> f64 {
        self.degree_weights.get(&degree).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn tiers(&self) -> &[TermTier] {
        &self.tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_entries_normalize_to_state_tokens() {
        let cfg = SortConfig::new().with_location_priority(["California", "tx"]);
        assert_eq!(cfg.location_priority(), ["CA", "TX"]);
        assert_eq!(cfg.location_rank("CA"), Some(0));
        assert_eq!(cfg.location_rank("TX"), Some(1));
        assert_eq!(cfg.location_rank("NY"), None);
    }

    #[test]
    fn degree_weights_must_be_finite_and_non_negative() {
        let err = SortConfig::new()
            .with_degree_weight(Degree::Bachelor, -1.0)
            .expect_err("rejects");
        assert!(matches!(err, ConfigError::NegativeDegreeWeight { .. }));

        let err = SortConfig::new()
            .with_degree_weight(Degree::Master, f64::NAN)
            .expect_err("rejects");
        assert!(matches!(err, ConfigError::NonFiniteWeight { .. }));

        let cfg = SortConfig::new()
            .with_degree_weight(Degree::Doctorate, 10.0)
            .expect("accepts");
        assert_eq!(cfg.degree_weight(Degree::Doctorate), 10.0);
        assert_eq!(cfg.degree_weight(Degree::Bachelor), 0.0);
    }

    #[test]
    fn tier_weights_must_be_finite_but_may_be_negative() {
        let terms = TermSet::parse("legacy").expect("parses");
        assert!(TermTier::new(terms.clone(), f64::INFINITY).is_err());
        let tier = TermTier::new(terms, -1.0).expect("accepts");
        assert_eq!(tier.weight(), -1.0);
    }
}
