//! Recommendation classifier
//!
//! Maps a subdivision's potential category and market metrics onto a small
//! fixed set of action recommendations. Pure and total: every combination
//! of inputs yields a tag.

use portshare_types::{PotentialCategory, Recommendation};

/// Share of the serviceable market that must be obtainable before a
/// high-potential subdivision counts as performing well.
pub const EXPANSION_THRESHOLD: f64 = 0.6;

/// Classifies one subdivision.
///
/// Zero obtainable market is never a priority. High-potential subdivisions
/// with less than [`EXPANSION_THRESHOLD`] of their serviceable market
/// obtainable should expand coverage; the rest perform well. Low-potential
/// subdivisions get a local strategy. A positive metric paired with
/// `NoPotential` cannot be produced by the engine, but classify it as
/// not-a-priority rather than panic.
pub fn recommend(
    category: PotentialCategory,
    obtainable_metric: u64,
    capacity_metric: u64,
) -> Recommendation {
    if obtainable_metric == 0 {
        return Recommendation::NotPriority;
    }
    match category {
        PotentialCategory::HighPotential => {
            if (obtainable_metric as f64) < capacity_metric as f64 * EXPANSION_THRESHOLD {
                Recommendation::ExpandCoverage
            } else {
                Recommendation::GoodPerformance
            }
        }
        PotentialCategory::LowPotential => Recommendation::LocalStrategy,
        PotentialCategory::NoPotential => Recommendation::NotPriority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_obtainable_is_never_priority() {
        assert_eq!(
            recommend(PotentialCategory::NoPotential, 0, 100),
            Recommendation::NotPriority
        );
        assert_eq!(
            recommend(PotentialCategory::HighPotential, 0, 100),
            Recommendation::NotPriority
        );
    }

    #[test]
    fn high_potential_splits_on_expansion_threshold() {
        // 59 < 100 * 0.6
        assert_eq!(
            recommend(PotentialCategory::HighPotential, 59, 100),
            Recommendation::ExpandCoverage
        );
        // 60 is not strictly below the threshold
        assert_eq!(
            recommend(PotentialCategory::HighPotential, 60, 100),
            Recommendation::GoodPerformance
        );
    }

    #[test]
    fn low_potential_gets_local_strategy() {
        assert_eq!(
            recommend(PotentialCategory::LowPotential, 10, 100),
            Recommendation::LocalStrategy
        );
    }

    #[test]
    fn positive_metric_with_no_potential_falls_back() {
        assert_eq!(
            recommend(PotentialCategory::NoPotential, 5, 100),
            Recommendation::NotPriority
        );
    }
}
