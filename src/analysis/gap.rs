//! Gap Analyzer: distance to the target ceiling and its tier classification.
//!
//! Two classification schemes coexist on purpose. The four-tier scheme
//! feeds the heat map; the coarser three-tier scheme feeds recommendation
//! priority labels. The original system used both and downstream report
//! sections rely on each independently, so they stay separate functions.

use crate::core::types::{DomainMaturity, GapAnalysis, GapTier, Priority};

/// Classify a domain's gap into the four-tier heat-map scheme.
///
/// Thresholds applied in strict descending order, first match wins.
pub fn classify_gap(domain: &DomainMaturity) -> GapAnalysis {
    let gap = domain.gap();
    GapAnalysis {
        domain_id: domain.domain_id.clone(),
        domain_name: domain.domain_name.clone(),
        gap,
        tier: gap_tier(gap),
    }
}

/// Four-tier classification of a gap magnitude
pub fn gap_tier(gap: f64) -> GapTier {
    if gap > 3.0 {
        GapTier::Critical
    } else if gap > 2.0 {
        GapTier::High
    } else if gap > 1.0 {
        GapTier::Medium
    } else {
        GapTier::Low
    }
}

/// Three-tier priority used for recommendation labels.
///
/// Deliberately coarser than [`gap_tier`]: both the `gap > 3` and
/// `gap > 2` description branches collapse onto `Tinggi`.
pub fn recommendation_priority(gap: f64) -> Priority {
    if gap > 2.0 {
        Priority::Tinggi
    } else if gap > 1.0 {
        Priority::Sedang
    } else {
        Priority::Rendah
    }
}

/// Classify every domain for heat-map rendering
pub fn classify_all(domains: &[DomainMaturity]) -> Vec<GapAnalysis> {
    domains.iter().map(classify_gap).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn domain(current: f64) -> DomainMaturity {
        DomainMaturity {
            domain_id: "EDM".into(),
            domain_name: "Evaluate, Direct and Monitor".into(),
            current_level: current,
            target_level: 5.0,
        }
    }

    #[test]
    fn test_four_tier_thresholds() {
        assert_eq!(gap_tier(4.5), GapTier::Critical);
        assert_eq!(gap_tier(3.01), GapTier::Critical);
        assert_eq!(gap_tier(3.0), GapTier::High);
        assert_eq!(gap_tier(2.01), GapTier::High);
        assert_eq!(gap_tier(2.0), GapTier::Medium);
        assert_eq!(gap_tier(1.01), GapTier::Medium);
        assert_eq!(gap_tier(1.0), GapTier::Low);
        assert_eq!(gap_tier(0.0), GapTier::Low);
    }

    #[test]
    fn test_three_tier_thresholds() {
        assert_eq!(recommendation_priority(3.5), Priority::Tinggi);
        assert_eq!(recommendation_priority(2.5), Priority::Tinggi);
        assert_eq!(recommendation_priority(2.0), Priority::Sedang);
        assert_eq!(recommendation_priority(1.5), Priority::Sedang);
        assert_eq!(recommendation_priority(1.0), Priority::Rendah);
        assert_eq!(recommendation_priority(0.0), Priority::Rendah);
    }

    #[test]
    fn test_schemes_diverge_between_two_and_three() {
        // The whole point of keeping both: gap 2.5 is High on the heat map
        // but already the top label (Tinggi) for recommendations.
        assert_eq!(gap_tier(2.5), GapTier::High);
        assert_eq!(recommendation_priority(2.5), Priority::Tinggi);
    }

    #[test]
    fn test_classify_gap_carries_domain_identity() {
        let analysis = classify_gap(&domain(1.0));
        assert_eq!(analysis.domain_id, "EDM");
        assert_eq!(analysis.gap, 4.0);
        assert_eq!(analysis.tier, GapTier::Critical);
    }

    proptest! {
        #[test]
        fn prop_gap_stays_in_bounds(current in 0.0f64..=5.0) {
            let analysis = classify_gap(&domain(current));
            prop_assert!(analysis.gap >= 0.0);
            prop_assert!(analysis.gap <= 5.0);
        }

        #[test]
        fn prop_tier_never_worsens_as_maturity_grows(
            lower in 0.0f64..=5.0,
            delta in 0.0f64..=5.0,
        ) {
            let higher = (lower + delta).min(5.0);
            let tier_low = classify_gap(&domain(lower)).tier;
            let tier_high = classify_gap(&domain(higher)).tier;
            prop_assert!(tier_high <= tier_low);
        }

        #[test]
        fn prop_priority_never_worsens_as_maturity_grows(
            lower in 0.0f64..=5.0,
            delta in 0.0f64..=5.0,
        ) {
            let higher = (lower + delta).min(5.0);
            let p_low = recommendation_priority(domain(lower).gap());
            let p_high = recommendation_priority(domain(higher).gap());
            prop_assert!(p_high.weight() <= p_low.weight());
        }
    }
}
