//! Trend Projector: simulated maturity-improvement curve per domain.
//!
//! Deterministic illustration, not a forecast. Each checkpoint closes a
//! fixed fraction of the remaining gap; the horizon never closes the gap
//! fully. Reports must label this table as illustrative.

use crate::core::types::{round2, DomainMaturity, TrendProjection};

/// Fraction of the gap closed at each checkpoint (now, +3, +6, +9, +12 months)
pub const CHECKPOINT_FRACTIONS: [f64; 5] = [0.0, 0.2, 0.4, 0.7, 0.9];

/// Checkpoint column labels, aligned with [`CHECKPOINT_FRACTIONS`]
pub const CHECKPOINT_LABELS: [&str; 5] = ["Saat ini", "+3 bln", "+6 bln", "+9 bln", "+12 bln"];

/// Project a domain's maturity over the five fixed checkpoints
pub fn project(domain: &DomainMaturity) -> [f64; 5] {
    let gap = domain.gap();
    CHECKPOINT_FRACTIONS.map(|fraction| round2(domain.current_level + gap * fraction))
}

/// Project every domain, preserving input order
pub fn project_all(domains: &[DomainMaturity]) -> Vec<TrendProjection> {
    domains
        .iter()
        .map(|d| TrendProjection {
            domain_id: d.domain_id.clone(),
            domain_name: d.domain_name.clone(),
            levels: project(d),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn domain(current: f64) -> DomainMaturity {
        DomainMaturity {
            domain_id: "BAI".into(),
            domain_name: "Build, Acquire and Implement".into(),
            current_level: current,
            target_level: 5.0,
        }
    }

    #[test]
    fn test_projection_values() {
        // gap 4.0: checkpoints at +0%, +20%, +40%, +70%, +90% closure
        assert_eq!(project(&domain(1.0)), [1.0, 1.8, 2.6, 3.8, 4.6]);
    }

    #[test]
    fn test_projection_rounds_each_checkpoint() {
        // gap 2.67: 2.33 + 2.67*0.7 = 4.199 -> 4.2
        assert_eq!(project(&domain(2.33)), [2.33, 2.86, 3.4, 4.2, 4.73]);
    }

    #[test]
    fn test_already_at_target_stays_flat() {
        assert_eq!(project(&domain(5.0)), [5.0; 5]);
    }

    proptest! {
        #[test]
        fn prop_projection_starts_at_current_and_never_closes_gap(
            current in 0.0f64..=5.0,
        ) {
            let d = domain(round2(current));
            let levels = project(&d);
            prop_assert_eq!(levels[0], d.current_level);
            prop_assert_eq!(levels[4], round2(d.current_level + d.gap() * 0.9));
            // monotonic non-decreasing, bounded by the target
            for window in levels.windows(2) {
                prop_assert!(window[1] >= window[0]);
            }
            prop_assert!(levels[4] <= d.target_level);
        }
    }
}
