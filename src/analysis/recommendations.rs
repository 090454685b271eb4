//! Recommendation Generator: per-domain remediation guidance derived from
//! the gap magnitude, sorted by descending priority.

use crate::analysis::gap::recommendation_priority;
use crate::core::types::{DomainMaturity, Recommendation};
use std::cmp::Reverse;

/// Generate one recommendation per domain, sorted by descending priority
/// weight. The sort is stable: domains sharing a priority keep their
/// relative input order, so output is reproducible.
pub fn recommend(domains: &[DomainMaturity]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> =
        domains.iter().map(build_recommendation).collect();
    recommendations.sort_by_key(|r| Reverse(r.priority.weight()));
    recommendations
}

/// Build the recommendation for a single domain.
///
/// Four description branches (gap > 3, > 2, > 1, else) collapse onto the
/// three priority labels: both of the first two branches are `Tinggi` but
/// carry different remediation text.
fn build_recommendation(domain: &DomainMaturity) -> Recommendation {
    let gap = domain.gap();
    let (description, impact) = tier_templates(gap, &domain.domain_id, &domain.domain_name);

    Recommendation {
        domain_id: domain.domain_id.clone(),
        domain_name: domain.domain_name.clone(),
        description,
        priority: recommendation_priority(gap),
        impact,
    }
}

/// Fixed per-tier templates, parameterised by domain id/name only
fn tier_templates(gap: f64, id: &str, name: &str) -> (String, String) {
    if gap > 3.0 {
        (
            format!(
                "Lakukan remediasi kritis pada domain {id} ({name}): bangun fondasi tata \
                 kelola dari awal, tetapkan kepemilikan proses dan kebijakan dasar. \
                 (Critical remediation: establish foundational governance for this domain.)"
            ),
            format!(
                "Membangun kapabilitas dasar {id} yang saat ini belum ada, sehingga domain \
                 dapat mulai dikelola secara terukur. \
                 (Creates the baseline capability this domain currently lacks.)"
            ),
        )
    } else if gap > 2.0 {
        (
            format!(
                "Lakukan perbaikan besar pada domain {id} ({name}): formalisasi proses yang \
                 sudah berjalan dan dokumentasikan secara konsisten. \
                 (Major improvement: formalize the processes that already exist.)"
            ),
            format!(
                "Meningkatkan konsistensi dan keterulangan proses {id} secara signifikan. \
                 (Significantly improves the consistency and repeatability of this domain.)"
            ),
        )
    } else if gap > 1.0 {
        (
            format!(
                "Lakukan perbaikan moderat pada domain {id} ({name}): standardisasi proses \
                 di seluruh unit dan ukur kepatuhannya. \
                 (Moderate improvement: standardize processes across the organization.)"
            ),
            format!(
                "Memperkecil variasi pelaksanaan proses {id} antar unit. \
                 (Reduces variation in how this domain's processes are executed.)"
            ),
        )
    } else {
        (
            format!(
                "Lakukan penyempurnaan kecil pada domain {id} ({name}): optimalkan proses \
                 yang sudah matang dan pantau berkelanjutan. \
                 (Minor refinement: optimize the processes that are already mature.)"
            ),
            format!(
                "Menjaga dan mengoptimalkan tingkat kematangan {id} yang sudah dicapai. \
                 (Sustains and fine-tunes the maturity already achieved.)"
            ),
        )
    }
}
