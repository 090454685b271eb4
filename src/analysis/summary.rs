//! Summary Synthesizer: overall statistics and the bilingual executive
//! narrative.

use crate::core::types::{round2, AssessmentSummary, DomainHighlight, DomainMaturity, Language};

impl AssessmentSummary {
    /// Defined empty-state result for assessments with zero answers.
    /// Not an error: consumers render a "no data" section instead of failing.
    pub fn empty() -> Self {
        Self {
            domain_count: 0,
            overall_average: 0.0,
            best_domain: None,
            worst_domain: None,
            average_gap: 0.0,
            narrative: concat!(
                "Belum ada data penilaian yang tersedia untuk dianalisis. ",
                "Silakan lengkapi kuesioner penilaian terlebih dahulu.\n\n",
                "No assessment data is available for analysis yet. ",
                "Please complete the assessment questionnaire first."
            )
            .to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.domain_count == 0
    }

    /// The narrative block for the requested language.
    ///
    /// The stored narrative is always bilingual (Indonesian block, blank
    /// line, English block); this selects what a writer renders.
    pub fn narrative_for(&self, language: Language) -> &str {
        match language {
            Language::Both => &self.narrative,
            Language::Id => self
                .narrative
                .split_once("\n\n")
                .map(|(id, _)| id)
                .unwrap_or(&self.narrative),
            Language::En => self
                .narrative
                .split_once("\n\n")
                .map(|(_, en)| en)
                .unwrap_or(&self.narrative),
        }
    }
}

/// Derive summary statistics and narrative from the aggregated domains.
///
/// Ties for best/worst are broken by input order: the first domain
/// encountered wins.
pub fn summarize(domains: &[DomainMaturity]) -> AssessmentSummary {
    if domains.is_empty() {
        return AssessmentSummary::empty();
    }

    let overall_average = round2(
        domains.iter().map(|d| d.current_level).sum::<f64>() / domains.len() as f64,
    );
    let average_gap =
        round2(domains.iter().map(|d| d.gap()).sum::<f64>() / domains.len() as f64);

    // Strict comparisons so the first domain encountered wins ties
    let mut best = &domains[0];
    let mut worst = &domains[0];
    for domain in &domains[1..] {
        if domain.current_level > best.current_level {
            best = domain;
        }
        if domain.current_level < worst.current_level {
            worst = domain;
        }
    }

    let best = highlight(best);
    let worst = highlight(worst);
    let narrative = build_narrative(domains.len(), overall_average, &best, &worst, average_gap);

    AssessmentSummary {
        domain_count: domains.len(),
        overall_average,
        best_domain: Some(best),
        worst_domain: Some(worst),
        average_gap,
        narrative,
    }
}

fn highlight(domain: &DomainMaturity) -> DomainHighlight {
    DomainHighlight {
        domain_id: domain.domain_id.clone(),
        domain_name: domain.domain_name.clone(),
        level: domain.current_level,
    }
}

/// One template, two language blocks. Every numeric substitution point
/// (domain count, overall average, best/worst id+name+level, average gap)
/// appears in both blocks.
fn build_narrative(
    domain_count: usize,
    overall_average: f64,
    best: &DomainHighlight,
    worst: &DomainHighlight,
    average_gap: f64,
) -> String {
    format!(
        "Penilaian mencakup {domain_count} domain tata kelola dengan rata-rata tingkat \
         kematangan {overall_average:.2} dari skala 5. Domain terkuat adalah {best_id} \
         ({best_name}) pada tingkat {best_level:.2}, sedangkan domain terlemah adalah \
         {worst_id} ({worst_name}) pada tingkat {worst_level:.2}. Rata-rata kesenjangan \
         terhadap target adalah {average_gap:.2}.\n\n\
         The assessment covers {domain_count} governance domains with an overall average \
         maturity of {overall_average:.2} on a 5-point scale. The strongest domain is \
         {best_id} ({best_name}) at level {best_level:.2}, while the weakest is {worst_id} \
         ({worst_name}) at level {worst_level:.2}. The average gap to target is \
         {average_gap:.2}.",
        best_id = best.domain_id,
        best_name = best.domain_name,
        best_level = best.level,
        worst_id = worst.domain_id,
        worst_name = worst.domain_name,
        worst_level = worst.level,
    )
}
