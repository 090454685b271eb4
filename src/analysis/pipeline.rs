//! Staged composition of the analysis pipeline into a full report.

use crate::analysis::aggregation::aggregate_with_target;
use crate::analysis::gap::classify_all;
use crate::analysis::recommendations::recommend;
use crate::analysis::summary::summarize;
use crate::analysis::trend::project_all;
use crate::core::errors::Result;
use crate::core::types::{AnswerRecord, MaturityReport, DEFAULT_TARGET_LEVEL};

/// Run the full pipeline over a snapshot of answers.
///
/// Raw answers flow one way: aggregation, then gap analysis and trend
/// projection, then recommendations and the executive summary. The input
/// is never mutated; apart from the generation timestamp the result is a
/// pure function of the records and target level.
pub fn build_report(records: &[AnswerRecord], target_level: f64) -> Result<MaturityReport> {
    let domains = aggregate_with_target(records, target_level)?;
    let gaps = classify_all(&domains);
    let trends = project_all(&domains);
    let recommendations = recommend(&domains);
    let summary = summarize(&domains);

    Ok(MaturityReport {
        generated_at: chrono::Utc::now(),
        records: records.to_vec(),
        domains,
        gaps,
        recommendations,
        trends,
        summary,
    })
}

/// [`build_report`] with the default target ceiling
pub fn build_default_report(records: &[AnswerRecord]) -> Result<MaturityReport> {
    build_report(records, DEFAULT_TARGET_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{GapTier, Priority};
    use pretty_assertions::assert_eq;

    fn record(domain_id: &str, level: u8) -> AnswerRecord {
        AnswerRecord {
            domain_id: domain_id.to_string(),
            domain_name: format!("{domain_id} domain"),
            subdomain_id: format!("{domain_id}01"),
            subdomain_name: format!("{domain_id}01 process"),
            question_text: "Is the process measured?".to_string(),
            maturity_level: level,
            notes: None,
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let records = vec![record("EDM", 1), record("EDM", 1), record("APO", 4)];
        let report = build_default_report(&records).unwrap();

        assert_eq!(report.domains[0].domain_id, "EDM");
        assert_eq!(report.domains[0].current_level, 1.0);
        assert_eq!(report.domains[1].domain_id, "APO");
        assert_eq!(report.domains[1].current_level, 4.0);

        assert_eq!(report.gaps[0].gap, 4.0);
        assert_eq!(report.gaps[0].tier, GapTier::Critical);
        assert_eq!(report.gaps[1].gap, 1.0);
        assert_eq!(report.gaps[1].tier, GapTier::Low);

        assert_eq!(report.recommendations[0].domain_id, "EDM");
        assert_eq!(report.recommendations[0].priority, Priority::Tinggi);
        assert_eq!(report.recommendations[1].domain_id, "APO");
        assert_eq!(report.recommendations[1].priority, Priority::Rendah);

        assert_eq!(report.trends[0].levels, [1.0, 1.8, 2.6, 3.8, 4.6]);

        let summary = &report.summary;
        assert_eq!(summary.overall_average, 2.5);
        assert_eq!(summary.average_gap, 2.5);
        assert_eq!(summary.best_domain.as_ref().unwrap().domain_id, "APO");
        assert_eq!(summary.worst_domain.as_ref().unwrap().domain_id, "EDM");
    }

    #[test]
    fn test_empty_answer_set_produces_empty_report_sections() {
        let report = build_default_report(&[]).unwrap();
        assert!(report.domains.is_empty());
        assert!(report.gaps.is_empty());
        assert!(report.recommendations.is_empty());
        assert!(report.trends.is_empty());
        assert!(report.summary.is_empty());
    }

    #[test]
    fn test_report_keeps_raw_records_snapshot() {
        let records = vec![record("DSS", 3)];
        let report = build_default_report(&records).unwrap();
        assert_eq!(report.records, records);
    }

    #[test]
    fn test_pipeline_is_idempotent_over_unchanged_input() {
        let records = vec![record("EDM", 2), record("APO", 5), record("MEA", 0)];
        let first = build_default_report(&records).unwrap();
        let second = build_default_report(&records).unwrap();
        // Everything except the generation timestamp is byte-identical
        assert_eq!(first.domains, second.domains);
        assert_eq!(first.gaps, second.gaps);
        assert_eq!(first.recommendations, second.recommendations);
        assert_eq!(first.trends, second.trends);
        assert_eq!(first.summary, second.summary);
    }
}
