//! End-to-end tests over the full analysis pipeline.

use govgap::core::types::{AnswerRecord, GapTier, Priority};
use govgap::{aggregate, build_default_report, summarize};
use pretty_assertions::assert_eq;

fn record(domain_id: &str, domain_name: &str, level: u8) -> AnswerRecord {
    AnswerRecord {
        domain_id: domain_id.to_string(),
        domain_name: domain_name.to_string(),
        subdomain_id: format!("{domain_id}01"),
        subdomain_name: format!("{domain_name} process"),
        question_text: "Is the process established and measured?".to_string(),
        maturity_level: level,
        notes: None,
    }
}

/// A realistic five-domain assessment exercising every tier
#[test]
fn test_full_assessment_across_all_domains() {
    let records = vec![
        record("EDM", "Evaluate, Direct and Monitor", 0),
        record("EDM", "Evaluate, Direct and Monitor", 1),
        record("APO", "Align, Plan and Organize", 2),
        record("APO", "Align, Plan and Organize", 2),
        record("BAI", "Build, Acquire and Implement", 3),
        record("BAI", "Build, Acquire and Implement", 3),
        record("DSS", "Deliver, Service and Support", 4),
        record("MEA", "Monitor, Evaluate and Assess", 5),
    ];

    let report = build_default_report(&records).unwrap();

    // Per-domain averages, first-appearance order
    let levels: Vec<(&str, f64)> = report
        .domains
        .iter()
        .map(|d| (d.domain_id.as_str(), d.current_level))
        .collect();
    assert_eq!(
        levels,
        vec![
            ("EDM", 0.5),
            ("APO", 2.0),
            ("BAI", 3.0),
            ("DSS", 4.0),
            ("MEA", 5.0),
        ]
    );

    // Heat-map tiers cover the whole four-tier range
    let tiers: Vec<GapTier> = report.gaps.iter().map(|g| g.tier).collect();
    assert_eq!(
        tiers,
        vec![
            GapTier::Critical, // gap 4.5
            GapTier::High,     // gap 3.0
            GapTier::Medium,   // gap 2.0
            GapTier::Low,      // gap 1.0
            GapTier::Low,      // gap 0.0
        ]
    );

    // Recommendations sorted by descending priority, stable within ties
    let priorities: Vec<(&str, Priority)> = report
        .recommendations
        .iter()
        .map(|r| (r.domain_id.as_str(), r.priority))
        .collect();
    assert_eq!(
        priorities,
        vec![
            ("EDM", Priority::Tinggi), // gap 4.5
            ("APO", Priority::Tinggi), // gap 3.0, still > 2
            ("BAI", Priority::Sedang), // gap 2.0
            ("DSS", Priority::Rendah), // gap 1.0
            ("MEA", Priority::Rendah), // gap 0.0
        ]
    );

    // Trend endpoints: starts at current, closes 90% of the gap at most
    for (domain, trend) in report.domains.iter().zip(&report.trends) {
        assert_eq!(trend.levels[0], domain.current_level);
        assert!(trend.levels[4] <= domain.target_level);
    }

    let summary = &report.summary;
    assert_eq!(summary.domain_count, 5);
    assert_eq!(summary.overall_average, 2.9);
    assert_eq!(summary.average_gap, 2.1);
    assert_eq!(summary.best_domain.as_ref().unwrap().domain_id, "MEA");
    assert_eq!(summary.worst_domain.as_ref().unwrap().domain_id, "EDM");
}

/// The worked scenario: EDM answers [1, 1] and APO [4]
#[test]
fn test_two_domain_scenario_matches_expected_numbers() {
    let records = vec![
        record("EDM", "Evaluate, Direct and Monitor", 1),
        record("EDM", "Evaluate, Direct and Monitor", 1),
        record("APO", "Align, Plan and Organize", 4),
    ];

    let domains = aggregate(&records).unwrap();
    assert_eq!(domains[0].current_level, 1.0);
    assert_eq!(domains[1].current_level, 4.0);

    let report = build_default_report(&records).unwrap();
    assert_eq!(report.gaps[0].gap, 4.0);
    assert_eq!(report.gaps[0].tier, GapTier::Critical);
    assert_eq!(report.gaps[1].gap, 1.0);
    assert_eq!(report.gaps[1].tier, GapTier::Low);

    assert_eq!(report.recommendations[0].domain_id, "EDM");
    assert_eq!(report.recommendations[1].domain_id, "APO");

    let summary = summarize(&domains);
    assert_eq!(summary.overall_average, 2.5);
    assert_eq!(summary.average_gap, 2.5);
    assert_eq!(summary.best_domain.unwrap().domain_id, "APO");
    assert_eq!(summary.worst_domain.unwrap().domain_id, "EDM");
}

/// Reports over the same snapshot are identical apart from the timestamp
#[test]
fn test_report_generation_is_reproducible() {
    let records = vec![
        record("DSS", "Deliver, Service and Support", 2),
        record("DSS", "Deliver, Service and Support", 3),
        record("MEA", "Monitor, Evaluate and Assess", 1),
    ];
    let snapshot = records.clone();

    let first = build_default_report(&records).unwrap();
    let second = build_default_report(&records).unwrap();

    assert_eq!(records, snapshot, "input must not be mutated");
    assert_eq!(first.domains, second.domains);
    assert_eq!(first.gaps, second.gaps);
    assert_eq!(first.recommendations, second.recommendations);
    assert_eq!(first.trends, second.trends);
    assert_eq!(first.summary, second.summary);
}

#[test]
fn test_invalid_level_aborts_the_whole_report() {
    let mut bad = record("APO", "Align, Plan and Organize", 3);
    bad.maturity_level = 9;
    let records = vec![record("EDM", "Evaluate, Direct and Monitor", 2), bad];

    let err = build_default_report(&records).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("APO"));
    assert!(message.contains('9'));
}
