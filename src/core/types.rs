//! Common type definitions used across the codebase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound of the COBIT 2019 maturity scale
pub const MAX_MATURITY_LEVEL: u8 = 5;

/// Default target ceiling applied to every domain
pub const DEFAULT_TARGET_LEVEL: f64 = 5.0;

/// One answered assessment question.
///
/// Snapshot taken at report-generation time; later edits to the stored
/// answer do not retroactively change a generated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub domain_id: String,
    pub domain_name: String,
    pub subdomain_id: String,
    pub subdomain_name: String,
    pub question_text: String,
    /// Self-assessed maturity, one of the six discrete levels 0-5
    pub maturity_level: u8,
    /// Optional free-text evidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-domain maturity aggregate.
///
/// Derived view over [`AnswerRecord`]s, recomputed fresh on every report
/// generation and never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainMaturity {
    pub domain_id: String,
    pub domain_name: String,
    /// Mean of the answered maturity levels, rounded to 2 decimals
    pub current_level: f64,
    /// Target ceiling; carried as data so per-domain targets stay a
    /// signature change away rather than a re-architecture
    pub target_level: f64,
}

impl DomainMaturity {
    /// Distance to the target ceiling, rounded to 2 decimals
    pub fn gap(&self) -> f64 {
        round2(self.target_level - self.current_level)
    }
}

/// Four-tier gap classification used for heat-map presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GapTier {
    Low,
    Medium,
    High,
    Critical,
}

impl GapTier {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            GapTier::Critical => "Critical",
            GapTier::High => "High",
            GapTier::Medium => "Medium",
            GapTier::Low => "Low",
        }
    }
}

/// Three-tier priority attached to recommendations.
///
/// Coarser than [`GapTier`] on purpose: the two granularities serve
/// different report sections and must not be unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Rendah,
    Sedang,
    Tinggi,
}

impl Priority {
    /// Sort weight, higher is more urgent
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Tinggi => 3,
            Priority::Sedang => 2,
            Priority::Rendah => 1,
        }
    }

    /// Indonesian label (the label rendered in reports)
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Tinggi => "Tinggi",
            Priority::Sedang => "Sedang",
            Priority::Rendah => "Rendah",
        }
    }

    /// English label
    pub fn label_en(&self) -> &'static str {
        match self {
            Priority::Tinggi => "High",
            Priority::Sedang => "Medium",
            Priority::Rendah => "Low",
        }
    }

    /// Label in the requested report language
    pub fn label_for(&self, language: Language) -> String {
        match language {
            Language::Id => self.label().to_string(),
            Language::En => self.label_en().to_string(),
            Language::Both => format!("{} ({})", self.label(), self.label_en()),
        }
    }
}

/// Language selection for rendered report text.
///
/// Data stays bilingual; this only selects which narrative/label blocks
/// the writers render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// Indonesian only
    Id,
    /// English only
    En,
    /// Both languages, Indonesian first
    #[default]
    Both,
}

/// Gap magnitude and heat-map tier for one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub domain_id: String,
    pub domain_name: String,
    pub gap: f64,
    pub tier: GapTier,
}

/// One generated action item per domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub domain_id: String,
    pub domain_name: String,
    pub description: String,
    pub priority: Priority,
    pub impact: String,
}

/// Simulated maturity-improvement curve for one domain.
///
/// Illustrative only: fixed fractional gap closure at each checkpoint,
/// not a forecast derived from historical data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendProjection {
    pub domain_id: String,
    pub domain_name: String,
    /// Levels at now, +3mo, +6mo, +9mo, +12mo
    pub levels: [f64; 5],
}

/// Best/worst domain reference carried in the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainHighlight {
    pub domain_id: String,
    pub domain_name: String,
    pub level: f64,
}

/// Executive-summary statistics plus bilingual narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub domain_count: usize,
    pub overall_average: f64,
    pub best_domain: Option<DomainHighlight>,
    pub worst_domain: Option<DomainHighlight>,
    pub average_gap: f64,
    pub narrative: String,
}

/// Full report payload handed to whatever renders the final document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityReport {
    pub generated_at: DateTime<Utc>,
    pub records: Vec<AnswerRecord>,
    pub domains: Vec<DomainMaturity>,
    pub gaps: Vec<GapAnalysis>,
    pub recommendations: Vec<Recommendation>,
    pub trends: Vec<TrendProjection>,
    pub summary: AssessmentSummary,
}

/// Round to 2 decimal places, the precision used throughout the report
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
