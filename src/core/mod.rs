pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    round2, AnswerRecord, AssessmentSummary, DomainHighlight, DomainMaturity, GapAnalysis,
    GapTier, Language, MaturityReport, Priority, Recommendation, TrendProjection,
    DEFAULT_TARGET_LEVEL, MAX_MATURITY_LEVEL,
};
