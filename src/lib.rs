// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    AnswerRecord, AssessmentSummary, DomainHighlight, DomainMaturity, Error, GapAnalysis,
    GapTier, Language, MaturityReport, Priority, Recommendation, Result, TrendProjection,
};

pub use crate::analysis::{
    aggregate, aggregate_with_target, build_default_report, build_report, classify_all,
    classify_gap, gap_tier, project, project_all, recommend, recommendation_priority, summarize,
};

pub use crate::io::{create_writer, read_answer_file, OutputFormat, OutputWriter};
