//! Maturity analysis pipeline
//!
//! Five pure stages over an in-memory answer snapshot:
//! - aggregation of answers into per-domain averages
//! - gap classification (heat-map tiers and recommendation priorities)
//! - recommendation generation
//! - trend projection over fixed checkpoints
//! - executive-summary synthesis

pub mod aggregation;
pub mod gap;
pub mod pipeline;
pub mod recommendations;
pub mod summary;
pub mod trend;

pub use aggregation::{aggregate, aggregate_with_target};
pub use gap::{classify_all, classify_gap, gap_tier, recommendation_priority};
pub use pipeline::{build_default_report, build_report};
pub use recommendations::recommend;
pub use summary::summarize;
pub use trend::{project, project_all, CHECKPOINT_FRACTIONS, CHECKPOINT_LABELS};
