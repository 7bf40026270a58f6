//! Evaluation domain
//!
//! Scoring, aggregation and gating rules for replaying a labeled dataset
//! through the answer pipeline.

mod canonical_id;
mod dataset;
mod item;
mod report;
mod scoring;
mod tally;
mod threshold;

pub use canonical_id::CanonicalId;
pub use dataset::{DatasetInput, DatasetItem, ExpectedOutput};
pub use item::{ItemRecord, ItemState};
pub use report::ExperimentReport;
pub use scoring::{SCORE_NAME, score_prepared_answer};
pub use tally::ExperimentTally;
pub use threshold::{SuccessThreshold, ThresholdVerdict};
