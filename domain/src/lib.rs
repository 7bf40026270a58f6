//! Domain layer for petdesk
//!
//! This crate contains the business rules of the pet-food support desk.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Answer pipeline
//!
//! A customer question flows through two stages:
//!
//! - **Classification**: the question is mapped onto exactly one intent of the
//!   [`IntentCatalog`]. A classification that names an unknown intent is invalid.
//! - **Customization**: the intent's canned answer from the [`AnswerCatalog`]
//!   is rewritten using names found in the conversation. Failures here degrade
//!   the answer instead of failing it.
//!
//! ## Evaluation
//!
//! A labeled dataset is replayed through the pipeline. Each item is scored by
//! comparing prepared-answer ids in their [`CanonicalId`] form, the scores are
//! tallied into a success rate, and the rate is gated against a
//! [`SuccessThreshold`].

pub mod catalog;
pub mod classification;
pub mod config;
pub mod core;
pub mod customization;
pub mod evaluation;
pub mod pipeline;
pub mod prompt;

// Re-export commonly used types
pub use catalog::{
    AnswerCatalog, IntentCatalog, IntentDefinition, PreparedAnswerDefinition,
    check_catalog_consistency,
};
pub use classification::{ClassificationRejection, ClassificationResult, parse_classification};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity, has_errors};
pub use core::{error::DomainError, model::Model, question::Question, string::preview};
pub use customization::{CustomizationIssue, CustomizationOutcome, CustomizationResult};
pub use evaluation::{
    CanonicalId, DatasetInput, DatasetItem, ExperimentReport, ExperimentTally, ExpectedOutput,
    ItemRecord, ItemState, SCORE_NAME, SuccessThreshold, ThresholdVerdict, score_prepared_answer,
};
pub use pipeline::{PipelineOutcome, PipelineResult};
pub use prompt::PromptTemplate;
