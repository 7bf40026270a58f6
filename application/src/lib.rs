//! Application layer for petdesk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExperimentParams, GenerationParams};
pub use ports::{
    dataset::{DatasetError, DatasetPort, ScoreRecord},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway, ResponseFormat},
    progress::{EvaluationProgress, NoProgress},
    report_store::{NoReportStore, ReportError, ReportStore},
    trace_recorder::{NoTraceRecorder, TraceEvent, TraceRecorder},
};
pub use use_cases::classify_intent::{ClassificationError, IntentClassifier};
pub use use_cases::customize_answer::AnswerCustomizer;
pub use use_cases::run_experiment::{ExperimentSummary, RunExperimentError, RunExperimentUseCase};
pub use use_cases::run_pipeline::{AnswerPipeline, PipelineOrchestrator, TRACE_NAME};
