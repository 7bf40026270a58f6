//! Run Pipeline use case.
//!
//! Answers one customer question end to end: classify, then customize the
//! canned answer for the classified intent. Customization never runs without
//! a successful classification, and the conversation it sees is the question
//! itself.

use crate::ports::trace_recorder::{NoTraceRecorder, TraceEvent, TraceRecorder};
use crate::use_cases::classify_intent::IntentClassifier;
use crate::use_cases::customize_answer::AnswerCustomizer;
use async_trait::async_trait;
use petdesk_domain::{PipelineOutcome, PipelineResult, preview};
use serde_json::json;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, warn};

/// Name of the trace every pipeline run is recorded under.
pub const TRACE_NAME: &str = "Pet Food Customer Service";

/// Anything that turns a question into a [`PipelineOutcome`].
///
/// The evaluation harness depends on this trait rather than on
/// [`PipelineOrchestrator`] directly.
#[async_trait]
pub trait AnswerPipeline: Send + Sync {
    async fn run(&self, question: &str) -> PipelineOutcome;
}

/// Classifier + customizer, wired together.
pub struct PipelineOrchestrator {
    classifier: IntentClassifier,
    customizer: AnswerCustomizer,
    trace_recorder: Arc<dyn TraceRecorder>,
}

impl PipelineOrchestrator {
    pub fn new(classifier: IntentClassifier, customizer: AnswerCustomizer) -> Self {
        Self {
            classifier,
            customizer,
            trace_recorder: Arc::new(NoTraceRecorder),
        }
    }

    pub fn with_trace_recorder(mut self, recorder: Arc<dyn TraceRecorder>) -> Self {
        self.trace_recorder = recorder;
        self
    }

    fn trace(&self, event_type: &'static str, payload: serde_json::Value) {
        self.trace_recorder
            .record(TraceEvent::new(TRACE_NAME, event_type, payload));
    }

    async fn answer(&self, question: &str) -> PipelineOutcome {
        let classification = match self.classifier.classify(question).await {
            Ok(classification) => classification,
            Err(e) => {
                warn!("Classification failed: {}", e);
                self.trace(
                    "pipeline_failed",
                    json!({ "question": question, "error": e.to_string() }),
                );
                return PipelineOutcome::failed(question, e.to_string());
            }
        };
        self.trace(
            "classification",
            json!({
                "question": question,
                "intent_id": classification.intent_id(),
                "confidence": classification.confidence(),
                "reasoning": classification.reasoning(),
            }),
        );

        let customization = self
            .customizer
            .customize(question, classification.intent_id())
            .await;
        self.trace(
            "customization",
            json!({
                "prepared_answer_id": customization.prepared_answer_id,
                "outcome": customization.outcome,
                "custom_answer": customization.custom_answer,
            }),
        );

        let result = PipelineResult::merge(&classification, customization);
        info!(
            "Answered with prepared answer {}{}",
            result.prepared_answer_id,
            if result.customization_degraded {
                " (degraded)"
            } else {
                ""
            }
        );
        self.trace(
            "pipeline_completed",
            json!({
                "intent_id": result.intent_id,
                "prepared_answer_id": result.prepared_answer_id,
                "customization_degraded": result.customization_degraded,
            }),
        );
        PipelineOutcome::Answered(result)
    }
}

#[async_trait]
impl AnswerPipeline for PipelineOrchestrator {
    async fn run(&self, question: &str) -> PipelineOutcome {
        let span = info_span!("pipeline", question = %preview(question, 60));
        self.answer(question).instrument(span).await
    }
}
