//! Pipeline value objects - merged per-question outputs.
//!
//! - [`PipelineResult`] - flat union of classification and customization fields
//! - [`PipelineOutcome`] - tagged success/failure of one pipeline run

use crate::classification::ClassificationResult;
use crate::customization::CustomizationResult;
use serde::{Deserialize, Serialize};

/// Everything the pipeline knows about one answered question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub intent_id: String,
    pub intent_description: String,
    pub confidence: f64,
    pub reasoning: String,
    pub prepared_answer_id: String,
    pub prepared_answer_text: String,
    pub custom_answer: String,
    /// `custom_answer` holds a diagnostic instead of a rewrite
    pub customization_degraded: bool,
}

impl PipelineResult {
    pub fn merge(classification: &ClassificationResult, customization: CustomizationResult) -> Self {
        let customization_degraded = customization.is_degraded();
        Self {
            intent_id: classification.intent_id().to_string(),
            intent_description: classification.intent_description().to_string(),
            confidence: classification.confidence(),
            reasoning: classification.reasoning().to_string(),
            prepared_answer_id: customization.prepared_answer_id,
            prepared_answer_text: customization.prepared_answer_text,
            custom_answer: customization.custom_answer,
            customization_degraded,
        }
    }
}

/// Result of running one question through the pipeline
///
/// `Failed` means no answer at all (classification failed); a degraded
/// customization is still `Answered`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PipelineOutcome {
    Answered(PipelineResult),
    Failed { question: String, reason: String },
}

impl PipelineOutcome {
    pub fn failed(question: impl Into<String>, reason: impl Into<String>) -> Self {
        PipelineOutcome::Failed {
            question: question.into(),
            reason: reason.into(),
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, PipelineOutcome::Answered(_))
    }

    pub fn result(&self) -> Option<&PipelineResult> {
        match self {
            PipelineOutcome::Answered(result) => Some(result),
            PipelineOutcome::Failed { .. } => None,
        }
    }

    pub fn prepared_answer_id(&self) -> Option<&str> {
        self.result().map(|r| r.prepared_answer_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IntentCatalog;

    fn classification() -> ClassificationResult {
        let catalog =
            IntentCatalog::from_pairs(vec![("1".to_string(), "Shipping delay".to_string())])
                .unwrap();
        ClassificationResult::validated("1", "Shipping delay", 0.9, "order status", &catalog)
            .unwrap()
    }

    #[test]
    fn test_merge_carries_all_fields() {
        let customization = CustomizationResult::personalized(
            "1",
            "Your order is on its way!",
            "Hi Sam, your order for Rex is on its way!",
        );
        let merged = PipelineResult::merge(&classification(), customization);
        assert_eq!(merged.intent_id, "1");
        assert_eq!(merged.intent_description, "Shipping delay");
        assert_eq!(merged.confidence, 0.9);
        assert_eq!(merged.reasoning, "order status");
        assert_eq!(merged.prepared_answer_id, "1");
        assert_eq!(merged.prepared_answer_text, "Your order is on its way!");
        assert_eq!(merged.custom_answer, "Hi Sam, your order for Rex is on its way!");
        assert!(!merged.customization_degraded);
    }

    #[test]
    fn test_outcome_accessors() {
        let answered = PipelineOutcome::Answered(PipelineResult::merge(
            &classification(),
            CustomizationResult::missing_answer("1"),
        ));
        assert!(answered.is_answered());
        assert_eq!(answered.prepared_answer_id(), Some("1"));
        assert!(answered.result().unwrap().customization_degraded);

        let failed = PipelineOutcome::failed("Where is my order?", "bad json");
        assert!(!failed.is_answered());
        assert_eq!(failed.prepared_answer_id(), None);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let failed = PipelineOutcome::failed("q", "boom");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "boom");
    }
}
