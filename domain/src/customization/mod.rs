//! Answer customization domain
//!
//! Customization never fails outright: a missing canned answer or a failed
//! rewrite produces a [`CustomizationResult`] tagged
//! [`CustomizationOutcome::Degraded`] whose `custom_answer` carries a
//! human-readable diagnostic.

use serde::{Deserialize, Serialize};

/// Why a customization fell back to a degraded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CustomizationIssue {
    /// The answer catalog has no entry for the intent
    MissingPreparedAnswer,
    /// The rewrite call failed; the canned text is still available
    RestyleFailed { reason: String },
}

/// Tagged result state of a customization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "issue", rename_all = "snake_case")]
pub enum CustomizationOutcome {
    Personalized,
    Degraded(CustomizationIssue),
}

/// Prepared answer plus its personalized rewrite (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizationResult {
    pub prepared_answer_id: String,
    pub prepared_answer_text: String,
    pub custom_answer: String,
    pub outcome: CustomizationOutcome,
}

impl CustomizationResult {
    pub fn personalized(
        prepared_answer_id: impl Into<String>,
        prepared_answer_text: impl Into<String>,
        custom_answer: impl Into<String>,
    ) -> Self {
        Self {
            prepared_answer_id: prepared_answer_id.into(),
            prepared_answer_text: prepared_answer_text.into(),
            custom_answer: custom_answer.into(),
            outcome: CustomizationOutcome::Personalized,
        }
    }

    /// No canned answer exists for the intent.
    pub fn missing_answer(intent_id: impl Into<String>) -> Self {
        let intent_id = intent_id.into();
        Self {
            custom_answer: format!("Error: No prepared answer found for intent '{}'", intent_id),
            prepared_answer_id: intent_id,
            prepared_answer_text: String::new(),
            outcome: CustomizationOutcome::Degraded(CustomizationIssue::MissingPreparedAnswer),
        }
    }

    /// The rewrite failed; the canned text is preserved.
    pub fn restyle_failed(
        prepared_answer_id: impl Into<String>,
        prepared_answer_text: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let reason = reason.into();
        Self {
            prepared_answer_id: prepared_answer_id.into(),
            prepared_answer_text: prepared_answer_text.into(),
            custom_answer: format!("Error restyling answer: {}", reason),
            outcome: CustomizationOutcome::Degraded(CustomizationIssue::RestyleFailed { reason }),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.outcome, CustomizationOutcome::Degraded(_))
    }
}
