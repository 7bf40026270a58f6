//! Customize Answer use case.
//!
//! Rewrites the canned answer for a classified intent so it addresses the
//! customer (and their pet) by name. Unlike classification this stage never
//! fails: problems degrade the answer in place.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::use_cases::shared::complete_within;
use petdesk_domain::{AnswerCatalog, CustomizationResult, PromptTemplate};
use std::sync::Arc;
use tracing::{debug, warn};

/// Personalizes prepared answers with one free-text model call.
pub struct AnswerCustomizer {
    gateway: Arc<dyn LlmGateway>,
    answers: Arc<AnswerCatalog>,
    params: GenerationParams,
}

impl AnswerCustomizer {
    pub fn new(gateway: Arc<dyn LlmGateway>, answers: Arc<AnswerCatalog>) -> Self {
        Self {
            gateway,
            answers,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub async fn customize(&self, conversation: &str, intent_id: &str) -> CustomizationResult {
        // blank canned text counts as missing
        let Some(prepared) = self
            .answers
            .text_for(intent_id)
            .filter(|text| !text.trim().is_empty())
        else {
            warn!("No prepared answer for intent {}", intent_id);
            return CustomizationResult::missing_answer(intent_id);
        };

        let request = CompletionRequest::new(
            self.params.customizer_model.clone(),
            PromptTemplate::customization_system(),
            PromptTemplate::customization_request(conversation, prepared),
        )
        .with_temperature(self.params.customizer_temperature)
        .with_max_output_tokens(self.params.customizer_max_tokens);

        debug!("Restyling prepared answer {} with {}", intent_id, request.model);
        let outcome = complete_within(self.gateway.as_ref(), &request, self.params.request_timeout)
            .await
            .and_then(|text| {
                let text = text.trim();
                if text.is_empty() {
                    Err(GatewayError::EmptyCompletion)
                } else {
                    Ok(text.to_string())
                }
            });

        match outcome {
            Ok(custom) => CustomizationResult::personalized(intent_id, prepared, custom),
            Err(e) => {
                warn!("Restyling answer {} failed: {}", intent_id, e);
                CustomizationResult::restyle_failed(intent_id, prepared, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::ResponseFormat;
    use crate::use_cases::testing::{ScriptedGateway, answers};
    use petdesk_domain::{CustomizationIssue, CustomizationOutcome};

    #[tokio::test]
    async fn test_personalized_answer() {
        let gateway = Arc::new(ScriptedGateway::replying(&[
            "  Hi Sam, your pup's food for Rex is on its way!\n",
        ]));
        let customizer = AnswerCustomizer::new(gateway.clone(), answers());

        let result = customizer
            .customize("Hi, I'm Sam and my dog Rex is hungry. Where is my order?", "1")
            .await;

        assert_eq!(result.outcome, CustomizationOutcome::Personalized);
        assert_eq!(result.prepared_answer_id, "1");
        assert_eq!(result.prepared_answer_text, "Your order is on its way!");
        assert_eq!(
            result.custom_answer,
            "Hi Sam, your pup's food for Rex is on its way!"
        );

        let request = &gateway.requests()[0];
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_output_tokens, Some(500));
        assert_eq!(request.response_format, ResponseFormat::Text);
        assert!(request.user_content.contains("Your order is on its way!"));
    }

    #[tokio::test]
    async fn test_missing_prepared_answer_degrades() {
        let gateway = Arc::new(ScriptedGateway::replying(&[]));
        let customizer = AnswerCustomizer::new(gateway.clone(), answers());

        let result = customizer.customize("Is this grain free?", "3").await;

        assert_eq!(
            result.custom_answer,
            "Error: No prepared answer found for intent '3'"
        );
        assert_eq!(result.prepared_answer_text, "");
        assert_eq!(
            result.outcome,
            CustomizationOutcome::Degraded(CustomizationIssue::MissingPreparedAnswer)
        );
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_blank_prepared_answer_treated_as_missing() {
        let gateway = Arc::new(ScriptedGateway::replying(&["Hi Sam, made-up answer"]));
        let answers = Arc::new(
            AnswerCatalog::from_pairs([("1".to_string(), "  ".to_string())]).unwrap(),
        );
        let customizer = AnswerCustomizer::new(gateway.clone(), answers);

        let result = customizer.customize("Hi, I'm Sam. Where is my order?", "1").await;

        assert_eq!(
            result.custom_answer,
            "Error: No prepared answer found for intent '1'"
        );
        assert_eq!(result.prepared_answer_text, "");
        assert_eq!(
            result.outcome,
            CustomizationOutcome::Degraded(CustomizationIssue::MissingPreparedAnswer)
        );
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_model_failure_keeps_canned_text() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(GatewayError::RequestFailed(
            "HTTP 500".to_string(),
        ))]));
        let customizer = AnswerCustomizer::new(gateway, answers());

        let result = customizer.customize("Refund please", "2").await;

        assert!(result.is_degraded());
        assert_eq!(result.prepared_answer_text, "Refunds take 5-7 business days.");
        assert!(result.custom_answer.starts_with("Error restyling answer: "));
        assert!(result.custom_answer.contains("HTTP 500"));
    }

    #[tokio::test]
    async fn test_blank_completion_degrades() {
        let gateway = Arc::new(ScriptedGateway::replying(&["   "]));
        let customizer = AnswerCustomizer::new(gateway, answers());

        let result = customizer.customize("Where is my order?", "1").await;

        assert!(matches!(
            result.outcome,
            CustomizationOutcome::Degraded(CustomizationIssue::RestyleFailed { .. })
        ));
    }
}
