//! Classify Intent use case.
//!
//! Maps a free-form customer question onto exactly one intent of the
//! [`IntentCatalog`] with a single structured-output model call.
//!
//! Classification is fail-fast: a gateway failure, a timeout or any output
//! that does not name a catalog intent is an error. There is no retry and no
//! fallback intent.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::use_cases::shared::complete_within;
use petdesk_domain::{
    ClassificationRejection, ClassificationResult, IntentCatalog, PromptTemplate, Question,
    parse_classification, preview,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during classification.
#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("Question is empty")]
    EmptyQuestion,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Rejected(#[from] ClassificationRejection),
}

/// Intent classifier bound to one catalog.
///
/// The system prompt is rendered once from the catalog; requests for the same
/// question are therefore byte-identical.
pub struct IntentClassifier {
    gateway: Arc<dyn LlmGateway>,
    intents: Arc<IntentCatalog>,
    params: GenerationParams,
    system_prompt: String,
}

impl IntentClassifier {
    pub fn new(gateway: Arc<dyn LlmGateway>, intents: Arc<IntentCatalog>) -> Self {
        let system_prompt = PromptTemplate::classification_system(&intents);
        Self {
            gateway,
            intents,
            params: GenerationParams::default(),
            system_prompt,
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn intents(&self) -> &IntentCatalog {
        &self.intents
    }

    /// The exact request sent for `question`.
    pub fn request_for(&self, question: &Question) -> CompletionRequest {
        CompletionRequest::new(
            self.params.classifier_model.clone(),
            self.system_prompt.clone(),
            PromptTemplate::classification_query(question.content()),
        )
        .with_temperature(self.params.classifier_temperature)
        .with_json_output()
    }

    pub async fn classify(&self, question: &str) -> Result<ClassificationResult, ClassificationError> {
        let question = Question::new(question).map_err(|_| ClassificationError::EmptyQuestion)?;
        let request = self.request_for(&question);

        debug!(
            "Classifying with {}: {}",
            request.model,
            preview(question.content(), 80)
        );
        let raw = complete_within(self.gateway.as_ref(), &request, self.params.request_timeout)
            .await?;

        let result = parse_classification(&raw, &self.intents)?;
        info!(
            "Classified as intent {} ({:.2})",
            result.intent_id(),
            result.confidence()
        );
        Ok(result)
    }
}
