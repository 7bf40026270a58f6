//! Test doubles shared by the use case tests.

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use async_trait::async_trait;
use petdesk_domain::{AnswerCatalog, IntentCatalog};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Gateway that replays scripted completions and remembers every request
pub(crate) struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
    delay: Option<Duration>,
}

impl ScriptedGateway {
    pub(crate) fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub(crate) fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("script exhausted".to_string())))
    }
}

pub(crate) fn intents() -> Arc<IntentCatalog> {
    Arc::new(
        IntentCatalog::from_pairs([
            ("1".to_string(), "Shipping delay".to_string()),
            ("2".to_string(), "Refund request".to_string()),
            ("3".to_string(), "Food allergy question".to_string()),
        ])
        .unwrap(),
    )
}

pub(crate) fn answers() -> Arc<AnswerCatalog> {
    Arc::new(
        AnswerCatalog::from_pairs([
            ("1".to_string(), "Your order is on its way!".to_string()),
            ("2".to_string(), "Refunds take 5-7 business days.".to_string()),
        ])
        .unwrap(),
    )
}

pub(crate) fn classification_json(intent_id: &str, description: &str, confidence: f64) -> String {
    serde_json::json!({
        "intent_id": intent_id,
        "intent_description": description,
        "confidence": confidence,
        "reasoning": "matches the catalog description",
    })
    .to_string()
}
