//! Generation parameters: per-stage model selection and sampling knobs.
//!
//! [`GenerationParams`] is shared by the classifier and the customizer.
//! Classification runs at temperature 0 so that identical questions give
//! identical intents; customization is allowed to vary.

use petdesk_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Model used for intent classification.
    pub classifier_model: Model,
    /// Model used for answer customization.
    pub customizer_model: Model,
    pub classifier_temperature: f32,
    pub customizer_temperature: f32,
    /// Upper bound on the rewritten answer length.
    pub customizer_max_tokens: u32,
    /// Bound on every single generative call.
    pub request_timeout: Duration,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            classifier_model: Model::default_classifier(),
            customizer_model: Model::default_customizer(),
            classifier_temperature: 0.0,
            customizer_temperature: 0.7,
            customizer_max_tokens: 500,
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_classifier_model(mut self, model: Model) -> Self {
        self.classifier_model = model;
        self
    }

    pub fn with_customizer_model(mut self, model: Model) -> Self {
        self.customizer_model = model;
        self
    }

    pub fn with_classifier_temperature(mut self, temperature: f32) -> Self {
        self.classifier_temperature = temperature;
        self
    }

    pub fn with_customizer_temperature(mut self, temperature: f32) -> Self {
        self.customizer_temperature = temperature;
        self
    }

    pub fn with_customizer_max_tokens(mut self, max: u32) -> Self {
        self.customizer_max_tokens = max;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
