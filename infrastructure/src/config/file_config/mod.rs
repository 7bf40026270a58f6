//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod experiment;
mod generation;
mod models;
mod output;
mod providers;

pub use catalog::FileCatalogConfig;
pub use experiment::FileExperimentConfig;
pub use generation::FileGenerationConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};

use petdesk_application::GenerationParams;
use petdesk_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Evaluation run settings
    pub experiment: FileExperimentConfig,
    /// Intent and prepared-answer catalog files
    pub catalog: FileCatalogConfig,
    /// Per-stage model selection
    pub models: FileModelsConfig,
    /// Sampling knobs and timeouts
    pub generation: FileGenerationConfig,
    /// Provider credentials and endpoints
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Empty model names
    /// 2. Threshold and concurrency ranges
    /// 3. Temperature and timeout ranges
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.parse_classifier().1);
        issues.extend(self.models.parse_customizer().1);
        issues.extend(self.experiment.to_params().1);
        issues.extend(self.generation.validate());

        issues
    }

    /// Generation parameters for the pipeline use cases.
    ///
    /// Invalid model names fall back to the defaults; call [`validate`](Self::validate)
    /// first to surface them.
    pub fn generation_params(&self) -> GenerationParams {
        let defaults = GenerationParams::default();
        GenerationParams {
            classifier_model: self
                .models
                .parse_classifier()
                .0
                .unwrap_or(defaults.classifier_model),
            customizer_model: self
                .models
                .parse_customizer()
                .0
                .unwrap_or(defaults.customizer_model),
            classifier_temperature: self.generation.classifier_temperature,
            customizer_temperature: self.generation.customizer_temperature,
            customizer_max_tokens: self.generation.customizer_max_tokens,
            request_timeout: Duration::from_secs(self.generation.request_timeout_secs.max(1)),
        }
    }
}
