//! Per-stage model configuration from TOML (`[models]` section)

use petdesk_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Per-stage model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// classifier = "gpt-4o"        # Intent classification (temperature 0)
/// customizer = "gpt-4o-mini"   # Answer personalization
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub classifier: String,
    pub customizer: String,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            classifier: Model::default_classifier().to_string(),
            customizer: Model::default_customizer().to_string(),
        }
    }
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(field: &str, value: &str) -> (Option<Model>, Vec<ConfigIssue>) {
        if value.trim().is_empty() {
            let issue = ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: field.to_string(),
                },
                format!("models.{}: model name cannot be empty", field),
            );
            return (None, vec![issue]);
        }
        // Unknown names become Model::Custom
        (Some(Model::from(value.trim())), Vec::new())
    }

    pub fn parse_classifier(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("classifier", &self.classifier)
    }

    pub fn parse_customizer(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("customizer", &self.customizer)
    }
}
