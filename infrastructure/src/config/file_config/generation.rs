//! Generation knobs from TOML (`[generation]` section)

use petdesk_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub classifier_temperature: f32,
    pub customizer_temperature: f32,
    pub customizer_max_tokens: u32,
    /// Bound on each model call, in seconds
    pub request_timeout_secs: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            classifier_temperature: 0.0,
            customizer_temperature: 0.7,
            customizer_max_tokens: 500,
            request_timeout_secs: 60,
        }
    }
}

impl FileGenerationConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("classifier_temperature", self.classifier_temperature),
            ("customizer_temperature", self.customizer_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ValueOutOfRange {
                        field: format!("generation.{}", field),
                        value: f64::from(value),
                        min: 0.0,
                        max: 2.0,
                    },
                    format!("generation.{}: {} is outside [0, 2]", field, value),
                ));
            }
        }

        if self.request_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ValueOutOfRange {
                    field: "generation.request_timeout_secs".to_string(),
                    value: 0.0,
                    min: 1.0,
                    max: f64::INFINITY,
                },
                "generation.request_timeout_secs: cannot be 0",
            ));
        }

        issues
    }
}
