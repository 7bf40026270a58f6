//! Experiment configuration from TOML (`[experiment]` section)

use petdesk_application::ExperimentParams;
use petdesk_domain::{ConfigIssue, ConfigIssueCode, SuccessThreshold};
use serde::{Deserialize, Serialize};

/// Raw experiment configuration from TOML
///
/// # Example
///
/// ```toml
/// [experiment]
/// name = "nightly"
/// dataset = "pet_food_known_answers"
/// success_threshold = 0.8
/// concurrency = 4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExperimentConfig {
    /// Run name scores are recorded under
    pub name: String,
    /// Dataset to replay
    pub dataset: String,
    /// Minimum success rate for a passing run, in [0, 1]
    pub success_threshold: f64,
    /// Items in flight at once (1 = sequential)
    pub concurrency: usize,
}

impl Default for FileExperimentConfig {
    fn default() -> Self {
        let params = ExperimentParams::default();
        Self {
            name: params.experiment_name,
            dataset: params.dataset_name,
            success_threshold: params.threshold.value(),
            concurrency: params.concurrency,
        }
    }
}

impl FileExperimentConfig {
    /// Convert to [`ExperimentParams`], collecting issues for invalid values.
    ///
    /// Invalid values fall back to their defaults in the returned params.
    pub fn to_params(&self) -> (ExperimentParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let threshold = match SuccessThreshold::new(self.success_threshold) {
            Ok(threshold) => threshold,
            Err(_) => {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ValueOutOfRange {
                        field: "experiment.success_threshold".to_string(),
                        value: self.success_threshold,
                        min: 0.0,
                        max: 1.0,
                    },
                    format!(
                        "experiment.success_threshold: {} is outside [0, 1]",
                        self.success_threshold
                    ),
                ));
                SuccessThreshold::default()
            }
        };

        if self.concurrency == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ValueOutOfRange {
                    field: "experiment.concurrency".to_string(),
                    value: 0.0,
                    min: 1.0,
                    max: f64::INFINITY,
                },
                "experiment.concurrency: must be at least 1",
            ));
        }

        let params = ExperimentParams::default()
            .with_experiment_name(self.name.clone())
            .with_dataset_name(self.dataset.clone())
            .with_threshold(threshold)
            .with_concurrency(self.concurrency);
        (params, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_convert_cleanly() {
        let (params, issues) = FileExperimentConfig::default().to_params();
        assert!(issues.is_empty());
        assert_eq!(params, ExperimentParams::default());
    }

    #[test]
    fn test_invalid_values_reported() {
        let config = FileExperimentConfig {
            success_threshold: 1.5,
            concurrency: 0,
            ..Default::default()
        };
        let (params, issues) = config.to_params();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(ConfigIssue::is_error));
        assert_eq!(params.threshold.value(), 0.8);
        assert_eq!(params.concurrency, 1);
    }
}
