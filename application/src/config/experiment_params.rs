//! Experiment parameters: evaluation run control.

use petdesk_domain::SuccessThreshold;
use serde::{Deserialize, Serialize};

/// Controls one evaluation run of the harness.
///
/// `concurrency` is the number of dataset items in flight at once; `1`
/// processes items strictly one after another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentParams {
    /// Run name; also the name scores are recorded under.
    pub experiment_name: String,
    pub dataset_name: String,
    pub threshold: SuccessThreshold,
    pub concurrency: usize,
}

impl Default for ExperimentParams {
    fn default() -> Self {
        Self {
            experiment_name: "test_reproducibility".to_string(),
            dataset_name: "pet_food_known_answers".to_string(),
            threshold: SuccessThreshold::default(),
            concurrency: 1,
        }
    }
}

impl ExperimentParams {
    // ==================== Builder Methods ====================

    pub fn with_experiment_name(mut self, name: impl Into<String>) -> Self {
        self.experiment_name = name.into();
        self
    }

    pub fn with_dataset_name(mut self, name: impl Into<String>) -> Self {
        self.dataset_name = name.into();
        self
    }

    pub fn with_threshold(mut self, threshold: SuccessThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}
