//! Experiment report written once at the end of a run.

use super::tally::ExperimentTally;
use super::threshold::{SuccessThreshold, ThresholdVerdict};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Summary record persisted after an experiment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub experiment_name: String,
    pub dataset_name: String,
    /// ISO-8601 local timestamp of report creation
    pub timestamp: DateTime<Local>,
    pub success_rate: f64,
    pub success_percentage: f64,
    pub total_items: usize,
    pub success_count: usize,
    pub skipped_items: usize,
    pub threshold: f64,
    pub passed: bool,
}

impl ExperimentReport {
    pub fn new(
        experiment_name: impl Into<String>,
        dataset_name: impl Into<String>,
        tally: &ExperimentTally,
        threshold: SuccessThreshold,
        timestamp: DateTime<Local>,
    ) -> Self {
        let success_rate = tally.success_rate();
        Self {
            experiment_name: experiment_name.into(),
            dataset_name: dataset_name.into(),
            timestamp,
            success_rate,
            success_percentage: tally.success_percentage(),
            total_items: tally.total_items,
            success_count: tally.success_count,
            skipped_items: tally.skipped_count,
            threshold: threshold.value(),
            passed: threshold.evaluate(success_rate).is_pass(),
        }
    }

    pub fn verdict(&self) -> ThresholdVerdict {
        if self.passed {
            ThresholdVerdict::Passed
        } else {
            ThresholdVerdict::BelowThreshold
        }
    }

    /// Unique-per-run file name: `experiment_results_<name>_<YYYYmmdd_HHMMSS>.json`
    ///
    /// Characters that are unsafe in file names are replaced by `_`.
    pub fn file_name(&self) -> String {
        let safe_name: String = self
            .experiment_name
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!(
            "experiment_results_{}_{}.json",
            safe_name,
            self.timestamp.format("%Y%m%d_%H%M%S")
        )
    }
}
