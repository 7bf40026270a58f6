//! Progress notification port
//!
//! Defines the interface for reporting progress during an experiment run.

use petdesk_domain::{ExperimentTally, ItemRecord};

/// Callback for progress updates during an experiment run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, nothing).
pub trait EvaluationProgress: Send + Sync {
    /// Called once the dataset is loaded
    fn on_run_start(&self, experiment_name: &str, total_items: usize);

    /// Called when an item reaches a terminal state
    fn on_item_complete(&self, record: &ItemRecord, total_items: usize);

    /// Called after the last item
    fn on_run_complete(&self, _tally: &ExperimentTally) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl EvaluationProgress for NoProgress {
    fn on_run_start(&self, _experiment_name: &str, _total_items: usize) {}
    fn on_item_complete(&self, _record: &ItemRecord, _total_items: usize) {}
}
