//! Progress reporting for experiment runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use petdesk_application::EvaluationProgress;
use petdesk_domain::{ExperimentTally, ItemRecord, ItemState};
use std::sync::Mutex;

/// Reports experiment progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn status_mark(record: &ItemRecord) -> String {
        match record.state {
            ItemState::Skipped => format!("{} {} skipped", "x".red(), record.item_id),
            _ if record.is_success() => format!("{} {}", "v".green(), record.item_id),
            _ => format!("{} {}", "-".yellow(), record.item_id),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationProgress for ProgressReporter {
    fn on_run_start(&self, experiment_name: &str, total_items: usize) {
        let pb = ProgressBar::new(total_items as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix(experiment_name.to_string());
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_item_complete(&self, record: &ItemRecord, _total_items: usize) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::status_mark(record));
            pb.inc(1);
        }
    }

    fn on_run_complete(&self, tally: &ExperimentTally) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!(
                "{} {}/{} matched",
                "done".green(),
                tally.success_count,
                tally.total_items
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl EvaluationProgress for SimpleProgress {
    fn on_run_start(&self, experiment_name: &str, total_items: usize) {
        println!(
            "{} {} ({} items)",
            "->".cyan(),
            experiment_name.bold(),
            total_items
        );
    }

    fn on_item_complete(&self, record: &ItemRecord, total_items: usize) {
        println!(
            "  [{}/{}] {}",
            record.position,
            total_items,
            ProgressReporter::status_mark(record)
        );
    }

    fn on_run_complete(&self, _tally: &ExperimentTally) {
        println!();
    }
}
