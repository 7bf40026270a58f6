//! Run Experiment use case.
//!
//! Replays a labeled dataset through an [`AnswerPipeline`], scores each item
//! by comparing the produced prepared-answer id with the label, records the
//! score on the item's execution, and gates the aggregate success rate
//! against a threshold.
//!
//! # Item lifecycle
//!
//! ```text
//! Pending → Running → Scored → Recorded
//!              │
//!              └──→ Skipped   (pipeline failed or panicked)
//! ```
//!
//! A skipped item counts toward the denominator but not the numerator, and
//! never aborts the batch. With `concurrency > 1` up to that many items are
//! in flight; results are still consumed (and tallied) in dataset order by a
//! single loop.

use crate::config::ExperimentParams;
use crate::ports::dataset::{DatasetError, DatasetPort, ScoreRecord};
use crate::ports::progress::EvaluationProgress;
use crate::ports::report_store::ReportStore;
use crate::use_cases::run_pipeline::AnswerPipeline;
use chrono::Local;
use futures::{FutureExt, StreamExt, stream};
use petdesk_domain::{
    DatasetItem, ExperimentReport, ExperimentTally, ItemRecord, PipelineOutcome, SCORE_NAME,
    ThresholdVerdict,
};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{Instrument, debug, info, info_span, warn};

/// Errors that abort an experiment run.
#[derive(Error, Debug)]
pub enum RunExperimentError {
    #[error("Dataset '{dataset}' unavailable: {source}")]
    DatasetUnavailable {
        dataset: String,
        #[source]
        source: DatasetError,
    },
}

/// Output of a completed run.
#[derive(Debug, Clone)]
pub struct ExperimentSummary {
    pub report: ExperimentReport,
    /// Per-item records, in dataset order.
    pub records: Vec<ItemRecord>,
    /// Where the report was written, if persisting it succeeded.
    pub report_path: Option<PathBuf>,
}

impl ExperimentSummary {
    pub fn verdict(&self) -> ThresholdVerdict {
        self.report.verdict()
    }
}

/// Use case for evaluating the pipeline against a labeled dataset.
pub struct RunExperimentUseCase {
    pipeline: Arc<dyn AnswerPipeline>,
    dataset: Arc<dyn DatasetPort>,
    reports: Arc<dyn ReportStore>,
}

impl RunExperimentUseCase {
    pub fn new(
        pipeline: Arc<dyn AnswerPipeline>,
        dataset: Arc<dyn DatasetPort>,
        reports: Arc<dyn ReportStore>,
    ) -> Self {
        Self {
            pipeline,
            dataset,
            reports,
        }
    }

    pub async fn execute(
        &self,
        params: &ExperimentParams,
        progress: &dyn EvaluationProgress,
    ) -> Result<ExperimentSummary, RunExperimentError> {
        let span = info_span!(
            "experiment",
            name = %params.experiment_name,
            dataset = %params.dataset_name
        );
        self.run(params, progress).instrument(span).await
    }

    async fn run(
        &self,
        params: &ExperimentParams,
        progress: &dyn EvaluationProgress,
    ) -> Result<ExperimentSummary, RunExperimentError> {
        let items = self
            .dataset
            .fetch(&params.dataset_name)
            .await
            .map_err(|source| RunExperimentError::DatasetUnavailable {
                dataset: params.dataset_name.clone(),
                source,
            })?;

        let total = items.len();
        info!(
            "Running experiment '{}' over {} items (concurrency {})",
            params.experiment_name, total, params.concurrency
        );
        progress.on_run_start(&params.experiment_name, total);

        let mut tally = ExperimentTally::new(total);
        let mut records = Vec::with_capacity(total);

        let mut results = stream::iter(items.into_iter().enumerate())
            .map(|(index, item)| self.run_item(index + 1, item, params))
            .buffered(params.concurrency.max(1));

        while let Some(record) = results.next().await {
            tally.record(&record);
            progress.on_item_complete(&record, total);
            records.push(record);
        }

        let report = ExperimentReport::new(
            &params.experiment_name,
            &params.dataset_name,
            &tally,
            params.threshold,
            Local::now(),
        );
        info!(
            "Success rate: {:.2}% ({}/{}, {} skipped)",
            report.success_percentage, tally.success_count, tally.total_items, tally.skipped_count
        );

        let report_path = match self.reports.save(&report) {
            Ok(path) => {
                info!("Results saved to {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Could not save experiment report: {}", e);
                None
            }
        };

        progress.on_run_complete(&tally);

        Ok(ExperimentSummary {
            report,
            records,
            report_path,
        })
    }

    async fn run_item(
        &self,
        position: usize,
        item: DatasetItem,
        params: &ExperimentParams,
    ) -> ItemRecord {
        let span = info_span!("item", position, id = %item.id);
        async move {
            let mut record = ItemRecord::pending(position, &item);
            record.start();

            let outcome = AssertUnwindSafe(self.pipeline.run(item.question()))
                .catch_unwind()
                .await;

            match outcome {
                Ok(PipelineOutcome::Answered(result)) => {
                    let score = record.score(&result.prepared_answer_id);
                    debug!(
                        "Produced {} (expected {}) -> {}",
                        result.prepared_answer_id, record.expected, score
                    );
                    self.attach_score(&mut record, params, score).await;
                }
                Ok(PipelineOutcome::Failed { reason, .. }) => {
                    warn!("Item {} skipped: {}", record.item_id, reason);
                    record.skip(reason);
                }
                Err(panic) => {
                    let reason = format!("pipeline panicked: {}", panic_message(panic.as_ref()));
                    warn!("Item {} skipped: {}", record.item_id, reason);
                    record.skip(reason);
                }
            }
            record
        }
        .instrument(span)
        .await
    }

    async fn attach_score(&self, record: &mut ItemRecord, params: &ExperimentParams, score: u8) {
        let score = ScoreRecord {
            dataset_name: params.dataset_name.clone(),
            item_id: record.item_id.clone(),
            run_name: params.experiment_name.clone(),
            name: SCORE_NAME.to_string(),
            value: f64::from(score),
        };
        match self.dataset.attach_score(&score).await {
            Ok(()) => record.mark_recorded(),
            Err(e) => {
                warn!("Could not record score for {}: {}", record.item_id, e);
                record.note_record_failure(e.to_string());
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
