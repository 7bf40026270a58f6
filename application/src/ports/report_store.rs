//! Port for persisting experiment reports.

use petdesk_domain::ExperimentReport;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persists one report per run and returns where it went
pub trait ReportStore: Send + Sync {
    fn save(&self, report: &ExperimentReport) -> Result<PathBuf, ReportError>;
}

/// Store that keeps nothing, for tests and dry runs.
pub struct NoReportStore;

impl ReportStore for NoReportStore {
    fn save(&self, report: &ExperimentReport) -> Result<PathBuf, ReportError> {
        Ok(PathBuf::from(report.file_name()))
    }
}
