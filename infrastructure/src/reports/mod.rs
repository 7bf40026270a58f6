//! JSON report store

use petdesk_application::{ReportError, ReportStore};
use petdesk_domain::ExperimentReport;
use std::path::PathBuf;

/// Writes each report as pretty JSON into a results directory.
pub struct JsonReportStore {
    dir: PathBuf,
}

impl JsonReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportStore for JsonReportStore {
    fn save(&self, report: &ExperimentReport) -> Result<PathBuf, ReportError> {
        let path = self.dir.join(report.file_name());
        let json = serde_json::to_string_pretty(report)?;

        std::fs::create_dir_all(&self.dir)
            .and_then(|()| std::fs::write(&path, json))
            .map_err(|source| ReportError::Write {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}
