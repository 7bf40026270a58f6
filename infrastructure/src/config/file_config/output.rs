//! Output locations from TOML (`[output]` section)

use petdesk_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Console output format (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Directory experiment reports are written to
    pub results_dir: PathBuf,
    /// Directory holding `<name>.json` datasets and their score logs
    pub datasets_dir: PathBuf,
    /// JSONL file pipeline traces are appended to
    pub trace_log: PathBuf,
    /// Record pipeline traces at all
    pub record_traces: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            results_dir: PathBuf::from("."),
            datasets_dir: PathBuf::from("datasets"),
            trace_log: PathBuf::from(".petdesk/traces.jsonl"),
            record_traces: true,
        }
    }
}
