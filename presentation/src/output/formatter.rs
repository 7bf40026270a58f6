//! Output formatter trait

use crate::output::console::ConsoleFormatter;
use petdesk_application::ExperimentSummary;
use petdesk_domain::{OutputFormat, PipelineOutcome};

/// Trait for formatting pipeline answers and experiment summaries
pub trait OutputFormatter {
    /// Format the outcome of one `ask`
    fn format_outcome(&self, outcome: &PipelineOutcome) -> String;

    /// Format the result of one experiment run
    fn format_summary(&self, summary: &ExperimentSummary) -> String;
}

/// Machine-readable output
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_outcome(&self, outcome: &PipelineOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_summary(&self, summary: &ExperimentSummary) -> String {
        let value = serde_json::json!({
            "report": summary.report,
            "report_path": summary.report_path,
            "items": summary.records,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Pick the formatter for a configured format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_outcome_is_tagged() {
        let outcome = PipelineOutcome::failed("Where is my order?", "Timeout");
        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_outcome(&outcome)).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "Timeout");
    }
}
