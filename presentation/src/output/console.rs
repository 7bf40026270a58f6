//! Console output formatter for answers and experiment results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use petdesk_application::ExperimentSummary;
use petdesk_domain::{ConfigIssue, ItemRecord, ItemState, PipelineOutcome, Severity};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a pipeline outcome
    pub fn format_outcome(outcome: &PipelineOutcome) -> String {
        let mut output = String::new();

        match outcome {
            PipelineOutcome::Answered(result) => {
                output.push_str(&format!(
                    "{} {} {}\n",
                    "Intent:".cyan().bold(),
                    result.intent_id,
                    format!("({})", result.intent_description).dimmed()
                ));
                output.push_str(&format!(
                    "{} {:.2}\n",
                    "Confidence:".cyan().bold(),
                    result.confidence
                ));
                output.push_str(&format!(
                    "{} {}\n",
                    "Reasoning:".cyan().bold(),
                    result.reasoning
                ));
                output.push_str(&Self::section_header("Prepared answer"));
                output.push_str(&format!(
                    "{}\n",
                    if result.prepared_answer_text.is_empty() {
                        "(none)".dimmed().to_string()
                    } else {
                        result.prepared_answer_text.clone()
                    }
                ));
                output.push_str(&Self::section_header("Answer"));
                if result.customization_degraded {
                    output.push_str(&format!("{}\n", result.custom_answer.yellow()));
                } else {
                    output.push_str(&format!("{}\n", result.custom_answer));
                }
            }
            PipelineOutcome::Failed { question, reason } => {
                output.push_str(&format!(
                    "{} could not answer '{}'\n  {}\n",
                    "Error:".red().bold(),
                    question,
                    reason
                ));
            }
        }

        output
    }

    /// Format an experiment summary
    pub fn format_summary(summary: &ExperimentSummary) -> String {
        let report = &summary.report;
        let mut output = String::new();

        output.push_str(&Self::header("Experiment Results"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n{} {}\n\n",
            "Experiment:".cyan().bold(),
            report.experiment_name,
            "Dataset:".cyan().bold(),
            report.dataset_name
        ));

        let failures: Vec<&ItemRecord> = summary
            .records
            .iter()
            .filter(|r| !r.is_success())
            .collect();
        if !failures.is_empty() {
            output.push_str(&Self::section_header("Misses"));
            for record in failures {
                output.push_str(&Self::format_item(record));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "{} {}/{} ({:.2}%)",
            "Success rate:".bold(),
            report.success_count,
            report.total_items,
            report.success_percentage
        ));
        if report.skipped_items > 0 {
            output.push_str(&format!(
                " {}",
                format!("[{} skipped]", report.skipped_items).dimmed()
            ));
        }
        output.push('\n');

        let verdict = if report.passed {
            format!("PASSED (threshold {:.2}%)", report.threshold * 100.0)
                .green()
                .bold()
        } else {
            format!(
                "BELOW THRESHOLD ({:.2}% < {:.2}%)",
                report.success_percentage,
                report.threshold * 100.0
            )
            .red()
            .bold()
        };
        output.push_str(&format!("{}\n", verdict));

        if let Some(path) = &summary.report_path {
            output.push_str(&format!("{} {}\n", "Saved:".dimmed(), path.display()));
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_item(record: &ItemRecord) -> String {
        match record.state {
            ItemState::Skipped => format!(
                "  {} #{} {}: {}\n",
                "x".red(),
                record.position,
                record.item_id,
                record.note.as_deref().unwrap_or("skipped")
            ),
            _ => format!(
                "  {} #{} {}: expected {}, got {}\n",
                "-".yellow(),
                record.position,
                record.item_id,
                record.expected,
                record.produced.as_deref().unwrap_or("nothing")
            ),
        }
    }

    /// Format configuration issues, one per line
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_outcome(&self, outcome: &PipelineOutcome) -> String {
        Self::format_outcome(outcome)
    }

    fn format_summary(&self, summary: &ExperimentSummary) -> String {
        Self::format_summary(summary)
    }
}
