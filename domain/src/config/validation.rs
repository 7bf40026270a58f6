//! Structured configuration issues.
//!
//! Configuration is validated once at process start. Every problem is
//! reported as a [`ConfigIssue`] so callers can print all of them at once and
//! decide, by [`Severity`], whether to abort.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A model name field is present but blank.
    EmptyModelName { field: String },
    /// A numeric setting is outside its accepted range.
    ValueOutOfRange { field: String, value: f64, min: f64, max: f64 },
    /// An intent has no prepared answer; questions classified to it degrade.
    MissingPreparedAnswer { intent_id: String },
    /// A prepared answer is never reachable because no intent carries its id.
    OrphanPreparedAnswer { answer_id: String },
}

/// A detected configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Same issue with its severity raised to [`Severity::Error`].
    pub fn escalate(mut self) -> Self {
        self.severity = Severity::Error;
        self
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// Returns `true` if any issue is fatal.
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(ConfigIssue::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(id: &str) -> ConfigIssue {
        ConfigIssue::warning(
            ConfigIssueCode::MissingPreparedAnswer {
                intent_id: id.to_string(),
            },
            format!("intent '{}' has no prepared answer", id),
        )
    }

    #[test]
    fn test_warnings_are_not_fatal() {
        let issues = vec![missing("4")];
        assert!(!has_errors(&issues));
    }

    #[test]
    fn test_escalate_makes_warning_fatal() {
        let issues = vec![missing("4").escalate()];
        assert!(has_errors(&issues));
        assert_eq!(issues[0].to_string(), "error: intent '4' has no prepared answer");
    }

    #[test]
    fn test_display_includes_severity() {
        let issue = ConfigIssue::error(
            ConfigIssueCode::EmptyModelName {
                field: "classifier".to_string(),
            },
            "models.classifier: model name cannot be empty",
        );
        assert_eq!(
            issue.to_string(),
            "error: models.classifier: model name cannot be empty"
        );
    }
}
