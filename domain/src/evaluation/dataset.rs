//! Labeled dataset items.

use super::canonical_id::CanonicalId;
use serde::{Deserialize, Serialize};

/// Input half of a dataset item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInput {
    pub question: String,
}

/// Expected output half of a dataset item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedOutput {
    /// Prepared-answer id the pipeline should select. Numeric or textual in
    /// the source data; normalized on read.
    pub prepared_answer_id: CanonicalId,
}

/// One labeled evaluation example (immutable for the run)
///
/// Extra keys in `input` / `expected_output` are ignored so that datasets
/// exported from tracing platforms load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetItem {
    /// Stable identifier used when attaching scores. Assigned by the dataset
    /// store when the source does not carry one.
    #[serde(default)]
    pub id: String,
    pub input: DatasetInput,
    pub expected_output: ExpectedOutput,
}

impl DatasetItem {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        expected: impl Into<CanonicalId>,
    ) -> Self {
        Self {
            id: id.into(),
            input: DatasetInput {
                question: question.into(),
            },
            expected_output: ExpectedOutput {
                prepared_answer_id: expected.into(),
            },
        }
    }

    pub fn question(&self) -> &str {
        &self.input.question
    }

    pub fn expected_answer_id(&self) -> &CanonicalId {
        &self.expected_output.prepared_answer_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_numeric_label() {
        let json = r#"{
            "input": {"question": "Is the salmon kibble grain free?", "locale": "en"},
            "expected_output": {"prepared_answer_id": 4}
        }"#;
        let item: DatasetItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "");
        assert_eq!(item.question(), "Is the salmon kibble grain free?");
        assert_eq!(item.expected_answer_id(), &CanonicalId::Numeric(4));
    }

    #[test]
    fn test_deserialize_with_textual_label() {
        let json = r#"{
            "id": "q-17",
            "input": {"question": "Cancel my subscription"},
            "expected_output": {"prepared_answer_id": "04"}
        }"#;
        let item: DatasetItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "q-17");
        assert_eq!(item.expected_answer_id(), &CanonicalId::Numeric(4));
    }

    #[test]
    fn test_missing_label_is_rejected() {
        let json = r#"{"input": {"question": "hi"}, "expected_output": {}}"#;
        assert!(serde_json::from_str::<DatasetItem>(json).is_err());
    }
}
