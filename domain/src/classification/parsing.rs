//! Strict parsing of the classifier's structured output.
//!
//! The model is asked for a JSON object with exactly four fields:
//! `intent_id`, `intent_description`, `confidence` and `reasoning`. Anything
//! else is rejected; there is no partial credit and no fallback intent.
//!
//! The only leniency is a surrounding markdown code fence, which some
//! deployments add even in JSON mode.

use super::entities::ClassificationResult;
use crate::catalog::IntentCatalog;
use serde::Deserialize;
use thiserror::Error;

/// Why a model completion could not become a [`ClassificationResult`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassificationRejection {
    #[error("Model output is not a JSON object: {0}")]
    NotJson(String),

    #[error("Model output does not match the classification schema: {0}")]
    SchemaMismatch(String),

    #[error("Invalid intent_id returned: {0}")]
    UnknownIntent(String),

    #[error("Confidence {0} is outside [0, 1]")]
    ConfidenceOutOfRange(f64),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClassification {
    intent_id: RawIntentId,
    intent_description: String,
    confidence: f64,
    reasoning: String,
}

/// Models occasionally emit numeric ids despite the prompt asking for strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIntentId {
    Text(String),
    Number(serde_json::Number),
}

impl RawIntentId {
    fn into_string(self) -> String {
        match self {
            RawIntentId::Text(s) => s,
            RawIntentId::Number(n) => n.to_string(),
        }
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string line (e.g. "json")
    let body = body.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a classifier completion against the intent catalog.
///
/// # Examples
///
/// ```
/// use petdesk_domain::{IntentCatalog, parse_classification};
///
/// let catalog = IntentCatalog::from_pairs(vec![
///     ("1".to_string(), "Shipping delay".to_string()),
/// ]).unwrap();
/// let raw = r#"{"intent_id": "1", "intent_description": "Shipping delay",
///              "confidence": 0.9, "reasoning": "asks about an order"}"#;
/// let result = parse_classification(raw, &catalog).unwrap();
/// assert_eq!(result.intent_id(), "1");
/// ```
pub fn parse_classification(
    raw: &str,
    catalog: &IntentCatalog,
) -> Result<ClassificationResult, ClassificationRejection> {
    let body = strip_code_fence(raw);

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ClassificationRejection::NotJson(e.to_string()))?;
    if !value.is_object() {
        return Err(ClassificationRejection::NotJson(format!(
            "expected an object, got {}",
            body
        )));
    }

    let parsed: RawClassification = serde_json::from_value(value)
        .map_err(|e| ClassificationRejection::SchemaMismatch(e.to_string()))?;

    ClassificationResult::validated(
        parsed.intent_id.into_string(),
        parsed.intent_description,
        parsed.confidence,
        parsed.reasoning,
        catalog,
    )
}
