//! Classification result value object

use super::parsing::ClassificationRejection;
use crate::catalog::IntentCatalog;
use serde::Serialize;

/// Intent selected for a customer question (Value Object)
///
/// Can only be built through [`ClassificationResult::validated`], which
/// guarantees the intent id is a catalog key and the confidence lies in
/// `[0, 1]`. The confidence is the model's own, uncalibrated figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    intent_id: String,
    intent_description: String,
    confidence: f64,
    reasoning: String,
}

impl ClassificationResult {
    pub fn validated(
        intent_id: impl Into<String>,
        intent_description: impl Into<String>,
        confidence: f64,
        reasoning: impl Into<String>,
        catalog: &IntentCatalog,
    ) -> Result<Self, ClassificationRejection> {
        let intent_id = intent_id.into().trim().to_string();
        if !catalog.contains(&intent_id) {
            return Err(ClassificationRejection::UnknownIntent(intent_id));
        }
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(ClassificationRejection::ConfidenceOutOfRange(confidence));
        }
        Ok(Self {
            intent_id,
            intent_description: intent_description.into(),
            confidence,
            reasoning: reasoning.into(),
        })
    }

    pub fn intent_id(&self) -> &str {
        &self.intent_id
    }

    /// Description as returned by the model
    pub fn intent_description(&self) -> &str {
        &self.intent_description
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> IntentCatalog {
        IntentCatalog::from_pairs(vec![("1".to_string(), "Shipping delay".to_string())]).unwrap()
    }

    #[test]
    fn test_accepts_catalog_member() {
        let result =
            ClassificationResult::validated("1", "Shipping delay", 0.9, "mentions order", &catalog())
                .unwrap();
        assert_eq!(result.intent_id(), "1");
        assert_eq!(result.confidence(), 0.9);
    }

    #[test]
    fn test_rejects_unknown_intent() {
        let err = ClassificationResult::validated("7", "?", 0.9, "", &catalog()).unwrap_err();
        assert_eq!(err, ClassificationRejection::UnknownIntent("7".to_string()));
    }

    #[test]
    fn test_rejects_confidence_outside_unit_interval() {
        for confidence in [-0.01, 1.2, f64::NAN] {
            let err =
                ClassificationResult::validated("1", "Shipping delay", confidence, "", &catalog())
                    .unwrap_err();
            assert!(matches!(err, ClassificationRejection::ConfidenceOutOfRange(_)));
        }
    }
}
