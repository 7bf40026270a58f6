//! Regression gate on the success rate.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Minimum success rate for an experiment to pass, within `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SuccessThreshold(f64);

impl SuccessThreshold {
    pub const DEFAULT: f64 = 0.8;

    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(DomainError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Compare a success rate against this threshold
    pub fn evaluate(self, success_rate: f64) -> ThresholdVerdict {
        if success_rate >= self.0 {
            ThresholdVerdict::Passed
        } else {
            ThresholdVerdict::BelowThreshold
        }
    }
}

impl Default for SuccessThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl<'de> Deserialize<'de> for SuccessThreshold {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        SuccessThreshold::new(value).map_err(serde::de::Error::custom)
    }
}

/// Outcome of the regression gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdVerdict {
    Passed,
    BelowThreshold,
}

impl ThresholdVerdict {
    pub fn is_pass(self) -> bool {
        self == ThresholdVerdict::Passed
    }

    /// Process exit status signaling the verdict to calling automation
    pub fn exit_code(self) -> u8 {
        match self {
            ThresholdVerdict::Passed => 0,
            ThresholdVerdict::BelowThreshold => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(SuccessThreshold::default().value(), 0.8);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(SuccessThreshold::new(-0.1).is_err());
        assert!(SuccessThreshold::new(1.01).is_err());
        assert!(SuccessThreshold::new(f64::NAN).is_err());
        assert!(SuccessThreshold::new(0.0).is_ok());
        assert!(SuccessThreshold::new(1.0).is_ok());
    }

    #[test]
    fn test_rate_equal_to_threshold_passes() {
        let threshold = SuccessThreshold::new(0.8).unwrap();
        assert_eq!(threshold.evaluate(0.8), ThresholdVerdict::Passed);
        assert_eq!(threshold.evaluate(0.79), ThresholdVerdict::BelowThreshold);
        assert_eq!(ThresholdVerdict::Passed.exit_code(), 0);
        assert_eq!(ThresholdVerdict::BelowThreshold.exit_code(), 1);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: SuccessThreshold = serde_json::from_str("0.9").unwrap();
        assert_eq!(ok.value(), 0.9);
        assert!(serde_json::from_str::<SuccessThreshold>("2.0").is_err());
    }
}
