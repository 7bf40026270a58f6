//! Canonical form for prepared-answer and intent ids.
//!
//! Ids reach the desk from three places that disagree on their type: catalog
//! keys (always strings), model output (usually strings, sometimes numbers)
//! and dataset labels (numbers or strings). Every equality check goes through
//! [`CanonicalId`] so that `1`, `"1"`, `"01"` and `1.0` are the same id while
//! `"A1"` stays distinct.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Normalized id (Value Object)
///
/// Integral ids compare numerically, everything else compares as trimmed
/// text. Numeric ids order before textual ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalId {
    Numeric(i64),
    Text(String),
}

impl CanonicalId {
    /// Normalize a textual id.
    ///
    /// An optional sign followed only by ASCII digits becomes numeric; leading
    /// zeros are dropped. Values that overflow `i64` stay textual.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('+'))
            .unwrap_or(trimmed);

        if !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && let Ok(n) = trimmed.trim_start_matches('+').parse::<i64>()
        {
            return CanonicalId::Numeric(n);
        }
        CanonicalId::Text(trimmed.to_string())
    }

    /// Normalize a JSON number. Integral floats (`3.0`) count as integers.
    pub fn from_number(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            return CanonicalId::Numeric(i);
        }
        if let Some(f) = n.as_f64()
            && f.is_finite()
            && f.fract() == 0.0
            && f >= i64::MIN as f64
            && f <= i64::MAX as f64
        {
            return CanonicalId::Numeric(f as i64);
        }
        CanonicalId::Text(n.to_string())
    }

    /// Normalize an arbitrary JSON value. Only strings and numbers are ids.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Self::parse(s)),
            serde_json::Value::Number(n) => Some(Self::from_number(n)),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalId::Numeric(n) => write!(f, "{}", n),
            CanonicalId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CanonicalId {
    fn from(s: &str) -> Self {
        CanonicalId::parse(s)
    }
}

impl From<i64> for CanonicalId {
    fn from(n: i64) -> Self {
        CanonicalId::Numeric(n)
    }
}

impl Serialize for CanonicalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CanonicalId::Numeric(n) => serializer.serialize_i64(*n),
            CanonicalId::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for CanonicalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = CanonicalId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an id given as a string or a number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CanonicalId, E> {
                Ok(CanonicalId::parse(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CanonicalId, E> {
                Ok(CanonicalId::Numeric(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CanonicalId, E> {
                Ok(i64::try_from(v)
                    .map(CanonicalId::Numeric)
                    .unwrap_or_else(|_| CanonicalId::Text(v.to_string())))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<CanonicalId, E> {
                match serde_json::Number::from_f64(v) {
                    Some(n) => Ok(CanonicalId::from_number(&n)),
                    None => Err(E::custom(format!("{} is not a valid id", v))),
                }
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_textual_forms_agree() {
        assert_eq!(CanonicalId::parse("1"), CanonicalId::Numeric(1));
        assert_eq!(CanonicalId::parse(" 01 "), CanonicalId::Numeric(1));
        assert_eq!(CanonicalId::parse("+7"), CanonicalId::Numeric(7));
        assert_eq!(CanonicalId::parse("-3"), CanonicalId::Numeric(-3));
        assert_eq!(
            CanonicalId::from_json(&json!(1.0)),
            Some(CanonicalId::Numeric(1))
        );
    }

    #[test]
    fn test_non_integral_ids_stay_textual() {
        assert_eq!(CanonicalId::parse("A1"), CanonicalId::Text("A1".to_string()));
        assert_eq!(CanonicalId::parse("1.5"), CanonicalId::Text("1.5".to_string()));
        assert_eq!(CanonicalId::parse("-"), CanonicalId::Text("-".to_string()));
        assert_eq!(CanonicalId::parse(""), CanonicalId::Text(String::new()));
        assert_ne!(CanonicalId::parse("A1"), CanonicalId::parse("1"));
    }

    #[test]
    fn test_overflow_stays_textual() {
        let huge = "99999999999999999999999";
        assert_eq!(CanonicalId::parse(huge), CanonicalId::Text(huge.to_string()));
    }

    #[test]
    fn test_only_strings_and_numbers_are_ids() {
        assert!(CanonicalId::from_json(&json!(null)).is_none());
        assert!(CanonicalId::from_json(&json!(true)).is_none());
        assert!(CanonicalId::from_json(&json!(["1"])).is_none());
    }

    #[test]
    fn test_deserializes_from_either_json_type() {
        let a: CanonicalId = serde_json::from_value(json!(12)).unwrap();
        let b: CanonicalId = serde_json::from_value(json!("12")).unwrap();
        let c: CanonicalId = serde_json::from_value(json!(12.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert!(serde_json::from_value::<CanonicalId>(json!(null)).is_err());
    }

    #[test]
    fn test_numeric_sorts_before_text_and_numerically() {
        let mut ids = vec![
            CanonicalId::parse("10"),
            CanonicalId::parse("faq"),
            CanonicalId::parse("2"),
        ];
        ids.sort();
        let rendered: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        assert_eq!(rendered, vec!["2", "10", "faq"]);
    }
}
