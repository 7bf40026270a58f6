//! Read-only intent and prepared-answer catalogs.
//!
//! Both catalogs are built once at startup and then shared behind an `Arc`.
//! Lookups use the exact catalog key; iteration follows [`CanonicalId`] order
//! so prompts built from a catalog are identical from run to run.

use super::entities::{IntentDefinition, PreparedAnswerDefinition};
use crate::core::error::DomainError;
use crate::evaluation::CanonicalId;
use std::collections::HashMap;

/// Sorted entries plus an exact-key index
#[derive(Debug, Clone)]
struct Entries<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Entries<T> {
    fn build(
        kind: &'static str,
        pairs: impl IntoIterator<Item = (String, String)>,
        make: impl Fn(String, String) -> T,
    ) -> Result<Self, DomainError> {
        let mut sorted: Vec<(CanonicalId, String, String)> = Vec::new();
        for (id, value) in pairs {
            let id = id.trim().to_string();
            if id.is_empty() {
                return Err(DomainError::BlankCatalogId(kind));
            }
            sorted.retain(|(_, existing, _)| existing != &id);
            sorted.push((CanonicalId::parse(&id), id, value));
        }
        if sorted.is_empty() {
            return Err(DomainError::EmptyCatalog(kind));
        }
        sorted.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        let mut items = Vec::with_capacity(sorted.len());
        let mut index = HashMap::with_capacity(sorted.len());
        for (position, (_, id, value)) in sorted.into_iter().enumerate() {
            index.insert(id.clone(), position);
            items.push(make(id, value));
        }
        Ok(Self { items, index })
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&i| &self.items[i])
    }
}

/// Intent id → description
#[derive(Debug, Clone)]
pub struct IntentCatalog {
    entries: Entries<IntentDefinition>,
}

impl IntentCatalog {
    /// Build from `(id, description)` pairs. Ids are trimmed; a later
    /// duplicate replaces an earlier one.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, DomainError> {
        let entries = Entries::build("intents", pairs, |id, description| IntentDefinition {
            id,
            description,
        })?;
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&IntentDefinition> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IntentDefinition> {
        self.entries.items.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|intent| intent.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.items.is_empty()
    }
}

/// Prepared-answer id → canned text
#[derive(Debug, Clone)]
pub struct AnswerCatalog {
    entries: Entries<PreparedAnswerDefinition>,
}

impl AnswerCatalog {
    /// Build from `(id, text)` pairs. Ids are trimmed; a later duplicate
    /// replaces an earlier one.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, DomainError> {
        let entries = Entries::build("prepared answers", pairs, |id, text| {
            PreparedAnswerDefinition { id, text }
        })?;
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&PreparedAnswerDefinition> {
        self.entries.get(id)
    }

    pub fn text_for(&self, id: &str) -> Option<&str> {
        self.get(id).map(|answer| answer.text.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreparedAnswerDefinition> {
        self.entries.items.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_intents_iterate_in_canonical_order() {
        let catalog = IntentCatalog::from_pairs(pairs(&[
            ("10", "Allergy question"),
            ("2", "Shipping delay"),
            ("1", "Order status"),
        ]))
        .unwrap();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec!["1", "2", "10"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_lookup_uses_exact_key() {
        let catalog = IntentCatalog::from_pairs(pairs(&[(" 1 ", "Shipping delay")])).unwrap();
        assert!(catalog.contains("1"));
        assert!(!catalog.contains("01"));
        assert_eq!(catalog.get("1").unwrap().description, "Shipping delay");
    }

    #[test]
    fn test_empty_and_blank_catalogs_rejected() {
        assert_eq!(
            IntentCatalog::from_pairs(Vec::new()).unwrap_err(),
            DomainError::EmptyCatalog("intents")
        );
        assert_eq!(
            AnswerCatalog::from_pairs(pairs(&[("  ", "text")])).unwrap_err(),
            DomainError::BlankCatalogId("prepared answers")
        );
    }

    #[test]
    fn test_duplicate_id_keeps_last() {
        let catalog =
            AnswerCatalog::from_pairs(pairs(&[("1", "old text"), ("1", "new text")])).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.text_for("1"), Some("new text"));
    }
}
