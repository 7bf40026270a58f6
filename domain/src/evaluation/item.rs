//! Per-item evaluation state.
//!
//! ```text
//! Pending ──► Running ──► Scored ──► Recorded
//!                │
//!                └──────► Skipped
//! ```
//!
//! `Skipped` items count toward the denominator of the success rate but never
//! toward the numerator.

use super::canonical_id::CanonicalId;
use super::dataset::DatasetItem;
use super::scoring::score_prepared_answer;
use serde::{Deserialize, Serialize};

/// Lifecycle state of one dataset item within an experiment run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Pending,
    Running,
    Scored,
    Recorded,
    Skipped,
}

impl ItemState {
    pub fn can_transition_to(self, next: ItemState) -> bool {
        matches!(
            (self, next),
            (ItemState::Pending, ItemState::Running)
                | (ItemState::Running, ItemState::Scored)
                | (ItemState::Running, ItemState::Skipped)
                | (ItemState::Scored, ItemState::Recorded)
        )
    }

    /// Whether the item reached a final state for this run
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ItemState::Scored | ItemState::Recorded | ItemState::Skipped
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemState::Pending => "pending",
            ItemState::Running => "running",
            ItemState::Scored => "scored",
            ItemState::Recorded => "recorded",
            ItemState::Skipped => "skipped",
        }
    }
}

/// Execution record of one dataset item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// 1-based position in the dataset
    pub position: usize,
    pub item_id: String,
    pub question: String,
    pub expected: CanonicalId,
    pub state: ItemState,
    /// Prepared-answer id the pipeline produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produced: Option<String>,
    /// `1` on a match, `0` otherwise; absent for skipped items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// Why the item was skipped, or why its score could not be recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ItemRecord {
    pub fn pending(position: usize, item: &DatasetItem) -> Self {
        Self {
            position,
            item_id: item.id.clone(),
            question: item.question().to_string(),
            expected: item.expected_answer_id().clone(),
            state: ItemState::Pending,
            produced: None,
            score: None,
            note: None,
        }
    }

    fn transition(&mut self, next: ItemState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal item transition {:?} -> {:?}",
            self.state,
            next
        );
        self.state = next;
    }

    pub fn start(&mut self) {
        self.transition(ItemState::Running);
    }

    /// Score the produced id against the label and return the score
    pub fn score(&mut self, produced: &str) -> u8 {
        let score = score_prepared_answer(produced, &self.expected);
        self.produced = Some(produced.to_string());
        self.score = Some(score);
        self.transition(ItemState::Scored);
        score
    }

    pub fn mark_recorded(&mut self) {
        self.transition(ItemState::Recorded);
    }

    /// Keep the item `Scored` but remember why recording failed
    pub fn note_record_failure(&mut self, reason: impl Into<String>) {
        self.note = Some(reason.into());
    }

    pub fn skip(&mut self, reason: impl Into<String>) {
        self.note = Some(reason.into());
        self.transition(ItemState::Skipped);
    }

    pub fn is_success(&self) -> bool {
        self.score == Some(1)
    }

    pub fn is_skipped(&self) -> bool {
        self.state == ItemState::Skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> DatasetItem {
        DatasetItem::new("item-1", "Where is my order?", CanonicalId::Numeric(1))
    }

    #[test]
    fn test_happy_path_reaches_recorded() {
        let mut record = ItemRecord::pending(1, &item());
        assert_eq!(record.state, ItemState::Pending);
        record.start();
        assert_eq!(record.score("1"), 1);
        assert_eq!(record.state, ItemState::Scored);
        record.mark_recorded();
        assert_eq!(record.state, ItemState::Recorded);
        assert!(record.is_success());
        assert!(record.state.is_terminal());
    }

    #[test]
    fn test_failed_run_is_skipped_without_score() {
        let mut record = ItemRecord::pending(2, &item());
        record.start();
        record.skip("classification failed");
        assert!(record.is_skipped());
        assert!(!record.is_success());
        assert_eq!(record.score, None);
        assert_eq!(record.note.as_deref(), Some("classification failed"));
    }

    #[test]
    fn test_record_failure_keeps_score() {
        let mut record = ItemRecord::pending(3, &item());
        record.start();
        record.score("01");
        record.note_record_failure("disk full");
        assert_eq!(record.state, ItemState::Scored);
        assert!(record.is_success());
    }

    #[test]
    fn test_transition_table() {
        assert!(ItemState::Pending.can_transition_to(ItemState::Running));
        assert!(!ItemState::Pending.can_transition_to(ItemState::Scored));
        assert!(!ItemState::Skipped.can_transition_to(ItemState::Recorded));
        assert!(!ItemState::Recorded.can_transition_to(ItemState::Running));
        assert!(!ItemState::Running.is_terminal());
    }
}
