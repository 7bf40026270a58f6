//! Success-rate aggregation.

use super::item::ItemRecord;
use serde::{Deserialize, Serialize};

/// Running totals for one experiment run
///
/// The only state shared across items. It is updated exactly once per item,
/// from a single place, in whatever order items finish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentTally {
    pub total_items: usize,
    pub success_count: usize,
    pub skipped_count: usize,
}

impl ExperimentTally {
    pub fn new(total_items: usize) -> Self {
        Self {
            total_items,
            ..Self::default()
        }
    }

    /// Fold a finished item into the totals
    pub fn record(&mut self, item: &ItemRecord) {
        if item.is_skipped() {
            self.skipped_count += 1;
        } else if item.is_success() {
            self.success_count += 1;
        }
    }

    /// `success_count / total_items`, or exactly `0.0` for an empty dataset
    pub fn success_rate(&self) -> f64 {
        if self.total_items == 0 {
            return 0.0;
        }
        (self.success_count as f64 / self.total_items as f64).clamp(0.0, 1.0)
    }

    pub fn success_percentage(&self) -> f64 {
        self.success_rate() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{CanonicalId, DatasetItem};

    fn finished(position: usize, produced: Option<&str>) -> ItemRecord {
        let item = DatasetItem::new(
            format!("item-{}", position),
            "question",
            CanonicalId::Numeric(1),
        );
        let mut record = ItemRecord::pending(position, &item);
        record.start();
        match produced {
            Some(id) => {
                record.score(id);
            }
            None => record.skip("pipeline failed"),
        }
        record
    }

    #[test]
    fn test_empty_dataset_rate_is_zero() {
        let tally = ExperimentTally::new(0);
        assert_eq!(tally.success_rate(), 0.0);
        assert_eq!(tally.success_percentage(), 0.0);
    }

    #[test]
    fn test_skipped_items_count_in_denominator() {
        let mut tally = ExperimentTally::new(5);
        for (i, produced) in [Some("1"), Some("1"), Some("1"), Some("1"), None]
            .into_iter()
            .enumerate()
        {
            tally.record(&finished(i + 1, produced));
        }
        assert_eq!(tally.success_count, 4);
        assert_eq!(tally.skipped_count, 1);
        assert_eq!(tally.success_rate(), 0.8);
        assert_eq!(tally.success_percentage(), 80.0);
    }

    #[test]
    fn test_misses_lower_the_rate() {
        let mut tally = ExperimentTally::new(2);
        tally.record(&finished(1, Some("1")));
        tally.record(&finished(2, Some("2")));
        assert_eq!(tally.success_rate(), 0.5);
        assert_eq!(tally.skipped_count, 0);
    }
}
