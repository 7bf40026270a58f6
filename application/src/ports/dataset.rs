//! Dataset port
//!
//! Source of labeled evaluation items, plus the hook that attaches a named
//! numeric score to one item's execution record.

use async_trait::async_trait;
use petdesk_domain::DatasetItem;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by dataset adapters
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset '{0}' not found")]
    NotFound(String),

    #[error("Dataset '{name}' is malformed: {reason}")]
    Malformed { name: String, reason: String },

    #[error("Failed to record score: {0}")]
    ScoreNotRecorded(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A score attached to one item's execution within a named run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub dataset_name: String,
    pub item_id: String,
    pub run_name: String,
    pub name: String,
    pub value: f64,
}

/// Port for labeled datasets
#[async_trait]
pub trait DatasetPort: Send + Sync {
    /// Fetch every item of the dataset, in order
    async fn fetch(&self, dataset_name: &str) -> Result<Vec<DatasetItem>, DatasetError>;

    /// Attach a score to an item's execution record
    async fn attach_score(&self, score: &ScoreRecord) -> Result<(), DatasetError>;
}
