//! Catalog file locations from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// JSON object file: intent id → description
    pub intents: PathBuf,
    /// JSON object file: prepared-answer id → canned text
    pub answers: PathBuf,
    /// Treat intents without a prepared answer as a startup error
    pub strict: bool,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            intents: PathBuf::from("example_data/intents_pet_food.json"),
            answers: PathBuf::from("example_data/prepared_answers_pet_food.json"),
            strict: false,
        }
    }
}
