//! Local filesystem dataset store
//!
//! Datasets live as JSON arrays under one directory:
//!
//! ```text
//! <datasets_dir>/
//!   pet_food_known_answers.json          # [{ "input": {...}, "expected_output": {...} }, ...]
//!   pet_food_known_answers.scores.jsonl  # one score record per line, appended
//! ```

use async_trait::async_trait;
use petdesk_application::{DatasetError, DatasetPort, ScoreRecord};
use petdesk_domain::DatasetItem;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

/// [`DatasetPort`] backed by JSON files in a directory.
pub struct LocalDatasetStore {
    dir: PathBuf,
    // serializes appends to the score logs
    write_lock: Mutex<()>,
}

impl LocalDatasetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dataset_path(&self, dataset_name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", dataset_name))
    }

    pub fn scores_path(&self, dataset_name: &str) -> PathBuf {
        self.dir.join(format!("{}.scores.jsonl", dataset_name))
    }

    fn parse_items(dataset_name: &str, content: &str) -> Result<Vec<DatasetItem>, DatasetError> {
        let mut items: Vec<DatasetItem> =
            serde_json::from_str(content).map_err(|e| DatasetError::Malformed {
                name: dataset_name.to_string(),
                reason: e.to_string(),
            })?;

        for (index, item) in items.iter_mut().enumerate() {
            if item.id.trim().is_empty() {
                item.id = format!("item-{}", index + 1);
            }
        }
        Ok(items)
    }
}

#[async_trait]
impl DatasetPort for LocalDatasetStore {
    async fn fetch(&self, dataset_name: &str) -> Result<Vec<DatasetItem>, DatasetError> {
        let path = self.dataset_path(dataset_name);
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DatasetError::NotFound(path.display().to_string())
            } else {
                DatasetError::Io(e)
            }
        })?;

        let items = Self::parse_items(dataset_name, &content)?;
        debug!("Loaded {} items from {}", items.len(), path.display());
        Ok(items)
    }

    async fn attach_score(&self, score: &ScoreRecord) -> Result<(), DatasetError> {
        let mut record = serde_json::to_value(score)
            .map_err(|e| DatasetError::ScoreNotRecorded(e.to_string()))?;
        if let serde_json::Value::Object(map) = &mut record {
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        let line = format!("{}\n", record);

        let path = self.scores_path(&score.dataset_name);
        let _guard = self.write_lock.lock().await;
        append_line(&path, &line).await?;
        Ok(())
    }
}

async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use petdesk_domain::CanonicalId;

    const DATASET: &str = r#"[
        {"id": "q-1", "input": {"question": "Where is my order?"},
         "expected_output": {"prepared_answer_id": 1}},
        {"input": {"question": "Refund please", "locale": "en"},
         "expected_output": {"prepared_answer_id": "02"}},
        {"input": {"question": "Grain free?"},
         "expected_output": {"prepared_answer_id": "A3"}}
    ]"#;

    #[tokio::test]
    async fn test_fetch_assigns_missing_ids_and_normalizes_labels() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("known.json"), DATASET).unwrap();
        let store = LocalDatasetStore::new(dir.path());

        let items = store.fetch("known").await.unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "q-1");
        assert_eq!(items[1].id, "item-2");
        assert_eq!(items[2].id, "item-3");
        assert_eq!(items[1].expected_answer_id(), &CanonicalId::Numeric(2));
        assert_eq!(items[2].expected_answer_id(), &CanonicalId::parse("A3"));
        assert_eq!(items[1].question(), "Refund please");
    }

    #[tokio::test]
    async fn test_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDatasetStore::new(dir.path());
        let err = store.fetch("absent").await.unwrap_err();
        assert!(matches!(err, DatasetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_dataset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), r#"{"not": "an array"}"#).unwrap();
        let store = LocalDatasetStore::new(dir.path());
        let err = store.fetch("bad").await.unwrap_err();
        assert!(matches!(err, DatasetError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_attach_score_appends_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDatasetStore::new(dir.path().join("nested"));

        for (item_id, value) in [("item-1", 1.0), ("item-2", 0.0)] {
            store
                .attach_score(&ScoreRecord {
                    dataset_name: "known".to_string(),
                    item_id: item_id.to_string(),
                    run_name: "nightly".to_string(),
                    name: "prepared_answer_id".to_string(),
                    value,
                })
                .await
                .unwrap();
        }

        let content = std::fs::read_to_string(store.scores_path("known")).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["item_id"], "item-1");
        assert_eq!(lines[1]["value"], 0.0);
        assert_eq!(lines[0]["run_name"], "nightly");
        assert!(lines[0]["timestamp"].is_string());
    }
}
