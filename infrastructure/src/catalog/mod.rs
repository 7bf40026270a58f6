//! Catalog file loading
//!
//! Intent and prepared-answer catalogs are flat JSON objects mapping an id to
//! a string:
//!
//! ```json
//! { "1": "Shipping delay", "2": "Refund request" }
//! ```

use petdesk_domain::{AnswerCatalog, DomainError, IntentCatalog};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON format in {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid catalog {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Loads catalogs from JSON files
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load_intents(path: &Path) -> Result<IntentCatalog, CatalogError> {
        let pairs = Self::read_pairs(path)?;
        let catalog = IntentCatalog::from_pairs(pairs).map_err(|source| CatalogError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded {} intents from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn load_answers(path: &Path) -> Result<AnswerCatalog, CatalogError> {
        let pairs = Self::read_pairs(path)?;
        let catalog = AnswerCatalog::from_pairs(pairs).map_err(|source| CatalogError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded {} prepared answers from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn read_pairs(path: &Path) -> Result<Vec<(String, String)>, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound(path.to_path_buf())
            } else {
                CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::parse_pairs(path, &content)
    }

    fn parse_pairs(path: &Path, content: &str) -> Result<Vec<(String, String)>, CatalogError> {
        let parse_error = |reason: String| CatalogError::Parse {
            path: path.to_path_buf(),
            reason,
        };

        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        let serde_json::Value::Object(map) = value else {
            return Err(parse_error("expected a JSON object of id → text".to_string()));
        };

        map.into_iter()
            .map(|(id, text)| match text {
                serde_json::Value::String(text) => Ok((id, text)),
                other => Err(parse_error(format!(
                    "value for id '{}' must be a string, got {}",
                    id, other
                ))),
            })
            .collect()
    }
}
