//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("The {0} catalog is empty")]
    EmptyCatalog(&'static str),

    #[error("The {0} catalog contains a blank id")]
    BlankCatalogId(&'static str),

    #[error("Success threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
}

impl DomainError {
    /// Check if this error comes from catalog construction
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyCatalog(_) | DomainError::BlankCatalogId(_)
        )
    }
}
