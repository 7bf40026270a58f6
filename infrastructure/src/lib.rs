//! Infrastructure layer for petdesk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod providers;
pub mod reports;

// Re-export commonly used types
pub use catalog::{CatalogError, CatalogLoader};
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use dataset::LocalDatasetStore;
pub use logging::JsonlTraceRecorder;
pub use providers::OpenAiGateway;
pub use reports::JsonReportStore;
