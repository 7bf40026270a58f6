//! Configuration file loading for petdesk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EXPERIMENT_NAME` / `SUCCESS_THRESHOLD` environment variables
//! 2. `PETDESK_*` environment variables (e.g. `PETDESK_EXPERIMENT__CONCURRENCY`)
//! 3. `--config <path>` specified file
//! 4. Project root: `./petdesk.toml` or `./.petdesk.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/petdesk/config.toml`
//! 6. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileCatalogConfig, FileConfig, FileExperimentConfig, FileGenerationConfig, FileModelsConfig,
    FileOpenAiConfig, FileOutputConfig, FileProvidersConfig,
};
pub use loader::ConfigLoader;
