//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`GenerationParams`]: models and generation knobs for each pipeline stage
//! - [`ExperimentParams`]: which dataset to replay and how to judge the result

pub mod experiment_params;
pub mod generation_params;

pub use experiment_params::ExperimentParams;
pub use generation_params::GenerationParams;
