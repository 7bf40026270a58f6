//! Use cases (application services)
//!
//! - [`classify_intent`]: question → catalog intent (fail-fast)
//! - [`customize_answer`]: intent → personalized canned answer (degrades in place)
//! - [`run_pipeline`]: both stages for one question
//! - [`run_experiment`]: replay a labeled dataset and gate the success rate

pub mod classify_intent;
pub mod customize_answer;
pub mod run_experiment;
pub mod run_pipeline;
mod shared;

#[cfg(test)]
mod testing;
