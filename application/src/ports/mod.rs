//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod dataset;
pub mod llm_gateway;
pub mod progress;
pub mod report_store;
pub mod trace_recorder;
