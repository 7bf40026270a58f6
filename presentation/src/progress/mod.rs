//! Experiment progress display

pub mod reporter;
