//! Port for structured pipeline traces.
//!
//! Defines the [`TraceRecorder`] trait for recording what each pipeline run
//! did (classification, customization, failure) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable record per run (JSONL) that can be replayed or shipped to
//! an observability backend.

use serde_json::Value;

/// A structured trace event.
pub struct TraceEvent {
    /// Name of the trace the event belongs to (e.g. "Pet Food Customer Service").
    pub trace_name: &'static str,
    /// Event type identifier (e.g. "classification", "pipeline_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TraceEvent {
    pub fn new(trace_name: &'static str, event_type: &'static str, payload: Value) -> Self {
        Self {
            trace_name,
            event_type,
            payload,
        }
    }
}

/// Port for recording trace events.
///
/// `record` is synchronous and non-fallible so tracing can never disturb the
/// pipeline; adapters swallow their own write failures.
pub trait TraceRecorder: Send + Sync {
    fn record(&self, event: TraceEvent);
}

/// No-op implementation for tests and when tracing is disabled.
pub struct NoTraceRecorder;

impl TraceRecorder for NoTraceRecorder {
    fn record(&self, _event: TraceEvent) {}
}
