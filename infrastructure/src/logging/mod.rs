//! Logging infrastructure: structured pipeline traces.
//!
//! Provides [`JsonlTraceRecorder`], a JSONL file writer that implements
//! the [`TraceRecorder`](petdesk_application::TraceRecorder) port.

mod jsonl_trace;

pub use jsonl_trace::JsonlTraceRecorder;
