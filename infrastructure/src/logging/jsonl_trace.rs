//! JSONL file writer for pipeline trace events.
//!
//! Each [`TraceEvent`] is serialized as a single JSON line carrying `trace`,
//! `type` and `timestamp` fields, appended to the file via a buffered writer.
//! The file is opened in append mode so traces from successive runs
//! accumulate.

use petdesk_application::{TraceEvent, TraceRecorder};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL trace recorder that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlTraceRecorder {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlTraceRecorder {
    /// Open (or create) the trace log at the given path.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create trace log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open trace log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TraceRecorder for JsonlTraceRecorder {
    fn record(&self, event: TraceEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "trace".to_string(),
                serde_json::Value::String(event.trace_name.to_string()),
            );
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "trace": event.trace_name,
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlTraceRecorder {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petdesk_application::TRACE_NAME;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".petdesk").join("traces.jsonl");
        let recorder = JsonlTraceRecorder::new(&path).unwrap();

        recorder.record(TraceEvent::new(
            TRACE_NAME,
            "classification",
            serde_json::json!({ "intent_id": "1", "confidence": 0.9 }),
        ));
        recorder.record(TraceEvent::new(
            TRACE_NAME,
            "pipeline_completed",
            serde_json::json!({ "prepared_answer_id": "1" }),
        ));
        drop(recorder);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["trace"], "Pet Food Customer Service");
        assert_eq!(lines[0]["type"], "classification");
        assert_eq!(lines[0]["intent_id"], "1");
        assert!(lines[0]["timestamp"].is_string());
        assert_eq!(lines[1]["type"], "pipeline_completed");
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.jsonl");
        let recorder = JsonlTraceRecorder::new(&path).unwrap();

        recorder.record(TraceEvent::new(
            TRACE_NAME,
            "note",
            serde_json::json!("just a string"),
        ));
        drop(recorder);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.jsonl");

        for _ in 0..2 {
            let recorder = JsonlTraceRecorder::new(&path).unwrap();
            recorder.record(TraceEvent::new(TRACE_NAME, "pipeline_failed", serde_json::json!({})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }
}
