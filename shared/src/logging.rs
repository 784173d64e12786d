//! Tracing utilities shared by the monitor binary and its test suites

use std::sync::{Arc, Mutex};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;

/// Initialize the stdout tracing subscriber with an optional log level.
///
/// Filters to the workspace crates and keeps reqwest's own chatter at warn.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let base_level = log_level.unwrap_or("info");
    let filter = format!("monitor={base_level},shared={base_level},reqwest=warn");

    fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// A single captured log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Handle to the records collected by a [`CaptureLayer`].
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl LogCapture {
    /// Snapshot of all records captured so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().map(|records| records.clone()).unwrap_or_default()
    }

    /// Whether any captured record at `level` contains `fragment`.
    pub fn contains(&self, level: Level, fragment: &str) -> bool {
        self.count(level, fragment) > 0
    }

    /// Number of captured records at `level` containing `fragment`.
    pub fn count(&self, level: Level, fragment: &str) -> usize {
        self.records()
            .iter()
            .filter(|record| record.level == level && record.message.contains(fragment))
            .count()
    }

    fn push(&self, record: LogRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

/// Tracing layer that collects events in memory so tests can assert on the
/// log output of a processing pass.
pub struct CaptureLayer {
    capture: LogCapture,
}

impl CaptureLayer {
    /// Create a layer together with the handle used to read captured records.
    pub fn new() -> (Self, LogCapture) {
        let capture = LogCapture::default();
        (
            Self {
                capture: capture.clone(),
            },
            capture,
        )
    }
}

impl<S> tracing_subscriber::Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut message = String::new();

        let mut visitor = MessageVisitor {
            message: &mut message,
        };
        event.record(&mut visitor);

        self.capture.push(LogRecord {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message,
        });
    }
}

/// Visitor that extracts the event message field.
struct MessageVisitor<'a> {
    message: &'a mut String,
}

impl<'a> tracing::field::Visit for MessageVisitor<'a> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message.push_str(&format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        }
    }
}
