//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for CI/automation
//! - TracingEventSink: log records through `tracing`

mod json;
mod tracing_sink;

pub use json::JsonEventSink;
pub use tracing_sink::TracingEventSink;
