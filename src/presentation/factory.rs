//! Use Case Factory
//!
//! Wires the build use case to its event sink.

use std::sync::Arc;

use crate::application::build::{BuildOptions, BuildUseCase};
use crate::domain::ports::BuildEventSink;
use crate::infrastructure::events::{JsonEventSink, TracingEventSink};

/// Create a build use case reporting through NDJSON (`json`) or `tracing`
pub fn create_build_use_case(options: BuildOptions, json: bool) -> BuildUseCase {
    let events: Arc<dyn BuildEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(TracingEventSink)
    };
    BuildUseCase::new(options).with_events(events)
}
