//! Build Event Port
//!
//! Observable interface for compose builds. The per-package layout decision
//! is reported here and nowhere else.

use std::path::PathBuf;

use crate::domain::value_objects::{LayerName, Layout};

/// Event emitted during a build
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Build started
    Started {
        packages_root: PathBuf,
        output: PathBuf,
        package_count: usize,
    },

    /// A package's content root was resolved
    PackageResolved {
        name: String,
        target: String,
        layout: Layout,
        content_root: PathBuf,
    },

    /// A package contributed files to a layer
    LayerMerged {
        package: String,
        layer: LayerName,
        file_count: usize,
    },

    /// A later package replaced a file written by an earlier one
    FileOverridden {
        path: PathBuf,
        from_package: String,
        by_package: String,
    },

    /// Build completed successfully
    Completed {
        layer_count: usize,
        file_count: usize,
        override_count: usize,
        digest: String,
    },
}

/// Trait for receiving build events
///
/// Implementations:
/// - TracingEventSink: log lines through `tracing`
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BuildEventSink: Send + Sync {
    fn on_event(&self, event: BuildEvent);

    /// Whether this sink wants per-layer and per-override events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
