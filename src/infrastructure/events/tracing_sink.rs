//! Tracing Event Sink
//!
//! Default human-facing diagnostics: build events become `tracing` records,
//! rendered by whatever subscriber the binary installed.

use tracing::{debug, info};

use crate::domain::ports::{BuildEvent, BuildEventSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl BuildEventSink for TracingEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Started {
                packages_root,
                output,
                package_count,
            } => info!(
                packages_root = %packages_root.display(),
                output = %output.display(),
                "composing {} package(s)",
                package_count
            ),
            BuildEvent::PackageResolved {
                name,
                target,
                layout,
                content_root,
            } => info!(
                selector = %target,
                content_root = %content_root.display(),
                "{}: {}",
                name,
                layout.describe()
            ),
            BuildEvent::LayerMerged {
                package,
                layer,
                file_count,
            } => debug!(package = %package, layer = %layer, files = file_count, "layer merged"),
            BuildEvent::FileOverridden {
                path,
                from_package,
                by_package,
            } => debug!(
                path = %path.display(),
                from = %from_package,
                by = %by_package,
                "file overridden by later package"
            ),
            BuildEvent::Completed {
                layer_count,
                file_count,
                override_count,
                digest,
            } => info!(
                layers = layer_count,
                files = file_count,
                overrides = override_count,
                digest = %digest,
                "compose build complete"
            ),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }
}
