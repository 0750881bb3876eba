//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let json = match event {
            BuildEvent::Started {
                packages_root,
                output,
                package_count,
            } => serde_json::json!({
                "event": "start",
                "command": "build",
                "packages_root": packages_root.display().to_string(),
                "output": output.display().to_string(),
                "package_count": package_count,
            }),

            BuildEvent::PackageResolved {
                name,
                target,
                layout,
                content_root,
            } => serde_json::json!({
                "event": "package_resolved",
                "command": "build",
                "package": name,
                "target": target,
                "layout": layout,
                "content_root": content_root.display().to_string(),
            }),

            BuildEvent::LayerMerged {
                package,
                layer,
                file_count,
            } => serde_json::json!({
                "event": "layer_merged",
                "command": "build",
                "package": package,
                "layer": layer,
                "files": file_count,
            }),

            BuildEvent::FileOverridden {
                path,
                from_package,
                by_package,
            } => serde_json::json!({
                "event": "file_overridden",
                "command": "build",
                "path": path.display().to_string(),
                "from": from_package,
                "by": by_package,
            }),

            BuildEvent::Completed {
                layer_count,
                file_count,
                override_count,
                digest,
            } => serde_json::json!({
                "event": "complete",
                "command": "build",
                "status": "success",
                "layers": layer_count,
                "files": file_count,
                "overrides": override_count,
                "digest": digest,
            }),
        };

        self.write_event(json);
    }
}
