//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and the file system plumbing
//! around the output tree.
//!
//! - `events/` - Build event sinks (tracing, NDJSON)
//! - `fs/` - Build lock, staged output directory, tree digest

pub mod events;
pub mod fs;

pub use events::{JsonEventSink, TracingEventSink};
pub use fs::{digest_tree, BuildLock, StagedDir};
