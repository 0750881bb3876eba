//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
