//! Application Layer
//!
//! Use cases that sequence domain services and infrastructure.

pub mod build;

pub use build::{BuildError, BuildOptions, BuildResult, BuildUseCase, PackageDecision, StalePolicy};
