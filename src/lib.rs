//! plasma-compose - package composition builder
//!
//! Merges the layer directories (platform, interaction, integration,
//! cognition, conversation, stabilization, foundation) of independently
//! downloaded packages into one composed image tree. Packages may keep their
//! layers at the package root or under `src/`; each is detected per package.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildError, BuildOptions, BuildResult, BuildUseCase, PackageDecision, StalePolicy};
pub use config::Config;
pub use domain::entities::{Package, PackageSelection, PackageSelections};
pub use domain::services::{merge, resolve_content_root, MergeSource, PackageEnumerator};
pub use domain::value_objects::{ContentRoot, LayerName, Layout};
pub use error::{ComposeError, ComposeResult};
