//! Configuration module for plasma-compose
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PLASMA_COMPOSE_*)
//! 3. Project config (`compose.toml` at the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    discover_project_root, load_project, load_with_warnings, with_env_overrides, ConfigWarning,
    ENV_CLEAN, ENV_OUTPUT_DIR, ENV_PACKAGES_DIR,
};
pub use types::{BuildConfig, Config, CONFIG_FILE_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_PACKAGES_DIR};
