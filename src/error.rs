//! Error types for plasma-compose
//!
//! Each component reports its own `thiserror` enum; `ComposeError` is the
//! umbrella the binary sees.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::build::BuildError;

/// Result type alias for plasma-compose operations
pub type ComposeResult<T> = Result<T, ComposeError>;

#[derive(Error, Debug)]
pub enum ComposeError {
    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Environment override has an unusable value
    #[error("invalid value '{value}' for {key}")]
    InvalidEnv { key: String, value: String },

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}
