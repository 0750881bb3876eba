//! Presentation Layer
//!
//! - `cli` - Argument parsing (clap)
//! - `factory` - Use case construction with infrastructure dependencies
//! - `output` - Text rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::create_build_use_case;
