//! Build Module
//!
//! Drives a compose build end to end.
//!
//! ## Structure
//!
//! - `options` - `BuildOptions`, `StalePolicy`
//! - `result` - `BuildResult`, `PackageDecision`
//! - `use_case` - `BuildUseCase` and `BuildError`
//!
//! ## Usage
//!
//! ```ignore
//! use plasma_compose::application::build::{BuildOptions, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(BuildOptions::new(packages_root, output_dir));
//! let result = use_case.build(&selections)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{BuildOptions, StalePolicy};
pub use result::{BuildResult, PackageDecision};
pub use use_case::{BuildError, BuildUseCase};
