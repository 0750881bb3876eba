//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::PackageSelections;
use crate::error::ComposeResult;

use super::loader::{self, ConfigWarning};

/// Default package cache location, relative to the project root
pub const DEFAULT_PACKAGES_DIR: &str = ".compose/packages";

/// Canonical output location, relative to the project root
pub const DEFAULT_OUTPUT_DIR: &str = ".plasma/compose/image/src";

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "compose.toml";

/// `[build]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_packages_dir")]
    pub packages_dir: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Start every build from an empty output tree
    #[serde(default = "default_true")]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            packages_dir: default_packages_dir(),
            output_dir: default_output_dir(),
            clean: true,
        }
    }
}

fn default_packages_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PACKAGES_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_true() -> bool {
    true
}

/// Contents of `compose.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Package name → resolved target
    #[serde(default)]
    pub packages: PackageSelections,

    #[serde(default)]
    pub build: BuildConfig,
}

impl Config {
    /// Load configuration from a TOML file, dropping unknown-key warnings
    pub fn load(path: &Path) -> ComposeResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings
    pub fn load_with_warnings(path: &Path) -> ComposeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Packages directory, resolved against `project_root` when relative
    pub fn packages_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.build.packages_dir)
    }

    /// Output directory, resolved against `project_root` when relative
    pub fn output_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.build.output_dir)
    }
}
