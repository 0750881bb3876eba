//! Build Options

use std::path::PathBuf;

use crate::config::Config;

/// What happens to output left over from a previous build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Build a fresh tree in a staging directory and swap it in on success.
    /// Files and layers no longer provided by any package disappear.
    #[default]
    Clean,
    /// Overlay onto the existing output in place; never delete anything.
    MergeOnly,
}

/// Options for the build use case
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Package cache root (`<root>/<name>/<target>`)
    pub packages_root: PathBuf,
    /// Merge target
    pub output_dir: PathBuf,
    pub stale_policy: StalePolicy,
}

impl BuildOptions {
    pub fn new(packages_root: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            packages_root: packages_root.into(),
            output_dir: output_dir.into(),
            stale_policy: StalePolicy::default(),
        }
    }

    /// Options for a project, from its loaded configuration
    pub fn from_config(config: &Config, project_root: &std::path::Path) -> Self {
        Self::new(config.packages_dir(project_root), config.output_dir(project_root))
            .with_stale_policy(if config.build.clean {
                StalePolicy::Clean
            } else {
                StalePolicy::MergeOnly
            })
    }

    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }
}
