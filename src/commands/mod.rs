//! Command handlers

pub mod build;
pub mod inspect;
pub mod layers;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use plasma_compose::config::{self, Config};
use plasma_compose::{PackageSelection, PackageSelections};

/// Project root, configuration and effective package selections
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
    pub selections: PackageSelections,
}

impl ProjectContext {
    /// Load `compose.toml` (if any) and overlay command-line selections
    pub fn load(project_root: Option<&Path>, overrides: Vec<PackageSelection>) -> Result<Self> {
        let root = match project_root {
            Some(root) => root.to_path_buf(),
            None => {
                let cwd = std::env::current_dir().context("Failed to read current directory")?;
                config::discover_project_root(&cwd)
            }
        };

        let (config, warnings) = config::load_project(&root)
            .with_context(|| format!("Failed to load configuration for {}", root.display()))?;
        for warning in &warnings {
            warn!("{}", warning);
        }

        let mut selections = config.packages.clone();
        selections.extend(overrides.into_iter().collect());

        Ok(Self {
            root,
            config,
            selections,
        })
    }
}
