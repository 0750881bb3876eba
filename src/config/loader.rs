//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ComposeError, ComposeResult};

use super::types::{Config, CONFIG_FILE_NAME};

pub const ENV_PACKAGES_DIR: &str = "PLASMA_COMPOSE_PACKAGES_DIR";
pub const ENV_OUTPUT_DIR: &str = "PLASMA_COMPOSE_OUTPUT_DIR";
pub const ENV_CLEAN: &str = "PLASMA_COMPOSE_CLEAN";

/// Non-fatal configuration warning (unknown key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown config key '{}' in {}:{}",
                self.key,
                self.file.display(),
                line
            ),
            None => write!(f, "unknown config key '{}' in {}", self.key, self.file.display()),
        }
    }
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> ComposeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> ComposeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ComposeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `<project_root>/compose.toml` if present, then apply environment
/// overrides. A missing file yields the defaults.
pub fn load_project(project_root: &Path) -> ComposeResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };

    let config = with_env_overrides(config)?;
    Ok((config, warnings))
}

/// Apply `PLASMA_COMPOSE_*` environment overrides
pub fn with_env_overrides(config: Config) -> ComposeResult<Config> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> ComposeResult<Config> {
    if let Some(dir) = lookup(ENV_PACKAGES_DIR).filter(|v| !v.is_empty()) {
        config.build.packages_dir = PathBuf::from(dir);
    }

    if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.is_empty()) {
        config.build.output_dir = PathBuf::from(dir);
    }

    if let Some(val) = lookup(ENV_CLEAN) {
        config.build.clean = match val.to_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" => false,
            _ => {
                return Err(ComposeError::InvalidEnv {
                    key: ENV_CLEAN.to_string(),
                    value: val,
                })
            }
        };
    }

    Ok(config)
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let trimmed = line.trim_start();
            trimmed
                .strip_prefix(key)
                .map(|rest| rest.trim_start().starts_with('='))
                .unwrap_or(false)
        })
        .map(|idx| idx + 1)
}

/// Find the project root by walking up from `start`.
///
/// First match wins:
/// - `compose.toml`
/// - `.compose/` (package cache)
/// - `.git/` or `.git` file
///
/// Falls back to `start` when no markers are found.
pub fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(CONFIG_FILE_NAME).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".compose").is_dir() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

#[cfg(test)]
pub(super) fn parse_for_tests(content: &str) -> ComposeResult<(Config, Vec<ConfigWarning>)> {
    parse_with_warnings(content, Path::new(CONFIG_FILE_NAME))
}

#[cfg(test)]
pub(super) fn apply_overrides_for_tests(
    config: Config,
    vars: &[(&str, &str)],
) -> ComposeResult<Config> {
    apply_overrides(config, |key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
}
