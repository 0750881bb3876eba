//! Content root value object
//!
//! The path inside a package that actually holds layer directories, together
//! with the layout that produced it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// On-disk layout of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Layer directories live at the package root
    Legacy,
    /// Layer directories live under `<package root>/src`
    Modern,
}

impl Layout {
    pub fn is_modern(&self) -> bool {
        matches!(self, Layout::Modern)
    }

    /// Human-readable description of where layers are read from
    pub fn describe(&self) -> &'static str {
        match self {
            Layout::Legacy => "legacy layout (reading from root)",
            Layout::Modern => "modern layout (reading from src/)",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Layout::Legacy => "legacy",
            Layout::Modern => "modern",
        })
    }
}

/// Resolved content root of a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRoot {
    path: PathBuf,
    layout: Layout,
}

impl ContentRoot {
    pub fn legacy(package_root: impl Into<PathBuf>) -> Self {
        Self {
            path: package_root.into(),
            layout: Layout::Legacy,
        }
    }

    pub fn modern(src_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: src_dir.into(),
            layout: Layout::Modern,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
