//! Build Result

use std::path::PathBuf;

use crate::domain::services::MergeReport;
use crate::domain::value_objects::{Layout, TreeDigest};

/// How one package's content root was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDecision {
    pub name: String,
    pub target: String,
    pub layout: Layout,
    pub content_root: PathBuf,
}

/// Result of a successful build
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub output_dir: PathBuf,
    /// In merge order
    pub packages: Vec<PackageDecision>,
    pub report: MergeReport,
    pub digest: TreeDigest,
}

impl BuildResult {
    pub fn layer_count(&self) -> usize {
        self.report.layers.len()
    }

    pub fn file_count(&self) -> usize {
        self.report.file_count()
    }
}
