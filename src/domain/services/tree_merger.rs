//! Tree merger
//!
//! Overlays the layer directories of several content roots into one
//! destination tree:
//! - Sources are applied strictly in the order given
//! - Only recognised layer directories are copied; everything else is ignored
//! - Same relative path in two sources: the later source wins (whole file)

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::value_objects::LayerName;

/// One content root to overlay, labelled with the package it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSource {
    pub package: String,
    pub content_root: PathBuf,
}

impl MergeSource {
    pub fn new(package: impl Into<String>, content_root: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            content_root: content_root.into(),
        }
    }
}

/// Files a package contributed to a single layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerContribution {
    pub package: String,
    pub layer: LayerName,
    pub file_count: usize,
}

/// A file written by one package and then replaced by a later one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideInfo {
    /// Path relative to the merge destination
    pub path: PathBuf,
    pub from_package: String,
    pub by_package: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Relative path → package whose copy ended up in the destination
    pub files: BTreeMap<PathBuf, String>,
    pub layers: BTreeSet<LayerName>,
    pub contributions: Vec<LayerContribution>,
    pub overrides: Vec<OverrideInfo>,
}

impl MergeReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("failed to read content of package '{package}' at {path}")]
    ReadSource {
        package: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk layer of package '{package}' at {path}")]
    Walk {
        package: String,
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {from} (package '{package}') to {to}")]
    Copy {
        package: String,
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path collision while merging package '{package}': {path} {reason}")]
    Collision {
        package: String,
        path: PathBuf,
        reason: &'static str,
    },
}

/// Overlay every source's layers onto `destination`, in order.
///
/// Existing directories under `destination` are reused and nothing is ever
/// deleted apart from files being replaced. The first error aborts the merge
/// and may leave partial output behind.
pub fn merge(sources: &[MergeSource], destination: &Path) -> Result<MergeReport, MergeError> {
    fs::create_dir_all(destination).map_err(|source| MergeError::CreateDir {
        path: destination.to_path_buf(),
        source,
    })?;

    let mut report = MergeReport::default();

    for source in sources {
        for (layer, layer_dir) in layer_dirs(source)? {
            let file_count = overlay_layer(source, layer, &layer_dir, destination, &mut report)?;
            report.layers.insert(layer);
            report.contributions.push(LayerContribution {
                package: source.package.clone(),
                layer,
                file_count,
            });
        }
    }

    Ok(report)
}

/// Layer directories directly under a content root, in catalog order
fn layer_dirs(source: &MergeSource) -> Result<Vec<(LayerName, PathBuf)>, MergeError> {
    let read_error = |source_err: io::Error| MergeError::ReadSource {
        package: source.package.clone(),
        path: source.content_root.clone(),
        source: source_err,
    };

    let mut layers = Vec::new();
    for entry in fs::read_dir(&source.content_root).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let Some(layer) = entry.file_name().to_str().and_then(LayerName::from_dir_name) else {
            continue;
        };
        // Follows symlinks so a linked layer directory still counts.
        if entry.path().is_dir() {
            layers.push((layer, entry.path()));
        }
    }

    layers.sort_by_key(|(layer, _)| *layer);
    Ok(layers)
}

fn overlay_layer(
    source: &MergeSource,
    layer: LayerName,
    layer_dir: &Path,
    destination: &Path,
    report: &mut MergeReport,
) -> Result<usize, MergeError> {
    let dest_layer = destination.join(layer.as_str());
    ensure_dir(&dest_layer, &source.package)?;

    let mut file_count = 0;
    for entry in WalkDir::new(layer_dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| MergeError::Walk {
            package: source.package.clone(),
            path: e.path().unwrap_or(layer_dir).to_path_buf(),
            source: e,
        })?;

        let Ok(relative) = entry.path().strip_prefix(layer_dir) else {
            continue;
        };
        let target = dest_layer.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&target, &source.package)?;
            continue;
        }

        copy_file(&source.package, entry.path(), &target)?;
        file_count += 1;

        let key = Path::new(layer.as_str()).join(relative);
        if let Some(previous) = report.files.insert(key.clone(), source.package.clone()) {
            report.overrides.push(OverrideInfo {
                path: key,
                from_package: previous,
                by_package: source.package.clone(),
            });
        }
    }

    Ok(file_count)
}

fn ensure_dir(path: &Path, package: &str) -> Result<(), MergeError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(MergeError::Collision {
            package: package.to_string(),
            path: path.to_path_buf(),
            reason: "exists as a file where a directory is required",
        }),
        Err(_) => fs::create_dir_all(path).map_err(|source| MergeError::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn copy_file(package: &str, from: &Path, to: &Path) -> Result<(), MergeError> {
    let copy_error = |source: io::Error| MergeError::Copy {
        package: package.to_string(),
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    match fs::symlink_metadata(to) {
        Ok(meta) if meta.is_dir() => {
            return Err(MergeError::Collision {
                package: package.to_string(),
                path: to.to_path_buf(),
                reason: "exists as a directory where a file is required",
            });
        }
        // Replace rather than write through: the old copy may be read-only
        // or a symlink into a source tree.
        Ok(_) => fs::remove_file(to).map_err(copy_error)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(copy_error(e)),
    }

    fs::copy(from, to).map_err(copy_error)?;
    Ok(())
}
