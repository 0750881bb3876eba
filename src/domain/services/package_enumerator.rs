//! Package enumerator
//!
//! Turns package selections into an ordered list of packages located in the
//! package cache. The cache layout is `<packages root>/<name>/<target>`.
//! Downloading into the cache is done elsewhere; this only joins paths and
//! checks that the result exists.

use std::path::{Path, PathBuf};

use crate::domain::entities::{Package, PackageSelections};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("package '{name}' at target '{target}' not found in cache: {path}\n  → Fix: download the package before building")]
    PackageNotFound {
        name: String,
        target: String,
        path: PathBuf,
    },

    #[error("package '{name}' at target '{target}' is not a directory: {path}")]
    NotADirectory {
        name: String,
        target: String,
        path: PathBuf,
    },

    #[error("invalid package selection '{name}={target}': {reason}")]
    InvalidSelection {
        name: String,
        target: String,
        reason: String,
    },
}

/// Resolves selected packages against a package cache directory
#[derive(Debug, Clone)]
pub struct PackageEnumerator {
    packages_root: PathBuf,
}

impl PackageEnumerator {
    pub fn new(packages_root: impl Into<PathBuf>) -> Self {
        Self {
            packages_root: packages_root.into(),
        }
    }

    /// Cache location of `name` at `target`, without checking existence
    pub fn package_root(&self, name: &str, target: &str) -> PathBuf {
        self.packages_root.join(name).join(target)
    }

    /// Enumerate selected packages in lexicographic name order.
    ///
    /// Fails on the first selection that is malformed or missing from the
    /// cache.
    pub fn enumerate(&self, selections: &PackageSelections) -> Result<Vec<Package>, ResolveError> {
        selections
            .iter()
            .map(|(name, target)| self.resolve(name, target))
            .collect()
    }

    fn resolve(&self, name: &str, target: &str) -> Result<Package, ResolveError> {
        validate_segment(name, target, name)?;
        validate_segment(name, target, target)?;

        let path = self.package_root(name, target);
        let meta = std::fs::metadata(&path).map_err(|_| ResolveError::PackageNotFound {
            name: name.to_string(),
            target: target.to_string(),
            path: path.clone(),
        })?;

        if !meta.is_dir() {
            return Err(ResolveError::NotADirectory {
                name: name.to_string(),
                target: target.to_string(),
                path,
            });
        }

        Ok(Package::new(name, target, path))
    }
}

/// Names and targets are single path components inside the cache
fn validate_segment(name: &str, target: &str, segment: &str) -> Result<(), ResolveError> {
    let reason = if segment.is_empty() {
        Some("empty path component")
    } else if segment == "." || segment == ".." {
        Some("relative path component")
    } else if segment.contains('/') || segment.contains('\\') {
        Some("contains a path separator")
    } else if Path::new(segment).is_absolute() {
        Some("absolute path")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ResolveError::InvalidSelection {
            name: name.to_string(),
            target: target.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn selections(pairs: &[(&str, &str)]) -> PackageSelections {
        pairs.iter().copied().collect()
    }

    #[test]
    fn enumerate_sorts_by_name() {
        let dir = tempdir().unwrap();
        for (name, target) in [("zeta", "v1"), ("alpha", "main"), ("mid", "v2")] {
            fs::create_dir_all(dir.path().join(name).join(target)).unwrap();
        }
        let enumerator = PackageEnumerator::new(dir.path());

        let packages = enumerator
            .enumerate(&selections(&[("zeta", "v1"), ("alpha", "main"), ("mid", "v2")]))
            .unwrap();

        let names: Vec<&str> = packages.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
        assert_eq!(packages[0].root(), dir.path().join("alpha/main"));
        assert_eq!(packages[0].target(), "main");
    }

    #[test]
    fn enumerate_empty_selection_is_empty() {
        let dir = tempdir().unwrap();
        let enumerator = PackageEnumerator::new(dir.path());

        assert!(enumerator.enumerate(&PackageSelections::new()).unwrap().is_empty());
    }

    #[test]
    fn missing_package_is_resolution_error() {
        let dir = tempdir().unwrap();
        let enumerator = PackageEnumerator::new(dir.path());

        let err = enumerator
            .enumerate(&selections(&[("core", "v1")]))
            .unwrap_err();

        assert_eq!(
            err,
            ResolveError::PackageNotFound {
                name: "core".to_string(),
                target: "v1".to_string(),
                path: dir.path().join("core/v1"),
            }
        );
    }

    #[test]
    fn missing_target_of_present_package_is_resolution_error() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("core/v1")).unwrap();
        let enumerator = PackageEnumerator::new(dir.path());

        let err = enumerator
            .enumerate(&selections(&[("core", "v2")]))
            .unwrap_err();

        assert!(matches!(err, ResolveError::PackageNotFound { .. }));
    }

    #[test]
    fn file_in_place_of_package_is_rejected() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("core")).unwrap();
        fs::write(dir.path().join("core/v1"), "archive").unwrap();
        let enumerator = PackageEnumerator::new(dir.path());

        let err = enumerator
            .enumerate(&selections(&[("core", "v1")]))
            .unwrap_err();

        assert!(matches!(err, ResolveError::NotADirectory { .. }));
    }

    #[test]
    fn traversal_in_selection_is_rejected() {
        let dir = tempdir().unwrap();
        let enumerator = PackageEnumerator::new(dir.path());

        for (name, target) in [("..", "v1"), ("core", "../v1"), ("a/b", "v1"), ("core", ".")] {
            let err = enumerator
                .enumerate(&selections(&[(name, target)]))
                .unwrap_err();
            assert!(
                matches!(err, ResolveError::InvalidSelection { .. }),
                "{name}={target} should be rejected"
            );
        }
    }
}
