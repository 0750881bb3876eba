//! Package entity
//!
//! A downloaded, versioned unit of content living in the package cache.
//! Packages are produced by an external download step and are read-only here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A package resolved to a location on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    target: String,
    root: PathBuf,
}

impl Package {
    pub fn new(name: impl Into<String>, target: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            root: root.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved target selector (version or branch tag)
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Package name → resolved target selector.
///
/// Backed by a `BTreeMap` so iteration is always lexicographic by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageSelections(BTreeMap<String, String>);

impl PackageSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `target` for `name`, replacing any earlier selection
    pub fn insert(&mut self, name: impl Into<String>, target: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), target.into())
    }

    /// Overlay `other` on top of these selections (other wins)
    pub fn extend(&mut self, other: PackageSelections) {
        self.0.extend(other.0);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(name, target)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for PackageSelections {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, t)| (n.into(), t.into()))
                .collect(),
        )
    }
}

/// A single `name=target` selection as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSelection {
    pub name: String,
    pub target: String,
}

impl FromStr for PackageSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, target) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=TARGET, got '{}'", s))?;
        let name = name.trim();
        let target = target.trim();
        if name.is_empty() || target.is_empty() {
            return Err(format!("expected NAME=TARGET, got '{}'", s));
        }
        Ok(Self {
            name: name.to_string(),
            target: target.to_string(),
        })
    }
}

impl FromIterator<PackageSelection> for PackageSelections {
    fn from_iter<I: IntoIterator<Item = PackageSelection>>(iter: I) -> Self {
        iter.into_iter().map(|s| (s.name, s.target)).collect()
    }
}
