//! Layout detector
//!
//! Decides whether a package keeps its layers at the package root (legacy) or
//! under `src/` (modern). There is no manifest field for this; the presence of
//! a recognised layer directory under `src/` is the only signal.

use std::path::Path;

use crate::domain::value_objects::{ContentRoot, LayerName};

/// Name of the nested content directory used by the modern layout
pub const MODERN_CONTENT_DIR: &str = "src";

/// Resolve the directory that actually holds a package's layers.
///
/// Returns the `src/` subdirectory only when it is a directory containing at
/// least one layer directory. Every other case, including stat failures,
/// falls back to the package root. `package_root` itself is not validated.
pub fn resolve_content_root(package_root: &Path) -> ContentRoot {
    let candidate = package_root.join(MODERN_CONTENT_DIR);

    if candidate.is_dir() && has_layer_dir(&candidate) {
        ContentRoot::modern(candidate)
    } else {
        ContentRoot::legacy(package_root)
    }
}

fn has_layer_dir(dir: &Path) -> bool {
    LayerName::ALL
        .iter()
        .any(|layer| dir.join(layer.as_str()).is_dir())
}
