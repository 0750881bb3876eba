//! Output tree digest

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::value_objects::{TreeDigest, TreeDigestBuilder};

/// Fingerprint every directory and file under `root`.
///
/// Paths are relative to `root` with `/` separators and visited in sorted
/// order, so the digest is independent of platform and directory listing
/// order.
pub fn digest_tree(root: &Path) -> io::Result<TreeDigest> {
    let mut builder = TreeDigestBuilder::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if entry.file_type().is_dir() {
            builder.add_dir(&relative);
        } else {
            builder.add_file(&relative, &fs::read(entry.path())?);
        }
    }

    Ok(builder.finish())
}
