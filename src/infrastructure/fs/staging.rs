//! Staged output directory
//!
//! A clean build is merged into a scratch directory next to the output and
//! swapped into place only once the merge has succeeded. Until `commit`, the
//! previous output is untouched; dropping an uncommitted stage removes it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempDir};
use tracing::debug;

const STAGING_PREFIX: &str = ".staging-";
const PREVIOUS_PREFIX: &str = ".previous-";

pub struct StagedDir {
    staging: TempDir,
    target: PathBuf,
}

impl StagedDir {
    /// Create an empty staging directory beside `target`.
    ///
    /// Same parent means same filesystem, so the final swap is a rename.
    /// Leftovers of interrupted builds are removed first; callers must hold
    /// the build lock.
    pub fn new(target: &Path) -> io::Result<Self> {
        let parent = parent_of(target);
        fs::create_dir_all(parent)?;
        sweep_leftovers(parent)?;
        let staging = Builder::new().prefix(STAGING_PREFIX).tempdir_in(parent)?;
        Ok(Self {
            staging,
            target: target.to_path_buf(),
        })
    }

    /// Directory to build into
    pub fn path(&self) -> &Path {
        self.staging.path()
    }

    /// Replace `target` with the staged tree.
    ///
    /// The old output is moved aside first and restored if the final rename
    /// fails.
    pub fn commit(self) -> io::Result<PathBuf> {
        let parent = parent_of(&self.target);
        let previous = Builder::new().prefix(PREVIOUS_PREFIX).tempdir_in(parent)?;
        let parked = previous.path().join("output");

        let had_output = match fs::symlink_metadata(&self.target) {
            Ok(_) => {
                fs::rename(&self.target, &parked)?;
                true
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(e),
        };

        let staged = self.staging.keep();
        if let Err(e) = fs::rename(&staged, &self.target) {
            if had_output {
                let _ = fs::rename(&parked, &self.target);
            }
            let _ = fs::remove_dir_all(&staged);
            return Err(e);
        }

        // `previous` drops here and takes the old output with it.
        Ok(self.target)
    }
}

/// Remove `.staging-*` and `.previous-*` directories left by killed builds
fn sweep_leftovers(parent: &Path) -> io::Result<()> {
    for entry in fs::read_dir(parent)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !(name.starts_with(STAGING_PREFIX) || name.starts_with(PREVIOUS_PREFIX)) {
            continue;
        }
        if entry.file_type()?.is_dir() {
            debug!(path = %entry.path().display(), "removing leftover build directory");
            fs::remove_dir_all(entry.path())?;
        }
    }
    Ok(())
}

fn parent_of(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
