//! Build lock
//!
//! Exclusive advisory lock serialising builds that share an output directory.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;

/// Lock file name, placed next to the output directory
pub const LOCK_FILE_NAME: &str = ".compose.lock";

/// Held for the duration of a build; released on drop
#[derive(Debug)]
pub struct BuildLock {
    file: File,
}

impl BuildLock {
    /// Lock path guarding `output_dir`
    pub fn path_for(output_dir: &Path) -> PathBuf {
        output_dir
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(LOCK_FILE_NAME)
    }

    /// Block until the lock guarding `output_dir` is acquired
    pub fn acquire(output_dir: &Path) -> io::Result<Self> {
        let path = Self::path_for(output_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&path)?;
        file.lock_exclusive()?;
        Ok(Self { file })
    }
}

impl Drop for BuildLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
