//! Tree digest value object
//!
//! A SHA-256 fingerprint of a composed output tree. Two builds that produce
//! byte-identical trees produce equal digests.

use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 digest of a directory tree, rendered with a `sha256:` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeDigest(String);

impl TreeDigest {
    pub const PREFIX: &'static str = "sha256:";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TreeDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Incrementally feeds tree entries into a digest.
///
/// Callers must add entries in a stable order (sorted relative paths).
/// Directories and files are tagged differently so an empty directory and an
/// empty file at the same path do not collide.
#[derive(Default)]
pub struct TreeDigestBuilder {
    hasher: Sha256,
}

impl TreeDigestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&mut self, relative: &str) {
        self.hasher.update(b"d\0");
        self.hasher.update(relative.as_bytes());
        self.hasher.update(b"\0");
    }

    pub fn add_file(&mut self, relative: &str, content: &[u8]) {
        self.hasher.update(b"f\0");
        self.hasher.update(relative.as_bytes());
        self.hasher.update(b"\0");
        self.hasher.update((content.len() as u64).to_le_bytes());
        self.hasher.update(content);
    }

    pub fn finish(self) -> TreeDigest {
        TreeDigest(format!("{}{:x}", TreeDigest::PREFIX, self.hasher.finalize()))
    }
}
