//! File System Helpers
//!
//! Lock, staging and digest support for writing the output tree.

mod digest;
mod lock;
mod staging;

pub use digest::digest_tree;
pub use lock::{BuildLock, LOCK_FILE_NAME};
pub use staging::StagedDir;
