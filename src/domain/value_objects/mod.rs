//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod content_root;
mod hash;
mod layer_name;

pub use content_root::{ContentRoot, Layout};
pub use hash::{TreeDigest, TreeDigestBuilder};
pub use layer_name::{LayerName, UnknownLayer};
