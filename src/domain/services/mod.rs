//! Domain Services
//!
//! The three build steps, leaf-first:
//! - `layout_detector` - where a package keeps its layers
//! - `package_enumerator` - which packages take part, in which order
//! - `tree_merger` - overlay of all layers into one tree

mod layout_detector;
mod package_enumerator;
mod tree_merger;

pub use layout_detector::{resolve_content_root, MODERN_CONTENT_DIR};
pub use package_enumerator::{PackageEnumerator, ResolveError};
pub use tree_merger::{
    merge, LayerContribution, MergeError, MergeReport, MergeSource, OverrideInfo,
};
