//! Domain Entities
//!
//! - `Package` - A downloaded package and its cache location
//! - `PackageSelections` - Which target of each package a build uses

mod package;

pub use package::{Package, PackageSelection, PackageSelections};
