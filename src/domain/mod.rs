//! Domain Layer
//!
//! Package composition logic: the layer catalog, layout detection, package
//! enumeration, and the layer tree merge.
//!
//! ## Structure
//!
//! - `entities/` - Packages and package selections
//! - `value_objects/` - Layer names, content roots, tree digests
//! - `services/` - Layout detector, package enumerator, tree merger
//! - `ports/` - Interface definitions for infrastructure (build events)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
