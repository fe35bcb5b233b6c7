//! Domain Layer
//!
//! Pure data and the interfaces the rest of the crate talks through.
//!
//! ## Structure
//!
//! - `entities/` - `TrackedFile`, `DependencySet`
//! - `value_objects/` - `ContentHash`
//! - `ports/` - `FileSystem`, `ProcessRunner`

pub mod entities;
pub mod ports;
pub mod value_objects;
