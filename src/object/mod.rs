//! The per-object data model.
//!
//! This module defines the small value types every dialect parser shares:
//! a bit-exact [`Point`], the [`HullTracker`] geometry accumulator, and
//! the insertion-ordered [`ObjectRegistry`] built during a scan pass and
//! read back during emission.

mod hull;
mod point;
mod registry;

pub use hull::{bounding_box, HullTracker};
pub use point::Point;
pub use registry::{KnownObject, ObjectRegistry};
