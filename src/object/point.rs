//! A 2D point with bit-exact equality.
//!
//! Hull points are deduplicated by *exact* floating-point identity, not by
//! tolerance: two points are the same point only if both coordinates have
//! identical bit patterns. This makes [`Point`] usable as a hash-set key
//! without any epsilon policy.

use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable (x, y) coordinate pair in the printer's XY plane.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The bit pattern of both coordinates, used for equality and hashing.
    #[inline]
    fn to_bits(self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
