//! Per-object geometry accumulation.
//!
//! A [`HullTracker`] collects the XY coordinates of every extrusion move
//! attributed to one printed object and can answer two queries about them:
//! the centroid ([`HullTracker::center`]) and the axis-aligned bounding
//! polygon ([`HullTracker::exterior`]). Points are only ever added, never
//! removed, and duplicates (by bit-exact equality) are ignored.

use std::collections::HashSet;

use super::Point;

/// Returns the four corners of the axis-aligned rectangle spanned by two
/// opposite corners, ordered (min,min) → (min,max) → (max,max) → (max,min).
pub fn bounding_box(pmin: Point, pmax: Point) -> [Point; 4] {
    [
        Point::new(pmin.x, pmin.y),
        Point::new(pmin.x, pmax.y),
        Point::new(pmax.x, pmax.y),
        Point::new(pmax.x, pmin.y),
    ]
}

/// Accumulates the distinct extrusion coordinates of one object.
///
/// Insertion order is preserved so that centroid summation is
/// deterministic run-to-run.
#[derive(Clone, Debug, Default)]
pub struct HullTracker {
    points: Vec<Point>,
    seen: HashSet<Point>,
}

impl HullTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a point unless an identical point was already recorded.
    pub fn add_point(&mut self, point: Point) {
        if self.seen.insert(point) {
            self.points.push(point);
        }
    }

    /// Number of distinct points recorded so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no points have been recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The arithmetic mean of all recorded points, or `None` if empty.
    pub fn center(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let x: f64 = self.points.iter().map(|p| p.x).sum();
        let y: f64 = self.points.iter().map(|p| p.y).sum();
        Some(Point::new(x / n, y / n))
    }

    /// The axis-aligned bounding rectangle of all recorded points, or
    /// `None` if empty. Corners are ordered (min,min) → (min,max) →
    /// (max,max) → (max,min).
    pub fn exterior(&self) -> Option<[Point; 4]> {
        let first = self.points.first()?;
        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_y, mut max_y) = (first.y, first.y);

        for p in &self.points[1..] {
            if p.x < min_x {
                min_x = p.x;
            }
            if p.x > max_x {
                max_x = p.x;
            }
            if p.y < min_y {
                min_y = p.y;
            }
            if p.y > max_y {
                max_y = p.y;
            }
        }

        Some(bounding_box(
            Point::new(min_x, min_y),
            Point::new(max_x, max_y),
        ))
    }
}
