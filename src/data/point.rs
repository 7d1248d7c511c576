//! 2D point types.

use std::fmt;

/// A 2D coordinate with mutable `x` and `y` fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift the point by `(dx, dy)` in place.
    ///
    /// Ordinary floating-point semantics apply; NaN and infinite offsets
    /// propagate without special handling.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Min/max envelope of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x value.
    pub x_min: f64,
    /// Largest x value.
    pub x_max: f64,
    /// Smallest y value.
    pub y_min: f64,
    /// Largest y value.
    pub y_max: f64,
}

impl Bounds {
    /// Grow the envelope to include another envelope.
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

/// An ordered sequence of points, insertion order = input file line order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a point, preserving insertion order.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Shift every point by `(dx, dy)` in place.
    ///
    /// An empty set is a no-op. No new sequence is allocated.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for point in &mut self.points {
            point.translate(dx, dy);
        }
    }

    /// Return a translated copy, leaving `self` untouched.
    ///
    /// The viewer keeps the original and moved sets as two distinct values
    /// so both can be drawn without ordering hazards.
    pub fn translated(&self, dx: f64, dy: f64) -> PointSet {
        let mut moved = self.clone();
        moved.translate(dx, dy);
        moved
    }

    /// Coordinate pairs in insertion order, in the shape the chart widget wants.
    pub fn coords(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Min/max envelope of the set, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.points.first()?;
        let mut bounds = Bounds {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for p in &self.points[1..] {
            bounds.x_min = bounds.x_min.min(p.x);
            bounds.x_max = bounds.x_max.max(p.x);
            bounds.y_min = bounds.y_min.min(p.y);
            bounds.y_max = bounds.y_max.max(p.y);
        }
        Some(bounds)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PointSet {
        [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn translate_shifts_every_point() {
        let mut set = sample();
        set.translate(1.0, 1.0);
        assert_eq!(set.coords(), vec![(2.0, 3.0), (4.0, 5.0)]);
    }

    #[test]
    fn translate_round_trips_with_inverse_offset() {
        let original = sample();
        let mut set = original.clone();
        set.translate(2.5, -0.75);
        set.translate(-2.5, 0.75);
        for (a, b) in set.iter().zip(original.iter()) {
            assert!((a.x - b.x).abs() < 1e-12);
            assert!((a.y - b.y).abs() < 1e-12);
        }
    }

    #[test]
    fn translate_empty_set_is_noop() {
        let mut set = PointSet::new();
        set.translate(5.0, 5.0);
        assert!(set.is_empty());
    }

    #[test]
    fn translated_leaves_original_untouched() {
        let original = sample();
        let moved = original.translated(1.0, 1.0);
        assert_eq!(original.coords(), vec![(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(moved.coords(), vec![(2.0, 3.0), (4.0, 5.0)]);
    }

    #[test]
    fn bounds_cover_the_envelope() {
        let set: PointSet = [
            Point::new(-1.0, 7.0),
            Point::new(4.0, -2.0),
            Point::new(0.5, 3.0),
        ]
        .into_iter()
        .collect();
        let b = set.bounds().unwrap();
        assert_eq!((b.x_min, b.x_max), (-1.0, 4.0));
        assert_eq!((b.y_min, b.y_max), (-2.0, 7.0));
    }

    #[test]
    fn bounds_of_empty_set_is_none() {
        assert!(PointSet::new().bounds().is_none());
    }

    #[test]
    fn point_display_matches_coordinate_pair() {
        assert_eq!(Point::new(3.0, 4.5).to_string(), "(3, 4.5)");
    }
}
