use crate::math::Point2;

/// A straight segment between two projected points.
///
/// Segments are directionless when drawn, but `start` and `end` are kept
/// distinct so tubes can be chained from one another's endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    /// Creates a new segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Returns whether both endpoints have finite coordinates.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.start, self.end]
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}
