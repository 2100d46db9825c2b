use crate::core::data::point::Point;

pub const FULL_COVERAGE: f64 = 1.0;

/// A rasterized cell and how much of it the primitive covers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColouredPoint {
    pub point: Point,
    /// In `[0.0, 1.0]`. Only antialiased output goes below 1.0.
    pub coverage: f64,
}

impl ColouredPoint {
    #[must_use]
    pub fn opaque(point: Point) -> Self {
        Self {
            point,
            coverage: FULL_COVERAGE,
        }
    }

    #[must_use]
    pub fn with_coverage(point: Point, coverage: f64) -> Self {
        Self { point, coverage }
    }

    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.coverage < FULL_COVERAGE
    }
}

impl From<Point> for ColouredPoint {
    fn from(point: Point) -> Self {
        Self::opaque(point)
    }
}
