/// A cell on the unbounded logical lattice, or a pixel inside a [`PixelRect`].
///
/// [`PixelRect`]: crate::core::data::pixel_rect::PixelRect
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Largest per-axis distance to `other`, widened so no pair of `i32`s overflows.
    #[must_use]
    pub fn chebyshev_distance(&self, other: Point) -> i64 {
        let dx = (i64::from(other.x) - i64::from(self.x)).abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).abs();

        dx.max(dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
