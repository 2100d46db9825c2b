use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "frame must be at least 2x2 pixels, got {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive pixel rectangle of a frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (i64::from(self.bottom_right.x) - i64::from(self.top_left.x) + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (i64::from(self.bottom_right.y) - i64::from(self.top_left.y) + 1) as u32
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    /// Row-major pixel index of `point`, if it lies inside the rect.
    #[must_use]
    pub fn pixel_index(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        let column = (i64::from(point.x) - i64::from(self.top_left.x)) as usize;
        let row = (i64::from(point.y) - i64::from(self.top_left.y)) as usize;

        Some(row * self.width() as usize + column)
    }
}
