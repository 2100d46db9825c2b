use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::data::screen_point::ScreenPoint;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

/// Size of the drawing surface in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Centre pixel, using integer halves of the size.
    #[must_use]
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint {
            x: f64::from(self.width / 2),
            y: f64::from(self.height / 2),
        }
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, PixelRectError> {
        let right = i32::try_from(self.width).unwrap_or(i32::MAX) - 1;
        let bottom = i32::try_from(self.height).unwrap_or(i32::MAX) - 1;

        PixelRect::new(Point { x: 0, y: 0 }, Point { x: right, y: bottom })
    }
}
