use crate::core::algorithms::rounding::round_to_cell;
use crate::core::camera::limits::CameraLimits;
use crate::core::data::point::Point;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Maps the unbounded logical lattice onto viewport pixels.
///
/// Logical `(0, 0)` sits at the viewport centre shifted by the pan offset.
/// Logical Y grows upwards, screen Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    limits: CameraLimits,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraLimits::default())
    }
}

impl Camera {
    #[must_use]
    pub fn new(limits: CameraLimits) -> Self {
        Self {
            zoom: limits.default_zoom,
            pan_x: 0.0,
            pan_y: 0.0,
            limits,
        }
    }

    /// Screen pixels per logical unit.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    #[must_use]
    pub fn limits(&self) -> &CameraLimits {
        &self.limits
    }

    /// Screen position of the logical origin.
    #[must_use]
    pub fn origin_on_screen(&self, viewport: Viewport) -> ScreenPoint {
        let center = viewport.center();

        ScreenPoint {
            x: center.x + self.pan_x,
            y: center.y + self.pan_y,
        }
    }

    #[must_use]
    pub fn to_screen(&self, point: Point, viewport: Viewport) -> ScreenPoint {
        let origin = self.origin_on_screen(viewport);

        ScreenPoint {
            x: origin.x + f64::from(point.x) * self.zoom,
            y: origin.y - f64::from(point.y) * self.zoom,
        }
    }

    /// Inverse of [`Camera::to_screen`], rounded to the nearest cell.
    #[must_use]
    pub fn to_logical(&self, screen: ScreenPoint, viewport: Viewport) -> Point {
        let origin = self.origin_on_screen(viewport);

        Point {
            x: round_to_cell((screen.x - origin.x) / self.zoom),
            y: round_to_cell((origin.y - screen.y) / self.zoom),
        }
    }

    /// Multiplies the zoom by the configured factor.
    ///
    /// Returns `false` and leaves the camera untouched when the result would
    /// leave the open `(min_zoom, max_zoom)` interval.
    pub fn apply_zoom(&mut self, direction: ZoomDirection) -> bool {
        let factor = match direction {
            ZoomDirection::In => self.limits.zoom_in_factor,
            ZoomDirection::Out => self.limits.zoom_out_factor,
        };
        let candidate = self.zoom * factor;

        if !self.limits.allows(candidate) {
            return false;
        }

        self.zoom = candidate;
        true
    }

    /// Shifts the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Pans so that `point` lands exactly on the viewport centre.
    pub fn recenter_on(&mut self, point: Point) {
        self.pan_x = -f64::from(point.x) * self.zoom;
        self.pan_y = f64::from(point.y) * self.zoom;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.limits);
    }
}
