/// Zoom configuration for a [`Camera`](super::Camera).
///
/// Zoom is measured in screen pixels per logical unit and must stay strictly
/// between `min_zoom` and `max_zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLimits {
    pub default_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
}

impl CameraLimits {
    /// Whether `zoom` lies in the open interval `(min_zoom, max_zoom)`.
    #[must_use]
    pub fn allows(&self, zoom: f64) -> bool {
        zoom > self.min_zoom && zoom < self.max_zoom
    }
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            default_zoom: 20.0,
            min_zoom: 2.0,
            max_zoom: 200.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
        }
    }
}
