pub mod camera;
pub mod limits;

pub use camera::{Camera, ZoomDirection};
pub use limits::CameraLimits;
