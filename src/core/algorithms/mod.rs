pub mod bresenham_circle;
pub mod bresenham_line;
pub mod dda;
pub mod kinds;
pub mod quadratic_curve;
pub mod rounding;
pub mod step;
pub mod wu_line;
