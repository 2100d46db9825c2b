pub mod grid_lines;

pub use grid_lines::{GridLine, GridLineStyle, GridOrientation, visible_grid_lines};
