pub mod actions;
pub mod algorithms;
pub mod camera;
pub mod colour_space;
pub mod data;
pub mod grid;
pub mod image_filter;
