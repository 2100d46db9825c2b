pub mod algorithm_request;
pub mod algorithm_result;
pub mod colour;
pub mod coloured_point;
pub mod palette;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod screen_point;
pub mod viewport;
