pub mod input_error;
pub mod render_error;
