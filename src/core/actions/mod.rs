pub mod render_frame;
pub mod run_algorithm;
