use crate::core::data::pixel_buffer::PixelBuffer;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
