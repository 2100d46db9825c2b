use crate::controllers::session::data::frame_data::FrameData;
use crate::controllers::session::errors::render_error::RenderError;

#[derive(Debug, Clone)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Frame(frame) => frame.generation,
            Self::Error(error) => error.generation,
        }
    }
}
