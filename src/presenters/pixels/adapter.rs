use crate::controllers::session::data::frame_data::FrameData;
use crate::controllers::session::errors::render_error::RenderError;
use crate::controllers::session::events::render_event::RenderEvent;
use crate::controllers::session::ports::presenter::SessionPresenterPort;
use std::sync::{Mutex, PoisonError};

/// Hand-off slots between the session and the window presenter.
///
/// Frames and errors are kept apart so an input error presented between two
/// redraws does not drop the frame that preceded it.
#[derive(Default)]
pub struct PixelsAdapter {
    frame: Mutex<Option<FrameData>>,
    error: Mutex<Option<RenderError>>,
}

impl SessionPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::Frame(frame) => {
                *self.frame.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame);
            }
            RenderEvent::Error(error) => {
                *self.error.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
            }
        }
    }
}

impl PixelsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.frame.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    pub fn take_error(&self) -> Option<RenderError> {
        self.error.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}
