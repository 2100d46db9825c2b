use crate::controllers::session::data::frame_data::FrameData;
use crate::controllers::session::errors::render_error::RenderError;
use crate::controllers::session::events::render_event::RenderEvent;
use crate::controllers::session::ports::presenter::SessionPresenterPort;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps the most recent event presented by a session.
///
/// Used by the command-line controller and by anything that wants a frame
/// without a window. Older events are overwritten.
#[derive(Debug, Default)]
pub struct FrameStore {
    latest: Mutex<Option<RenderEvent>>,
}

impl SessionPresenterPort for FrameStore {
    fn present(&self, event: RenderEvent) {
        *self.slot() = Some(event);
    }
}

impl FrameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the latest event.
    pub fn take(&self) -> Option<RenderEvent> {
        self.slot().take()
    }

    /// Removes the latest event, turning a presented error into `Err`.
    pub fn take_frame(&self) -> Option<Result<FrameData, RenderError>> {
        match self.take()? {
            RenderEvent::Frame(frame) => Some(Ok(frame)),
            RenderEvent::Error(error) => Some(Err(error)),
        }
    }

    #[must_use]
    pub fn latest_generation(&self) -> Option<u64> {
        self.slot().as_ref().map(RenderEvent::generation)
    }

    /// A panic elsewhere while holding the lock leaves the slot itself intact.
    fn slot(&self) -> MutexGuard<'_, Option<RenderEvent>> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
