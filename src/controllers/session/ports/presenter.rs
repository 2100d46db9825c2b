use crate::controllers::session::events::render_event::RenderEvent;

pub trait SessionPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
