use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::controllers::interactive::ExplorerEvent;
use crate::core::camera::ZoomDirection;
use crate::core::data::screen_point::ScreenPoint;

/// Turns raw winit pointer events into explorer events.
///
/// Only the left button drags; other buttons are ignored.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInput {
    position: Option<ScreenPoint>,
    left_held: bool,
}

impl PointerInput {
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> ExplorerEvent {
        let point = ScreenPoint::new(position.x, position.y);
        self.position = Some(point);

        if self.left_held {
            ExplorerEvent::PointerDrag(point)
        } else {
            ExplorerEvent::PassiveMove(point)
        }
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<ExplorerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                let point = self.position?;
                self.left_held = true;
                Some(ExplorerEvent::PointerDown(point))
            }
            ElementState::Released => {
                let was_held = self.left_held;
                self.left_held = false;
                was_held.then_some(ExplorerEvent::PointerUp)
            }
        }
    }

    pub fn mouse_wheel(&self, delta: MouseScrollDelta) -> Option<ExplorerEvent> {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        if amount > 0.0 {
            Some(ExplorerEvent::Scroll(ZoomDirection::In))
        } else if amount < 0.0 {
            Some(ExplorerEvent::Scroll(ZoomDirection::Out))
        } else {
            None
        }
    }

    /// Drops a drag in progress, e.g. when the window loses focus.
    pub fn release(&mut self) -> Option<ExplorerEvent> {
        self.mouse_input(ElementState::Released, MouseButton::Left)
    }

    pub fn is_dragging(&self) -> bool {
        self.left_held
    }
}
