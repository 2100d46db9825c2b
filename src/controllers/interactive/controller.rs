use crate::controllers::interactive::events::explorer_event::ExplorerEvent;
use crate::core::camera::{Camera, CameraLimits};
use crate::core::data::point::Point;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::Viewport;

/// Turns pointer input into camera changes.
///
/// Owns the only mutable view state: the camera, the viewport it maps onto,
/// the drag anchor and the hovered cell. The hovered cell is re-derived from
/// the last pointer position whenever the camera moves under it.
#[derive(Debug, Clone)]
pub struct InteractiveController {
    camera: Camera,
    viewport: Viewport,
    drag_anchor: Option<ScreenPoint>,
    pointer: Option<ScreenPoint>,
    hover_cell: Option<Point>,
}

impl InteractiveController {
    #[must_use]
    pub fn new(viewport: Viewport, limits: CameraLimits) -> Self {
        Self {
            camera: Camera::new(limits),
            viewport,
            drag_anchor: None,
            pointer: None,
            hover_cell: None,
        }
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The cell under the pointer, once the pointer has moved over the canvas.
    #[must_use]
    pub fn hover_cell(&self) -> Option<Point> {
        self.hover_cell
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Applies one event and reports whether the frame must be redrawn.
    ///
    /// `RunAlgorithm` is not a view event and is ignored here.
    pub fn handle_event(&mut self, event: &ExplorerEvent) -> bool {
        match *event {
            ExplorerEvent::PointerDown(position) => {
                self.drag_anchor = Some(position);
                self.pointer = Some(position);
                false
            }
            ExplorerEvent::PointerDrag(position) => self.drag_to(position),
            ExplorerEvent::PointerUp => {
                self.drag_anchor = None;
                false
            }
            ExplorerEvent::Scroll(direction) => {
                let applied = self.camera.apply_zoom(direction);
                if applied {
                    self.refresh_hover();
                }
                applied
            }
            ExplorerEvent::PassiveMove(position) => self.hover(position),
            ExplorerEvent::ResetView => {
                self.camera.reset();
                self.refresh_hover();
                true
            }
            ExplorerEvent::Resize(viewport) => {
                self.viewport = viewport;
                self.refresh_hover();
                true
            }
            ExplorerEvent::RunAlgorithm(_) => false,
        }
    }

    /// Pans so that `point` sits at the viewport centre.
    pub fn focus_on(&mut self, point: Point) {
        self.camera.recenter_on(point);
        self.refresh_hover();
    }

    #[must_use]
    pub fn cursor_label(&self) -> String {
        let cell = self.hover_cell.unwrap_or_default();

        format!("Cursor: ({}, {})", cell.x, cell.y)
    }

    fn drag_to(&mut self, position: ScreenPoint) -> bool {
        self.pointer = Some(position);
        let Some(anchor) = self.drag_anchor.replace(position) else {
            return false;
        };

        let delta = position - anchor;
        self.camera.pan_by(delta.x, delta.y);
        self.refresh_hover();
        true
    }

    fn hover(&mut self, position: ScreenPoint) -> bool {
        self.pointer = Some(position);
        let cell = Some(self.camera.to_logical(position, self.viewport));
        if cell == self.hover_cell {
            return false;
        }

        self.hover_cell = cell;
        true
    }

    fn refresh_hover(&mut self) {
        if let Some(position) = self.pointer {
            self.hover_cell = Some(self.camera.to_logical(position, self.viewport));
        }
    }
}

impl Default for InteractiveController {
    fn default() -> Self {
        Self::new(Viewport::default(), CameraLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::algorithms::kinds::AlgorithmKind;
    use crate::core::camera::ZoomDirection;

    #[test]
    fn test_pointer_down_does_not_redraw() {
        let mut controller = InteractiveController::default();

        assert!(!controller.handle_event(&ExplorerEvent::PointerDown(ScreenPoint::new(10.0, 10.0))));
        assert!(controller.is_dragging());
        assert_eq!(controller.camera().pan(), (0.0, 0.0));
    }

    #[test]
    fn test_drag_pans_by_pointer_delta() {
        let mut controller = InteractiveController::default();

        controller.handle_event(&ExplorerEvent::PointerDown(ScreenPoint::new(10.0, 10.0)));
        assert!(controller.handle_event(&ExplorerEvent::PointerDrag(ScreenPoint::new(25.0, 5.0))));
        assert!(controller.handle_event(&ExplorerEvent::PointerDrag(ScreenPoint::new(30.0, 0.0))));

        assert_eq!(controller.camera().pan(), (20.0, -10.0));
    }

    #[test]
    fn test_drag_without_anchor_only_sets_anchor() {
        let mut controller = InteractiveController::default();

        assert!(!controller.handle_event(&ExplorerEvent::PointerDrag(ScreenPoint::new(25.0, 5.0))));
        assert_eq!(controller.camera().pan(), (0.0, 0.0));

        assert!(controller.handle_event(&ExplorerEvent::PointerDrag(ScreenPoint::new(30.0, 5.0))));
        assert_eq!(controller.camera().pan(), (5.0, 0.0));
    }

    #[test]
    fn test_pointer_up_ends_drag() {
        let mut controller = InteractiveController::default();

        controller.handle_event(&ExplorerEvent::PointerDown(ScreenPoint::new(10.0, 10.0)));
        controller.handle_event(&ExplorerEvent::PointerUp);

        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_scroll_reports_whether_zoom_applied() {
        let mut controller = InteractiveController::new(
            Viewport::default(),
            CameraLimits {
                default_zoom: 190.0,
                ..CameraLimits::default()
            },
        );

        assert!(!controller.handle_event(&ExplorerEvent::Scroll(ZoomDirection::In)));
        assert!(controller.handle_event(&ExplorerEvent::Scroll(ZoomDirection::Out)));
        assert!((controller.camera().zoom() - 171.0).abs() < 1e-9);
    }

    #[test]
    fn test_passive_move_redraws_only_on_cell_change() {
        let mut controller = InteractiveController::default();

        let mut moved =
            |x, y| controller.handle_event(&ExplorerEvent::PassiveMove(ScreenPoint::new(x, y)));

        assert!(moved(401.0, 299.0));
        assert!(!moved(399.0, 301.0));
        assert!(moved(421.0, 279.0));
        assert!(!moved(419.0, 281.0));

        assert_eq!(controller.hover_cell(), Some(Point::new(1, 1)));
        assert_eq!(controller.cursor_label(), "Cursor: (1, 1)");
        assert_eq!(controller.camera().pan(), (0.0, 0.0));
    }

    #[test]
    fn test_hover_follows_pointer_after_zoom() {
        let mut controller = InteractiveController::default();
        let pointer = ScreenPoint::new(500.0, 300.0);

        controller.handle_event(&ExplorerEvent::PassiveMove(pointer));
        assert_eq!(controller.hover_cell(), Some(Point::new(5, 0)));

        for _ in 0..5 {
            controller.handle_event(&ExplorerEvent::Scroll(ZoomDirection::Out));
        }

        let expected = controller.camera().to_logical(pointer, controller.viewport());
        assert_eq!(expected, Point::new(8, 0));
        assert_eq!(controller.hover_cell(), Some(expected));
        assert_eq!(controller.cursor_label(), "Cursor: (8, 0)");
    }

    #[test]
    fn test_hover_follows_pointer_after_recenter_and_reset() {
        let mut controller = InteractiveController::default();
        let pointer = ScreenPoint::new(420.0, 280.0);
        controller.handle_event(&ExplorerEvent::PassiveMove(pointer));

        controller.focus_on(Point::new(770, 8));
        assert_eq!(controller.hover_cell(), Some(Point::new(771, 9)));

        controller.handle_event(&ExplorerEvent::ResetView);
        assert_eq!(controller.hover_cell(), Some(Point::new(1, 1)));
    }

    #[test]
    fn test_hover_stays_empty_without_pointer() {
        let mut controller = InteractiveController::default();

        controller.handle_event(&ExplorerEvent::Scroll(ZoomDirection::In));
        controller.handle_event(&ExplorerEvent::ResetView);

        assert_eq!(controller.hover_cell(), None);
    }

    #[test]
    fn test_cursor_label_starts_at_origin() {
        assert_eq!(InteractiveController::default().cursor_label(), "Cursor: (0, 0)");
    }

    #[test]
    fn test_reset_view_restores_camera() {
        let mut controller = InteractiveController::default();
        controller.handle_event(&ExplorerEvent::PointerDown(ScreenPoint::new(0.0, 0.0)));
        controller.handle_event(&ExplorerEvent::PointerDrag(ScreenPoint::new(50.0, 50.0)));
        controller.handle_event(&ExplorerEvent::Scroll(ZoomDirection::In));

        assert!(controller.handle_event(&ExplorerEvent::ResetView));
        assert_eq!(*controller.camera(), Camera::default());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut controller = InteractiveController::default();

        assert!(controller.handle_event(&ExplorerEvent::Resize(Viewport::new(1024, 768))));
        assert_eq!(controller.viewport(), Viewport::new(1024, 768));
    }

    #[test]
    fn test_run_algorithm_is_not_a_view_event() {
        let mut controller = InteractiveController::default();

        assert!(!controller.handle_event(&ExplorerEvent::RunAlgorithm(AlgorithmKind::Dda)));
    }

    #[test]
    fn test_focus_on_centres_point() {
        let mut controller = InteractiveController::default();
        controller.focus_on(Point::new(770, 8));

        let screen = controller
            .camera()
            .to_screen(Point::new(770, 8), controller.viewport());
        assert_eq!(screen, ScreenPoint::new(400.0, 300.0));
    }
}
