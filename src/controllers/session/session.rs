use crate::controllers::interactive::{ExplorerEvent, InteractiveController};
use crate::controllers::session::coordinate_inputs::CoordinateInputs;
use crate::controllers::session::data::frame_data::FrameData;
use crate::controllers::session::errors::input_error::InputError;
use crate::controllers::session::errors::render_error::RenderError;
use crate::controllers::session::events::render_event::RenderEvent;
use crate::controllers::session::ports::presenter::SessionPresenterPort;
use crate::core::actions::render_frame::render_frame::{FrameScene, render_frame};
use crate::core::actions::run_algorithm::run_algorithm::run_algorithm;
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::camera::{Camera, CameraLimits};
use crate::core::data::algorithm_result::AlgorithmResult;
use crate::core::data::palette::PIXEL_DEFAULT;
use crate::core::data::viewport::Viewport;
use std::sync::Arc;
use std::time::Instant;

pub const READY_STATUS: &str = "Ready";

/// One explorer window's worth of state.
///
/// Every event goes through [`VisualizationSession::dispatch`], which runs
/// synchronously: camera updates, rasterization and frame composition all
/// finish before it returns. Frames and errors leave through the presenter
/// port, each tagged with a fresh generation.
pub struct VisualizationSession {
    controller: InteractiveController,
    inputs: CoordinateInputs,
    result: Option<AlgorithmResult>,
    status: String,
    error_message: Option<String>,
    generation: u64,
    presenter_port: Arc<dyn SessionPresenterPort>,
}

impl VisualizationSession {
    pub fn new(viewport: Viewport, presenter_port: Arc<dyn SessionPresenterPort>) -> Self {
        Self::with_limits(viewport, CameraLimits::default(), presenter_port)
    }

    pub fn with_limits(
        viewport: Viewport,
        limits: CameraLimits,
        presenter_port: Arc<dyn SessionPresenterPort>,
    ) -> Self {
        Self {
            controller: InteractiveController::new(viewport, limits),
            inputs: CoordinateInputs::default(),
            result: None,
            status: READY_STATUS.to_string(),
            error_message: None,
            generation: 0,
            presenter_port,
        }
    }

    #[must_use]
    pub fn inputs(&self) -> &CoordinateInputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut CoordinateInputs {
        &mut self.inputs
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Message of the last rejected input, cleared by the next successful run.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[must_use]
    pub fn cursor_label(&self) -> String {
        self.controller.cursor_label()
    }

    #[must_use]
    pub fn result(&self) -> Option<&AlgorithmResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.controller.camera()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.controller.viewport()
    }

    /// Generation of the most recently presented event, 0 before the first.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dispatch(&mut self, event: ExplorerEvent) -> Result<(), InputError> {
        match event {
            ExplorerEvent::RunAlgorithm(kind) => self.run(kind),
            view_event => {
                if self.controller.handle_event(&view_event) {
                    self.redraw();
                }
                Ok(())
            }
        }
    }

    /// Parses the inputs, rasterizes and redraws centred on the start point.
    ///
    /// On bad input the error is presented and returned; camera, result and
    /// status are left as they were.
    pub fn run(&mut self, kind: AlgorithmKind) -> Result<(), InputError> {
        let request = match self.inputs.to_request(kind) {
            Ok(request) => request,
            Err(err) => {
                let message = err.to_string();
                self.error_message = Some(message.clone());
                self.present_error(message);
                return Err(err);
            }
        };

        self.controller.focus_on(request.start);

        let result = run_algorithm(&request);
        self.status = result.status_line();
        self.result = Some(result);
        self.error_message = None;

        self.redraw();
        Ok(())
    }

    /// Composes and presents a frame for the current state.
    pub fn redraw(&mut self) -> u64 {
        let generation = self.next_generation();

        let (points, point_colour) = match &self.result {
            Some(result) => (result.points.as_slice(), result.colour),
            None => (&[][..], PIXEL_DEFAULT),
        };

        let scene = FrameScene {
            camera: self.controller.camera(),
            viewport: self.controller.viewport(),
            points,
            point_colour,
            hover_cell: self.controller.hover_cell(),
        };

        let start = Instant::now();
        let event = match render_frame(&scene) {
            Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                generation,
                pixel_buffer,
                render_duration: start.elapsed(),
            }),
            Err(err) => RenderEvent::Error(RenderError {
                generation,
                message: err.to_string(),
            }),
        };

        self.presenter_port.present(event);
        generation
    }

    fn present_error(&mut self, message: String) {
        let generation = self.next_generation();

        self.presenter_port
            .present(RenderEvent::Error(RenderError { generation, message }));
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::session::coordinate_inputs::CoordinateField;
    use crate::core::camera::ZoomDirection;
    use crate::core::data::colour::Colour;
    use crate::core::data::palette::{CANVAS_BACKGROUND, HOVER_OUTLINE, PIXEL_CURVE, PIXEL_WU};
    use crate::core::data::point::Point;
    use crate::core::data::screen_point::ScreenPoint;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl SessionPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn session() -> (VisualizationSession, Arc<MockPresenterPort>) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let session = VisualizationSession::new(
            Viewport::new(800, 600),
            Arc::clone(&presenter_port) as Arc<dyn SessionPresenterPort>,
        );

        (session, presenter_port)
    }

    fn single_frame(events: Vec<RenderEvent>) -> FrameData {
        assert_eq!(events.len(), 1, "expected exactly one event");

        match events.into_iter().next() {
            Some(RenderEvent::Frame(frame)) => frame,
            other => panic!("expected a frame, got {:?}", other),
        }
    }

    fn centre_pixel(frame: &FrameData) -> Colour {
        frame.pixel_buffer.pixel(Point::new(405, 295)).unwrap()
    }

    #[test]
    fn test_new_session_is_ready() {
        let (session, presenter_port) = session();

        assert_eq!(session.status(), READY_STATUS);
        assert_eq!(session.cursor_label(), "Cursor: (0, 0)");
        assert!(session.result().is_none());
        assert_eq!(session.generation(), 0);
        assert!(presenter_port.take_events().is_empty());
    }

    #[test]
    fn test_run_presents_frame_centred_on_start() {
        let (mut session, presenter_port) = session();

        session
            .dispatch(ExplorerEvent::RunAlgorithm(AlgorithmKind::BresenhamLine))
            .unwrap();

        let frame = single_frame(presenter_port.take_events());
        assert_eq!(frame.generation, 1);
        assert_eq!(frame.pixel_buffer.pixel_rect().width(), 800);
        assert_eq!(centre_pixel(&frame), PIXEL_DEFAULT);

        let screen = session
            .camera()
            .to_screen(Point::new(770, 8), session.viewport());
        assert_eq!(screen, ScreenPoint::new(400.0, 300.0));
    }

    #[test]
    fn test_run_sets_status_and_result() {
        let (mut session, _presenter_port) = session();

        session.run(AlgorithmKind::QuadraticCurve).unwrap();

        let result = session.result().unwrap();
        assert_eq!(result.kind, AlgorithmKind::QuadraticCurve);
        assert_eq!(result.colour, PIXEL_CURVE);
        assert!(session.status().starts_with("Executed: curve ("));
        assert!(session.status().ends_with(" ms)"));
    }

    #[test]
    fn test_wu_cells_use_antialiased_colour() {
        let (mut session, presenter_port) = session();

        session.run(AlgorithmKind::Wu).unwrap();

        let frame = single_frame(presenter_port.take_events());
        // first endpoint cell has half coverage
        assert_eq!(centre_pixel(&frame), PIXEL_WU.scaled_by_coverage(0.5));
    }

    #[test]
    fn test_invalid_input_changes_nothing() {
        let (mut session, presenter_port) = session();
        session.run(AlgorithmKind::Dda).unwrap();
        presenter_port.take_events();
        let camera_before = *session.camera();
        let status_before = session.status().to_string();
        let result_before = session.result().cloned();

        session.inputs_mut().set(CoordinateField::StartX, "abc");
        let err = session
            .dispatch(ExplorerEvent::RunAlgorithm(AlgorithmKind::Step))
            .unwrap_err();

        assert!(matches!(err, InputError::NotAnInteger { .. }));
        assert_eq!(*session.camera(), camera_before);
        assert_eq!(session.status(), status_before);
        assert_eq!(session.result().cloned(), result_before);
        assert_eq!(session.error_message(), Some(err.to_string().as_str()));

        let events = presenter_port.take_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], RenderEvent::Error(error) if error.generation == 2));
    }

    #[test]
    fn test_successful_run_clears_error() {
        let (mut session, _presenter_port) = session();
        session.inputs_mut().set(CoordinateField::EndY, "");
        assert!(session.run(AlgorithmKind::Dda).is_err());

        session.inputs_mut().set(CoordinateField::EndY, "20");
        session.run(AlgorithmKind::Dda).unwrap();

        assert_eq!(session.error_message(), None);
    }

    #[test]
    fn test_drag_redraws_and_pans() {
        let (mut session, presenter_port) = session();

        session
            .dispatch(ExplorerEvent::PointerDown(ScreenPoint::new(100.0, 100.0)))
            .unwrap();
        assert!(presenter_port.take_events().is_empty());

        session
            .dispatch(ExplorerEvent::PointerDrag(ScreenPoint::new(120.0, 90.0)))
            .unwrap();
        session.dispatch(ExplorerEvent::PointerUp).unwrap();

        assert_eq!(session.camera().pan(), (20.0, -10.0));
        assert_eq!(presenter_port.take_events().len(), 1);
    }

    #[test]
    fn test_rejected_zoom_does_not_redraw() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut session = VisualizationSession::with_limits(
            Viewport::new(800, 600),
            CameraLimits {
                default_zoom: 199.0,
                ..CameraLimits::default()
            },
            Arc::clone(&presenter_port) as Arc<dyn SessionPresenterPort>,
        );

        session
            .dispatch(ExplorerEvent::Scroll(ZoomDirection::In))
            .unwrap();

        assert!(presenter_port.take_events().is_empty());
    }

    #[test]
    fn test_generations_increase() {
        let (mut session, presenter_port) = session();

        session.dispatch(ExplorerEvent::ResetView).unwrap();
        session
            .dispatch(ExplorerEvent::Scroll(ZoomDirection::Out))
            .unwrap();
        session
            .dispatch(ExplorerEvent::PassiveMove(ScreenPoint::new(10.0, 10.0)))
            .unwrap();

        let generations: Vec<u64> = presenter_port
            .take_events()
            .iter()
            .map(RenderEvent::generation)
            .collect();
        assert_eq!(generations, vec![1, 2, 3]);
    }

    #[test]
    fn test_resize_changes_frame_size() {
        let (mut session, presenter_port) = session();

        session
            .dispatch(ExplorerEvent::Resize(Viewport::new(320, 240)))
            .unwrap();

        let frame = single_frame(presenter_port.take_events());
        assert_eq!(frame.pixel_buffer.pixel_rect().width(), 320);
        assert_eq!(frame.pixel_buffer.pixel_rect().height(), 240);
    }

    #[test]
    fn test_degenerate_viewport_presents_render_error() {
        let (mut session, presenter_port) = session();

        session
            .dispatch(ExplorerEvent::Resize(Viewport::new(0, 0)))
            .unwrap();

        let events = presenter_port.take_events();
        assert!(matches!(&events[..], [RenderEvent::Error(_)]));
    }

    #[test]
    fn test_hover_outline_follows_pointer() {
        let (mut session, presenter_port) = session();

        session
            .dispatch(ExplorerEvent::PassiveMove(ScreenPoint::new(400.0, 300.0)))
            .unwrap();

        let frame = single_frame(presenter_port.take_events());
        assert_ne!(
            frame.pixel_buffer.pixel(Point::new(390, 295)).unwrap(),
            CANVAS_BACKGROUND
        );
        assert_eq!(session.cursor_label(), "Cursor: (0, 0)");
    }

    #[test]
    fn test_hover_outline_tracks_cell_under_pointer_after_zoom() {
        let (mut session, presenter_port) = session();
        session
            .dispatch(ExplorerEvent::PassiveMove(ScreenPoint::new(500.0, 300.0)))
            .unwrap();

        for _ in 0..5 {
            session
                .dispatch(ExplorerEvent::Scroll(ZoomDirection::Out))
                .unwrap();
        }

        // zoom 11.81: cell (8, 0) spans columns 489..500
        let frame = presenter_port.take_events().pop().unwrap();
        let RenderEvent::Frame(frame) = frame else {
            panic!("expected a frame");
        };
        assert_eq!(session.cursor_label(), "Cursor: (8, 0)");
        assert_eq!(
            frame.pixel_buffer.pixel(Point::new(489, 300)),
            Some(HOVER_OUTLINE)
        );
    }
}
