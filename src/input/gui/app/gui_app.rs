use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::interactive::ExplorerEvent;
use crate::controllers::session::VisualizationSession;
use crate::controllers::session::coordinate_inputs::CoordinateField;
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::data::viewport::Viewport;
use crate::input::gui::app::pointer_input::PointerInput;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

const HELP_TEXT: &str = "Drag to pan, scroll to zoom. The cursor label shows the grid cell under the pointer.";

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    session: VisualizationSession,
    pointer: PointerInput,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        session: VisualizationSession,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            session,
            pointer: PointerInput::default(),
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;
        self.presenter.resize(width, height)?;

        if width > 0 && height > 0 {
            self.dispatch(ExplorerEvent::Resize(Viewport::new(width, height)));
        }

        Ok(())
    }

    /// Feeds a canvas pointer event to the session. Returns true when it was handled.
    ///
    /// Events egui consumed stay in the UI, except a button release so a drag
    /// that ends over the side window still finishes.
    pub fn handle_pointer_event(&mut self, event: &WindowEvent, egui_consumed: bool) -> bool {
        let explorer_event = match event {
            WindowEvent::CursorMoved { position, .. } => {
                let moved = self.pointer.cursor_moved(*position);
                (!egui_consumed || self.pointer.is_dragging()).then_some(moved)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let was_dragging = self.pointer.is_dragging();
                let pressed = self.pointer.mouse_input(*state, *button);
                match pressed {
                    Some(ExplorerEvent::PointerDown(_)) if egui_consumed => {
                        self.pointer.release();
                        None
                    }
                    Some(ExplorerEvent::PointerUp) if was_dragging => pressed,
                    other => other.filter(|_| !egui_consumed),
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => self.pointer.mouse_wheel(*delta),
            WindowEvent::Focused(false) | WindowEvent::CursorLeft { .. } => self.pointer.release(),
            _ => None,
        };

        match explorer_event {
            Some(explorer_event) => {
                self.dispatch(explorer_event);
                true
            }
            None => false,
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut pending = None;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Raster Explorer")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 320.0])
                .show(ctx, |ui| {
                    egui::Grid::new("coordinate_inputs")
                        .num_columns(2)
                        .show(ui, |ui| {
                            for &field in CoordinateField::ALL {
                                ui.label(field.label());
                                ui.add(
                                    egui::TextEdit::singleline(self.session.inputs_mut().field_mut(field))
                                        .desired_width(80.0),
                                );
                                ui.end_row();
                            }
                        });

                    ui.separator();
                    ui.horizontal_wrapped(|ui| {
                        for &kind in AlgorithmKind::ALL {
                            if ui.button(kind.display_name()).clicked() {
                                pending = Some(ExplorerEvent::RunAlgorithm(kind));
                            }
                        }
                    });

                    ui.separator();
                    ui.label(self.session.status());
                    ui.label(self.session.cursor_label());
                    if let Some(result) = self.session.result() {
                        ui.label(format!("Points: {}", result.points.len()));
                    }
                    ui.label(format!("Zoom: {:.2}", self.session.camera().zoom()));

                    if ui.button("Reset view").clicked() {
                        pending = Some(ExplorerEvent::ResetView);
                    }

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", self.width, self.height));
                    if let Some(render_duration) = self.presenter.last_render_duration() {
                        ui.label(format!("Last frame: {} ms", render_duration.as_millis()));
                    }

                    let message = self
                        .session
                        .error_message()
                        .or(self.presenter.last_error_message());
                    if let Some(message) = message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }

                    egui::CollapsingHeader::new("Help").show(ui, |ui| {
                        ui.label(HELP_TEXT);
                    });
                });
        });

        if let Some(event) = pending {
            self.dispatch(event);
        }

        output
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    fn dispatch(&mut self, event: ExplorerEvent) {
        if let Err(err) = self.session.dispatch(event) {
            eprintln!("Input error: {err}");
        }
    }
}
