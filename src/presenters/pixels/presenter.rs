use crate::controllers::session::data::frame_data::FrameData;
use crate::controllers::session::ports::presenter::SessionPresenterPort;
use crate::core::data::palette::CANVAS_BACKGROUND;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::adapter::PixelsAdapter;
use crate::presenters::pixels::pixel_format::{RGBA_BYTES_PER_PIXEL, copy_frame_to_rgba};
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use std::time::Duration;
use winit::window::Window;

/// Blits session frames onto a `pixels` surface and draws egui on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    has_frame: bool,
    last_presented_generation: u64,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn SessionPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn SessionPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.maybe_draw_frame();

        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the canvas underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;
        self.has_frame = false;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new()),
            width: size.width,
            height: size.height,
            has_frame: false,
            last_presented_generation: 0,
            last_error_message: None,
            last_render_duration: None,
        })
    }

    fn draw_placeholder(&mut self) {
        for pixel in self
            .pixels
            .frame_mut()
            .chunks_exact_mut(RGBA_BYTES_PER_PIXEL)
        {
            pixel.copy_from_slice(&[
                CANVAS_BACKGROUND.r,
                CANVAS_BACKGROUND.g,
                CANVAS_BACKGROUND.b,
                u8::MAX,
            ]);
        }
    }

    fn maybe_draw_frame(&mut self) {
        if let Some(frame) = self.adapter.take_frame() {
            if frame.generation > self.last_presented_generation {
                self.draw_frame(&frame);
            }
        }

        if let Some(error) = self.adapter.take_error() {
            if error.generation >= self.last_presented_generation {
                self.last_error_message = Some(error.message);
            }
        }
    }

    fn draw_frame(&mut self, frame: &FrameData) {
        match copy_frame_to_rgba(&frame.pixel_buffer, self.pixels.frame_mut()) {
            Ok(()) => {
                self.has_frame = true;
                self.last_presented_generation = frame.generation;
                self.last_render_duration = Some(frame.render_duration);
                self.last_error_message = None;
            }
            // stale frame from before a resize
            Err(_) => self.has_frame = false,
        }
    }
}
