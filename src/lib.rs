mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::cli_controller::{CliController, CliError, DEFAULT_OUTPUT_DIR};
pub use controllers::interactive::{ExplorerEvent, InteractiveController};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::session::coordinate_inputs::{CoordinateField, CoordinateInputs, MAX_RASTER_SPAN};
pub use controllers::session::data::frame_data::FrameData;
pub use controllers::session::errors::input_error::InputError;
pub use controllers::session::errors::render_error::RenderError;
pub use controllers::session::events::render_event::RenderEvent;
pub use controllers::session::ports::presenter::SessionPresenterPort;
pub use controllers::session::{READY_STATUS, VisualizationSession};

pub use crate::core::actions::render_frame::render_frame::{FrameScene, RenderFrameError, render_frame};
pub use crate::core::actions::run_algorithm::run_algorithm::{rasterize, run_algorithm};
pub use crate::core::algorithms::bresenham_circle::bresenham_circle;
pub use crate::core::algorithms::bresenham_line::bresenham_line;
pub use crate::core::algorithms::dda::dda_line;
pub use crate::core::algorithms::kinds::{AlgorithmKind, ColourFamily, ParseAlgorithmKindError};
pub use crate::core::algorithms::quadratic_curve::quadratic_curve;
pub use crate::core::algorithms::step::step_line;
pub use crate::core::algorithms::wu_line::wu_line;
pub use crate::core::camera::{Camera, CameraLimits, ZoomDirection};
pub use crate::core::colour_space;
pub use crate::core::data::algorithm_request::AlgorithmRequest;
pub use crate::core::data::algorithm_result::AlgorithmResult;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::coloured_point::ColouredPoint;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::screen_point::ScreenPoint;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::grid::{GridLine, GridLineStyle, visible_grid_lines};
pub use crate::core::image_filter;

pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::memory::frame_store::FrameStore;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
