use crate::core::camera::Camera;
use crate::core::data::colour::Colour;
use crate::core::data::palette::{AXIS_LINE, GRID_LINE, GRID_LINE_MAJOR};
use crate::core::data::viewport::Viewport;

/// Lines whose index is a multiple of this are drawn as major lines.
pub const MAJOR_LINE_INTERVAL: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridOrientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLineStyle {
    Axis,
    Major,
    Minor,
}

impl GridLineStyle {
    #[must_use]
    pub fn for_index(index: i64) -> Self {
        if index == 0 {
            Self::Axis
        } else if index % MAJOR_LINE_INTERVAL == 0 {
            Self::Major
        } else {
            Self::Minor
        }
    }

    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Self::Axis => AXIS_LINE,
            Self::Major => GRID_LINE_MAJOR,
            Self::Minor => GRID_LINE,
        }
    }

    /// Stroke width in pixels.
    #[must_use]
    pub const fn thickness(self) -> u32 {
        match self {
            Self::Axis => 2,
            Self::Major | Self::Minor => 1,
        }
    }
}

/// One grid line at a logical index, positioned in screen pixels.
///
/// `position` is an x coordinate for vertical lines and a y coordinate for
/// horizontal ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub orientation: GridOrientation,
    pub index: i64,
    pub position: f64,
    pub style: GridLineStyle,
}

/// Yields every grid line that crosses the viewport, verticals first.
///
/// Computed fresh on each call; the range is derived from the camera so the
/// grid looks infinite at any pan offset.
pub fn visible_grid_lines(
    camera: &Camera,
    viewport: Viewport,
) -> impl Iterator<Item = GridLine> + use<> {
    let origin = camera.origin_on_screen(viewport);
    let zoom = camera.zoom();
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    let first_column = (-origin.x / zoom).floor() as i64;
    let last_column = ((width - origin.x) / zoom).ceil() as i64;
    let first_row = ((origin.y - height) / zoom).floor() as i64;
    let last_row = (origin.y / zoom).ceil() as i64;

    let verticals = (first_column..=last_column).map(move |index| GridLine {
        orientation: GridOrientation::Vertical,
        index,
        position: origin.x + index as f64 * zoom,
        style: GridLineStyle::for_index(index),
    });

    let horizontals = (first_row..=last_row).map(move |index| GridLine {
        orientation: GridOrientation::Horizontal,
        index,
        position: origin.y - index as f64 * zoom,
        style: GridLineStyle::for_index(index),
    });

    verticals.chain(horizontals)
}
