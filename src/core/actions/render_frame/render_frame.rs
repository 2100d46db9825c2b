use rayon::prelude::*;

use crate::core::camera::Camera;
use crate::core::data::colour::Colour;
use crate::core::data::coloured_point::ColouredPoint;
use crate::core::data::palette::{CANVAS_BACKGROUND, HOVER_OUTLINE};
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::grid::{GridOrientation, visible_grid_lines};
use std::error::Error;
use std::fmt;

/// Cells are inset by one pixel on every side above this zoom.
pub const CELL_INSET_MIN_ZOOM: f64 = 5.0;

#[derive(Debug)]
pub enum RenderFrameError {
    Viewport(PixelRectError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<PixelRectError> for RenderFrameError {
    fn from(err: PixelRectError) -> Self {
        Self::Viewport(err)
    }
}

/// Everything one frame is composed from.
#[derive(Debug, Clone, Copy)]
pub struct FrameScene<'a> {
    pub camera: &'a Camera,
    pub viewport: Viewport,
    pub points: &'a [ColouredPoint],
    pub point_colour: Colour,
    pub hover_cell: Option<Point>,
}

/// Half-open pixel range `[start, end)` along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: i64,
    end: i64,
}

impl Span {
    fn stroke(position: f64, thickness: u32) -> Self {
        let start = position.round() as i64 - i64::from(thickness / 2);

        Self {
            start,
            end: start + i64::from(thickness),
        }
    }

    fn cell(center: f64, size: f64, inset: f64) -> Self {
        let half = size / 2.0;

        Self {
            start: (center - half + inset).round() as i64,
            end: (center + half - inset).round() as i64,
        }
    }

    fn contains(&self, value: i64) -> bool {
        value >= self.start && value < self.end
    }

    fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    fn overlaps(&self, limit: i64) -> bool {
        !self.is_empty() && self.end > 0 && self.start < limit
    }
}

#[derive(Debug, Clone, Copy)]
struct CellRect {
    columns: Span,
    rows: Span,
    colour: Colour,
}

/// Screen-space paint list, built once and shared read-only by the row painters.
struct FramePlan {
    width: i64,
    vertical_lines: Vec<(Span, Colour)>,
    horizontal_lines: Vec<(Span, Colour)>,
    cells: Vec<CellRect>,
    cells_by_row: Vec<Vec<usize>>,
    hover: Option<CellRect>,
}

impl FramePlan {
    fn new(scene: &FrameScene<'_>) -> Self {
        let width = i64::from(scene.viewport.width);
        let height = i64::from(scene.viewport.height);
        let zoom = scene.camera.zoom();

        let mut vertical_lines = Vec::new();
        let mut horizontal_lines = Vec::new();
        for line in visible_grid_lines(scene.camera, scene.viewport) {
            let entry = (
                Span::stroke(line.position, line.style.thickness()),
                line.style.colour(),
            );
            match line.orientation {
                GridOrientation::Vertical => vertical_lines.push(entry),
                GridOrientation::Horizontal => horizontal_lines.push(entry),
            }
        }

        let inset = if zoom > CELL_INSET_MIN_ZOOM { 1.0 } else { 0.0 };
        let cells: Vec<CellRect> = scene
            .points
            .iter()
            .map(|coloured| {
                let center = scene.camera.to_screen(coloured.point, scene.viewport);
                CellRect {
                    columns: Span::cell(center.x, zoom, inset),
                    rows: Span::cell(center.y, zoom, inset),
                    colour: scene.point_colour.scaled_by_coverage(coloured.coverage),
                }
            })
            .filter(|cell| cell.columns.overlaps(width) && cell.rows.overlaps(height))
            .collect();

        let mut cells_by_row = vec![Vec::new(); height as usize];
        for (index, cell) in cells.iter().enumerate() {
            let first = cell.rows.start.max(0);
            let last = cell.rows.end.min(height);
            for row in first..last {
                cells_by_row[row as usize].push(index);
            }
        }

        let hover = scene.hover_cell.map(|cell| {
            let center = scene.camera.to_screen(cell, scene.viewport);
            CellRect {
                columns: Span::cell(center.x, zoom, 0.0),
                rows: Span::cell(center.y, zoom, 0.0),
                colour: HOVER_OUTLINE,
            }
        });

        Self {
            width,
            vertical_lines,
            horizontal_lines,
            cells,
            cells_by_row,
            hover,
        }
    }

    fn fill(&self, row: &mut [u8], columns: Span, colour: Colour) {
        let start = columns.start.clamp(0, self.width) as usize;
        let end = columns.end.clamp(0, self.width) as usize;
        if start >= end {
            return;
        }

        for pixel in row[start * BYTES_PER_PIXEL..end * BYTES_PER_PIXEL]
            .chunks_exact_mut(BYTES_PER_PIXEL)
        {
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b]);
        }
    }

    fn paint_row(&self, y: i64, row: &mut [u8]) {
        let full_row = Span {
            start: 0,
            end: self.width,
        };

        self.fill(row, full_row, CANVAS_BACKGROUND);

        for &(columns, colour) in &self.vertical_lines {
            self.fill(row, columns, colour);
        }
        for &(rows, colour) in &self.horizontal_lines {
            if rows.contains(y) {
                self.fill(row, full_row, colour);
            }
        }

        for &index in &self.cells_by_row[y as usize] {
            let cell = self.cells[index];
            self.fill(row, cell.columns, cell.colour);
        }

        if let Some(hover) = self.hover {
            self.paint_outline_row(y, row, hover);
        }
    }

    fn paint_outline_row(&self, y: i64, row: &mut [u8], outline: CellRect) {
        let CellRect {
            columns,
            rows,
            colour,
        } = outline;

        if columns.is_empty() || !rows.contains(y) {
            return;
        }

        if y == rows.start || y == rows.end - 1 {
            self.fill(row, columns, colour);
        } else {
            let left = Span {
                start: columns.start,
                end: columns.start + 1,
            };
            let right = Span {
                start: columns.end - 1,
                end: columns.end,
            };
            self.fill(row, left, colour);
            self.fill(row, right, colour);
        }
    }
}

/// Composes the grid, the result cells and the hover outline into one frame.
///
/// Layers are painted back to front: background, vertical grid lines,
/// horizontal grid lines, cells in result order, hover outline. Rows are
/// painted in parallel; each row only reads the shared paint list.
pub fn render_frame(scene: &FrameScene<'_>) -> Result<PixelBuffer, RenderFrameError> {
    let pixel_rect = scene.viewport.pixel_rect()?;
    let plan = FramePlan::new(scene);

    let mut buffer = PixelBuffer::filled(pixel_rect, CANVAS_BACKGROUND);
    let stride = buffer.row_stride();

    buffer
        .buffer_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| plan.paint_row(y as i64, row));

    Ok(buffer)
}
