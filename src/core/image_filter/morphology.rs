use rayon::prelude::*;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::image_filter::kernel::StructuringElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MorphologyOperation {
    #[default]
    Erode,
    Dilate,
}

impl MorphologyOperation {
    fn combine(self, a: u8, b: u8) -> u8 {
        match self {
            Self::Erode => a.min(b),
            Self::Dilate => a.max(b),
        }
    }

    fn identity(self) -> u8 {
        match self {
            Self::Erode => u8::MAX,
            Self::Dilate => u8::MIN,
        }
    }
}

/// Per-channel minimum over the element's neighbourhood.
#[must_use]
pub fn erode(buffer: &PixelBuffer, element: &StructuringElement) -> PixelBuffer {
    morph(buffer, element, MorphologyOperation::Erode)
}

/// Per-channel maximum over the element's neighbourhood.
#[must_use]
pub fn dilate(buffer: &PixelBuffer, element: &StructuringElement) -> PixelBuffer {
    morph(buffer, element, MorphologyOperation::Dilate)
}

/// Applies one morphology pass. Neighbours outside the frame are ignored.
#[must_use]
pub fn morph(
    buffer: &PixelBuffer,
    element: &StructuringElement,
    operation: MorphologyOperation,
) -> PixelBuffer {
    let rect = buffer.pixel_rect();
    let width = i64::from(rect.width());
    let height = i64::from(rect.height());
    let stride = buffer.row_stride();
    let source = buffer.buffer();
    let offsets: Vec<(i64, i64)> = element.offsets().collect();

    let mut output = buffer.clone();

    output
        .buffer_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as i64;

            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let x = x as i64;
                let mut acc = [operation.identity(); BYTES_PER_PIXEL];

                for &(dx, dy) in &offsets {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || ny < 0 || nx >= width || ny >= height {
                        continue;
                    }

                    let index = ny as usize * stride + nx as usize * BYTES_PER_PIXEL;
                    for (channel, value) in acc.iter_mut().enumerate() {
                        *value = operation.combine(*value, source[index + channel]);
                    }
                }

                pixel.copy_from_slice(&acc);
            }
        });

    output
}
