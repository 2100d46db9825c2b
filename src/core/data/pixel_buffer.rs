use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel {} outside of frame {}x{}",
                    pixel,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "frame needs {} bytes but buffer holds {}",
                    pixel_rect_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB frame, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn filled(pixel_rect: PixelRect, colour: Colour) -> Self {
        let buffer = [colour.r, colour.g, colour.b]
            .into_iter()
            .cycle()
            .take(pixel_rect_to_buffer_size(pixel_rect))
            .collect();

        Self { pixel_rect, buffer }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let pixel_rect_size = pixel_rect_to_buffer_size(pixel_rect);

        if pixel_rect_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.pixel_rect.width() as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.pixel_rect.pixel_index(pixel)? * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .pixel_rect
            .pixel_index(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            })?
            * BYTES_PER_PIXEL;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_filled_repeats_colour() {
        let colour = Colour::new(1, 2, 3);
        let buffer = PixelBuffer::filled(create_pixel_rect(2, 2), colour);

        assert_eq!(buffer.buffer(), &[1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_from_data_rejects_wrong_length() {
        let result = PixelBuffer::from_data(create_pixel_rect(2, 2), vec![0; 11]);

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 11
            })
        );
    }

    #[test]
    fn test_set_then_read_pixel() {
        let mut buffer = PixelBuffer::filled(create_pixel_rect(3, 2), Colour::default());
        let red = Colour::new(255, 0, 0);

        buffer.set_pixel(Point { x: 2, y: 1 }, red).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), Some(red));
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Some(Colour::default()));
        assert_eq!(&buffer.buffer()[15..18], &[255, 0, 0]);
    }

    #[test]
    fn test_set_pixel_outside_fails() {
        let pixel_rect = create_pixel_rect(2, 2);
        let mut buffer = PixelBuffer::filled(pixel_rect, Colour::default());
        let pixel = Point { x: 2, y: 0 };

        assert_eq!(
            buffer.set_pixel(pixel, Colour::default()),
            Err(PixelBufferError::PixelOutsideBounds { pixel, pixel_rect })
        );
        assert_eq!(buffer.pixel(pixel), None);
    }

    #[test]
    fn test_row_stride() {
        let buffer = PixelBuffer::filled(create_pixel_rect(5, 2), Colour::default());

        assert_eq!(buffer.row_stride(), 15);
    }
}
