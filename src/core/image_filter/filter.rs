use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::image_filter::kernel::{KernelShape, KernelSizeError, StructuringElement};
use crate::core::image_filter::morphology::{MorphologyOperation, morph};
use crate::core::image_filter::point_ops::{invert, linear_contrast};

/// One complete processing step, as chosen in a filter panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterOperation {
    PointWise {
        alpha: f64,
        beta: f64,
        invert: bool,
    },
    Morphology {
        operation: MorphologyOperation,
        shape: KernelShape,
        size: u32,
    },
}

impl Default for FilterOperation {
    fn default() -> Self {
        Self::PointWise {
            alpha: 1.0,
            beta: 0.0,
            invert: false,
        }
    }
}

pub fn apply_filter(
    buffer: &PixelBuffer,
    filter: &FilterOperation,
) -> Result<PixelBuffer, KernelSizeError> {
    match *filter {
        FilterOperation::PointWise {
            alpha,
            beta,
            invert: negate,
        } => {
            let adjusted = linear_contrast(buffer, alpha, beta);
            Ok(if negate { invert(&adjusted) } else { adjusted })
        }
        FilterOperation::Morphology {
            operation,
            shape,
            size,
        } => {
            let element = StructuringElement::new(shape, size)?;
            Ok(morph(buffer, &element, operation))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    fn buffer() -> PixelBuffer {
        let rect = PixelRect::new(Point::new(0, 0), Point::new(2, 2)).unwrap();

        PixelBuffer::filled(rect, Colour::new(100, 50, 0))
    }

    #[test]
    fn test_default_filter_is_identity() {
        assert_eq!(apply_filter(&buffer(), &FilterOperation::default()), Ok(buffer()));
    }

    #[test]
    fn test_contrast_then_invert() {
        let output = apply_filter(
            &buffer(),
            &FilterOperation::PointWise {
                alpha: 2.0,
                beta: 0.0,
                invert: true,
            },
        )
        .unwrap();

        assert_eq!(output.pixel(Point::new(1, 1)), Some(Colour::new(55, 155, 255)));
    }

    #[test]
    fn test_bad_kernel_size_is_an_error() {
        let result = apply_filter(
            &buffer(),
            &FilterOperation::Morphology {
                operation: MorphologyOperation::Dilate,
                shape: KernelShape::Ellipse,
                size: 40,
            },
        );

        assert!(result.is_err());
    }
}
