use rayon::prelude::*;

use crate::core::data::pixel_buffer::PixelBuffer;

/// `saturate(round(|v * alpha + beta|))` on every channel byte.
#[must_use]
pub fn linear_contrast(buffer: &PixelBuffer, alpha: f64, beta: f64) -> PixelBuffer {
    let mut output = buffer.clone();

    output.buffer_mut().par_iter_mut().for_each(|value| {
        let scaled = (f64::from(*value) * alpha + beta).abs().round();
        *value = scaled.min(255.0) as u8;
    });

    output
}

/// Photographic negative: `255 - v` on every channel byte.
#[must_use]
pub fn invert(buffer: &PixelBuffer) -> PixelBuffer {
    let mut output = buffer.clone();

    output
        .buffer_mut()
        .par_iter_mut()
        .for_each(|value| *value = u8::MAX - *value);

    output
}
