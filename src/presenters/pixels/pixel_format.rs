//! RGB frame to RGBA surface conversion.

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::error::Error;
use std::fmt;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSizeMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for SurfaceSizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "surface holds {} bytes but the frame needs {}",
            self.actual, self.expected
        )
    }
}

impl Error for SurfaceSizeMismatch {}

/// Copies `frame` into an RGBA surface, alpha fully opaque.
pub fn copy_frame_to_rgba(
    frame: &PixelBuffer,
    surface: &mut [u8],
) -> Result<(), SurfaceSizeMismatch> {
    let expected = frame.pixel_rect().size() * RGBA_BYTES_PER_PIXEL;
    if surface.len() != expected {
        return Err(SurfaceSizeMismatch {
            expected,
            actual: surface.len(),
        });
    }

    for (src, dst) in frame
        .buffer()
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(surface.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst[..BYTES_PER_PIXEL].copy_from_slice(src);
        dst[3] = u8::MAX;
    }

    Ok(())
}
