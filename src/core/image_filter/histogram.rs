use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

pub const HISTOGRAM_BINS: usize = 256;

/// Per-channel value counts, indexed `[channel][value]` with channels in RGB order.
pub type Histogram = [[u32; HISTOGRAM_BINS]; BYTES_PER_PIXEL];

#[must_use]
pub fn histogram(buffer: &PixelBuffer) -> Histogram {
    let mut bins = [[0; HISTOGRAM_BINS]; BYTES_PER_PIXEL];

    for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
        for (channel, &value) in pixel.iter().enumerate() {
            bins[channel][usize::from(value)] += 1;
        }
    }

    bins
}
