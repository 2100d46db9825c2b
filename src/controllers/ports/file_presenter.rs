use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Persists a finished frame to disk.
pub trait FilePresenterPort {
    /// File extension, without the dot, of the files this presenter writes.
    fn extension(&self) -> &'static str;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
