//! Point-wise and morphological filters over RGB frames.

pub mod filter;
pub mod histogram;
pub mod kernel;
pub mod morphology;
pub mod point_ops;

pub use filter::{FilterOperation, apply_filter};
pub use histogram::{Histogram, histogram};
pub use kernel::{KernelShape, KernelSizeError, StructuringElement};
pub use morphology::{MorphologyOperation, dilate, erode};
pub use point_ops::{invert, linear_contrast};
