//! Conversions between RGB, CMYK and CIE XYZ (D65).

pub mod conversions;
pub mod hex;
pub mod models;

pub use conversions::{cmyk_to_rgb, rgb_to_cmyk, rgb_to_xyz, xyz_to_rgb};
pub use hex::{ColourParseError, parse_hex};
pub use models::{Cmyk, GamutMapped, RgbF, Xyz};
