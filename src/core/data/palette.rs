//! Fixed colours of the dark canvas theme.

use crate::core::data::colour::Colour;

pub const CANVAS_BACKGROUND: Colour = Colour::from_hex(0x1e1e1e);
pub const GRID_LINE: Colour = Colour::from_hex(0x333333);
pub const GRID_LINE_MAJOR: Colour = Colour::from_hex(0x444444);
pub const AXIS_LINE: Colour = Colour::from_hex(0x5c5c5c);
pub const HOVER_OUTLINE: Colour = Colour::from_hex(0x666666);

pub const PIXEL_DEFAULT: Colour = Colour::from_hex(0x00ff00);
pub const PIXEL_WU: Colour = Colour::from_hex(0x00ffff);
pub const PIXEL_CURVE: Colour = Colour::from_hex(0xff00ff);
