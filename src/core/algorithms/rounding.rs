//! The single rounding convention shared by the camera and the rasterizers.
//!
//! Ties go away from zero (`f64::round`): 0.5 -> 1, -0.5 -> -1, 2.5 -> 3.

/// Rounds to the nearest lattice coordinate, saturating into `i32`.
#[inline]
#[must_use]
pub fn round_to_cell(value: f64) -> i32 {
    // `as` saturates and maps NaN to 0
    value.round() as i32
}
