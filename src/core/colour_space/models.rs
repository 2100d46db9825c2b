use crate::core::data::colour::Colour;

/// Real-valued RGB on the `0.0..=255.0` scale, as produced by the inverse conversions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbF {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbF {
    /// Rounds each channel to the nearest byte, saturating at the ends.
    #[must_use]
    pub fn to_colour(self) -> Colour {
        let channel = |value: f64| value.round().clamp(0.0, 255.0) as u8;

        Colour {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

impl From<Colour> for RgbF {
    fn from(colour: Colour) -> Self {
        Self {
            r: f64::from(colour.r),
            g: f64::from(colour.g),
            b: f64::from(colour.b),
        }
    }
}

/// Cyan, magenta, yellow and key, each in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// CIE XYZ under the D65 white point, scaled so white has `y = 100`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A conversion result that may have been clamped into the target gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutMapped<T> {
    pub value: T,
    pub out_of_gamut: bool,
}
