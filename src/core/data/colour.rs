#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Scales every channel toward black by `coverage`.
    ///
    /// This fakes partial opacity against the dark canvas: `trunc(channel * coverage)`,
    /// with coverage clamped to `[0, 1]`. Full coverage returns the colour unchanged.
    #[must_use]
    pub fn scaled_by_coverage(self, coverage: f64) -> Self {
        if coverage >= 1.0 {
            return self;
        }

        let coverage = if coverage.is_finite() { coverage.max(0.0) } else { 0.0 };
        let scale = |channel: u8| (f64::from(channel) * coverage) as u8;

        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    #[must_use]
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
