use std::error::Error;
use std::fmt;

pub const MIN_KERNEL_SIZE: u32 = 1;
pub const MAX_KERNEL_SIZE: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelShape {
    #[default]
    Rect,
    Ellipse,
    Cross,
}

impl KernelShape {
    pub const ALL: &'static [Self] = &[Self::Rect, Self::Ellipse, Self::Cross];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rect => "Rect",
            Self::Ellipse => "Ellipse",
            Self::Cross => "Cross",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelSizeError {
    OutOfRange { size: u32, min: u32, max: u32 },
}

impl fmt::Display for KernelSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { size, min, max } => {
                write!(f, "kernel size {} is outside {}..={}", size, min, max)
            }
        }
    }
}

impl Error for KernelSizeError {}

/// Square binary mask centred on its anchor, odd side length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    size: usize,
    mask: Vec<bool>,
}

impl StructuringElement {
    /// Builds the mask for `shape`. Even sizes grow to the next odd size.
    pub fn new(shape: KernelShape, size: u32) -> Result<Self, KernelSizeError> {
        if !(MIN_KERNEL_SIZE..=MAX_KERNEL_SIZE).contains(&size) {
            return Err(KernelSizeError::OutOfRange {
                size,
                min: MIN_KERNEL_SIZE,
                max: MAX_KERNEL_SIZE,
            });
        }

        let size = (if size % 2 == 0 { size + 1 } else { size }) as usize;
        let center = size / 2;
        let mut mask = vec![false; size * size];

        for row in 0..size {
            let (first, last) = match shape {
                KernelShape::Rect => (0, size),
                KernelShape::Cross if row == center => (0, size),
                KernelShape::Cross => (center, center + 1),
                KernelShape::Ellipse => ellipse_span(row, size),
            };

            mask[row * size + first..row * size + last].fill(true);
        }

        Ok(Self { size, mask })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.size && column < self.size && self.mask[row * self.size + column]
    }

    /// `(dx, dy)` offsets of the set cells relative to the anchor.
    pub fn offsets(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let center = (self.size / 2) as i64;

        self.mask
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(index, _)| {
                let row = (index / self.size) as i64;
                let column = (index % self.size) as i64;
                (column - center, row - center)
            })
    }
}

/// Half-open column range of an ellipse row: `dx = round(c * sqrt((r^2 - dy^2) / r^2))`.
fn ellipse_span(row: usize, size: usize) -> (usize, usize) {
    let radius = (size / 2) as f64;
    let center = size / 2;
    let dy = row as f64 - radius;

    if radius == 0.0 {
        return (0, size);
    }
    if dy.abs() > radius {
        return (0, 0);
    }

    let dx = (radius * ((radius * radius - dy * dy) / (radius * radius)).sqrt()).round();
    let dx = dx as usize;

    (center.saturating_sub(dx), (center + dx + 1).min(size))
}
