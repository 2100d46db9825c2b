use crate::core::data::colour::Colour;
use crate::core::data::palette::{PIXEL_CURVE, PIXEL_DEFAULT, PIXEL_WU};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlgorithmKind {
    Step,
    Dda,
    #[default]
    BresenhamLine,
    BresenhamCircle,
    Wu,
    QuadraticCurve,
}

/// Groups algorithms that share a display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourFamily {
    Default,
    Antialiased,
    Curve,
}

impl ColourFamily {
    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Self::Default => PIXEL_DEFAULT,
            Self::Antialiased => PIXEL_WU,
            Self::Curve => PIXEL_CURVE,
        }
    }
}

impl AlgorithmKind {
    pub const ALL: &'static [Self] = &[
        Self::Step,
        Self::Dda,
        Self::BresenhamLine,
        Self::BresenhamCircle,
        Self::Wu,
        Self::QuadraticCurve,
    ];

    /// Stable identifier used in status lines and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Dda => "dda",
            Self::BresenhamLine => "bresenham-line",
            Self::BresenhamCircle => "bresenham-circle",
            Self::Wu => "wu",
            Self::QuadraticCurve => "curve",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Step => "Step-by-Step",
            Self::Dda => "DDA",
            Self::BresenhamLine => "Bresenham Line",
            Self::BresenhamCircle => "Bresenham Circle",
            Self::Wu => "Wu's Antialiasing",
            Self::QuadraticCurve => "Quadratic Curve",
        }
    }

    #[must_use]
    pub const fn colour_family(self) -> ColourFamily {
        match self {
            Self::Wu => ColourFamily::Antialiased,
            Self::QuadraticCurve => ColourFamily::Curve,
            Self::Step | Self::Dda | Self::BresenhamLine | Self::BresenhamCircle => {
                ColourFamily::Default
            }
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAlgorithmKindError {
    Unknown { id: String },
}

impl fmt::Display for ParseAlgorithmKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { id } => {
                let known: Vec<&str> = AlgorithmKind::ALL.iter().map(|kind| kind.id()).collect();
                write!(f, "unknown algorithm '{}', expected one of: {}", id, known.join(", "))
            }
        }
    }
}

impl Error for ParseAlgorithmKindError {}

impl FromStr for AlgorithmKind {
    type Err = ParseAlgorithmKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| ParseAlgorithmKindError::Unknown { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for &kind in AlgorithmKind::ALL {
            assert_eq!(kind.id().parse::<AlgorithmKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_str_ignores_case_and_whitespace() {
        assert_eq!(" WU ".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Wu));
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let err = "castle".parse::<AlgorithmKind>().unwrap_err();

        assert_eq!(
            err,
            ParseAlgorithmKindError::Unknown {
                id: "castle".to_string()
            }
        );
        assert!(err.to_string().contains("bresenham-circle"));
    }

    #[test]
    fn test_colour_families() {
        assert_eq!(AlgorithmKind::Wu.colour_family().colour(), PIXEL_WU);
        assert_eq!(AlgorithmKind::QuadraticCurve.colour_family().colour(), PIXEL_CURVE);
        assert_eq!(AlgorithmKind::BresenhamCircle.colour_family().colour(), PIXEL_DEFAULT);
        assert_eq!(AlgorithmKind::Step.colour_family(), ColourFamily::Default);
    }

    #[test]
    fn test_all_lists_six_distinct_kinds() {
        let mut ids: Vec<&str> = AlgorithmKind::ALL.iter().map(|kind| kind.id()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 6);
    }
}
