use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::data::colour::Colour;
use crate::core::data::coloured_point::ColouredPoint;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResult {
    pub kind: AlgorithmKind,
    pub points: Vec<ColouredPoint>,
    pub elapsed: Duration,
    pub colour: Colour,
}

impl AlgorithmResult {
    #[must_use]
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// `Executed: <id> (<ms> ms)` with four decimal places.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "Executed: {} ({:.4} ms)",
            self.kind.id(),
            self.elapsed_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::palette::PIXEL_DEFAULT;

    #[test]
    fn test_status_line_has_four_decimals() {
        let result = AlgorithmResult {
            kind: AlgorithmKind::Dda,
            points: Vec::new(),
            elapsed: Duration::from_micros(1234),
            colour: PIXEL_DEFAULT,
        };

        assert_eq!(result.status_line(), "Executed: dda (1.2340 ms)");
    }
}
