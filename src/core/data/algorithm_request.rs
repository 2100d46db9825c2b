use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::data::point::Point;

/// One rasterization job: three coordinate pairs and the algorithm to run.
///
/// Lines use `start` and `end`. The circle is centred on `start` with radius
/// `|end.x|`. The curve bends toward `control`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AlgorithmRequest {
    pub start: Point,
    pub end: Point,
    pub control: Point,
    pub kind: AlgorithmKind,
}

impl AlgorithmRequest {
    #[must_use]
    pub fn circle_radius(&self) -> i32 {
        self.end.x.saturating_abs()
    }

    /// Largest coordinate distance the selected algorithm will have to walk.
    #[must_use]
    pub fn span(&self) -> i64 {
        match self.kind {
            AlgorithmKind::Step
            | AlgorithmKind::Dda
            | AlgorithmKind::BresenhamLine
            | AlgorithmKind::Wu => self.start.chebyshev_distance(self.end),
            AlgorithmKind::BresenhamCircle => i64::from(self.circle_radius()),
            AlgorithmKind::QuadraticCurve => self
                .start
                .chebyshev_distance(self.control)
                .max(self.control.chebyshev_distance(self.end)),
        }
    }
}
