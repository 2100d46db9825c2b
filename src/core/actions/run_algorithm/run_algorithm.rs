use crate::core::algorithms::bresenham_circle::bresenham_circle;
use crate::core::algorithms::bresenham_line::bresenham_line;
use crate::core::algorithms::dda::dda_line;
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::algorithms::quadratic_curve::quadratic_curve;
use crate::core::algorithms::step::step_line;
use crate::core::algorithms::wu_line::wu_line;
use crate::core::data::algorithm_request::AlgorithmRequest;
use crate::core::data::algorithm_result::AlgorithmResult;
use crate::core::data::coloured_point::ColouredPoint;
use crate::core::data::point::Point;
use std::time::Instant;

fn opaque(points: Vec<Point>) -> Vec<ColouredPoint> {
    points.into_iter().map(ColouredPoint::from).collect()
}

/// Runs the requested algorithm without timing it.
///
/// The circle is centred on `start` with radius `|end.x|`; the curve bends
/// towards `control`. Every other kind ignores `control`.
#[must_use]
pub fn rasterize(request: &AlgorithmRequest) -> Vec<ColouredPoint> {
    let AlgorithmRequest {
        start,
        end,
        control,
        kind,
    } = *request;

    match kind {
        AlgorithmKind::Step => opaque(step_line(start, end)),
        AlgorithmKind::Dda => opaque(dda_line(start, end)),
        AlgorithmKind::BresenhamLine => opaque(bresenham_line(start, end)),
        AlgorithmKind::BresenhamCircle => {
            opaque(bresenham_circle(start, request.circle_radius()))
        }
        AlgorithmKind::Wu => wu_line(start, end),
        AlgorithmKind::QuadraticCurve => opaque(quadratic_curve(start, control, end)),
    }
}

/// Rasterizes `request` and records the wall-clock time it took.
#[must_use]
pub fn run_algorithm(request: &AlgorithmRequest) -> AlgorithmResult {
    let started = Instant::now();
    let points = rasterize(request);
    let elapsed = started.elapsed();

    AlgorithmResult {
        kind: request.kind,
        points,
        elapsed,
        colour: request.kind.colour_family().colour(),
    }
}
