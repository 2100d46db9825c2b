use crate::core::algorithms::rounding::round_to_cell;
use crate::core::data::point::Point;
use std::collections::HashSet;

/// Parameter increment between consecutive curve samples.
pub const CURVE_SAMPLE_STEP: f64 = 0.005;

fn sample_count() -> u32 {
    (1.0 / CURVE_SAMPLE_STEP).round() as u32
}

fn lerp(from: (f64, f64), to: (f64, f64), t: f64) -> (f64, f64) {
    (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
}

fn as_real(point: Point) -> (f64, f64) {
    (f64::from(point.x), f64::from(point.y))
}

/// Flattens a quadratic Bezier curve by fixed-step de Casteljau sampling.
///
/// Both `t = 0` and `t = 1` are sampled. Samples that round to an already
/// visited cell are dropped, so the result holds each cell once in the order
/// it was first reached.
#[must_use]
pub fn quadratic_curve(start: Point, control: Point, end: Point) -> Vec<Point> {
    let (p0, p1, p2) = (as_real(start), as_real(control), as_real(end));
    let intervals = sample_count();

    let mut seen = HashSet::new();
    let mut points = Vec::new();

    for i in 0..=intervals {
        let t = f64::from(i) / f64::from(intervals);
        let a = lerp(p0, p1, t);
        let b = lerp(p1, p2, t);
        let (x, y) = lerp(a, b, t);

        let point = Point {
            x: round_to_cell(x),
            y: round_to_cell(y),
        };
        if seen.insert(point) {
            points.push(point);
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::algorithms::dda::dda_line;

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point { x, y }).collect()
    }

    #[test]
    fn test_samples_both_endpoints() {
        let start = Point::new(770, 8);
        let end = Point::new(790, 20);
        let curve = quadratic_curve(start, Point::new(780, 30), end);

        assert_eq!(curve.first(), Some(&start));
        assert_eq!(curve.last(), Some(&end));
    }

    #[test]
    fn test_collinear_control_gives_straight_segment() {
        let curve = quadratic_curve(Point::new(0, 0), Point::new(5, 0), Point::new(10, 0));

        assert_eq!(curve, (0..=10).map(|x| Point::new(x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn test_midpoint_control_matches_dda() {
        let curve = quadratic_curve(Point::new(0, 0), Point::new(3, 3), Point::new(6, 6));

        assert_eq!(curve, dda_line(Point::new(0, 0), Point::new(6, 6)));
    }

    #[test]
    fn test_arch() {
        let curve = quadratic_curve(Point::new(0, 0), Point::new(2, 2), Point::new(4, 0));

        assert_eq!(
            curve,
            points(&[(0, 0), (1, 0), (1, 1), (2, 1), (3, 1), (3, 0), (4, 0)])
        );
    }

    #[test]
    fn test_degenerate_curve_is_single_point() {
        let p = Point::new(-3, 4);

        assert_eq!(quadratic_curve(p, p, p), vec![p]);
    }

    #[test]
    fn test_no_duplicates() {
        let curve = quadratic_curve(Point::new(-40, 2), Point::new(13, 55), Point::new(30, -8));
        let unique: HashSet<Point> = curve.iter().copied().collect();

        assert_eq!(unique.len(), curve.len());
    }
}
