use crate::core::algorithms::rounding::round_to_cell;
use crate::core::data::point::Point;

/// Walks from `from` to `to` inclusive in unit steps, in either direction.
pub(crate) fn inclusive_walk(from: i32, to: i32) -> impl Iterator<Item = i32> {
    let direction: i64 = if to >= from { 1 } else { -1 };
    let length = (i64::from(to) - i64::from(from)).abs();

    (0..=length).map(move |i| (i64::from(from) + i * direction) as i32)
}

/// Slope-intercept scan along the dominant axis.
///
/// The dependent coordinate is `round(k * t + b)`. A zero span on the
/// dominant axis can only happen for coincident points, which return the
/// single point; the guard still treats the slope as 0.
#[must_use]
pub fn step_line(start: Point, end: Point) -> Vec<Point> {
    if start == end {
        return vec![start];
    }

    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);

    if dx.abs() >= dy.abs() {
        let k = if dx != 0 { dy as f64 / dx as f64 } else { 0.0 };
        let b = f64::from(start.y) - k * f64::from(start.x);

        inclusive_walk(start.x, end.x)
            .map(|x| Point {
                x,
                y: round_to_cell(k * f64::from(x) + b),
            })
            .collect()
    } else {
        let k = if dy != 0 { dx as f64 / dy as f64 } else { 0.0 };
        let b = f64::from(start.x) - k * f64::from(start.y);

        inclusive_walk(start.y, end.y)
            .map(|y| Point {
                x: round_to_cell(k * f64::from(y) + b),
                y,
            })
            .collect()
    }
}
