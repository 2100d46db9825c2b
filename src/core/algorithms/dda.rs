use crate::core::algorithms::rounding::round_to_cell;
use crate::core::data::point::Point;

/// Digital differential analyzer.
///
/// Takes `steps = max(|dx|, |dy|)` equal increments and emits `steps + 1`
/// rounded samples. Sample `i` is evaluated as `start + i * delta / steps`
/// instead of by repeated addition, so walking the line backwards hits the
/// same real values and the output is the exact reverse.
#[must_use]
pub fn dda_line(start: Point, end: Point) -> Vec<Point> {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![start];
    }

    (0..=steps)
        .map(|i| Point {
            x: sample(start.x, dx, i, steps),
            y: sample(start.y, dy, i, steps),
        })
        .collect()
}

/// `round(origin + delta * i / steps)`. The product is taken in `i128`,
/// since `delta * i` can exceed `i64` for lines spanning the whole `i32` range.
fn sample(origin: i32, delta: i64, i: i64, steps: i64) -> i32 {
    let offset = (i128::from(delta) * i128::from(i)) as f64 / steps as f64;

    round_to_cell(f64::from(origin) + offset)
}
