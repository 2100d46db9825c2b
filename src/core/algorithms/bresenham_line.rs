use crate::core::data::point::Point;

/// Integer-only Bresenham line, both endpoints included.
///
/// Tracing always starts from the lexicographically smaller endpoint and the
/// result is reversed when needed, so `bresenham_line(b, a)` is exactly the
/// reverse of `bresenham_line(a, b)`.
#[must_use]
pub fn bresenham_line(start: Point, end: Point) -> Vec<Point> {
    if (end.x, end.y) < (start.x, start.y) {
        let mut points = trace(end, start);
        points.reverse();
        return points;
    }

    trace(start, end)
}

fn trace(from: Point, to: Point) -> Vec<Point> {
    let (to_x, to_y) = (i64::from(to.x), i64::from(to.y));
    let (mut x, mut y) = (i64::from(from.x), i64::from(from.y));

    let dx = (to_x - x).abs();
    let dy = (to_y - y).abs();
    let sx = if x < to_x { 1 } else { -1 };
    let sy = if y < to_y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        points.push(Point {
            x: x as i32,
            y: y as i32,
        });

        if x == to_x && y == to_y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}
