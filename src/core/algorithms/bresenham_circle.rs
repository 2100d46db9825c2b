use crate::core::data::point::Point;
use std::collections::HashSet;

/// Midpoint circle with decision variable `d = 3 - 2r`.
///
/// One octant is traced from `(0, r)` while `y >= x` and each offset is
/// mirrored into all eight octants. Mirrored duplicates on the axes and
/// diagonals are dropped, keeping first-occurrence order.
///
/// Radius 0 yields just the centre. A negative radius yields nothing.
#[must_use]
pub fn bresenham_circle(center: Point, radius: i32) -> Vec<Point> {
    if radius < 0 {
        return Vec::new();
    }

    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let r = i64::from(radius);

    let mut x: i64 = 0;
    let mut y: i64 = r;
    let mut d: i64 = 3 - 2 * r;

    let mut seen = HashSet::new();
    let mut points = Vec::new();

    while y >= x {
        let reflections = [
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ];

        for (ox, oy) in reflections {
            let point = Point {
                x: (cx + ox) as i32,
                y: (cy + oy) as i32,
            };
            if seen.insert(point) {
                points.push(point);
            }
        }

        // the update reads the already-advanced x and y
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
    }

    points
}
