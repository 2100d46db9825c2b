use crate::core::algorithms::rounding::round_to_cell;
use crate::core::data::coloured_point::ColouredPoint;
use crate::core::data::point::Point;

fn ipart(value: f64) -> f64 {
    value.floor()
}

fn fpart(value: f64) -> f64 {
    value - value.floor()
}

fn rfpart(value: f64) -> f64 {
    1.0 - fpart(value)
}

struct Plotter {
    steep: bool,
    points: Vec<ColouredPoint>,
}

impl Plotter {
    fn plot(&mut self, major: f64, minor: f64, coverage: f64) {
        let (major, minor) = (round_to_cell(major), round_to_cell(minor));
        let point = if self.steep {
            Point { x: minor, y: major }
        } else {
            Point { x: major, y: minor }
        };

        self.points
            .push(ColouredPoint::with_coverage(point, coverage.clamp(0.0, 1.0)));
    }

    fn plot_pair(&mut self, major: f64, minor: f64, coverage: f64) {
        self.plot(major, ipart(minor), rfpart(minor) * coverage);
        self.plot(major, ipart(minor) + 1.0, fpart(minor) * coverage);
    }
}

/// Xiaolin Wu's antialiased line.
///
/// Every column along the major axis gets two cells straddling the ideal
/// line, weighted by how close the line passes to each. The two endpoint
/// pairs come first, then the interior pairs in ascending major-axis order.
/// Zero-coverage cells are kept so every column contributes exactly two points.
#[must_use]
pub fn wu_line(start: Point, end: Point) -> Vec<ColouredPoint> {
    let (mut x0, mut y0) = (f64::from(start.x), f64::from(start.y));
    let (mut x1, mut y1) = (f64::from(end.x), f64::from(end.y));

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let mut plotter = Plotter {
        steep,
        points: Vec::with_capacity(2 * (dx as usize + 1)),
    };

    let first_x = x0.round();
    let first_y = y0 + gradient * (first_x - x0);
    plotter.plot_pair(first_x, first_y, rfpart(x0 + 0.5));

    let last_x = x1.round();
    let last_y = y1 + gradient * (last_x - x1);
    plotter.plot_pair(last_x, last_y, fpart(x1 + 0.5));

    let interior = (last_x - first_x) as i64 - 1;
    for i in 1..=interior {
        let intery = first_y + gradient * i as f64;
        plotter.plot_pair(first_x + i as f64, intery, 1.0);
    }

    plotter.points
}
