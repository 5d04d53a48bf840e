//! Recursive Koch and Sierpinski generators.
//!
//! Geometry is carried in `f64` and rounded only when a segment is handed to
//! the line rasterizer. Recursion ends at depth 0 or once a segment is shorter
//! than one pixel, whichever comes first.

use super::Point;
use super::shapes::line;
use crate::grid::Grid;
use crate::pixel::Sample;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        Vec2 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    fn distance(self, other: Vec2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    fn round(self) -> Point {
        // `as` saturates at the i32 range
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2 {
            x: f64::from(p.x),
            y: f64::from(p.y),
        }
    }
}

const SQRT3_2: f64 = 0.866_025_403_784_438_6;
const SQRT3_6: f64 = 0.288_675_134_594_812_9;

fn segment<T: Sample>(grid: &mut Grid<T>, a: Vec2, b: Vec2, value: T) {
    line(grid, a.round(), b.round(), value);
}

fn koch<T: Sample>(grid: &mut Grid<T>, depth: u32, a: Vec2, b: Vec2, value: T) {
    if depth == 0 || a.distance(b) < 1.0 {
        segment(grid, a, b, value);
        return;
    }
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let p1 = a.lerp(b, 1.0 / 3.0);
    let p3 = a.lerp(b, 2.0 / 3.0);
    let mid = a.lerp(b, 0.5);
    // Peak of the equilateral bump on the middle third, left of a -> b with y down.
    let peak = Vec2 {
        x: mid.x + dy * SQRT3_6,
        y: mid.y - dx * SQRT3_6,
    };

    koch(grid, depth - 1, a, p1, value);
    koch(grid, depth - 1, p1, peak, value);
    koch(grid, depth - 1, peak, p3, value);
    koch(grid, depth - 1, p3, b, value);
}

/// Triangle with top edge `start -> start + (width, 0)` and apex below it.
fn base_triangle(start: Point, width: i32) -> [Vec2; 3] {
    let a = Vec2::from(start);
    let w = f64::from(width);
    let b = Vec2 { x: a.x + w, y: a.y };
    let c = Vec2 {
        x: a.x + w / 2.0,
        y: a.y + w * SQRT3_2,
    };
    [a, b, c]
}

pub(crate) fn koch_curve<T: Sample>(grid: &mut Grid<T>, depth: u32, a: Point, b: Point, value: T) {
    koch(grid, depth, a.into(), b.into(), value);
}

/// Three Koch curves around [`base_triangle`], bumps pointing outward.
pub(crate) fn koch_snowflake<T: Sample>(
    grid: &mut Grid<T>,
    depth: u32,
    start: Point,
    width: i32,
    value: T,
) {
    let [a, b, c] = base_triangle(start, width);
    koch(grid, depth, a, b, value);
    koch(grid, depth, b, c, value);
    koch(grid, depth, c, a, value);
}

fn sierpinski<T: Sample>(grid: &mut Grid<T>, depth: u32, tri: [Vec2; 3], value: T) {
    let [a, b, c] = tri;
    if depth == 0 || a.distance(b) < 1.0 {
        segment(grid, a, b, value);
        segment(grid, b, c, value);
        segment(grid, c, a, value);
        return;
    }
    let ab = a.lerp(b, 0.5);
    let bc = b.lerp(c, 0.5);
    let ca = c.lerp(a, 0.5);
    sierpinski(grid, depth - 1, [a, ab, ca], value);
    sierpinski(grid, depth - 1, [ab, b, bc], value);
    sierpinski(grid, depth - 1, [ca, bc, c], value);
}

pub(crate) fn sierpinski_triangle<T: Sample>(
    grid: &mut Grid<T>,
    depth: u32,
    start: Point,
    width: i32,
    value: T,
) {
    sierpinski(grid, depth, base_triangle(start, width), value);
}
