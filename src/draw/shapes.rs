//! Rasterizers over a [`Grid`]. Writes outside the grid are dropped.

use super::Point;
use crate::grid::Grid;
use crate::pixel::Sample;

/// Bresenham line, endpoints included.
///
/// Endpoints are put in a canonical order first, so `line(a, b)` and
/// `line(b, a)` touch exactly the same pixels. Step `k` along the major axis
/// puts the minor coordinate at `k * d_minor / n` rounded half up, which is
/// the pixel the incremental error term picks. The step range is clipped to
/// the grid along the major axis before walking, so far-off endpoints cost
/// nothing.
pub(crate) fn line<T: Sample>(grid: &mut Grid<T>, a: Point, b: Point, value: T) {
    let (a, b) = if (b.x, b.y) < (a.x, a.y) { (b, a) } else { (a, b) };
    let (x1, y1) = (i64::from(a.x), i64::from(a.y));
    let (dx, dy) = (i64::from(b.x) - x1, i64::from(b.y) - y1);
    let n = dx.abs().max(dy.abs());
    if n == 0 {
        grid.put(x1, y1, value);
        return;
    }

    let (start, step, len) = if dx.abs() >= dy.abs() {
        (x1, dx.signum(), i64::from(grid.width()))
    } else {
        (y1, dy.signum(), i64::from(grid.height()))
    };
    let (k0, k1) = if step > 0 {
        (-start, len - 1 - start)
    } else {
        (start - (len - 1), start)
    };
    let (k0, k1) = (k0.max(0), k1.min(n));

    for k in k0..=k1 {
        grid.put(x1 + step_offset(k, dx, n), y1 + step_offset(k, dy, n), value);
    }
}

/// `k * d / n` rounded half up in magnitude, for `0 <= k <= n`, `|d| <= n`.
fn step_offset(k: i64, d: i64, n: i64) -> i64 {
    let (k, m, n) = (i128::from(k), i128::from(d.abs()), i128::from(n));
    let q = (2 * k * m + n) / (2 * n);
    // |q| <= |d|, which came from an i64
    let q = i64::try_from(q).unwrap_or(i64::MAX);
    if d < 0 { -q } else { q }
}

/// Corners `p`, `p + (w, 0)`, `p + (w, h)`, `p + (0, h)`.
fn corners(p: Point, width: i32, height: i32) -> [Point; 4] {
    let x2 = p.x.saturating_add(width);
    let y2 = p.y.saturating_add(height);
    [p, Point::new(x2, p.y), Point::new(x2, y2), Point::new(p.x, y2)]
}

pub(crate) fn rectangle<T: Sample>(
    grid: &mut Grid<T>,
    p: Point,
    width: i32,
    height: i32,
    value: T,
) {
    polygon(grid, &corners(p, width, height), value);
}

/// Outline plus interior. Non-positive width or height draws nothing.
pub(crate) fn filled_rectangle<T: Sample>(
    grid: &mut Grid<T>,
    p: Point,
    width: i32,
    height: i32,
    value: T,
) {
    if width <= 0 || height <= 0 {
        return;
    }
    let [top_left, _, bottom_right, _] = corners(p, width, height);
    let Some((x0, x1)) = clamp_span(grid.width(), i64::from(top_left.x), i64::from(bottom_right.x))
    else {
        return;
    };
    let Some((y0, y1)) = clamp_span(grid.height(), i64::from(top_left.y), i64::from(bottom_right.y))
    else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            grid.put(x, y, value);
        }
    }
}

/// Intersect the inclusive range `[lo, hi]` with `[0, len)`.
fn clamp_span(len: u32, lo: i64, hi: i64) -> Option<(i64, i64)> {
    let lo = lo.max(0);
    let hi = hi.min(i64::from(len) - 1);
    (lo <= hi).then_some((lo, hi))
}

/// Midpoint circle outline. A negative radius draws nothing; radius 0 is the
/// center pixel.
pub(crate) fn circle<T: Sample>(grid: &mut Grid<T>, center: Point, radius: i32, value: T) {
    if radius < 0 {
        return;
    }
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let r = i64::from(radius);
    let (w, h) = (i64::from(grid.width()), i64::from(grid.height()));
    if cx + r < 0 || cy + r < 0 || cx - r >= w || cy - r >= h {
        return;
    }
    // Every octant point has one offset of at least `y`; past `reach` none lands.
    let reach = [cx, w - 1 - cx, cy, h - 1 - cy]
        .into_iter()
        .map(i64::abs)
        .max()
        .unwrap_or(0);
    let mut x = r;
    let mut y = 0i64;
    let mut err = 1 - x;

    while x >= y && y <= reach {
        for (ox, oy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            grid.put(cx + ox, cy + oy, value);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Every pixel with `dx² + dy² <= r²`, plus the outline.
pub(crate) fn filled_circle<T: Sample>(grid: &mut Grid<T>, center: Point, radius: i32, value: T) {
    if radius < 0 {
        return;
    }
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let r = i64::from(radius);
    if let (Some((x0, x1)), Some((y0, y1))) = (
        clamp_span(grid.width(), cx - r, cx + r),
        clamp_span(grid.height(), cy - r, cy + r),
    ) {
        for y in y0..=y1 {
            let dy = y - cy;
            for x in x0..=x1 {
                let dx = x - cx;
                if dx * dx + dy * dy <= r * r {
                    grid.put(x, y, value);
                }
            }
        }
    }
    circle(grid, center, radius, value);
}

pub(crate) fn triangle<T: Sample>(grid: &mut Grid<T>, p1: Point, p2: Point, p3: Point, value: T) {
    line(grid, p1, p2, value);
    line(grid, p2, p3, value);
    line(grid, p3, p1, value);
}

/// X where edge `a -> b` crosses scanline `y`. Horizontal edges answer `a.x`.
fn edge_x(a: Point, b: Point, y: i64) -> f64 {
    if a.y == b.y {
        return f64::from(a.x);
    }
    let t = (y - i64::from(a.y)) as f64 / (i64::from(b.y) - i64::from(a.y)) as f64;
    f64::from(a.x) + t * (i64::from(b.x) - i64::from(a.x)) as f64
}

/// Sort vertices by y and fill each scanline between the long edge and
/// whichever short edge spans it, then draw the outline.
pub(crate) fn filled_triangle<T: Sample>(
    grid: &mut Grid<T>,
    p1: Point,
    p2: Point,
    p3: Point,
    value: T,
) {
    let mut v = [p1, p2, p3];
    v.sort_by_key(|p| p.y);
    let [top, mid, bottom] = v;

    if let Some((y0, y1)) = clamp_span(grid.height(), i64::from(top.y), i64::from(bottom.y)) {
        for y in y0..=y1 {
            let long = edge_x(top, bottom, y);
            let short = if y < i64::from(mid.y) {
                edge_x(top, mid, y)
            } else {
                edge_x(mid, bottom, y)
            };
            fill_span(grid, y, long, short, value);
        }
    }
    triangle(grid, p1, p2, p3, value);
}

fn fill_span<T: Sample>(grid: &mut Grid<T>, y: i64, a: f64, b: f64, value: T) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let Some((x0, x1)) = clamp_span(grid.width(), lo.round() as i64, hi.round() as i64) else {
        return;
    };
    for x in x0..=x1 {
        grid.put(x, y, value);
    }
}

/// Consecutive vertices joined, plus the closing edge.
pub(crate) fn polygon<T: Sample>(grid: &mut Grid<T>, points: &[Point], value: T) {
    let Some(&last) = points.last() else {
        return;
    };
    let mut prev = last;
    for &p in points {
        line(grid, prev, p, value);
        prev = p;
    }
}

/// Even-odd scanline fill, then the outline.
///
/// Each edge covers the half-open scanline range `[min_y, max_y)`, so a
/// vertex shared by two edges is counted once and no edge is ever sampled past
/// its end. Scanlines are clamped to the grid.
pub(crate) fn filled_polygon<T: Sample>(grid: &mut Grid<T>, points: &[Point], value: T) {
    if points.len() >= 3 {
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);
        if let Some((y0, y1)) = clamp_span(grid.height(), i64::from(min_y), i64::from(max_y)) {
            let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
            for y in y0..=y1 {
                crossings.clear();
                for (i, &a) in points.iter().enumerate() {
                    let b = points[(i + 1) % points.len()];
                    if a.y == b.y {
                        continue;
                    }
                    let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
                    if y >= i64::from(lo.y) && y < i64::from(hi.y) {
                        crossings.push(edge_x(lo, hi, y));
                    }
                }
                crossings.sort_by(f64::total_cmp);
                for pair in crossings.chunks_exact(2) {
                    fill_span(grid, y, pair[0], pair[1], value);
                }
            }
        }
    }
    polygon(grid, points, value);
}
