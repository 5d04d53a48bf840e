//! Vector drawing on a [`Ppm`] canvas.
//!
//! Coordinates are signed and never validated up front: geometry may leave the
//! canvas, and pixels that fall outside are silently skipped. Colors are
//! clamped per channel to the canvas max value so drawing never breaks the
//! sample-range invariant.
//!
//! ```
//! use zennetpbm::{Point, Ppm, Rgb};
//!
//! let mut canvas = Ppm::new(32, 32, 255)?;
//! let red = Rgb::new(255, 0, 0);
//! canvas.draw_filled_circle(Point::new(16, 16), 6, red);
//! canvas.draw_line(Point::new(0, 0), Point::new(31, 31), Rgb::new(0, 0, 255));
//! assert_eq!(canvas.get(16, 12), Some(red));
//! # Ok::<(), zennetpbm::NetpbmError>(())
//! ```

mod fractal;
mod noise;
mod shapes;

use crate::pixel::{Rgb, clamp_rgb};
use crate::ppm::Ppm;

/// Integer canvas coordinate. `x` grows right, `y` grows down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Ppm {
    fn ink(&self, color: Rgb) -> Rgb {
        clamp_rgb(color, self.max_value())
    }

    /// Set one pixel if `p` lies on the canvas.
    pub fn set_pixel(&mut self, p: Point, color: Rgb) {
        let color = self.ink(color);
        self.grid.put(i64::from(p.x), i64::from(p.y), color);
    }

    /// Bresenham line from `p1` to `p2`, both endpoints included.
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: Rgb) {
        let color = self.ink(color);
        shapes::line(&mut self.grid, p1, p2, color);
    }

    /// Outline through `p`, `p + (width, 0)`, `p + (width, height)`, `p + (0, height)`.
    pub fn draw_rectangle(&mut self, p: Point, width: i32, height: i32, color: Rgb) {
        let color = self.ink(color);
        shapes::rectangle(&mut self.grid, p, width, height, color);
    }

    /// The same rectangle with its interior; nothing is drawn unless
    /// `width > 0` and `height > 0`.
    pub fn draw_filled_rectangle(&mut self, p: Point, width: i32, height: i32, color: Rgb) {
        let color = self.ink(color);
        shapes::filled_rectangle(&mut self.grid, p, width, height, color);
    }

    pub fn draw_circle(&mut self, center: Point, radius: i32, color: Rgb) {
        let color = self.ink(color);
        shapes::circle(&mut self.grid, center, radius, color);
    }

    pub fn draw_filled_circle(&mut self, center: Point, radius: i32, color: Rgb) {
        let color = self.ink(color);
        shapes::filled_circle(&mut self.grid, center, radius, color);
    }

    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Rgb) {
        let color = self.ink(color);
        shapes::triangle(&mut self.grid, p1, p2, p3, color);
    }

    pub fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Rgb) {
        let color = self.ink(color);
        shapes::filled_triangle(&mut self.grid, p1, p2, p3, color);
    }

    /// Closed outline through `points`. Empty input draws nothing.
    pub fn draw_polygon(&mut self, points: &[Point], color: Rgb) {
        let color = self.ink(color);
        shapes::polygon(&mut self.grid, points, color);
    }

    /// Even-odd fill plus outline.
    pub fn draw_filled_polygon(&mut self, points: &[Point], color: Rgb) {
        let color = self.ink(color);
        shapes::filled_polygon(&mut self.grid, points, color);
    }

    /// A Koch curve of depth `n` from `a` to `b`. The bumps sit on the left of
    /// the `a -> b` direction as seen on screen.
    pub fn draw_koch_curve(&mut self, n: u32, a: Point, b: Point, color: Rgb) {
        let color = self.ink(color);
        fractal::koch_curve(&mut self.grid, n, a, b, color);
    }

    /// Koch snowflake on the equilateral triangle whose top edge runs from
    /// `start` to `start + (width, 0)`. `n = 0` is the plain triangle.
    pub fn draw_koch_snowflake(&mut self, n: u32, start: Point, width: i32, color: Rgb) {
        let color = self.ink(color);
        fractal::koch_snowflake(&mut self.grid, n, start, width, color);
    }

    /// Sierpinski triangle on the same base triangle as
    /// [`draw_koch_snowflake`](Self::draw_koch_snowflake).
    pub fn draw_sierpinski_triangle(&mut self, n: u32, start: Point, width: i32, color: Rgb) {
        let color = self.ink(color);
        fractal::sierpinski_triangle(&mut self.grid, n, start, width, color);
    }

    /// Fill the whole canvas with seeded Perlin noise, blending from `color1`
    /// (noise -1) to `color2` (noise +1).
    ///
    /// `scale` is the lattice cell size in pixels. Values that are not finite
    /// and positive fall back to 1.
    pub fn draw_perlin_noise(&mut self, seed: u64, scale: f64, color1: Rgb, color2: Rgb) {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        let (c1, c2) = (self.ink(color1), self.ink(color2));
        let perlin = noise::Perlin::new(seed);
        for (y, row) in self.grid.rows_mut().enumerate() {
            let ny = y as f64 / scale;
            for (x, px) in row.iter_mut().enumerate() {
                let n = perlin.noise(x as f64 / scale, ny);
                *px = noise::blend(c1, c2, (n + 1.0) / 2.0);
            }
        }
        log::debug!("perlin noise, seed {seed}, scale {scale}");
    }
}
