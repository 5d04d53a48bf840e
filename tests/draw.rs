use std::time::{Duration, Instant};

use enough::Unstoppable;
use zennetpbm::*;

const A: Rgb = Rgb { r: 255, g: 0, b: 0 };
const B: Rgb = Rgb { r: 0, g: 255, b: 0 };
const C: Rgb = Rgb { r: 0, g: 0, b: 255 };
const D: Rgb = Rgb { r: 10, g: 20, b: 30 };
const INK: Rgb = Rgb { r: 200, g: 100, b: 50 };
const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

fn canvas(w: u32, h: u32) -> Ppm {
    Ppm::new(w, h, 255).unwrap()
}

fn inked(img: &Ppm) -> usize {
    img.pixels().iter().filter(|&&p| p != BLACK).count()
}

#[test]
fn nearest_neighbor_upscale_places_blocks() {
    let mut img = canvas(2, 2);
    img.set(0, 0, A).unwrap();
    img.set(1, 0, B).unwrap();
    img.set(0, 1, C).unwrap();
    img.set(1, 1, D).unwrap();

    img.k_nearest_neighbors(4, 4).unwrap();
    assert_eq!(img.size(), (4, 4));
    for y in 0..4 {
        for x in 0..4 {
            let expected = match (x < 2, y < 2) {
                (true, true) => A,
                (false, true) => B,
                (true, false) => C,
                (false, false) => D,
            };
            assert_eq!(img.get(x, y), Some(expected), "({x}, {y})");
        }
    }
}

#[test]
fn line_is_symmetric_in_endpoints() {
    let pairs = [
        (Point::new(0, 0), Point::new(15, 6)),
        (Point::new(3, 14), Point::new(12, 1)),
        (Point::new(-5, 8), Point::new(20, 9)),
        (Point::new(7, 0), Point::new(7, 15)),
    ];
    for (p1, p2) in pairs {
        let mut forward = canvas(16, 16);
        let mut backward = canvas(16, 16);
        forward.draw_line(p1, p2, INK);
        backward.draw_line(p2, p1, INK);
        assert_eq!(forward, backward, "{p1:?} {p2:?}");
    }
}

#[test]
fn line_partially_off_canvas_draws_the_visible_part() {
    let mut img = canvas(5, 5);
    img.draw_line(Point::new(-3, 2), Point::new(10, 2), INK);
    assert_eq!(inked(&img), 5);
    for x in 0..5 {
        assert_eq!(img.get(x, 2), Some(INK));
    }
}

#[test]
fn line_with_far_off_endpoints_is_clipped() {
    let mut img = canvas(4, 4);
    let started = Instant::now();
    img.draw_line(Point::new(-400_000_000, 0), Point::new(400_000_000, 3), INK);
    img.draw_line(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX), INK);
    assert!(started.elapsed() < Duration::from_secs(1), "{:?}", started.elapsed());
    for x in 0..4 {
        assert_eq!(img.get(x, 2), Some(INK));
        // the main diagonal is the second line
        assert_eq!(img.get(x, x), Some(INK));
    }
    assert_eq!(inked(&img), 7);
}

#[test]
fn huge_circles_finish_quickly() {
    let mut img = canvas(4, 4);
    let started = Instant::now();
    img.draw_circle(Point::new(2, 2), i32::MAX, INK);
    img.draw_filled_circle(Point::new(2, 2), 2_000_000_000, INK);
    img.draw_circle(Point::new(-1_000_000_000, 0), 10, INK);
    assert!(started.elapsed() < Duration::from_secs(1), "{:?}", started.elapsed());
    assert_eq!(inked(&img), 16);
}

#[test]
fn set_pixel_outside_is_ignored() {
    let mut img = canvas(2, 2);
    img.set_pixel(Point::new(-1, 0), INK);
    img.set_pixel(Point::new(2, 0), INK);
    img.set_pixel(Point::new(0, 5), INK);
    assert_eq!(inked(&img), 0);
    img.set_pixel(Point::new(1, 1), INK);
    assert_eq!(img.get(1, 1), Some(INK));
}

#[test]
fn colors_are_clamped_to_max() {
    let mut img = Ppm::new(3, 1, 100).unwrap();
    img.draw_line(Point::new(0, 0), Point::new(2, 0), Rgb::new(255, 50, 101));
    assert!(img.pixels().iter().all(|&p| p == Rgb::new(100, 50, 100)));
    // still a valid image
    let encoded = encode(&img, Unstoppable).unwrap();
    assert_eq!(decode_ppm(&encoded, Unstoppable).unwrap(), img);
}

#[test]
fn rectangle_outline_and_fill() {
    let mut outline = canvas(10, 10);
    outline.draw_rectangle(Point::new(2, 2), 5, 3, INK);
    // 6 x 4 box border
    assert_eq!(inked(&outline), 2 * 6 + 2 * 2);
    assert_eq!(outline.get(4, 3), Some(BLACK));
    assert_eq!(outline.get(7, 5), Some(INK));

    let mut filled = canvas(10, 10);
    filled.draw_filled_rectangle(Point::new(2, 2), 5, 3, INK);
    assert_eq!(inked(&filled), 6 * 4);
    assert_eq!(filled.get(4, 3), Some(INK));

    let mut empty = canvas(10, 10);
    empty.draw_filled_rectangle(Point::new(2, 2), 0, 3, INK);
    empty.draw_filled_rectangle(Point::new(2, 2), 5, -3, INK);
    assert_eq!(inked(&empty), 0);
}

#[test]
fn circle_outline_and_fill() {
    let center = Point::new(10, 10);
    let mut outline = canvas(21, 21);
    outline.draw_circle(center, 6, INK);
    for (x, y) in [(16, 10), (4, 10), (10, 16), (10, 4)] {
        assert_eq!(outline.get(x, y), Some(INK));
    }
    assert_eq!(outline.get(10, 10), Some(BLACK));

    let mut filled = canvas(21, 21);
    filled.draw_filled_circle(center, 6, INK);
    assert_eq!(filled.get(10, 10), Some(INK));
    assert_eq!(filled.get(14, 14), Some(INK)); // 16 + 16 <= 36
    assert_eq!(filled.get(15, 15), Some(BLACK)); // 25 + 25 > 36
    // every outline pixel is inside the filled disc
    for (o, f) in outline.pixels().iter().zip(filled.pixels()) {
        if *o == INK {
            assert_eq!(*f, INK);
        }
    }
}

#[test]
fn circle_clipped_by_canvas_edge() {
    let mut img = canvas(8, 8);
    img.draw_filled_circle(Point::new(0, 0), 4, INK);
    assert_eq!(img.get(0, 0), Some(INK));
    assert_eq!(img.get(4, 0), Some(INK));
    assert_eq!(img.get(7, 7), Some(BLACK));
}

#[test]
fn triangle_outline_and_fill() {
    let (p1, p2, p3) = (Point::new(1, 1), Point::new(13, 1), Point::new(7, 10));
    let mut outline = canvas(16, 16);
    outline.draw_triangle(p1, p2, p3, INK);
    assert_eq!(outline.get(7, 5), Some(BLACK));

    let mut filled = canvas(16, 16);
    filled.draw_filled_triangle(p1, p2, p3, INK);
    assert_eq!(filled.get(7, 5), Some(INK));
    assert_eq!(filled.get(1, 9), Some(BLACK));
    assert!(inked(&filled) > inked(&outline));
    for (o, f) in outline.pixels().iter().zip(filled.pixels()) {
        if *o == INK {
            assert_eq!(*f, INK);
        }
    }
}

#[test]
fn filled_triangle_vertex_order_does_not_matter() {
    let pts = [Point::new(2, 3), Point::new(14, 6), Point::new(5, 13)];
    let mut first = canvas(16, 16);
    first.draw_filled_triangle(pts[0], pts[1], pts[2], INK);
    let mut second = canvas(16, 16);
    second.draw_filled_triangle(pts[2], pts[0], pts[1], INK);
    assert_eq!(first, second);
}

#[test]
fn polygon_outline_closes() {
    let square = [
        Point::new(1, 1),
        Point::new(6, 1),
        Point::new(6, 6),
        Point::new(1, 6),
    ];
    let mut img = canvas(8, 8);
    img.draw_polygon(&square, INK);
    let mut rect = canvas(8, 8);
    rect.draw_rectangle(Point::new(1, 1), 5, 5, INK);
    assert_eq!(img, rect);
}

#[test]
fn filled_polygon_even_odd() {
    // concave "U": the notch between the arms stays empty
    let u = [
        Point::new(0, 0),
        Point::new(3, 0),
        Point::new(3, 6),
        Point::new(6, 6),
        Point::new(6, 0),
        Point::new(9, 0),
        Point::new(9, 9),
        Point::new(0, 9),
    ];
    let mut img = canvas(10, 10);
    img.draw_filled_polygon(&u, INK);
    assert_eq!(img.get(1, 3), Some(INK));
    assert_eq!(img.get(8, 3), Some(INK));
    assert_eq!(img.get(4, 3), Some(BLACK));
    assert_eq!(img.get(5, 8), Some(INK));
}

#[test]
fn filled_polygon_running_off_the_canvas() {
    let tri = [Point::new(-20, -20), Point::new(40, 2), Point::new(2, 40)];
    let mut img = canvas(6, 6);
    img.draw_filled_polygon(&tri, INK);
    assert_eq!(img.get(3, 3), Some(INK));
    assert_eq!(img.get(5, 5), Some(INK));
}

#[test]
fn fractals_at_depth_zero_are_triangles() {
    let start = Point::new(4, 4);
    // apex y = 4 + 24 * sqrt(3) / 2 = 24.78
    let apex = Point::new(16, 25);

    let mut tri = canvas(32, 32);
    tri.draw_triangle(start, Point::new(28, 4), apex, INK);

    let mut koch = canvas(32, 32);
    koch.draw_koch_snowflake(0, start, 24, INK);
    assert_eq!(koch, tri);

    let mut sierpinski = canvas(32, 32);
    sierpinski.draw_sierpinski_triangle(0, start, 24, INK);
    assert_eq!(sierpinski, tri);
}

#[test]
fn koch_curve_depth_zero_is_a_line() {
    let mut curve = canvas(20, 20);
    curve.draw_koch_curve(0, Point::new(1, 1), Point::new(18, 12), INK);
    let mut line = canvas(20, 20);
    line.draw_line(Point::new(1, 1), Point::new(18, 12), INK);
    assert_eq!(curve, line);
}

#[test]
fn snowflake_grows_outward() {
    let mut flat = canvas(64, 64);
    flat.draw_koch_snowflake(0, Point::new(12, 20), 40, INK);
    let mut flake = canvas(64, 64);
    flake.draw_koch_snowflake(2, Point::new(12, 20), 40, INK);
    // the first bump on the top edge peaks above it
    assert!((0..64).any(|x| flake.get(x, 12) == Some(INK)));
    assert!((0..64).all(|x| flat.get(x, 12) == Some(BLACK)));
}

#[test]
fn sierpinski_gets_denser_with_depth() {
    let mut counts = Vec::new();
    for n in 0..4 {
        let mut img = canvas(80, 80);
        img.draw_sierpinski_triangle(n, Point::new(4, 4), 72, INK);
        counts.push(inked(&img));
    }
    assert!(counts.windows(2).all(|w| w[1] > w[0]), "{counts:?}");
}

#[test]
fn perlin_noise_is_deterministic_and_bounded() {
    let c1 = Rgb::new(0, 0, 0);
    let c2 = Rgb::new(250, 120, 10);

    let mut a = Ppm::new(32, 16, 200).unwrap();
    let mut b = Ppm::new(32, 16, 200).unwrap();
    a.draw_perlin_noise(7, 8.0, c1, c2);
    b.draw_perlin_noise(7, 8.0, c1, c2);
    assert_eq!(a, b);

    // c2 is clamped to the canvas max first
    assert!(a.pixels().iter().all(|p| p.r <= 200 && p.g <= 120 && p.b <= 10));
    // lattice points sit at noise 0, halfway between the colors
    assert_eq!(a.get(8, 8), Some(Rgb::new(100, 60, 5)));

    let mut c = Ppm::new(32, 16, 200).unwrap();
    c.draw_perlin_noise(8, 8.0, c1, c2);
    assert_ne!(a, c);
}

#[test]
fn perlin_noise_with_one_color_is_flat() {
    let mut img = canvas(9, 9);
    img.draw_perlin_noise(1, f64::NAN, INK, INK);
    assert!(img.pixels().iter().all(|&p| p == INK));
}
