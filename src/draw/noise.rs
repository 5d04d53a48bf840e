//! Seeded 2D gradient (Perlin) noise.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::pixel::Rgb;

/// Permutation-table Perlin noise. The same seed always yields the same field.
pub(crate) struct Perlin {
    perm: [u8; 512],
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn grad(hash: u8, x: f64, y: f64) -> f64 {
    match hash & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

impl Perlin {
    pub(crate) fn new(seed: u64) -> Self {
        let mut table = [0u8; 256];
        for (slot, v) in table.iter_mut().zip(0u8..=255) {
            *slot = v;
        }
        table.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { perm }
    }

    fn hash(&self, x: usize, y: usize) -> u8 {
        self.perm[usize::from(self.perm[x]) + y]
    }

    /// Noise at `(x, y)`, within `[-1, 1]`. Zero on every integer lattice point.
    pub(crate) fn noise(&self, x: f64, y: f64) -> f64 {
        let (fx, fy) = (x.floor(), y.floor());
        let xi = (fx.rem_euclid(256.0)) as usize & 255;
        let yi = (fy.rem_euclid(256.0)) as usize & 255;
        let (xf, yf) = (x - fx, y - fy);
        let (u, v) = (fade(xf), fade(yf));

        let aa = self.hash(xi, yi);
        let ab = self.hash(xi, yi + 1);
        let ba = self.hash(xi + 1, yi);
        let bb = self.hash(xi + 1, yi + 1);

        let top = lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u);
        let bottom = lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u);
        lerp(top, bottom, v).clamp(-1.0, 1.0)
    }
}

/// `c1` at `t = 0`, `c2` at `t = 1`, rounded per channel.
pub(crate) fn blend(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    let mix = |a: u8, b: u8| lerp(f64::from(a), f64::from(b), t).round().clamp(0.0, 255.0) as u8;
    Rgb::new(mix(c1.r, c2.r), mix(c1.g, c2.g), mix(c1.b, c2.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_is_a_permutation() {
        let p = Perlin::new(42);
        let mut seen = [false; 256];
        for &v in &p.perm[..256] {
            seen[usize::from(v)] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(p.perm[..256], p.perm[256..]);
    }

    #[test]
    fn seeds_differ() {
        assert_ne!(Perlin::new(1).perm, Perlin::new(2).perm);
    }

    #[test]
    fn lattice_points_are_zero() {
        let p = Perlin::new(7);
        for (x, y) in [(0.0, 0.0), (3.0, 5.0), (-4.0, 250.0), (1000.0, -1.0)] {
            assert_eq!(p.noise(x, y), 0.0);
        }
    }

    #[test]
    fn noise_stays_in_range() {
        let p = Perlin::new(99);
        for i in 0..500 {
            let x = f64::from(i) * 0.173 - 20.0;
            let y = f64::from(i) * 0.311 + 3.5;
            let n = p.noise(x, y);
            assert!((-1.0..=1.0).contains(&n), "{n}");
        }
    }

    #[test]
    fn blend_endpoints() {
        let a = Rgb::new(0, 100, 255);
        let b = Rgb::new(255, 0, 55);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Rgb::new(128, 50, 155));
    }
}
