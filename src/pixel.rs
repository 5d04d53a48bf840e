/// One PPM pixel: 8-bit R, G, B channels.
pub type Rgb = rgb::RGB8;

mod sealed {
    pub trait Sealed {}
    impl Sealed for bool {}
    impl Sealed for u8 {}
    impl Sealed for super::Rgb {}
}

/// Sample types a [`Grid`](crate::Grid) can hold.
///
/// Implemented for `bool` (PBM), `u8` (PGM) and [`Rgb`] (PPM).
pub trait Sample: sealed::Sealed + Copy + PartialEq + Default + core::fmt::Debug {}

impl Sample for bool {}
impl Sample for u8 {}
impl Sample for Rgb {}

/// Clamp every channel of `color` to `max`.
pub(crate) fn clamp_rgb(color: Rgb, max: u8) -> Rgb {
    Rgb::new(color.r.min(max), color.g.min(max), color.b.min(max))
}

/// Unweighted mean of the three channels, truncating.
pub(crate) fn rgb_mean(color: Rgb) -> u8 {
    ((u16::from(color.r) + u16::from(color.g) + u16::from(color.b)) / 3) as u8
}

/// Rescale `value` from `[0, old_max]` to `[0, new_max]`, truncating.
///
/// `old_max` must be non-zero.
pub(crate) fn rescale(value: u8, old_max: u8, new_max: u8) -> u8 {
    (u16::from(value) * u16::from(new_max) / u16::from(old_max)) as u8
}
