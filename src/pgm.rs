//! PGM: 8-bit grayscale (`P2` ASCII, `P5` binary).

use enough::Unstoppable;

use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::NetpbmError;
use crate::grid::Grid;
use crate::info::{Encoding, MagicNumber, NetpbmFormat};
use crate::pbm::Pbm;
use crate::pixel::rescale;

/// A grayscale image whose samples all lie in `[0, max_value]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pgm {
    grid: Grid<u8>,
    max: u8,
    encoding: Encoding,
}

pub(crate) fn check_max(max: u8) -> Result<(), NetpbmError> {
    if max == 0 {
        return Err(NetpbmError::InvalidMaxValue {
            offset: 0,
            reason: "max value must be at least 1".into(),
        });
    }
    Ok(())
}

impl Pgm {
    /// Blank (all zero) canvas, encoded as `P5`.
    pub fn new(width: u32, height: u32, max: u8) -> Result<Self, NetpbmError> {
        check_max(max)?;
        Ok(Self {
            grid: Grid::new(width, height, 0)?,
            max,
            encoding: Encoding::Binary,
        })
    }

    pub(crate) fn from_parts(grid: Grid<u8>, max: u8, encoding: Encoding) -> Self {
        Self {
            grid,
            max,
            encoding,
        }
    }

    /// Decode `P2`/`P5` data with default options.
    pub fn decode(data: &[u8]) -> Result<Self, NetpbmError> {
        DecodeRequest::new(data).decode_pgm(Unstoppable)
    }

    /// Encode with this image's own magic number.
    pub fn encode(&self) -> Result<Vec<u8>, NetpbmError> {
        EncodeRequest::new().encode(self, Unstoppable)
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.grid.width(), self.grid.height())
    }

    pub fn max_value(&self) -> u8 {
        self.max
    }

    pub fn magic_number(&self) -> MagicNumber {
        MagicNumber::new(NetpbmFormat::Pgm, self.encoding)
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Switch between `P2` and `P5`.
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), NetpbmError> {
        magic.require_format(NetpbmFormat::Pgm)?;
        self.encoding = magic.encoding();
        Ok(())
    }

    pub fn grid(&self) -> &Grid<u8> {
        &self.grid
    }

    pub fn pixels(&self) -> &[u8] {
        self.grid.pixels()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.grid.get(x, y)
    }

    /// Set one sample; values above `max_value` are rejected.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<(), NetpbmError> {
        if value > self.max {
            return Err(NetpbmError::SampleOutOfRange {
                row: y,
                column: x,
                value: u32::from(value),
                max: u32::from(self.max),
            });
        }
        self.grid.set(x, y, value)
    }

    /// `value = max - value` for every sample.
    pub fn invert(&mut self) {
        let max = self.max;
        for px in self.grid.pixels_mut() {
            *px = max - *px;
        }
    }

    pub fn flip(&mut self) {
        self.grid.flip();
    }

    pub fn flop(&mut self) {
        self.grid.flop();
    }

    pub fn rotate_90_cw(&mut self) {
        self.grid.rotate_90_cw();
    }

    pub fn k_nearest_neighbors(
        &mut self,
        new_width: u32,
        new_height: u32,
    ) -> Result<(), NetpbmError> {
        self.grid.resize_nearest(new_width, new_height)
    }

    /// Rescale every sample by `new_max / max_value` (truncating), then store `new_max`.
    pub fn set_max_value(&mut self, new_max: u8) -> Result<(), NetpbmError> {
        check_max(new_max)?;
        check_max(self.max)?;
        let old_max = self.max;
        for px in self.grid.pixels_mut() {
            *px = rescale(*px, old_max, new_max);
        }
        self.max = new_max;
        Ok(())
    }

    /// Threshold at `max_value / 2`: a pixel is set when its value is strictly
    /// greater than the threshold.
    ///
    /// The result keeps this image's ASCII/binary encoding.
    pub fn to_pbm(&self) -> Pbm {
        let threshold = self.max / 2;
        let bits = self.grid.pixels().iter().map(|&v| v > threshold).collect();
        log::debug!("pgm -> pbm, threshold {threshold}");
        Pbm::from_parts(
            Grid::from_pixels(bits, self.width(), self.height()),
            self.encoding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pgm(pixels: Vec<u8>, w: u32, h: u32, max: u8) -> Pgm {
        Pgm::from_parts(Grid::from_pixels(pixels, w, h), max, Encoding::Binary)
    }

    #[test]
    fn new_rejects_zero_max() {
        assert!(matches!(
            Pgm::new(1, 1, 0),
            Err(NetpbmError::InvalidMaxValue { .. })
        ));
    }

    #[test]
    fn invert_uses_max() {
        let mut img = pgm(vec![0, 3, 10], 3, 1, 10);
        img.invert();
        assert_eq!(img.pixels(), &[10, 7, 0]);
    }

    #[test]
    fn set_respects_max() {
        let mut img = Pgm::new(2, 2, 15).unwrap();
        img.set(1, 1, 15).unwrap();
        assert!(matches!(
            img.set(0, 0, 16),
            Err(NetpbmError::SampleOutOfRange { value: 16, max: 15, .. })
        ));
        assert!(matches!(
            img.set(2, 0, 1),
            Err(NetpbmError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn set_max_value_rescales() {
        let mut img = pgm(vec![0, 100, 255], 3, 1, 255);
        img.set_max_value(100).unwrap();
        assert_eq!(img.max_value(), 100);
        assert_eq!(img.pixels(), &[0, 39, 100]);
    }

    #[test]
    fn set_max_value_zero_fails_without_change() {
        let mut img = pgm(vec![5], 1, 1, 255);
        assert!(matches!(
            img.set_max_value(0),
            Err(NetpbmError::InvalidMaxValue { .. })
        ));
        assert_eq!(img.pixels(), &[5]);
        assert_eq!(img.max_value(), 255);
    }

    #[test]
    fn to_pbm_is_strictly_greater() {
        // max 255 -> threshold 127
        let img = pgm(vec![126, 127, 128, 255], 4, 1, 255);
        let pbm = img.to_pbm();
        assert_eq!(pbm.pixels(), &[false, false, true, true]);
        assert_eq!(pbm.magic_number(), MagicNumber::P4);
    }
}
