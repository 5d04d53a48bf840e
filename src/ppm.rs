//! PPM: 8-bit RGB (`P3` ASCII, `P6` binary). Also the drawing canvas; see
//! [`crate::draw`].

use enough::Unstoppable;

use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::NetpbmError;
use crate::grid::Grid;
use crate::info::{Encoding, MagicNumber, NetpbmFormat};
use crate::pbm::Pbm;
use crate::pgm::{Pgm, check_max};
use crate::pixel::{Rgb, rescale, rgb_mean};

/// A color image whose channels all lie in `[0, max_value]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ppm {
    pub(crate) grid: Grid<Rgb>,
    max: u8,
    encoding: Encoding,
}

impl Ppm {
    /// Blank (black) canvas, encoded as `P6`.
    pub fn new(width: u32, height: u32, max: u8) -> Result<Self, NetpbmError> {
        check_max(max)?;
        Ok(Self {
            grid: Grid::new(width, height, Rgb::default())?,
            max,
            encoding: Encoding::Binary,
        })
    }

    pub(crate) fn from_parts(grid: Grid<Rgb>, max: u8, encoding: Encoding) -> Self {
        Self {
            grid,
            max,
            encoding,
        }
    }

    /// Decode `P3`/`P6` data with default options.
    pub fn decode(data: &[u8]) -> Result<Self, NetpbmError> {
        DecodeRequest::new(data).decode_ppm(Unstoppable)
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
        MagicNumber::new(NetpbmFormat::Ppm, self.encoding)
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Switch between `P3` and `P6`.
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), NetpbmError> {
        magic.require_format(NetpbmFormat::Ppm)?;
        self.encoding = magic.encoding();
        Ok(())
    }

    pub fn grid(&self) -> &Grid<Rgb> {
        &self.grid
    }

    pub fn pixels(&self) -> &[Rgb] {
        self.grid.pixels()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.grid.get(x, y)
    }

    /// Set one pixel; any channel above `max_value` is rejected.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> Result<(), NetpbmError> {
        let top = color.r.max(color.g).max(color.b);
        if top > self.max {
            return Err(NetpbmError::SampleOutOfRange {
                row: y,
                column: x,
                value: u32::from(top),
                max: u32::from(self.max),
            });
        }
        self.grid.set(x, y, color)
    }

    /// Component-wise `max - channel`.
    pub fn invert(&mut self) {
        let max = self.max;
        for px in self.grid.pixels_mut() {
            *px = Rgb::new(max - px.r, max - px.g, max - px.b);
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

    /// Rescale every channel by `new_max / max_value` (truncating), then store `new_max`.
    pub fn set_max_value(&mut self, new_max: u8) -> Result<(), NetpbmError> {
        check_max(new_max)?;
        check_max(self.max)?;
        let old_max = self.max;
        for px in self.grid.pixels_mut() {
            *px = Rgb::new(
                rescale(px.r, old_max, new_max),
                rescale(px.g, old_max, new_max),
                rescale(px.b, old_max, new_max),
            );
        }
        self.max = new_max;
        Ok(())
    }

    /// Unweighted channel mean per pixel; the result has max value 255.
    ///
    /// `P3` becomes `P2`, `P6` becomes `P5`.
    pub fn to_pgm(&self) -> Pgm {
        let gray = self.grid.pixels().iter().map(|&px| rgb_mean(px)).collect();
        log::debug!("ppm -> pgm, {}x{}", self.width(), self.height());
        Pgm::from_parts(
            Grid::from_pixels(gray, self.width(), self.height()),
            u8::MAX,
            self.encoding,
        )
    }

    /// Channel mean thresholded at `max_value / 2`; set when strictly greater.
    pub fn to_pbm(&self) -> Pbm {
        let threshold = self.max / 2;
        let bits = self
            .grid
            .pixels()
            .iter()
            .map(|&px| rgb_mean(px) > threshold)
            .collect();
        log::debug!("ppm -> pbm, threshold {threshold}");
        Pbm::from_parts(
            Grid::from_pixels(bits, self.width(), self.height()),
            self.encoding,
        )
    }
}
