//! PBM: bilevel images (`P1` ASCII, `P4` bit-packed binary).

use enough::Unstoppable;

use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::NetpbmError;
use crate::grid::Grid;
use crate::info::{Encoding, MagicNumber, NetpbmFormat};

/// A bilevel image. `true` is a set ("ink") pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pbm {
    grid: Grid<bool>,
    encoding: Encoding,
}

impl Pbm {
    /// Blank (all clear) canvas, encoded as `P4`.
    pub fn new(width: u32, height: u32) -> Result<Self, NetpbmError> {
        Ok(Self {
            grid: Grid::new(width, height, false)?,
            encoding: Encoding::Binary,
        })
    }

    pub(crate) fn from_parts(grid: Grid<bool>, encoding: Encoding) -> Self {
        Self { grid, encoding }
    }

    /// Decode `P1`/`P4` data with default options.
    pub fn decode(data: &[u8]) -> Result<Self, NetpbmError> {
        DecodeRequest::new(data).decode_pbm(Unstoppable)
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

    /// `(width, height)`
    pub fn size(&self) -> (u32, u32) {
        (self.grid.width(), self.grid.height())
    }

    pub fn magic_number(&self) -> MagicNumber {
        MagicNumber::new(NetpbmFormat::Pbm, self.encoding)
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Switch between `P1` and `P4`. Other magics fail with `UnsupportedMagicNumber`.
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), NetpbmError> {
        magic.require_format(NetpbmFormat::Pbm)?;
        self.encoding = magic.encoding();
        Ok(())
    }

    pub fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    pub fn pixels(&self) -> &[bool] {
        self.grid.pixels()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) -> Result<(), NetpbmError> {
        self.grid.set(x, y, value)
    }

    /// Negate every pixel.
    pub fn invert(&mut self) {
        for px in self.grid.pixels_mut() {
            *px = !*px;
        }
    }

    /// Mirror each row.
    pub fn flip(&mut self) {
        self.grid.flip();
    }

    /// Reverse the row order.
    pub fn flop(&mut self) {
        self.grid.flop();
    }

    pub fn rotate_90_cw(&mut self) {
        self.grid.rotate_90_cw();
    }

    /// Nearest-neighbor resample; see [`Grid::resize_nearest`].
    pub fn k_nearest_neighbors(
        &mut self,
        new_width: u32,
        new_height: u32,
    ) -> Result<(), NetpbmError> {
        self.grid.resize_nearest(new_width, new_height)
    }
}
