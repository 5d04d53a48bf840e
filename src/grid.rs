use core::slice::{ChunksExact, ChunksExactMut};

use crate::error::NetpbmError;
use crate::pixel::Sample;

/// Rectangular `height x width` grid of samples, stored row-major.
///
/// Every row is exactly `width` samples long and there are exactly `height`
/// rows. Both dimensions are non-zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    pixels: Vec<T>,
    width: u32,
    height: u32,
}

impl<T: Sample> Grid<T> {
    /// A blank grid filled with `fill`.
    pub fn new(width: u32, height: u32, fill: T) -> Result<Self, NetpbmError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            pixels: vec![fill; len],
            width,
            height,
        })
    }

    /// Wrap an already-decoded buffer. `pixels.len()` must equal `width * height`.
    pub(crate) fn from_pixels(pixels: Vec<T>, width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major samples.
    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [T] {
        &mut self.pixels
    }

    /// Iterate over rows, each `width` samples long.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.pixels.chunks_exact(self.width as usize)
    }

    pub(crate) fn rows_mut(&mut self) -> ChunksExactMut<'_, T> {
        self.pixels.chunks_exact_mut(self.width as usize)
    }

    /// Row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.pixels[start..start + w])
    }

    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    pub(crate) fn set(&mut self, x: u32, y: u32, value: T) -> Result<(), NetpbmError> {
        if x >= self.width || y >= self.height {
            return Err(NetpbmError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index(x, y);
        self.pixels[i] = value;
        Ok(())
    }

    /// Write with signed coordinates; writes outside the grid are dropped.
    ///
    /// Returns whether the pixel landed.
    pub(crate) fn put(&mut self, x: i64, y: i64, value: T) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        let i = self.index(x as u32, y as u32);
        self.pixels[i] = value;
        true
    }

    /// Fails with `InconsistentRowLength` if the buffer no longer matches the
    /// stored dimensions.
    pub(crate) fn validate(&self) -> Result<(), NetpbmError> {
        let w = self.width as usize;
        let expected = w * self.height as usize;
        if self.pixels.len() == expected {
            return Ok(());
        }
        let row = (self.pixels.len().min(expected) / w.max(1)) as u32;
        let actual = self.pixels.len().saturating_sub(row as usize * w).min(w);
        Err(NetpbmError::InconsistentRowLength {
            row,
            expected: self.width,
            actual,
        })
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, T> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// `width * height` as a buffer length, rejecting zero and overflow.
pub(crate) fn checked_len(width: u32, height: u32) -> Result<usize, NetpbmError> {
    if width == 0 || height == 0 {
        return Err(NetpbmError::InvalidDimensions {
            offset: 0,
            reason: format!("{width}x{height} has a zero dimension"),
        });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(NetpbmError::DimensionsTooLarge { width, height })
}
