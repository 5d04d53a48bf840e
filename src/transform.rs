//! Geometric transforms shared by every sample type.
//!
//! Flip and flop follow the Netpbm naming used throughout this crate:
//! `flip` mirrors each row, `flop` reverses the row order.

use crate::error::NetpbmError;
use crate::grid::{Grid, checked_len};
use crate::pixel::Sample;

impl<T: Sample> Grid<T> {
    /// Horizontal mirror: reverse each row in place.
    ///
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌─────────┐
    ///│a b c d e│   │e d c b a│
    ///│f g h i j│   │j i h g f│
    ///└─────────┘   └─────────┘
    ///```
    pub fn flip(&mut self) {
        for row in self.rows_mut() {
            row.reverse();
        }
    }

    /// Vertical mirror: reverse the row order in place.
    ///
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌─────────┐
    ///│a b c d e│   │f g h i j│
    ///│f g h i j│   │a b c d e│
    ///└─────────┘   └─────────┘
    ///```
    pub fn flop(&mut self) {
        let width = self.width() as usize;
        let len = self.pixels().len();
        let half = (len / width / 2) * width;
        let (top, rest) = self.pixels_mut().split_at_mut(half);
        // An odd middle row stays where it is.
        let bottom_start = rest.len() - half;
        let bottom = &mut rest[bottom_start..];

        for (top_row, bottom_row) in top
            .chunks_exact_mut(width)
            .zip(bottom.chunks_exact_mut(width).rev())
        {
            top_row.swap_with_slice(bottom_row);
        }
    }

    /// Rotate 90 degrees clockwise; width and height swap.
    ///
    /// `out[x][height - 1 - y] = in[y][x]`
    ///
    ///```text
    /// [1,2,3]    [7,4,1]
    /// [4,5,6] -> [8,5,2]
    /// [7,8,9]    [9,6,3]
    ///```
    pub fn rotate_90_cw(&mut self) {
        let w = self.width() as usize;
        let h = self.height() as usize;
        let src = self.pixels();
        let mut out = vec![T::default(); src.len()];

        // output row x has h samples
        for (y, row) in src.chunks_exact(w).enumerate() {
            let dst_col = h - 1 - y;
            for (x, &v) in row.iter().enumerate() {
                out[x * h + dst_col] = v;
            }
        }

        *self = Grid::from_pixels(out, self.height(), self.width());
    }

    /// Nearest-neighbor resample to `new_width x new_height`.
    ///
    /// Destination pixel `(x, y)` copies source pixel
    /// `(x * width / new_width, y * height / new_height)`; no blending.
    pub fn resize_nearest(&mut self, new_width: u32, new_height: u32) -> Result<(), NetpbmError> {
        let len = checked_len(new_width, new_height)?;
        let src_w = u64::from(self.width());
        let src_h = u64::from(self.height());
        let dst_w = u64::from(new_width);
        let dst_h = u64::from(new_height);

        let src_cols: Vec<usize> = (0..dst_w).map(|x| (x * src_w / dst_w) as usize).collect();
        let row_len = src_w as usize;

        let mut out = Vec::with_capacity(len);
        for y in 0..dst_h {
            // y < dst_h, so sy < src_h
            let start = (y * src_h / dst_h) as usize * row_len;
            let src_row = &self.pixels()[start..start + row_len];
            out.extend(src_cols.iter().map(|&sx| src_row[sx]));
        }

        *self = Grid::from_pixels(out, new_width, new_height);
        Ok(())
    }
}
