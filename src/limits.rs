use crate::error::NetpbmError;
use crate::grid::checked_len;
use crate::pixel::Sample;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for the decoded grid, counted in samples of the
    /// target type: 1 byte per PBM or PGM pixel, 3 per PPM pixel.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) const UNLIMITED: Limits = Limits {
        max_width: None,
        max_height: None,
        max_pixels: None,
        max_memory_bytes: None,
    };

    /// Admit a `width x height` grid of `T` before it is allocated.
    ///
    /// Zero dimensions fail with `InvalidDimensions`, a byte size that does not
    /// fit in memory with `DimensionsTooLarge`, and anything over a limit with
    /// `LimitExceeded`.
    pub(crate) fn check_grid<T: Sample>(&self, width: u32, height: u32) -> Result<(), NetpbmError> {
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        let pixels = u64::from(width) * u64::from(height);
        exceeds("pixel count", pixels, self.max_pixels)?;

        let too_large = NetpbmError::DimensionsTooLarge { width, height };
        let bytes = checked_len(width, height)?
            .checked_mul(size_of::<T>())
            .ok_or(too_large)?;
        exceeds("grid bytes", bytes as u64, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), NetpbmError> {
    match limit {
        Some(max) if value > max => Err(NetpbmError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
