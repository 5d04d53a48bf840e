use enough::StopReason;

use crate::info::{MagicNumber, NetpbmFormat};

/// Errors from Netpbm decoding, encoding, and raster operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NetpbmError {
    #[error("stream failure: {0}")]
    Stream(#[from] std::io::Error),

    #[error("invalid magic number {found:?}")]
    InvalidMagicNumber { found: String },

    #[error("invalid dimensions at byte {offset}: {reason}")]
    InvalidDimensions { offset: usize, reason: String },

    #[error("invalid max value at byte {offset}: {reason}")]
    InvalidMaxValue { offset: usize, reason: String },

    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof { offset: usize },

    #[error("malformed pixel data at row {row}, column {column}: {reason}")]
    MalformedPixelData {
        row: u32,
        column: u32,
        reason: String,
    },

    #[error("sample {value} at row {row}, column {column} exceeds max value {max}")]
    SampleOutOfRange {
        row: u32,
        column: u32,
        value: u32,
        max: u32,
    },

    #[error("row {row} holds {actual} samples, expected {expected}")]
    InconsistentRowLength {
        row: u32,
        expected: u32,
        actual: usize,
    },

    #[error("magic number {magic} cannot encode a {format:?} image")]
    UnsupportedMagicNumber {
        magic: MagicNumber,
        format: NetpbmFormat,
    },

    #[error("pixel ({x}, {y}) lies outside a {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for NetpbmError {
    fn from(r: StopReason) -> Self {
        NetpbmError::Cancelled(r)
    }
}
