//! # zennetpbm
//!
//! Netpbm (PBM, PGM, PPM) decoder and encoder, with in-memory raster
//! transforms and vector drawing.
//!
//! ## Supported Formats
//!
//! - **P1** / **P4**: PBM bilevel, plain (ASCII) and raw (bit-packed)
//! - **P2** / **P5**: PGM grayscale, 8-bit, plain and raw
//! - **P3** / **P6**: PPM RGB, 8-bit per channel, plain and raw
//!
//! Header comments (`#` to end of line) are accepted between any two header
//! tokens.
//!
//! ## Non-Goals
//!
//! - PAM (P7) and PFM
//! - 16-bit samples (max value above 255)
//! - Multi-image streams
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use zennetpbm::{DecodeRequest, EncodeRequest, ImageInfo, MagicNumber, NetpbmImage};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your Netpbm bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{} {}x{}", info.magic, info.width, info.height);
//!
//! // Decode whatever family the magic number names
//! let image = DecodeRequest::new(data).decode(Unstoppable)?;
//!
//! // Downgrade color to gray and write it out as plain text
//! if let NetpbmImage::Ppm(ppm) = &image {
//!     let mut gray = ppm.to_pgm();
//!     gray.flip();
//!     let encoded = EncodeRequest::with_magic(MagicNumber::P2).encode(&gray, Unstoppable)?;
//! }
//! # Ok::<(), zennetpbm::NetpbmError>(())
//! ```
//!
//! ## Credits
//!
//! Header tokenizing follows [zune-ppm](https://github.com/etemesi254/zune-image)
//! by Caleb Etemesi (MIT/Apache-2.0/Zlib licensed).

#![forbid(unsafe_code)]

use std::io::{Read, Write};

mod error;
mod grid;
mod info;
mod limits;
mod pixel;
mod pnm;
mod transform;

mod pbm;
mod pgm;
mod ppm;

mod decode;
mod draw;
mod encode;

// Re-exports
pub use decode::{DecodeRequest, NetpbmImage, SampleMode};
pub use draw::Point;
pub use encode::{EncodeRequest, NetpbmEncode};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::NetpbmError;
pub use grid::Grid;
pub use info::{Encoding, ImageInfo, MagicNumber, NetpbmFormat};
pub use limits::Limits;
pub use pbm::Pbm;
pub use pgm::Pgm;
pub use pixel::{Rgb, Sample};
pub use ppm::Ppm;

/// Decode any Netpbm image.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<NetpbmImage, NetpbmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode any Netpbm image, rejecting it if it exceeds `limits`.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<NetpbmImage, NetpbmError> {
    DecodeRequest::new(data).with_limits(limits).decode(stop)
}

pub fn decode_pbm(data: &[u8], stop: impl Stop) -> Result<Pbm, NetpbmError> {
    DecodeRequest::new(data).decode_pbm(stop)
}

pub fn decode_pgm(data: &[u8], stop: impl Stop) -> Result<Pgm, NetpbmError> {
    DecodeRequest::new(data).decode_pgm(stop)
}

pub fn decode_ppm(data: &[u8], stop: impl Stop) -> Result<Ppm, NetpbmError> {
    DecodeRequest::new(data).decode_ppm(stop)
}

/// Read `reader` to the end, then decode.
///
/// A read failure surfaces as [`NetpbmError::Stream`].
pub fn read_from<R: Read>(mut reader: R, stop: impl Stop) -> Result<NetpbmImage, NetpbmError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    log::trace!("read {} bytes", data.len());
    decode(&data, stop)
}

/// Encode with the image's own magic number.
pub fn encode<I: NetpbmEncode + ?Sized>(
    image: &I,
    stop: impl Stop,
) -> Result<Vec<u8>, NetpbmError> {
    EncodeRequest::new().encode(image, stop)
}

/// Encode with the image's own magic number into `writer`, flushing it on
/// every path.
pub fn write_to<I: NetpbmEncode + ?Sized, W: Write>(
    image: &I,
    writer: W,
    stop: impl Stop,
) -> Result<(), NetpbmError> {
    EncodeRequest::new().write_to(image, writer, stop)
}
