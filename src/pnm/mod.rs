//! Netpbm family: P1/P4 (PBM), P2/P5 (PGM), P3/P6 (PPM).
//!
//! Header tokenizing follows the comment handling in
//! [zune-ppm](https://github.com/etemesi254/zune-image).

mod decode;
mod encode;
pub(crate) mod header;

pub(crate) use encode::{encode_pbm, encode_pgm, encode_ppm};

use enough::Stop;

use crate::decode::{NetpbmImage, SampleMode};
use crate::error::NetpbmError;
use crate::grid::Grid;
use crate::info::{Encoding, ImageInfo, NetpbmFormat};
use crate::limits::Limits;
use crate::pixel::Sample;
use crate::pbm::Pbm;
use crate::pgm::Pgm;
use crate::ppm::Ppm;
use header::{PnmHeader, parse_header};

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, NetpbmError> {
    let header = parse_header(data)?;
    Ok(ImageInfo {
        magic: header.magic,
        width: header.width,
        height: header.height,
        max_value: header.max_value,
    })
}

/// Checks shared by every decode path, run before any pixel is allocated.
///
/// Returns the payload that follows the header.
fn prepare<'a, T: Sample>(
    data: &'a [u8],
    header: &PnmHeader,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<&'a [u8], NetpbmError> {
    limits
        .unwrap_or(&Limits::UNLIMITED)
        .check_grid::<T>(header.width, header.height)?;

    stop.check()?;

    data.get(header.data_offset..)
        .ok_or(NetpbmError::UnexpectedEof { offset: data.len() })
}

fn require_family(header: &PnmHeader, format: NetpbmFormat) -> Result<(), NetpbmError> {
    if header.magic.format() != format {
        return Err(NetpbmError::InvalidMagicNumber {
            found: header.magic.as_str().into(),
        });
    }
    Ok(())
}

fn header_max(header: &PnmHeader) -> Result<u8, NetpbmError> {
    header.max_value.ok_or_else(|| NetpbmError::InvalidMaxValue {
        offset: header.data_offset,
        reason: "missing max value".into(),
    })
}

fn pbm_from_header(
    data: &[u8],
    header: &PnmHeader,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Pbm, NetpbmError> {
    let payload = prepare::<bool>(data, header, limits, stop)?;
    let (w, h, base) = (header.width, header.height, header.data_offset);
    let encoding = header.magic.encoding();
    let bits = match encoding {
        Encoding::Ascii => decode::decode_pbm_ascii(payload, base, w, h, stop)?,
        Encoding::Binary => decode::decode_pbm_binary(payload, base, w, h, stop)?,
    };
    Ok(Pbm::from_parts(Grid::from_pixels(bits, w, h), encoding))
}

fn pgm_from_header(
    data: &[u8],
    header: &PnmHeader,
    limits: Option<&Limits>,
    mode: SampleMode,
    stop: &dyn Stop,
) -> Result<Pgm, NetpbmError> {
    let max = header_max(header)?;
    let payload = prepare::<u8>(data, header, limits, stop)?;
    let (w, h, base) = (header.width, header.height, header.data_offset);
    let encoding = header.magic.encoding();
    let samples = match encoding {
        Encoding::Ascii => decode::decode_gray_ascii(payload, base, w, h, max, mode, stop)?,
        Encoding::Binary => decode::decode_gray_binary(payload, base, w, h, max, mode, stop)?,
    };
    Ok(Pgm::from_parts(Grid::from_pixels(samples, w, h), max, encoding))
}

fn ppm_from_header(
    data: &[u8],
    header: &PnmHeader,
    limits: Option<&Limits>,
    mode: SampleMode,
    stop: &dyn Stop,
) -> Result<Ppm, NetpbmError> {
    let max = header_max(header)?;
    let payload = prepare::<crate::pixel::Rgb>(data, header, limits, stop)?;
    let (w, h, base) = (header.width, header.height, header.data_offset);
    let encoding = header.magic.encoding();
    let pixels = match encoding {
        Encoding::Ascii => decode::decode_rgb_ascii(payload, base, w, h, max, mode, stop)?,
        Encoding::Binary => decode::decode_rgb_binary(payload, base, w, h, max, mode, stop)?,
    };
    Ok(Ppm::from_parts(Grid::from_pixels(pixels, w, h), max, encoding))
}

/// Decode P1/P4. Any other magic is `InvalidMagicNumber`.
pub(crate) fn decode_pbm(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Pbm, NetpbmError> {
    let header = parse_header(data)?;
    require_family(&header, NetpbmFormat::Pbm)?;
    pbm_from_header(data, &header, limits, stop)
}

pub(crate) fn decode_pgm(
    data: &[u8],
    limits: Option<&Limits>,
    mode: SampleMode,
    stop: &dyn Stop,
) -> Result<Pgm, NetpbmError> {
    let header = parse_header(data)?;
    require_family(&header, NetpbmFormat::Pgm)?;
    pgm_from_header(data, &header, limits, mode, stop)
}

pub(crate) fn decode_ppm(
    data: &[u8],
    limits: Option<&Limits>,
    mode: SampleMode,
    stop: &dyn Stop,
) -> Result<Ppm, NetpbmError> {
    let header = parse_header(data)?;
    require_family(&header, NetpbmFormat::Ppm)?;
    ppm_from_header(data, &header, limits, mode, stop)
}

/// Decode whichever family the magic number names.
pub(crate) fn decode_any(
    data: &[u8],
    limits: Option<&Limits>,
    mode: SampleMode,
    stop: &dyn Stop,
) -> Result<NetpbmImage, NetpbmError> {
    let header = parse_header(data)?;
    Ok(match header.magic.format() {
        NetpbmFormat::Pbm => NetpbmImage::Pbm(pbm_from_header(data, &header, limits, stop)?),
        NetpbmFormat::Pgm => NetpbmImage::Pgm(pgm_from_header(data, &header, limits, mode, stop)?),
        NetpbmFormat::Ppm => NetpbmImage::Ppm(ppm_from_header(data, &header, limits, mode, stop)?),
    })
}
