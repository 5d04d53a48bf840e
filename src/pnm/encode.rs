//! Netpbm encoder: P1-P6.

use enough::Stop;

use super::decode::packed_row_len;
use crate::error::NetpbmError;
use crate::grid::Grid;
use crate::info::{Encoding, MagicNumber, NetpbmFormat};
use crate::pixel::{Rgb, Sample};

fn header(magic: MagicNumber, width: u32, height: u32, max: Option<u8>) -> String {
    match max {
        Some(max) => format!("{magic}\n{width} {height}\n{max}\n"),
        None => format!("{magic}\n{width} {height}\n"),
    }
}

/// Append `v` in decimal.
fn push_decimal(out: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        out.push(b'0' + v / 100);
    }
    if v >= 10 {
        out.push(b'0' + (v / 10) % 10);
    }
    out.push(b'0' + v % 10);
}

/// Pack one row MSB first, zero-filling bits past the row end.
pub(crate) fn pack_row(row: &[bool], out: &mut Vec<u8>) {
    for chunk in row.chunks(8) {
        let byte = chunk
            .iter()
            .zip(0u8..)
            .fold(0u8, |acc, (&on, i)| acc | (u8::from(on) << (7 - i)));
        out.push(byte);
    }
}

fn check_samples<T: Sample>(
    grid: &Grid<T>,
    max: u8,
    channels: impl Fn(T) -> [u8; 3],
) -> Result<(), NetpbmError> {
    for (y, row) in grid.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            if let Some(&value) = channels(px).iter().find(|&&c| c > max) {
                return Err(NetpbmError::SampleOutOfRange {
                    row: y as u32,
                    column: x as u32,
                    value: u32::from(value),
                    max: u32::from(max),
                });
            }
        }
    }
    Ok(())
}

pub(crate) fn encode_pbm(
    grid: &Grid<bool>,
    magic: MagicNumber,
    stop: &dyn Stop,
) -> Result<Vec<u8>, NetpbmError> {
    magic.require_format(NetpbmFormat::Pbm)?;
    grid.validate()?;
    stop.check()?;

    let (width, height) = (grid.width(), grid.height());
    let w = width as usize;
    let h = height as usize;
    let head = header(magic, width, height, None);

    let out = match magic.encoding() {
        Encoding::Ascii => {
            let mut out = Vec::with_capacity(head.len() + w * h * 2);
            out.extend_from_slice(head.as_bytes());
            for (y, row) in grid.rows().enumerate() {
                if y % 16 == 0 {
                    stop.check()?;
                }
                for (x, &on) in row.iter().enumerate() {
                    if x > 0 {
                        out.push(b' ');
                    }
                    out.push(if on { b'1' } else { b'0' });
                }
                out.push(b'\n');
            }
            out
        }
        Encoding::Binary => {
            let mut out = Vec::with_capacity(head.len() + packed_row_len(width) * h);
            out.extend_from_slice(head.as_bytes());
            for (y, row) in grid.rows().enumerate() {
                if y % 16 == 0 {
                    stop.check()?;
                }
                pack_row(row, &mut out);
            }
            out
        }
    };

    log::trace!("encoded {magic} {width}x{height} into {} bytes", out.len());
    Ok(out)
}

pub(crate) fn encode_pgm(
    grid: &Grid<u8>,
    max: u8,
    magic: MagicNumber,
    stop: &dyn Stop,
) -> Result<Vec<u8>, NetpbmError> {
    magic.require_format(NetpbmFormat::Pgm)?;
    grid.validate()?;
    check_samples(grid, max, |v| [v, 0, 0])?;
    stop.check()?;

    let (width, height) = (grid.width(), grid.height());
    let w = width as usize;
    let h = height as usize;
    let head = header(magic, width, height, Some(max));

    let out = match magic.encoding() {
        Encoding::Ascii => {
            let mut out = Vec::with_capacity(head.len() + w * h * 4);
            out.extend_from_slice(head.as_bytes());
            for (y, row) in grid.rows().enumerate() {
                if y % 16 == 0 {
                    stop.check()?;
                }
                for (x, &v) in row.iter().enumerate() {
                    if x > 0 {
                        out.push(b' ');
                    }
                    push_decimal(&mut out, v);
                }
                out.push(b'\n');
            }
            out
        }
        Encoding::Binary => {
            let mut out = Vec::with_capacity(head.len() + w * h);
            out.extend_from_slice(head.as_bytes());
            out.extend_from_slice(grid.pixels());
            out
        }
    };

    log::trace!("encoded {magic} {width}x{height} into {} bytes", out.len());
    Ok(out)
}

pub(crate) fn encode_ppm(
    grid: &Grid<Rgb>,
    max: u8,
    magic: MagicNumber,
    stop: &dyn Stop,
) -> Result<Vec<u8>, NetpbmError> {
    magic.require_format(NetpbmFormat::Ppm)?;
    grid.validate()?;
    check_samples(grid, max, |px| [px.r, px.g, px.b])?;
    stop.check()?;

    let (width, height) = (grid.width(), grid.height());
    let w = width as usize;
    let h = height as usize;
    let head = header(magic, width, height, Some(max));

    let out = match magic.encoding() {
        Encoding::Ascii => {
            let mut out = Vec::with_capacity(head.len() + w * h * 12);
            out.extend_from_slice(head.as_bytes());
            for (y, row) in grid.rows().enumerate() {
                if y % 16 == 0 {
                    stop.check()?;
                }
                for (x, px) in row.iter().enumerate() {
                    if x > 0 {
                        out.push(b' ');
                    }
                    push_decimal(&mut out, px.r);
                    out.push(b' ');
                    push_decimal(&mut out, px.g);
                    out.push(b' ');
                    push_decimal(&mut out, px.b);
                }
                out.push(b'\n');
            }
            out
        }
        Encoding::Binary => {
            let mut out = Vec::with_capacity(head.len() + w * h * 3);
            out.extend_from_slice(head.as_bytes());
            for (y, row) in grid.rows().enumerate() {
                if y % 16 == 0 {
                    stop.check()?;
                }
                for px in row {
                    out.extend_from_slice(&[px.r, px.g, px.b]);
                }
            }
            out
        }
    };

    log::trace!("encoded {magic} {width}x{height} into {} bytes", out.len());
    Ok(out)
}
