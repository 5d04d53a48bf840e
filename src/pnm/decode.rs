//! Payload decoders for P1-P6.
//!
//! Every decoder receives the bytes after the header and the header length
//! (`base`) so reported offsets point into the original input.

use enough::Stop;

use super::header::parse_decimal;
use crate::decode::SampleMode;
use crate::error::NetpbmError;
use crate::pixel::Rgb;

// ── Sample range policy ─────────────────────────────────────────────

struct SampleCheck {
    max: u8,
    mode: SampleMode,
    clamped: u64,
}

impl SampleCheck {
    fn new(max: u8, mode: SampleMode) -> Self {
        Self {
            max,
            mode,
            clamped: 0,
        }
    }

    fn apply(&mut self, value: u32, row: u32, column: u32) -> Result<u8, NetpbmError> {
        if value <= u32::from(self.max) {
            return Ok(value as u8);
        }
        match self.mode {
            SampleMode::Strict => Err(NetpbmError::SampleOutOfRange {
                row,
                column,
                value,
                max: u32::from(self.max),
            }),
            SampleMode::Clamp => {
                self.clamped += 1;
                Ok(self.max)
            }
        }
    }

    fn finish(&self) {
        if self.clamped > 0 {
            log::warn!(
                "clamped {} samples to max value {}",
                self.clamped,
                self.max
            );
        }
    }
}

// ── ASCII tokens ────────────────────────────────────────────────────

struct AsciiSamples<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> AsciiSamples<'a> {
    fn new(data: &'a [u8], base: usize) -> Self {
        Self { data, pos: 0, base }
    }

    fn skip_whitespace(&mut self) -> Result<(), NetpbmError> {
        while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos >= self.data.len() {
            return Err(NetpbmError::UnexpectedEof {
                offset: self.base + self.pos,
            });
        }
        Ok(())
    }

    /// Next whitespace-separated decimal token.
    fn next_value(&mut self, row: u32, column: u32) -> Result<u32, NetpbmError> {
        self.skip_whitespace()?;
        let start = self.pos;
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        let token = &self.data[start..self.pos];
        parse_decimal(token).ok_or_else(|| NetpbmError::MalformedPixelData {
            row,
            column,
            reason: format!(
                "{:?} at byte {} is not a decimal sample",
                String::from_utf8_lossy(token),
                self.base + start
            ),
        })
    }

    /// Next `0`/`1` character; separating whitespace is optional.
    fn next_bit(&mut self, row: u32, column: u32) -> Result<bool, NetpbmError> {
        self.skip_whitespace()?;
        let byte = self.data[self.pos];
        let bit = match byte {
            b'0' => false,
            b'1' => true,
            other => {
                return Err(NetpbmError::MalformedPixelData {
                    row,
                    column,
                    reason: format!(
                        "byte {:?} at {} is not a bit",
                        other as char,
                        self.base + self.pos
                    ),
                });
            }
        };
        self.pos += 1;
        Ok(bit)
    }
}

/// Fail early when the payload cannot possibly hold `needed` bytes.
fn require_len(payload: &[u8], needed: usize, base: usize) -> Result<(), NetpbmError> {
    if payload.len() < needed {
        return Err(NetpbmError::UnexpectedEof {
            offset: base + payload.len(),
        });
    }
    Ok(())
}

// ── PBM ─────────────────────────────────────────────────────────────

/// P1: one `0`/`1` per pixel.
pub(crate) fn decode_pbm_ascii(
    payload: &[u8],
    base: usize,
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<Vec<bool>, NetpbmError> {
    let count = width as usize * height as usize;
    require_len(payload, count, base)?;

    let mut tokens = AsciiSamples::new(payload, base);
    let mut out = Vec::with_capacity(count);
    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..width {
            out.push(tokens.next_bit(y, x)?);
        }
    }
    Ok(out)
}

/// Bytes per packed P4 row.
pub(crate) fn packed_row_len(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Expand one MSB-first packed row; bits past `width` are ignored.
pub(crate) fn unpack_row(packed: &[u8], width: u32, out: &mut Vec<bool>) {
    for x in 0..width as usize {
        out.push((packed[x / 8] >> (7 - x % 8)) & 1 == 1);
    }
}

/// P4: `ceil(width / 8)` bytes per row, MSB first.
pub(crate) fn decode_pbm_binary(
    payload: &[u8],
    base: usize,
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<Vec<bool>, NetpbmError> {
    let row_len = packed_row_len(width);
    let expected = row_len
        .checked_mul(height as usize)
        .ok_or(NetpbmError::DimensionsTooLarge { width, height })?;
    require_len(payload, expected, base)?;

    let mut out = Vec::with_capacity(width as usize * height as usize);
    for (y, row) in payload[..expected].chunks_exact(row_len).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        unpack_row(row, width, &mut out);
    }
    Ok(out)
}

// ── PGM ─────────────────────────────────────────────────────────────

/// P2: decimal intensities.
pub(crate) fn decode_gray_ascii(
    payload: &[u8],
    base: usize,
    width: u32,
    height: u32,
    max: u8,
    mode: SampleMode,
    stop: &dyn Stop,
) -> Result<Vec<u8>, NetpbmError> {
    let count = width as usize * height as usize;
    require_len(payload, count, base)?;

    let mut tokens = AsciiSamples::new(payload, base);
    let mut check = SampleCheck::new(max, mode);
    let mut out = Vec::with_capacity(count);
    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..width {
            let value = tokens.next_value(y, x)?;
            out.push(check.apply(value, y, x)?);
        }
    }
    check.finish();
    Ok(out)
}

/// P5: one byte per pixel.
pub(crate) fn decode_gray_binary(
    payload: &[u8],
    base: usize,
    width: u32,
    height: u32,
    max: u8,
    mode: SampleMode,
    stop: &dyn Stop,
) -> Result<Vec<u8>, NetpbmError> {
    let w = width as usize;
    let count = w * height as usize;
    require_len(payload, count, base)?;

    let mut check = SampleCheck::new(max, mode);
    let mut out = Vec::with_capacity(count);
    for (y, row) in payload[..count].chunks_exact(w).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for (x, &v) in row.iter().enumerate() {
            out.push(check.apply(u32::from(v), y as u32, x as u32)?);
        }
    }
    check.finish();
    Ok(out)
}

// ── PPM ─────────────────────────────────────────────────────────────

/// P3: decimal `R G B` triples.
pub(crate) fn decode_rgb_ascii(
    payload: &[u8],
    base: usize,
    width: u32,
    height: u32,
    max: u8,
    mode: SampleMode,
    stop: &dyn Stop,
) -> Result<Vec<Rgb>, NetpbmError> {
    let count = width as usize * height as usize;
    let samples = count
        .checked_mul(3)
        .ok_or(NetpbmError::DimensionsTooLarge { width, height })?;
    require_len(payload, samples, base)?;

    let mut tokens = AsciiSamples::new(payload, base);
    let mut check = SampleCheck::new(max, mode);
    let mut out = Vec::with_capacity(count);
    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..width {
            let r = check.apply(tokens.next_value(y, x)?, y, x)?;
            let g = check.apply(tokens.next_value(y, x)?, y, x)?;
            let b = check.apply(tokens.next_value(y, x)?, y, x)?;
            out.push(Rgb::new(r, g, b));
        }
    }
    check.finish();
    Ok(out)
}

/// P6: three bytes per pixel, R then G then B.
pub(crate) fn decode_rgb_binary(
    payload: &[u8],
    base: usize,
    width: u32,
    height: u32,
    max: u8,
    mode: SampleMode,
    stop: &dyn Stop,
) -> Result<Vec<Rgb>, NetpbmError> {
    let count = width as usize * height as usize;
    let row_len = width as usize * 3;
    let expected = count
        .checked_mul(3)
        .ok_or(NetpbmError::DimensionsTooLarge { width, height })?;
    require_len(payload, expected, base)?;

    let mut check = SampleCheck::new(max, mode);
    let mut out = Vec::with_capacity(count);
    for (y, row) in payload[..expected].chunks_exact(row_len).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        let y = y as u32;
        for (x, px) in row.chunks_exact(3).enumerate() {
            let x = x as u32;
            out.push(Rgb::new(
                check.apply(u32::from(px[0]), y, x)?,
                check.apply(u32::from(px[1]), y, x)?,
                check.apply(u32::from(px[2]), y, x)?,
            ));
        }
    }
    check.finish();
    Ok(out)
}
