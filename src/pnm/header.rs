//! Netpbm header grammar: magic, width, height, and (PGM/PPM) max value.
//!
//! Header tokens are separated by ASCII whitespace, and `#` comments running
//! to end of line may appear between any two tokens. The last token is
//! followed by exactly one whitespace byte, after which the payload starts.

use crate::error::NetpbmError;
use crate::info::MagicNumber;

/// Parsed header plus the payload start offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PnmHeader {
    pub magic: MagicNumber,
    pub width: u32,
    pub height: u32,
    pub max_value: Option<u8>,
    pub data_offset: usize,
}

// ── Cursor over the header bytes ────────────────────────────────────

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Skip whitespace and `#` comments up to the next token.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        while let Some(byte) = self.peek() {
            if byte == b'#' {
                while let Some(b) = self.peek() {
                    self.pos += 1;
                    if b == b'\n' || b == b'\r' {
                        break;
                    }
                }
            } else if byte.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Bytes up to (not including) the next whitespace or comment start.
    pub(crate) fn next_token(&mut self) -> &'a [u8] {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte.is_ascii_whitespace() || byte == b'#' {
                break;
            }
            self.pos += 1;
        }
        &self.data[start..self.pos]
    }

    /// Consume the single whitespace byte that ends the header.
    ///
    /// A comment glued to the last token ends with its own newline, which then
    /// serves as that byte.
    fn expect_single_whitespace(&mut self) -> Result<(), NetpbmError> {
        if self.peek() == Some(b'#') {
            while let Some(b) = self.peek() {
                self.pos += 1;
                if b == b'\n' || b == b'\r' {
                    return Ok(());
                }
            }
            return Err(NetpbmError::UnexpectedEof { offset: self.pos });
        }
        match self.peek() {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(NetpbmError::UnexpectedEof { offset: self.pos }),
        }
    }
}

/// Parse a run of ASCII digits into a `u32`. `None` for empty, non-digit, or overflow.
pub(crate) fn parse_decimal(token: &[u8]) -> Option<u32> {
    if token.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for &b in token {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }
    Some(value)
}

fn read_dimension(cursor: &mut Cursor<'_>, what: &str) -> Result<u32, NetpbmError> {
    cursor.skip_whitespace_and_comments();
    let offset = cursor.position();
    let token = cursor.next_token();
    if token.is_empty() {
        return Err(NetpbmError::InvalidDimensions {
            offset,
            reason: format!("missing {what}"),
        });
    }
    match parse_decimal(token) {
        Some(0) => Err(NetpbmError::InvalidDimensions {
            offset,
            reason: format!("{what} must be positive"),
        }),
        Some(v) => Ok(v),
        None => Err(NetpbmError::InvalidDimensions {
            offset,
            reason: format!("{what} {:?} is not a number", String::from_utf8_lossy(token)),
        }),
    }
}

fn read_max_value(cursor: &mut Cursor<'_>) -> Result<u8, NetpbmError> {
    cursor.skip_whitespace_and_comments();
    let offset = cursor.position();
    let token = cursor.next_token();
    match parse_decimal(token) {
        Some(0) => Err(NetpbmError::InvalidMaxValue {
            offset,
            reason: "max value must be at least 1".into(),
        }),
        Some(v) if v > u32::from(u8::MAX) => Err(NetpbmError::InvalidMaxValue {
            offset,
            reason: format!("max value {v} needs more than 8 bits"),
        }),
        Some(v) => Ok(v as u8),
        None => Err(NetpbmError::InvalidMaxValue {
            offset,
            reason: format!("{:?} is not a number", String::from_utf8_lossy(token)),
        }),
    }
}

/// Parse a complete header from the start of `data`.
pub(crate) fn parse_header(data: &[u8]) -> Result<PnmHeader, NetpbmError> {
    let mut cursor = Cursor::new(data);

    let token = cursor.next_token();
    let magic = MagicNumber::from_token(token).ok_or_else(|| NetpbmError::InvalidMagicNumber {
        found: String::from_utf8_lossy(token).into_owned(),
    })?;

    let width = read_dimension(&mut cursor, "width")?;
    let height = read_dimension(&mut cursor, "height")?;

    let max_value = if magic.has_max_value() {
        Some(read_max_value(&mut cursor)?)
    } else {
        None
    };

    cursor.expect_single_whitespace()?;

    let header = PnmHeader {
        magic,
        width,
        height,
        max_value,
        data_offset: cursor.position(),
    };
    log::debug!(
        "netpbm header: {} {}x{} max={:?} payload@{}",
        header.magic,
        header.width,
        header.height,
        header.max_value,
        header.data_offset
    );
    Ok(header)
}
