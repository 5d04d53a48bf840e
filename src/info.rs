use core::fmt;

use crate::error::NetpbmError;

/// Semantic image family, independent of wire encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetpbmFormat {
    /// Bilevel, 1 bit per pixel.
    Pbm,
    /// Grayscale, 8-bit samples.
    Pgm,
    /// RGB color, three 8-bit samples.
    Ppm,
}

/// Payload encoding: plain ASCII tokens or raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    Ascii,
    Binary,
}

/// The 2-character token that opens every Netpbm header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MagicNumber {
    /// PBM, ASCII.
    P1,
    /// PGM, ASCII.
    P2,
    /// PPM, ASCII.
    P3,
    /// PBM, binary (bit-packed).
    P4,
    /// PGM, binary.
    P5,
    /// PPM, binary.
    P6,
}

impl MagicNumber {
    /// Parse a header token such as `b"P5"`.
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"P1" => Some(Self::P1),
            b"P2" => Some(Self::P2),
            b"P3" => Some(Self::P3),
            b"P4" => Some(Self::P4),
            b"P5" => Some(Self::P5),
            b"P6" => Some(Self::P6),
            _ => None,
        }
    }

    /// The magic for a given family and encoding.
    pub fn new(format: NetpbmFormat, encoding: Encoding) -> Self {
        match (format, encoding) {
            (NetpbmFormat::Pbm, Encoding::Ascii) => Self::P1,
            (NetpbmFormat::Pgm, Encoding::Ascii) => Self::P2,
            (NetpbmFormat::Ppm, Encoding::Ascii) => Self::P3,
            (NetpbmFormat::Pbm, Encoding::Binary) => Self::P4,
            (NetpbmFormat::Pgm, Encoding::Binary) => Self::P5,
            (NetpbmFormat::Ppm, Encoding::Binary) => Self::P6,
        }
    }

    pub fn format(self) -> NetpbmFormat {
        match self {
            Self::P1 | Self::P4 => NetpbmFormat::Pbm,
            Self::P2 | Self::P5 => NetpbmFormat::Pgm,
            Self::P3 | Self::P6 => NetpbmFormat::Ppm,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            Self::P1 | Self::P2 | Self::P3 => Encoding::Ascii,
            Self::P4 | Self::P5 | Self::P6 => Encoding::Binary,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
            Self::P5 => "P5",
            Self::P6 => "P6",
        }
    }

    /// Whether the header carries a max-value line.
    pub fn has_max_value(self) -> bool {
        self.format() != NetpbmFormat::Pbm
    }

    /// Fails with `UnsupportedMagicNumber` unless `self` belongs to `format`.
    pub(crate) fn require_format(self, format: NetpbmFormat) -> Result<(), NetpbmError> {
        if self.format() == format {
            Ok(())
        } else {
            Err(NetpbmError::UnsupportedMagicNumber {
                magic: self,
                format,
            })
        }
    }
}

impl fmt::Display for MagicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header facts available without decoding the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub magic: MagicNumber,
    pub width: u32,
    pub height: u32,
    /// Declared max sample value; `None` for PBM.
    pub max_value: Option<u8>,
}

impl ImageInfo {
    /// Probe a Netpbm header.
    pub fn from_bytes(data: &[u8]) -> Result<Self, NetpbmError> {
        crate::pnm::probe_header(data)
    }

    pub fn format(&self) -> NetpbmFormat {
        self.magic.format()
    }
}
