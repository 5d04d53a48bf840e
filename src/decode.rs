use enough::Stop;

use crate::error::NetpbmError;
use crate::info::{MagicNumber, NetpbmFormat};
use crate::limits::Limits;
use crate::pbm::Pbm;
use crate::pgm::Pgm;
use crate::pnm;
use crate::ppm::Ppm;

/// What to do with a sample above the header's max value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleMode {
    /// Fail with [`NetpbmError::SampleOutOfRange`].
    #[default]
    Strict,
    /// Clamp to max and keep going. A warning is logged once per image.
    Clamp,
}

/// A decoded image of whichever family the magic number named.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetpbmImage {
    Pbm(Pbm),
    Pgm(Pgm),
    Ppm(Ppm),
}

impl NetpbmImage {
    pub fn format(&self) -> NetpbmFormat {
        match self {
            NetpbmImage::Pbm(_) => NetpbmFormat::Pbm,
            NetpbmImage::Pgm(_) => NetpbmFormat::Pgm,
            NetpbmImage::Ppm(_) => NetpbmFormat::Ppm,
        }
    }

    pub fn magic_number(&self) -> MagicNumber {
        match self {
            NetpbmImage::Pbm(img) => img.magic_number(),
            NetpbmImage::Pgm(img) => img.magic_number(),
            NetpbmImage::Ppm(img) => img.magic_number(),
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            NetpbmImage::Pbm(img) => img.width(),
            NetpbmImage::Pgm(img) => img.width(),
            NetpbmImage::Ppm(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            NetpbmImage::Pbm(img) => img.height(),
            NetpbmImage::Pgm(img) => img.height(),
            NetpbmImage::Ppm(img) => img.height(),
        }
    }

    /// `None` for PBM, which has no max value.
    pub fn max_value(&self) -> Option<u8> {
        match self {
            NetpbmImage::Pbm(_) => None,
            NetpbmImage::Pgm(img) => Some(img.max_value()),
            NetpbmImage::Ppm(img) => Some(img.max_value()),
        }
    }

    pub fn into_pbm(self) -> Option<Pbm> {
        match self {
            NetpbmImage::Pbm(img) => Some(img),
            _ => None,
        }
    }

    pub fn into_pgm(self) -> Option<Pgm> {
        match self {
            NetpbmImage::Pgm(img) => Some(img),
            _ => None,
        }
    }

    pub fn into_ppm(self) -> Option<Ppm> {
        match self {
            NetpbmImage::Ppm(img) => Some(img),
            _ => None,
        }
    }
}

impl From<Pbm> for NetpbmImage {
    fn from(img: Pbm) -> Self {
        NetpbmImage::Pbm(img)
    }
}

impl From<Pgm> for NetpbmImage {
    fn from(img: Pgm) -> Self {
        NetpbmImage::Pgm(img)
    }
}

impl From<Ppm> for NetpbmImage {
    fn from(img: Ppm) -> Self {
        NetpbmImage::Ppm(img)
    }
}

/// Decode request builder.
///
/// ```no_run
/// use zennetpbm::{DecodeRequest, Limits, SampleMode, Unstoppable};
///
/// # let data: &[u8] = &[];
/// let limits = Limits {
///     max_pixels: Some(1 << 24),
///     ..Limits::default()
/// };
/// let image = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_sample_mode(SampleMode::Clamp)
///     .decode(Unstoppable)?;
/// # Ok::<(), zennetpbm::NetpbmError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    sample_mode: SampleMode,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            sample_mode: SampleMode::Strict,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_sample_mode(mut self, mode: SampleMode) -> Self {
        self.sample_mode = mode;
        self
    }

    /// Detect the family from the magic number and decode.
    pub fn decode(&self, stop: impl Stop) -> Result<NetpbmImage, NetpbmError> {
        pnm::decode_any(self.data, self.limits, self.sample_mode, &stop)
    }

    /// Decode `P1`/`P4`; other magics fail with `InvalidMagicNumber`.
    pub fn decode_pbm(&self, stop: impl Stop) -> Result<Pbm, NetpbmError> {
        pnm::decode_pbm(self.data, self.limits, &stop)
    }

    /// Decode `P2`/`P5`; other magics fail with `InvalidMagicNumber`.
    pub fn decode_pgm(&self, stop: impl Stop) -> Result<Pgm, NetpbmError> {
        pnm::decode_pgm(self.data, self.limits, self.sample_mode, &stop)
    }

    /// Decode `P3`/`P6`; other magics fail with `InvalidMagicNumber`.
    pub fn decode_ppm(&self, stop: impl Stop) -> Result<Ppm, NetpbmError> {
        pnm::decode_ppm(self.data, self.limits, self.sample_mode, &stop)
    }
}
