use std::io::Write;

use enough::Stop;

use crate::decode::NetpbmImage;
use crate::error::NetpbmError;
use crate::info::MagicNumber;
use crate::pbm::Pbm;
use crate::pgm::Pgm;
use crate::pnm;
use crate::ppm::Ppm;

mod sealed {
    pub trait Sealed {}
    impl Sealed for crate::pbm::Pbm {}
    impl Sealed for crate::pgm::Pgm {}
    impl Sealed for crate::ppm::Ppm {}
    impl Sealed for crate::decode::NetpbmImage {}
}

/// Images this crate can serialize: [`Pbm`], [`Pgm`], [`Ppm`], [`NetpbmImage`].
pub trait NetpbmEncode: sealed::Sealed {
    /// The magic number used when the request does not override it.
    fn magic_number(&self) -> MagicNumber;

    #[doc(hidden)]
    fn encode_as(&self, magic: MagicNumber, stop: &dyn Stop) -> Result<Vec<u8>, NetpbmError>;
}

impl NetpbmEncode for Pbm {
    fn magic_number(&self) -> MagicNumber {
        Pbm::magic_number(self)
    }

    fn encode_as(&self, magic: MagicNumber, stop: &dyn Stop) -> Result<Vec<u8>, NetpbmError> {
        pnm::encode_pbm(self.grid(), magic, stop)
    }
}

impl NetpbmEncode for Pgm {
    fn magic_number(&self) -> MagicNumber {
        Pgm::magic_number(self)
    }

    fn encode_as(&self, magic: MagicNumber, stop: &dyn Stop) -> Result<Vec<u8>, NetpbmError> {
        pnm::encode_pgm(self.grid(), self.max_value(), magic, stop)
    }
}

impl NetpbmEncode for Ppm {
    fn magic_number(&self) -> MagicNumber {
        Ppm::magic_number(self)
    }

    fn encode_as(&self, magic: MagicNumber, stop: &dyn Stop) -> Result<Vec<u8>, NetpbmError> {
        pnm::encode_ppm(self.grid(), self.max_value(), magic, stop)
    }
}

impl NetpbmEncode for NetpbmImage {
    fn magic_number(&self) -> MagicNumber {
        NetpbmImage::magic_number(self)
    }

    fn encode_as(&self, magic: MagicNumber, stop: &dyn Stop) -> Result<Vec<u8>, NetpbmError> {
        match self {
            NetpbmImage::Pbm(img) => img.encode_as(magic, stop),
            NetpbmImage::Pgm(img) => img.encode_as(magic, stop),
            NetpbmImage::Ppm(img) => img.encode_as(magic, stop),
        }
    }
}

/// Encode request builder.
///
/// ```no_run
/// use zennetpbm::{EncodeRequest, MagicNumber, Pgm, Unstoppable};
///
/// let img = Pgm::new(4, 4, 255)?;
/// let plain = EncodeRequest::with_magic(MagicNumber::P2).encode(&img, Unstoppable)?;
/// assert!(plain.starts_with(b"P2\n"));
/// # Ok::<(), zennetpbm::NetpbmError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    magic: Option<MagicNumber>,
}

impl EncodeRequest {
    /// Keep each image's own magic number.
    pub fn new() -> Self {
        Self { magic: None }
    }

    /// Re-target the ASCII/binary variant. The magic must belong to the
    /// image's family, else encoding fails with `UnsupportedMagicNumber`.
    pub fn with_magic(magic: MagicNumber) -> Self {
        Self { magic: Some(magic) }
    }

    pub fn encode<I: NetpbmEncode + ?Sized>(
        &self,
        image: &I,
        stop: impl Stop,
    ) -> Result<Vec<u8>, NetpbmError> {
        let magic = self.magic.unwrap_or_else(|| image.magic_number());
        image.encode_as(magic, &stop)
    }

    /// Encode, write the bytes, and flush `writer`.
    ///
    /// The writer is flushed on every path, including encode and write errors.
    /// Bytes already handed to the writer before a failure stay there.
    pub fn write_to<I: NetpbmEncode + ?Sized, W: Write>(
        &self,
        image: &I,
        mut writer: W,
        stop: impl Stop,
    ) -> Result<(), NetpbmError> {
        let bytes = match self.encode(image, stop) {
            Ok(bytes) => bytes,
            Err(e) => {
                let _ = writer.flush();
                return Err(e);
            }
        };
        let written = writer.write_all(&bytes);
        let flushed = writer.flush();
        written?;
        flushed?;
        log::trace!("wrote {} bytes", bytes.len());
        Ok(())
    }
}
