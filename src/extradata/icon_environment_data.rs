use std::io::{self, Read, Write};

use encoding_rs::Encoding;
use getset::{Getters, Setters};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;

/// On-disk size of an IconEnvironmentDataBlock, including the signature and size fields.
pub const BLOCK_SIZE: u32 = 0x00000314;

/// The IconEnvironmentDataBlock structure specifies the path to an
/// icon. The path is encoded using environment variables, which makes
/// it possible to find the icon across machines where the locations
/// vary but are expressed using environment variables.
#[derive(Clone, Debug, Default, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct IconEnvironmentDataBlock {
    /// A NULL-terminated string, defined by the system default code
    /// page, which specifies a path that is constructed with
    /// environment variables.
    target_ansi: String,
    /// An optional, NULL-terminated, Unicode string that specifies a
    /// path that is constructed with environment variables.
    target_unicode: Option<String>,
}

impl IconEnvironmentDataBlock {
    /// Builds a new IconEnvironmentDataBlock.
    pub fn new(target_ansi: String, target_unicode: Option<String>) -> Self {
        Self {
            target_ansi,
            target_unicode,
        }
    }

    pub(crate) fn read_from<R: Read + ?Sized>(
        reader: &mut R,
        block_size: u32,
        default_codepage: &'static Encoding,
    ) -> Result<Self, Error> {
        if block_size != BLOCK_SIZE {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "IconEnvironmentDataBlock",
                expected: BLOCK_SIZE,
                actual: block_size,
            });
        }
        let target_ansi = byte_io::read_fixed_codepage(reader, 260, default_codepage)?;
        let target_unicode = byte_io::read_fixed_wide(reader, 520)?;
        let target_unicode = if target_unicode.is_empty() {
            None
        } else {
            Some(target_unicode)
        };
        Ok(Self {
            target_ansi,
            target_unicode,
        })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        default_codepage: &'static Encoding,
    ) -> io::Result<()> {
        byte_io::write_fixed_codepage(writer, &self.target_ansi, 260, default_codepage)?;
        byte_io::write_fixed_wide(writer, self.target_unicode.as_deref().unwrap_or(""), 520)
    }
}
