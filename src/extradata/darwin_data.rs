use std::io::{self, Read, Write};

use encoding_rs::Encoding;
use getset::{Getters, Setters};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;

/// On-disk size of a DarwinDataBlock, including the signature and size fields.
pub const BLOCK_SIZE: u32 = 0x00000314;

/// The DarwinDataBlock structure specifies an application identifier
/// that can be used instead of a link target IDList to install an
/// application when a shell link is activated.
#[derive(Clone, Debug, Default, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct DarwinDataBlock {
    /// A NULL–terminated string, defined by the system default code
    /// page, which specifies an application identifier. This field
    /// SHOULD be ignored.
    darwin_data_ansi: String,

    /// An optional, NULL–terminated, Unicode string that specifies
    /// an application identifier.
    darwin_data_unicode: Option<String>,
}

impl DarwinDataBlock {
    /// Builds a new DarwinDataBlock.
    pub fn new(darwin_data_ansi: String, darwin_data_unicode: Option<String>) -> Self {
        Self {
            darwin_data_ansi,
            darwin_data_unicode,
        }
    }

    pub(crate) fn read_from<R: Read + ?Sized>(
        reader: &mut R,
        block_size: u32,
        default_codepage: &'static Encoding,
    ) -> Result<Self, Error> {
        if block_size != BLOCK_SIZE {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "DarwinDataBlock",
                expected: BLOCK_SIZE,
                actual: block_size,
            });
        }
        let darwin_data_ansi = byte_io::read_fixed_codepage(reader, 260, default_codepage)?;
        let darwin_data_unicode = byte_io::read_fixed_wide(reader, 520)?;
        let darwin_data_unicode = if darwin_data_unicode.is_empty() {
            None
        } else {
            Some(darwin_data_unicode)
        };
        Ok(Self {
            darwin_data_ansi,
            darwin_data_unicode,
        })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        default_codepage: &'static Encoding,
    ) -> io::Result<()> {
        byte_io::write_fixed_codepage(writer, &self.darwin_data_ansi, 260, default_codepage)?;
        byte_io::write_fixed_wide(
            writer,
            self.darwin_data_unicode.as_deref().unwrap_or(""),
            520,
        )
    }
}
