use std::io::{self, Read, Write};

use getset::{Getters, Setters};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;

/// On-disk size of a ConsoleFEDataBlock, including the signature and size fields.
pub const BLOCK_SIZE: u32 = 0x0000000C;

/// The ConsoleFEDataBlock structure specifies the code page to use
/// for displaying text when a link target specifies an application
/// that is run in a console window.
#[derive(Clone, Copy, Debug, Default, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct ConsoleFEDataBlock {
    /// A 32-bit, unsigned integer that specifies a code page language
    /// code identifier. For details concerning the structure and
    /// meaning of language code identifiers, see [MS-LCID].
    code_page: u32,
}

impl ConsoleFEDataBlock {
    /// Builds a new ConsoleFEDataBlock.
    pub fn new(code_page: u32) -> Self {
        Self { code_page }
    }

    pub(crate) fn read_from<R: Read + ?Sized>(reader: &mut R, block_size: u32) -> Result<Self, Error> {
        if block_size != BLOCK_SIZE {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "ConsoleFEDataBlock",
                expected: BLOCK_SIZE,
                actual: block_size,
            });
        }
        Ok(Self {
            code_page: byte_io::read_u32(reader)?,
        })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        byte_io::write_u32(writer, self.code_page)
    }
}
