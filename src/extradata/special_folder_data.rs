use std::io::{self, Read, Write};

use getset::{Getters, Setters};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;

/// On-disk size of a SpecialFolderDataBlock, including the signature and size fields.
pub const BLOCK_SIZE: u32 = 0x00000010;

/// The SpecialFolderDataBlock structure specifies the location of a
/// special folder. This data can be used when a link target is a
/// special folder to keep track of the folder, so that the link target
/// IDList can be translated when the link is loaded.
#[derive(Clone, Copy, Debug, Default, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct SpecialFolderDataBlock {
    /// A 32-bit, unsigned integer that specifies the folder integer ID.
    special_folder_id: u32,
    /// A 32-bit, unsigned integer that specifies the location of the
    /// ItemID of the first child segment of the IDList specified by
    /// SpecialFolderID. This value is the offset, in bytes, into the
    /// link target IDList.
    offset: u32,
}

impl SpecialFolderDataBlock {
    /// Builds a new SpecialFolderDataBlock.
    pub fn new(special_folder_id: u32, offset: u32) -> Self {
        Self {
            special_folder_id,
            offset,
        }
    }

    pub(crate) fn read_from<R: Read + ?Sized>(reader: &mut R, block_size: u32) -> Result<Self, Error> {
        if block_size != BLOCK_SIZE {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "SpecialFolderDataBlock",
                expected: BLOCK_SIZE,
                actual: block_size,
            });
        }
        let special_folder_id = byte_io::read_u32(reader)?;
        let offset = byte_io::read_u32(reader)?;
        Ok(Self {
            special_folder_id,
            offset,
        })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        byte_io::write_u32(writer, self.special_folder_id)?;
        byte_io::write_u32(writer, self.offset)
    }
}
