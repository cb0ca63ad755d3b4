use std::io::{self, Read, Write};

use getset::{Getters, Setters};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;
use crate::guid::Guid;

/// On-disk size of a KnownFolderDataBlock, including the signature and size fields.
pub const BLOCK_SIZE: u32 = 0x0000001C;

/// The KnownFolderDataBlock structure specifies the location of a
/// known folder. This data can be used when a link target is a
/// known folder to keep track of the folder so that the link target
/// IDList can be translated when the link is loaded.
#[derive(Clone, Copy, Debug, Default, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct KnownFolderDataBlock {
    /// A value in GUID packet representation ([MS-DTYP] section
    /// 2.3.4.2) that specifies the folder GUID ID.
    known_folder_id: Guid,
    /// A 32-bit, unsigned integer that specifies the location
    /// of the ItemID of the first child segment of the IDList specified
    /// by KnownFolderID. This value is the offset, in bytes, into the
    /// link target IDList.
    offset: u32,
}

impl KnownFolderDataBlock {
    /// Builds a new KnownFolderDataBlock.
    pub fn new(known_folder_id: Guid, offset: u32) -> Self {
        Self {
            known_folder_id,
            offset,
        }
    }

    pub(crate) fn read_from<R: Read + ?Sized>(reader: &mut R, block_size: u32) -> Result<Self, Error> {
        if block_size != BLOCK_SIZE {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "KnownFolderDataBlock",
                expected: BLOCK_SIZE,
                actual: block_size,
            });
        }
        let known_folder_id = Guid::read_from(reader)?;
        let offset = byte_io::read_u32(reader)?;
        Ok(Self {
            known_folder_id,
            offset,
        })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.known_folder_id.write_to(writer)?;
        byte_io::write_u32(writer, self.offset)
    }
}
