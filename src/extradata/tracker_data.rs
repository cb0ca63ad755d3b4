use std::io::{self, Read, Write};

use encoding_rs::Encoding;
use getset::{Getters, Setters};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;
use crate::guid::Guid;

/// On-disk size of a TrackerDataBlock, including the signature and size fields.
pub const BLOCK_SIZE: u32 = 0x00000060;

const LENGTH: u32 = 0x00000058;
const VERSION: u32 = 0x00000000;

/// The TrackerDataBlock structure specifies data that can be used to
/// resolve a link target if it is not found in its original location
/// when the link is resolved. This data is passed to the Link
/// Tracking service [MS-DLTW] to find the link target.
#[derive(Clone, Debug, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct TrackerDataBlock {
    /// A NULL–terminated character string, as defined by the system default
    /// code page, which specifies the NetBIOS name of the machine where
    /// the link target was last known to reside.
    machine_id: String,
    /// Two values in GUID packet representation ([MS-DTYP] section 2.3.4.2)
    /// that are used to find the link target with the Link Tracking service,
    /// as described in [MS-DLTW].
    droid: [Guid; 2],
    /// Two values in GUID packet representation that are used to find the
    /// link target with the Link Tracking service
    droid_birth: [Guid; 2],
}

impl TrackerDataBlock {
    /// Builds a new TrackerDataBlock.
    pub fn new(machine_id: String, droid: [Guid; 2], droid_birth: [Guid; 2]) -> Self {
        Self {
            machine_id,
            droid,
            droid_birth,
        }
    }

    pub(crate) fn read_from<R: Read + ?Sized>(
        reader: &mut R,
        block_size: u32,
        default_codepage: &'static Encoding,
    ) -> Result<Self, Error> {
        if block_size != BLOCK_SIZE {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "TrackerDataBlock",
                expected: BLOCK_SIZE,
                actual: block_size,
            });
        }
        let length = byte_io::read_u32(reader)?;
        if length != LENGTH {
            return Err(Error::TrackerDataWrongLength(length));
        }
        let version = byte_io::read_u32(reader)?;
        if version != VERSION {
            return Err(Error::TrackerDataWrongVersion(version));
        }
        let machine_id = byte_io::read_fixed_codepage(reader, 16, default_codepage)?;
        let droid = [Guid::read_from(reader)?, Guid::read_from(reader)?];
        let droid_birth = [Guid::read_from(reader)?, Guid::read_from(reader)?];
        Ok(Self {
            machine_id,
            droid,
            droid_birth,
        })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        default_codepage: &'static Encoding,
    ) -> io::Result<()> {
        byte_io::write_u32(writer, LENGTH)?;
        byte_io::write_u32(writer, VERSION)?;
        byte_io::write_fixed_codepage(writer, &self.machine_id, 16, default_codepage)?;
        for g in &self.droid {
            g.write_to(writer)?;
        }
        for g in &self.droid_birth {
            g.write_to(writer)?;
        }
        Ok(())
    }
}
