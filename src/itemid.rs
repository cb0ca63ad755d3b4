use core::fmt;
use std::io::{self, Read, Write};

use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;

/// An element of an [`IdList`](crate::idlist::IdList): an opaque,
/// shell-data-source-defined identifier for one segment of a target path
/// (e.g. "My Computer", then a drive, then a directory, then a file).
#[derive(Clone, Default, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub")]
pub struct ItemID {
    /// The shell data source-defined data that specifies an item.
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    data: Vec<u8>,
}

impl fmt::Debug for ItemID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemID (raw data size {})", self.data.len())
    }
}

impl ItemID {
    /// Builds an ItemID wrapping the given opaque payload.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Replaces this item's opaque payload.
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// The size, in bytes, this item occupies on disk, including its own
    /// 2-byte size field.
    pub fn on_disk_size(&self) -> u16 {
        self.data.len() as u16 + 2
    }

    /// Reads a single ItemID. `size` is the 2-byte size field already
    /// consumed by the caller (the terminator, `size == 0`, is handled by
    /// [`IdList::read_from`](crate::idlist::IdList::read_from), not here).
    pub(crate) fn read_from<R: Read + ?Sized>(reader: &mut R, size: u16) -> io::Result<Self> {
        let payload_len = size.saturating_sub(2) as usize;
        let mut data = vec![0u8; payload_len];
        reader.read_exact(&mut data)?;
        Ok(Self { data })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        byte_io::write_u16(writer, self.on_disk_size())?;
        writer.write_all(&self.data)
    }
}
