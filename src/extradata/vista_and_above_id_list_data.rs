use std::io::{self, Read, Write};

use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;
use crate::idlist::IdList;

/// The VistaAndAboveIDListDataBlock structure specifies an alternate
/// IDList that can be used instead of the LinkTargetIDList structure
/// (section 2.2) on platforms that support it.
#[derive(Clone, Debug, Default, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub")]
pub struct VistaAndAboveIdListDataBlock {
    /// An IDList structure (section 2.2.1).
    id_list: IdList,
}

impl VistaAndAboveIdListDataBlock {
    /// Builds a new VistaAndAboveIdListDataBlock.
    pub fn new(id_list: IdList) -> Self {
        Self { id_list }
    }

    /// The minimum on-disk size of a VistaAndAboveIDListDataBlock, including
    /// the signature and size fields.
    pub const MIN_BLOCK_SIZE: u32 = 0x0A;

    pub(crate) fn read_from<R: Read + ?Sized>(reader: &mut R, block_size: u32) -> Result<Self, Error> {
        if block_size < Self::MIN_BLOCK_SIZE {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "VistaAndAboveIDListDataBlock",
                expected: Self::MIN_BLOCK_SIZE,
                actual: block_size,
            });
        }
        let id_list_total_size = byte_io::read_u16(reader)?;
        let id_list = IdList::read_from(reader, id_list_total_size.saturating_sub(2))?;
        Ok(Self { id_list })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        byte_io::write_u16(writer, self.id_list.on_disk_size())?;
        self.id_list.write_to(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itemid::ItemID;
    use std::io::Cursor;

    #[test]
    fn round_trips() {
        let mut id_list = IdList::default();
        id_list.push(ItemID::new(vec![1, 2, 3]));
        let block = VistaAndAboveIdListDataBlock::new(id_list);

        let mut buf = Vec::new();
        block.write_to(&mut buf).unwrap();
        let read_back =
            VistaAndAboveIdListDataBlock::read_from(&mut Cursor::new(&buf), buf.len() as u32 + 8)
                .unwrap();
        assert_eq!(read_back.id_list().on_disk_size(), block.id_list().on_disk_size());
    }

    #[test]
    fn rejects_block_smaller_than_minimum() {
        let buf = vec![0u8; 1];
        let err = VistaAndAboveIdListDataBlock::read_from(&mut Cursor::new(&buf), 9).unwrap_err();
        assert!(matches!(
            err,
            Error::ExtraDataBlockWrongSize { name: "VistaAndAboveIDListDataBlock", .. }
        ));
    }
}
