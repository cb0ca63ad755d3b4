use std::io::{self, Read, Write};

#[allow(unused)]
use log::{debug, error, info, trace, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;
use crate::idlist::IdList;
use crate::itemid::ItemID;

/// The LinkTargetIDList structure specifies the target of the link. The presence of this optional
/// structure is specified by the HasLinkTargetIDList bit (LinkFlagssection 2.1.1) in the
/// ShellLinkHeader(section2.1).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LinkTargetIdList {
    id_list: IdList,
}

impl LinkTargetIdList {
    /// An empty LinkTargetIDList.
    pub fn new() -> Self {
        Self::default()
    }

    /// returns a reference to internal list of [`ItemID`] items
    pub fn id_list(&self) -> &Vec<ItemID> {
        self.id_list.item_id_list()
    }

    /// Appends an item to the target IDList.
    pub fn push(&mut self, item: ItemID) {
        self.id_list.push(item);
    }

    /// Replaces the item at `index`.
    pub fn set_item(&mut self, index: usize, item: ItemID) -> Result<(), Error> {
        self.id_list.set_item(index, item)
    }

    /// Removes the item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<ItemID, Error> {
        self.id_list.remove(index)
    }

    /// The on-disk size of the IDList field, including the 2-byte size field
    /// itself (preamble + items + terminator).
    pub fn id_list_size(&self) -> u16 {
        self.id_list.on_disk_size()
    }

    pub(crate) fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self, Error> {
        let size = byte_io::read_u16(reader)?;
        let id_list = IdList::read_from(reader, size.saturating_sub(2))?;
        trace!("read LinkTargetIDList: size={size}");
        Ok(Self { id_list })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        byte_io::write_u16(writer, self.id_list_size())?;
        self.id_list.write_to(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trips_with_items() {
        let mut list = LinkTargetIdList::new();
        list.push(ItemID::new(vec![0xAA, 0xBB]));
        list.push(ItemID::new(vec![0xCC]));

        let mut buf = Vec::new();
        list.write_to(&mut buf).unwrap();

        let read_back = LinkTargetIdList::read_from(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(read_back.id_list().len(), 2);
        assert_eq!(read_back.id_list()[0].data(), &vec![0xAAu8, 0xBB]);
    }

    #[test]
    fn round_trips_empty() {
        let list = LinkTargetIdList::new();
        let mut buf = Vec::new();
        list.write_to(&mut buf).unwrap();
        assert_eq!(buf, vec![4, 0, 0, 0]);
        let read_back = LinkTargetIdList::read_from(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(read_back.id_list().len(), 0);
    }
}
