use std::io::{self, Read, Write};

use getset::Getters;
use log::trace;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;
use crate::itemid::ItemID;

/// A stored IDList: zero or more [`ItemID`] elements terminated by a 2-byte
/// zero-valued TerminalID.
#[derive(Clone, Debug, Default, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub")]
pub struct IdList {
    /// Contains a list of item identifiers.
    item_id_list: Vec<ItemID>,
}

impl IdList {
    /// An empty IdList (its TerminalID only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the end of the list.
    pub fn push(&mut self, item: ItemID) {
        self.item_id_list.push(item);
    }

    /// Replaces the item at `index`.
    pub fn set_item(&mut self, index: usize, item: ItemID) -> Result<(), Error> {
        let slot = self
            .item_id_list
            .get_mut(index)
            .ok_or(Error::MissingIdListItem(index))?;
        *slot = item;
        Ok(())
    }

    /// Removes the item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<ItemID, Error> {
        if index >= self.item_id_list.len() {
            return Err(Error::MissingIdListItem(index));
        }
        Ok(self.item_id_list.remove(index))
    }

    /// The `total_size` of this IdList as defined on the wire: the 2-byte
    /// `total_size` field itself, plus every item's on-disk size, plus the
    /// 2-byte terminator (preamble + items + terminator).
    pub fn on_disk_size(&self) -> u16 {
        let items: u16 = self
            .item_id_list
            .iter()
            .map(|item| item.on_disk_size())
            .sum();
        items + 2 + 2
    }

    /// Reads an IdList from `remaining` bytes (the declared size of the
    /// enclosing structure, not including its own size field).
    pub(crate) fn read_from<R: Read + ?Sized>(reader: &mut R, remaining: u16) -> Result<Self, Error> {
        let mut item_id_list = Vec::new();
        let mut bytes_to_read = remaining;
        trace!("ID List size: {bytes_to_read}");

        loop {
            if bytes_to_read < 2 {
                return Err(Error::IdListSizeMismatch {
                    declared: remaining,
                    actual: remaining - bytes_to_read,
                });
            }

            let size = byte_io::read_u16(reader)?;
            if size == 0 {
                bytes_to_read -= 2;
                break;
            }
            if size <= 2 {
                return Err(Error::IdListTerminatorInvalid);
            }

            let item = ItemID::read_from(reader, size)?;
            bytes_to_read -= size;
            item_id_list.push(item);
        }

        if bytes_to_read != 0 {
            return Err(Error::IdListSizeMismatch {
                declared: remaining,
                actual: remaining - bytes_to_read,
            });
        }

        Ok(Self { item_id_list })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        for item in &self.item_id_list {
            item.write_to(writer)?;
        }
        byte_io::write_u16(writer, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_list_round_trips() {
        let list = IdList::new();
        let mut buf = Vec::new();
        list.write_to(&mut buf).unwrap();
        assert_eq!(buf, vec![0, 0]);
        assert_eq!(list.on_disk_size(), buf.len() as u16 + 2);
        let read_back =
            IdList::read_from(&mut Cursor::new(&buf), list.on_disk_size() - 2).unwrap();
        assert_eq!(read_back.item_id_list().len(), 0);
    }

    #[test]
    fn list_with_items_round_trips() {
        let mut list = IdList::new();
        list.push(ItemID::new(vec![1, 2, 3]));
        list.push(ItemID::new(vec![4, 5]));
        let mut buf = Vec::new();
        list.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), list.on_disk_size() as usize - 2);

        let read_back =
            IdList::read_from(&mut Cursor::new(&buf), list.on_disk_size() - 2).unwrap();
        assert_eq!(read_back.item_id_list().len(), 2);
        assert_eq!(read_back.item_id_list()[0].data(), &vec![1u8, 2, 3]);
        assert_eq!(read_back.item_id_list()[1].data(), &vec![4u8, 5]);
    }
}
