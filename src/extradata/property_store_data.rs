use std::fmt;
use std::io::{self, Read, Write};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::Error;

/// A PropertyStoreDataBlock structure specifies a set of properties
/// that can be used by applications to store extra data in the
/// shell link. The payload is a serialized property storage structure
/// ([MS-PROPSTORE] section 2.2), which this crate does not interpret.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PropertyStoreDataBlock {
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    property_store: Vec<u8>,
}

impl PropertyStoreDataBlock {
    /// Builds a new PropertyStoreDataBlock wrapping the given serialized
    /// property storage payload.
    pub fn new(property_store: Vec<u8>) -> Self {
        Self { property_store }
    }

    /// A serialized property storage structure ([MS-PROPSTORE] section 2.2).
    pub fn property_store(&self) -> &Vec<u8> {
        &self.property_store
    }

    /// Replaces the serialized property storage payload.
    pub fn set_property_store(&mut self, property_store: Vec<u8>) {
        self.property_store = property_store;
    }

    /// The minimum on-disk size of a PropertyStoreDataBlock, including the
    /// signature and size fields.
    pub const MIN_BLOCK_SIZE: u32 = 0x0C;

    pub(crate) fn read_from<R: Read + ?Sized>(reader: &mut R, block_size: u32) -> Result<Self, Error> {
        if block_size < Self::MIN_BLOCK_SIZE {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "PropertyStoreDataBlock",
                expected: Self::MIN_BLOCK_SIZE,
                actual: block_size,
            });
        }
        let payload_len = block_size.saturating_sub(8) as usize;
        let mut property_store = vec![0u8; payload_len];
        reader.read_exact(&mut property_store)?;
        Ok(Self { property_store })
    }

    /// The number of bytes [`PropertyStoreDataBlock::write_to`] will emit,
    /// not including the signature and size fields.
    pub(crate) fn payload_len(&self) -> usize {
        self.property_store
            .len()
            .max(Self::MIN_BLOCK_SIZE as usize - 8)
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.property_store)?;
        let pad = self.payload_len() - self.property_store.len();
        writer.write_all(&vec![0u8; pad])
    }
}

impl fmt::Debug for PropertyStoreDataBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PropertyStoreDataBlock {{ property_store: {} bytes }}",
            self.property_store.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trips() {
        let block = PropertyStoreDataBlock::new(vec![1, 2, 3, 4, 5]);
        let mut buf = Vec::new();
        block.write_to(&mut buf).unwrap();
        let read_back =
            PropertyStoreDataBlock::read_from(&mut Cursor::new(&buf), buf.len() as u32 + 8).unwrap();
        assert_eq!(read_back.property_store(), &vec![1u8, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_block_smaller_than_minimum() {
        let buf = vec![0u8; 2];
        let err = PropertyStoreDataBlock::read_from(&mut Cursor::new(&buf), 10).unwrap_err();
        assert!(matches!(
            err,
            Error::ExtraDataBlockWrongSize { name: "PropertyStoreDataBlock", .. }
        ));
    }
}
