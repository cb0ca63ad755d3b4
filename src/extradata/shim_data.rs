use std::io::{self, Read, Write};

use getset::{Getters, Setters};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;

/// The ShimDataBlock structure specifies the name of a shim that can
/// be applied when activating a link target.
#[derive(Clone, Debug, Default, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct ShimDataBlock {
    /// A Unicode string that specifies the name of a shim layer to apply
    /// to a link target when it is being activated.
    layer_name: String,
}

impl ShimDataBlock {
    /// Builds a new ShimDataBlock.
    pub fn new(layer_name: String) -> Self {
        Self { layer_name }
    }

    /// The minimum on-disk size of a ShimDataBlock, including the signature and size fields.
    pub const MIN_BLOCK_SIZE: u32 = 0x88;

    pub(crate) fn read_from<R: Read + ?Sized>(reader: &mut R, block_size: u32) -> Result<Self, Error> {
        if block_size < Self::MIN_BLOCK_SIZE {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "ShimDataBlock",
                expected: Self::MIN_BLOCK_SIZE,
                actual: block_size,
            });
        }
        let payload_len = block_size.saturating_sub(8) as usize;
        let layer_name = byte_io::read_fixed_wide(reader, payload_len)?;
        Ok(Self { layer_name })
    }

    /// The number of bytes [`ShimDataBlock::write_to`] will emit for the
    /// current `layer_name`, not including the signature and size fields.
    pub(crate) fn payload_len(&self) -> usize {
        let encoded_len = self.layer_name.encode_utf16().count() * 2;
        encoded_len.max(Self::MIN_BLOCK_SIZE as usize - 8)
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        byte_io::write_fixed_wide(writer, &self.layer_name, self.payload_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trips_and_pads_to_minimum_size() {
        let block = ShimDataBlock::new("AcLayer".to_string());
        let mut buf = Vec::new();
        block.write_to(&mut buf).unwrap();
        assert_eq!(buf.len() as u32, ShimDataBlock::MIN_BLOCK_SIZE - 8);

        let read_back = ShimDataBlock::read_from(&mut Cursor::new(&buf), buf.len() as u32 + 8).unwrap();
        assert_eq!(read_back.layer_name(), "AcLayer");
    }

    #[test]
    fn rejects_block_smaller_than_minimum() {
        let buf = vec![0u8; 4];
        let err = ShimDataBlock::read_from(&mut Cursor::new(&buf), 12).unwrap_err();
        assert!(matches!(
            err,
            Error::ExtraDataBlockWrongSize { name: "ShimDataBlock", .. }
        ));
    }
}
