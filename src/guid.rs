use std::fmt::Display;
use std::io::{self, Read, Write};

#[cfg(feature = "serde")]
use serde::Serialize;
use uuid::{Builder, Uuid};

/// Wraps a UUID stored on disk in GUID packet representation
/// ([MS-DTYP] section 2.3.4.2): the first three fields are little-endian,
/// the trailing clock-seq/node bytes are stored as-is. `uuid::Uuid`'s
/// `to_bytes_le`/`from_bytes_le` already perform exactly this swap, so this
/// wrapper only needs to thread the conversion through a byte stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Guid(Uuid);

impl Guid {
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
        let mut bytes = [0u8; 16];
        reader.read_exact(&mut bytes)?;
        Ok(Self(Builder::from_bytes_le(bytes).into_uuid()))
    }

    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.0.to_bytes_le())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Guid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn clsid_round_trips_through_packet_representation() {
        // 00021401-0000-0000-C000-000000000046 as stored on disk.
        let on_disk: [u8; 16] = [
            0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x46,
        ];
        let mut cur = Cursor::new(on_disk);
        let guid = Guid::read_from(&mut cur).unwrap();
        assert_eq!(
            guid.to_string(),
            "00021401-0000-0000-c000-000000000046"
        );
        let mut out = Vec::new();
        guid.write_to(&mut out).unwrap();
        assert_eq!(out, on_disk);
    }
}
