//! Primitive little-endian readers/writers and the two string encodings
//! (system code page and wide/UTF-16LE) that every higher-level section
//! codec in this crate is built from. The underlying stream (a `File`,
//! `Cursor`, or anything else implementing `Read`/`Write`/`Seek`) is a
//! caller-supplied collaborator, not something this module manages.

use std::io::{self, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use encoding_rs::Encoding;

use crate::error::Error;

/// NUL-terminated and fixed-length strings longer than this are treated as
/// corrupt input rather than read to completion.
const MAX_STRING_BYTES: usize = 1 << 20;

pub fn read_u8<R: Read + ?Sized>(r: &mut R) -> io::Result<u8> {
    r.read_u8()
}

pub fn read_i16<R: Read + ?Sized>(r: &mut R) -> io::Result<i16> {
    r.read_i16::<LE>()
}

pub fn read_u16<R: Read + ?Sized>(r: &mut R) -> io::Result<u16> {
    r.read_u16::<LE>()
}

pub fn read_i32<R: Read + ?Sized>(r: &mut R) -> io::Result<i32> {
    r.read_i32::<LE>()
}

pub fn read_u32<R: Read + ?Sized>(r: &mut R) -> io::Result<u32> {
    r.read_u32::<LE>()
}

pub fn read_u64<R: Read + ?Sized>(r: &mut R) -> io::Result<u64> {
    r.read_u64::<LE>()
}

pub fn write_u8<W: Write + ?Sized>(w: &mut W, v: u8) -> io::Result<()> {
    w.write_u8(v)
}

pub fn write_i16<W: Write + ?Sized>(w: &mut W, v: i16) -> io::Result<()> {
    w.write_i16::<LE>(v)
}

pub fn write_u16<W: Write + ?Sized>(w: &mut W, v: u16) -> io::Result<()> {
    w.write_u16::<LE>(v)
}

pub fn write_i32<W: Write + ?Sized>(w: &mut W, v: i32) -> io::Result<()> {
    w.write_i32::<LE>(v)
}

pub fn write_u32<W: Write + ?Sized>(w: &mut W, v: u32) -> io::Result<()> {
    w.write_u32::<LE>(v)
}

pub fn write_u64<W: Write + ?Sized>(w: &mut W, v: u64) -> io::Result<()> {
    w.write_u64::<LE>(v)
}

/// Reads an 8-bit-code-page NUL-terminated string; the terminator is
/// consumed but not included in the returned string.
pub fn read_nul_string_codepage<R: Read + ?Sized>(
    r: &mut R,
    codepage: &'static Encoding,
) -> Result<String, Error> {
    let mut buf = Vec::new();
    loop {
        let b = read_u8(r)?;
        if b == 0 {
            break;
        }
        buf.push(b);
        if buf.len() > MAX_STRING_BYTES {
            return Err(Error::StringAllocation(buf.len() as u64));
        }
    }
    let (cow, _, _) = codepage.decode(&buf);
    Ok(cow.into_owned())
}

/// Reads a wide (UTF-16LE) NUL-terminated string; the terminator is
/// consumed but not included in the returned string.
pub fn read_nul_string_wide<R: Read + ?Sized>(r: &mut R) -> Result<String, Error> {
    let mut units = Vec::new();
    loop {
        let unit = read_u16(r)?;
        if unit == 0 {
            break;
        }
        units.push(unit);
        if units.len() * 2 > MAX_STRING_BYTES {
            return Err(Error::StringAllocation((units.len() * 2) as u64));
        }
    }
    Ok(String::from_utf16_lossy(&units))
}

/// Writes an 8-bit-code-page string followed by its NUL terminator.
pub fn write_nul_string_codepage<W: Write + ?Sized>(
    w: &mut W,
    s: &str,
    codepage: &'static Encoding,
) -> io::Result<()> {
    let (bytes, _, _) = codepage.encode(s);
    w.write_all(&bytes)?;
    write_u8(w, 0)
}

/// Writes a wide (UTF-16LE) string followed by its NUL terminator.
pub fn write_nul_string_wide<W: Write + ?Sized>(w: &mut W, s: &str) -> io::Result<()> {
    for unit in s.encode_utf16() {
        write_u16(w, unit)?;
    }
    write_u16(w, 0)
}

/// Reads exactly `byte_len` bytes as an 8-bit code-page string. Any trailing
/// NUL padding is trimmed from the result.
pub fn read_fixed_codepage<R: Read + ?Sized>(
    r: &mut R,
    byte_len: usize,
    codepage: &'static Encoding,
) -> Result<String, Error> {
    if byte_len > MAX_STRING_BYTES {
        return Err(Error::StringAllocation(byte_len as u64));
    }
    let mut buf = vec![0u8; byte_len];
    r.read_exact(&mut buf)?;
    if let Some(nul) = buf.iter().position(|&b| b == 0) {
        buf.truncate(nul);
    }
    let (cow, _, _) = codepage.decode(&buf);
    Ok(cow.into_owned())
}

/// Writes a string right-padded with zero bytes to exactly `byte_len` bytes.
pub fn write_fixed_codepage<W: Write + ?Sized>(
    w: &mut W,
    s: &str,
    byte_len: usize,
    codepage: &'static Encoding,
) -> io::Result<()> {
    let (bytes, _, _) = codepage.encode(s);
    let mut buf = vec![0u8; byte_len];
    let n = bytes.len().min(byte_len);
    buf[..n].copy_from_slice(&bytes[..n]);
    w.write_all(&buf)
}

/// Reads exactly `byte_len` bytes (must be even) as a wide string. Any
/// trailing NUL padding is trimmed from the result.
pub fn read_fixed_wide<R: Read + ?Sized>(r: &mut R, byte_len: usize) -> Result<String, Error> {
    if byte_len > MAX_STRING_BYTES {
        return Err(Error::StringAllocation(byte_len as u64));
    }
    let unit_count = byte_len / 2;
    let mut units = vec![0u16; unit_count];
    for unit in units.iter_mut() {
        *unit = read_u16(r)?;
    }
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    Ok(String::from_utf16_lossy(&units[..end]))
}

/// Writes a string right-padded with zero code units to exactly `byte_len`
/// bytes (must be even).
pub fn write_fixed_wide<W: Write + ?Sized>(w: &mut W, s: &str, byte_len: usize) -> io::Result<()> {
    let unit_count = byte_len / 2;
    let mut units: Vec<u16> = s.encode_utf16().take(unit_count).collect();
    units.resize(unit_count, 0);
    for unit in units {
        write_u16(w, unit)?;
    }
    Ok(())
}

/// Reads a StringData-style string: a `count`-unit wide string with no NUL
/// terminator of its own (the count, not a terminator, delimits it).
pub fn read_counted_wide<R: Read + ?Sized>(r: &mut R, count: u16) -> Result<String, Error> {
    let mut units = vec![0u16; count as usize];
    for unit in units.iter_mut() {
        *unit = read_u16(r)?;
    }
    Ok(String::from_utf16_lossy(&units))
}

/// Writes a StringData-style wide string, returning the character count that
/// precedes it on disk.
pub fn write_counted_wide<W: Write + ?Sized>(w: &mut W, s: &str) -> io::Result<u16> {
    let units: Vec<u16> = s.encode_utf16().collect();
    let count = units.len() as u16;
    write_u16(w, count)?;
    for unit in units {
        write_u16(w, unit)?;
    }
    Ok(count)
}

/// Reads a StringData-style string in the system default code page, with no
/// NUL terminator of its own.
pub fn read_counted_codepage<R: Read + ?Sized>(
    r: &mut R,
    count: u16,
    codepage: &'static Encoding,
) -> Result<String, Error> {
    let mut buf = vec![0u8; count as usize];
    r.read_exact(&mut buf)?;
    let (cow, _, _) = codepage.decode(&buf);
    Ok(cow.into_owned())
}

/// Writes a StringData-style code-page string, returning the character count
/// that precedes it on disk.
pub fn write_counted_codepage<W: Write + ?Sized>(
    w: &mut W,
    s: &str,
    codepage: &'static Encoding,
) -> io::Result<u16> {
    let (bytes, _, _) = codepage.encode(s);
    let count = bytes.len() as u16;
    write_u16(w, count)?;
    w.write_all(&bytes)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;
    use std::io::Cursor;

    #[test]
    fn nul_string_codepage_round_trip() {
        let mut buf = Vec::new();
        write_nul_string_codepage(&mut buf, "hello", WINDOWS_1252).unwrap();
        assert_eq!(buf, b"hello\0");
        let mut cur = Cursor::new(buf);
        let s = read_nul_string_codepage(&mut cur, WINDOWS_1252).unwrap();
        assert_eq!(s, "hello");
    }

    #[test]
    fn nul_string_wide_round_trip() {
        let mut buf = Vec::new();
        write_nul_string_wide(&mut buf, "Hello").unwrap();
        assert_eq!(
            buf,
            vec![0x48, 0x00, 0x65, 0x00, 0x6C, 0x00, 0x6C, 0x00, 0x6F, 0x00, 0x00, 0x00]
        );
        let mut cur = Cursor::new(buf);
        let s = read_nul_string_wide(&mut cur).unwrap();
        assert_eq!(s, "Hello");
    }

    #[test]
    fn fixed_codepage_round_trip_pads_and_trims() {
        let mut buf = Vec::new();
        write_fixed_codepage(&mut buf, "abc", 8, WINDOWS_1252).unwrap();
        assert_eq!(buf.len(), 8);
        let mut cur = Cursor::new(buf);
        let s = read_fixed_codepage(&mut cur, 8, WINDOWS_1252).unwrap();
        assert_eq!(s, "abc");
    }

    #[test]
    fn fixed_wide_round_trip_pads_and_trims() {
        let mut buf = Vec::new();
        write_fixed_wide(&mut buf, "hi", 8).unwrap();
        assert_eq!(buf.len(), 8);
        let mut cur = Cursor::new(buf);
        let s = read_fixed_wide(&mut cur, 8).unwrap();
        assert_eq!(s, "hi");
    }
}
