use std::io::{self, Read, Write};

use bitflags::bitflags;
use getset::{Getters, Setters};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;

bitflags! {
  /// A 16-bit, unsigned integer that specifies the fill attributes that
  /// control the foreground and background text colors in the console
  /// window. The following bit definitions can be combined to specify 16
  /// different values each for the foreground and background colors:
  #[derive(Clone, Copy, Debug, Eq, PartialEq)]
  #[cfg_attr(feature = "serde", derive(Serialize))]
  pub struct FillAttributeFlags: u16 {
    /// The foreground text color contains blue.
    const FOREGROUND_BLUE      = 0b0000_0000_0000_0001;
    /// The foreground text color contains green.
    const FOREGROUND_GREEN     = 0b0000_0000_0000_0010;
    /// The foreground text color contains red.
    const FOREGROUND_RED       = 0b0000_0000_0000_0100;
    /// The foreground text color is intensified.
    const FOREGROUND_INTENSITY = 0b0000_0000_0000_1000;

    /// The background text color contains blue.
    const BACKGROUND_BLUE      = 0b0000_0000_0001_0000;
    /// The background text color contains green.
    const BACKGROUND_GREEN     = 0b0000_0000_0010_0000;
    /// The background text color contains red.
    const BACKGROUND_RED       = 0b0000_0000_0100_0000;
    /// The background text color is intensified.
    const BACKGROUND_INTENSITY = 0b0000_0000_1000_0000;
  }
}

bitflags! {
  /// A 32-bit, unsigned integer that specifies the family of the font
  /// used in the console window. This value MUST be comprised of a font
  /// family and an optional font pitch.
  #[derive(Clone, Copy, Debug, Eq, PartialEq)]
  #[cfg_attr(feature = "serde", derive(Serialize))]
  pub struct FontFamilyFlags: u32 {
    /// The font is variable-width with serifs; for example, "Times New Roman".
    const FF_ROMAN      = 0x0010;
    /// The font is variable-width without serifs; for example, "Arial".
    const FF_SWISS      = 0x0020;
    /// The font is fixed-width, with or without serifs; for example, "Courier New".
    const FF_MODERN     = 0x0030;
    /// The font is designed to look like handwriting; for example, "Cursive".
    const FF_SCRIPT     = 0x0040;
    /// The font is a novelty font; for example, "Old English".
    const FF_DECORATIVE = 0x0050;

    /// The font is a fixed-pitch font.
    const TMPF_FIXED_PITCH = 0x0001;
    /// The font is a vector font.
    const TMPF_VECTOR      = 0x0002;
    /// The font is a true-type font.
    const TMPF_TRUETYPE    = 0x0004;
    /// The font is specific to the device.
    const TMPF_DEVICE      = 0x0008;
  }
}

impl Default for FontFamilyFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for FillAttributeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// On-disk size of a ConsoleDataBlock, including the signature and size fields.
pub const BLOCK_SIZE: u32 = 0x000000CC;

/// The ConsoleDataBlock structure specifies the display settings to use
/// when a link target specifies an application that is run in a console
/// window.
#[derive(Clone, Debug, Default, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct ConsoleDataBlock {
    /// Fill attributes that control the foreground and background text colors in the console
    /// window.
    fill_attributes: FillAttributeFlags,
    /// Fill attributes that control the foreground and background text color in the console
    /// window popup.
    popup_fill_attributes: FillAttributeFlags,
    /// The horizontal size (X axis), in characters, of the console window buffer.
    screen_buffer_size_x: i16,
    /// The vertical size (Y axis), in characters, of the console window buffer.
    screen_buffer_size_y: i16,
    /// The horizontal size (X axis), in characters, of the console window.
    window_size_x: i16,
    /// The vertical size (Y axis), in characters, of the console window.
    window_size_y: i16,
    /// The horizontal coordinate (X axis), in pixels, of the console window origin.
    window_origin_x: i16,
    /// The vertical coordinate (Y axis), in pixels, of the console window origin.
    window_origin_y: i16,
    /// The size, in pixels, of the font used in the console window. The high word is the font
    /// height, the low word the font width (zero for vector fonts).
    font_size: u32,
    /// The family of the font used in the console window.
    font_family: FontFamilyFlags,
    /// The stroke weight of the font used in the console window.
    font_weight: u32,
    /// The face name of the font used in the console window.
    face_name: String,
    /// The size of the cursor, in pixels, used in the console window.
    cursor_size: u32,
    /// Whether to open the console window in full-screen mode.
    full_screen: bool,
    /// Whether to open the console window in QuickEdit mode.
    quick_edit: bool,
    /// Whether insert mode is enabled in the console window.
    insert_mode: bool,
    /// Whether auto-position mode is enabled for the console window.
    auto_position: bool,
    /// The size, in characters, of the input history buffer.
    history_buffer_size: u32,
    /// The number of history buffers to use.
    number_of_history_buffers: u32,
    /// Whether to remove duplicates in the history buffer.
    history_no_dup: bool,
    /// RGB colors used for text in the console window, indexed by the fill attribute fields.
    color_table: [u32; 16],
}

impl ConsoleDataBlock {
    pub(crate) fn read_from<R: Read + ?Sized>(reader: &mut R, block_size: u32) -> Result<Self, Error> {
        if block_size != BLOCK_SIZE {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "ConsoleDataBlock",
                expected: BLOCK_SIZE,
                actual: block_size,
            });
        }

        let fill_attributes = FillAttributeFlags::from_bits_retain(byte_io::read_u16(reader)?);
        let popup_fill_attributes = FillAttributeFlags::from_bits_retain(byte_io::read_u16(reader)?);
        let screen_buffer_size_x = byte_io::read_i16(reader)?;
        let screen_buffer_size_y = byte_io::read_i16(reader)?;
        let window_size_x = byte_io::read_i16(reader)?;
        let window_size_y = byte_io::read_i16(reader)?;
        let window_origin_x = byte_io::read_i16(reader)?;
        let window_origin_y = byte_io::read_i16(reader)?;
        let _unused1 = byte_io::read_u32(reader)?;
        let _unused2 = byte_io::read_u32(reader)?;
        let font_size = byte_io::read_u32(reader)?;
        let font_family = FontFamilyFlags::from_bits_retain(byte_io::read_u32(reader)?);
        let font_weight = byte_io::read_u32(reader)?;
        let face_name = byte_io::read_fixed_wide(reader, 64)?;
        let cursor_size = byte_io::read_u32(reader)?;
        let full_screen = byte_io::read_u32(reader)? != 0;
        let quick_edit = byte_io::read_u32(reader)? != 0;
        let insert_mode = byte_io::read_u32(reader)? != 0;
        let auto_position = byte_io::read_u32(reader)? != 0;
        let history_buffer_size = byte_io::read_u32(reader)?;
        let number_of_history_buffers = byte_io::read_u32(reader)?;
        let history_no_dup = byte_io::read_u32(reader)? != 0;
        let mut color_table = [0u32; 16];
        for slot in color_table.iter_mut() {
            *slot = byte_io::read_u32(reader)?;
        }

        Ok(Self {
            fill_attributes,
            popup_fill_attributes,
            screen_buffer_size_x,
            screen_buffer_size_y,
            window_size_x,
            window_size_y,
            window_origin_x,
            window_origin_y,
            font_size,
            font_family,
            font_weight,
            face_name,
            cursor_size,
            full_screen,
            quick_edit,
            insert_mode,
            auto_position,
            history_buffer_size,
            number_of_history_buffers,
            history_no_dup,
            color_table,
        })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        byte_io::write_u16(writer, self.fill_attributes.bits())?;
        byte_io::write_u16(writer, self.popup_fill_attributes.bits())?;
        byte_io::write_i16(writer, self.screen_buffer_size_x)?;
        byte_io::write_i16(writer, self.screen_buffer_size_y)?;
        byte_io::write_i16(writer, self.window_size_x)?;
        byte_io::write_i16(writer, self.window_size_y)?;
        byte_io::write_i16(writer, self.window_origin_x)?;
        byte_io::write_i16(writer, self.window_origin_y)?;
        byte_io::write_u32(writer, 0)?;
        byte_io::write_u32(writer, 0)?;
        byte_io::write_u32(writer, self.font_size)?;
        byte_io::write_u32(writer, self.font_family.bits())?;
        byte_io::write_u32(writer, self.font_weight)?;
        byte_io::write_fixed_wide(writer, &self.face_name, 64)?;
        byte_io::write_u32(writer, self.cursor_size)?;
        byte_io::write_u32(writer, self.full_screen as u32)?;
        byte_io::write_u32(writer, self.quick_edit as u32)?;
        byte_io::write_u32(writer, self.insert_mode as u32)?;
        byte_io::write_u32(writer, self.auto_position as u32)?;
        byte_io::write_u32(writer, self.history_buffer_size)?;
        byte_io::write_u32(writer, self.number_of_history_buffers)?;
        byte_io::write_u32(writer, self.history_no_dup as u32)?;
        for color in self.color_table {
            byte_io::write_u32(writer, color)?;
        }
        Ok(())
    }
}
