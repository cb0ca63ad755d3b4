use std::io::{self, Read, Write};

use encoding_rs::Encoding;
use getset::{Getters, Setters};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;
use crate::header::LinkFlags;

/// The StringData section consists of a set of optional structures that
/// convey user interface information necessary to display a shell link as a
/// Shell object. Every field is a `CountCharacters`-prefixed string with no
/// NUL terminator of its own, encoded in Unicode or the system default code
/// page depending on [`LinkFlags::IS_UNICODE`].
#[derive(Clone, Debug, Default, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct StringData {
    /// A NAME_STRING, which specifies a description of the shell link
    /// object that is displayed to end users.
    name_string: Option<String>,
    /// A RELATIVE_PATH, which specifies the location of the link target
    /// relative to the file that contains the shell link.
    relative_path: Option<String>,
    /// A WORKING_DIR, which specifies the file system path of the working
    /// directory to be used when activating the link target.
    working_dir: Option<String>,
    /// A COMMAND_LINE_ARGUMENTS, which stores the command-line arguments
    /// passed to an activated link target.
    command_line_arguments: Option<String>,
    /// An ICON_LOCATION, which specifies the location of the icon to be
    /// used when displaying the shell link object.
    icon_location: Option<String>,
}

impl StringData {
    /// An empty StringData section.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read_from<R: Read + ?Sized>(
        reader: &mut R,
        link_flags: LinkFlags,
        default_codepage: &'static Encoding,
    ) -> Result<Self, Error> {
        let is_unicode = link_flags.contains(LinkFlags::IS_UNICODE);

        let read_field = |reader: &mut R| -> Result<String, Error> {
            let count = byte_io::read_u16(reader)?;
            if is_unicode {
                byte_io::read_counted_wide(reader, count)
            } else {
                byte_io::read_counted_codepage(reader, count, default_codepage)
            }
        };

        let name_string = if link_flags.contains(LinkFlags::HAS_NAME) {
            Some(read_field(reader)?)
        } else {
            None
        };
        let relative_path = if link_flags.contains(LinkFlags::HAS_RELATIVE_PATH) {
            Some(read_field(reader)?)
        } else {
            None
        };
        let working_dir = if link_flags.contains(LinkFlags::HAS_WORKING_DIR) {
            Some(read_field(reader)?)
        } else {
            None
        };
        let command_line_arguments = if link_flags.contains(LinkFlags::HAS_ARGUMENTS) {
            Some(read_field(reader)?)
        } else {
            None
        };
        let icon_location = if link_flags.contains(LinkFlags::HAS_ICON_LOCATION) {
            Some(read_field(reader)?)
        } else {
            None
        };

        Ok(Self {
            name_string,
            relative_path,
            working_dir,
            command_line_arguments,
            icon_location,
        })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        link_flags: LinkFlags,
        default_codepage: &'static Encoding,
    ) -> Result<(), Error> {
        let is_unicode = link_flags.contains(LinkFlags::IS_UNICODE);

        let mut write_field = |writer: &mut W, s: &str| -> io::Result<()> {
            if is_unicode {
                byte_io::write_counted_wide(writer, s)?;
            } else {
                byte_io::write_counted_codepage(writer, s, default_codepage)?;
            }
            Ok(())
        };

        if link_flags.contains(LinkFlags::HAS_NAME) {
            let s = self
                .name_string
                .as_deref()
                .ok_or(Error::MissingStringData("NAME_STRING"))?;
            write_field(writer, s)?;
        }
        if link_flags.contains(LinkFlags::HAS_RELATIVE_PATH) {
            let s = self
                .relative_path
                .as_deref()
                .ok_or(Error::MissingStringData("RELATIVE_PATH"))?;
            write_field(writer, s)?;
        }
        if link_flags.contains(LinkFlags::HAS_WORKING_DIR) {
            let s = self
                .working_dir
                .as_deref()
                .ok_or(Error::MissingStringData("WORKING_DIR"))?;
            write_field(writer, s)?;
        }
        if link_flags.contains(LinkFlags::HAS_ARGUMENTS) {
            let s = self
                .command_line_arguments
                .as_deref()
                .ok_or(Error::MissingStringData("COMMAND_LINE_ARGUMENTS"))?;
            write_field(writer, s)?;
        }
        if link_flags.contains(LinkFlags::HAS_ICON_LOCATION) {
            let s = self
                .icon_location
                .as_deref()
                .ok_or(Error::MissingStringData("ICON_LOCATION"))?;
            write_field(writer, s)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;
    use std::io::Cursor;

    #[test]
    fn unicode_round_trip() {
        let mut data = StringData::new();
        data.set_name_string(Some("My Shortcut".to_string()));
        data.set_icon_location(Some("%SystemRoot%\\notepad.exe".to_string()));
        let flags = LinkFlags::IS_UNICODE | LinkFlags::HAS_NAME | LinkFlags::HAS_ICON_LOCATION;

        let mut buf = Vec::new();
        data.write_to(&mut buf, flags, WINDOWS_1252).unwrap();

        let read_back = StringData::read_from(&mut Cursor::new(&buf), flags, WINDOWS_1252).unwrap();
        assert_eq!(read_back.name_string().as_deref(), Some("My Shortcut"));
        assert_eq!(
            read_back.icon_location().as_deref(),
            Some("%SystemRoot%\\notepad.exe")
        );
        assert!(read_back.relative_path().is_none());
    }

    #[test]
    fn ansi_round_trip() {
        let mut data = StringData::new();
        data.set_working_dir(Some("C:\\Users\\Default".to_string()));
        let flags = LinkFlags::HAS_WORKING_DIR;

        let mut buf = Vec::new();
        data.write_to(&mut buf, flags, WINDOWS_1252).unwrap();
        let read_back = StringData::read_from(&mut Cursor::new(&buf), flags, WINDOWS_1252).unwrap();
        assert_eq!(
            read_back.working_dir().as_deref(),
            Some("C:\\Users\\Default")
        );
    }

    #[test]
    fn missing_flagged_field_is_an_error() {
        let data = StringData::new();
        let flags = LinkFlags::HAS_NAME;
        let mut buf = Vec::new();
        let err = data.write_to(&mut buf, flags, WINDOWS_1252).unwrap_err();
        assert!(matches!(err, Error::MissingStringData("NAME_STRING")));
    }
}
