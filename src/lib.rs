#![warn(missing_docs)]

//! # Shell Link parser and writer for Rust.
//!
//! Works on any OS - although only really useful in Windows, this library can parse and write
//! .lnk files, a shell link, that can be understood by Windows.
//!
//! To get started, see the [ShellLink](struct.ShellLink.html) struct.
//!
//! The full specification of these files can be found at
//! [Microsoft's Website](https://docs.microsoft.com/en-us/openspecs/windows_protocols/ms-shllink/16cb4ca1-9339-4d0c-a68d-bf1d6cc0f943).
//!
//! ## Read Example
//!
//! A simple example appears as follows:
//! ```ignore
//! use lnk::ShellLink;
//! // ...
//! let shortcut = lnk::ShellLink::open("tests/test.lnk").unwrap();
//! println!("{:#?}", shortcut);
//! ```
//!
//! ## Write Example
//!
//! A simple example appears as follows:
//! ```ignore
//! use lnk::ShellLink;
//! // ...
//! let shortcut = ShellLink::new();
//! shortcut.save("target.lnk").unwrap();
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use encoding_rs::{Encoding, WINDOWS_1252};
#[allow(unused)]
use log::{debug, error, info, trace, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

mod byte_io;

pub mod error;
pub use error::Error;

mod guid;
pub use guid::Guid;

mod filetime;
pub use filetime::FileTime;

mod header;
pub use header::{
    FileAttributeFlags, HotkeyFlags, HotkeyKey, HotkeyModifiers, LinkFlags, ShellLinkHeader,
    ShowCommand,
};

mod itemid;
pub use itemid::ItemID;

mod idlist;
pub use idlist::IdList;

/// The LinkTargetIDList structure specifies the target of the link. The presence of this optional
/// structure is specified by the HasLinkTargetIDList bit (LinkFlagssection 2.1.1) in the
/// ShellLinkHeader(section2.1).
pub mod linktarget;
pub use linktarget::LinkTargetIdList;

/// The LinkInfo structure specifies information necessary to resolve a
/// linktarget if it is not found in its original location. This includes
/// information about the volume that the target was stored on, the mapped
/// drive letter, and a Universal Naming Convention (UNC)form of the path
/// if one existed when the linkwas created. For more details about UNC
/// paths, see [MS-DFSNM] section 2.2.1.4
pub mod linkinfo;
pub use linkinfo::LinkInfo;

mod stringdata;
pub use stringdata::StringData;

/// Structures from the ExtraData section of the Shell Link.
pub mod extradata;
pub use extradata::ExtraData;

/// A shell link: the in-memory counterpart of the Shell Link Binary File
/// Format (`.lnk`). See the module docs for the read/write entry points.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ShellLink {
    shell_link_header: ShellLinkHeader,
    linktarget_id_list: Option<LinkTargetIdList>,
    link_info: Option<LinkInfo>,
    string_data: StringData,
    extra_data: ExtraData,

    /// The system default code page used to encode/decode 8-bit strings
    /// (VolumeID, LocalBasePath, CommonNetworkRelativeLink fields, and
    /// non-Unicode StringData fields) in this shell link.
    #[cfg_attr(feature = "serde", serde(skip))]
    default_codepage: &'static Encoding,
}

impl Default for ShellLink {
    /// Create a new ShellLink, left blank for manual configuration.
    fn default() -> Self {
        Self {
            shell_link_header: ShellLinkHeader::default(),
            linktarget_id_list: None,
            link_info: None,
            string_data: StringData::default(),
            extra_data: ExtraData::default(),
            default_codepage: WINDOWS_1252,
        }
    }
}

impl ShellLink {
    /// Create a new, blank ShellLink with all optional sections absent.
    ///
    /// For those who are not familiar with the Shell Link specification, I
    /// suggest you look at the [`ShellLink::new_simple`] method.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ShellLink pointing to a location, with otherwise default settings.
    pub fn new_simple<P: AsRef<Path>>(to: P) -> std::io::Result<Self> {
        use std::fs;

        let meta = fs::metadata(&to)?;
        let canonical = fs::canonicalize(&to)?;

        let mut sl = Self::default();
        sl.header_mut().set_link_flags(LinkFlags::IS_UNICODE);

        if meta.is_dir() {
            sl.header_mut()
                .set_file_attributes(FileAttributeFlags::FILE_ATTRIBUTE_DIRECTORY);
        } else {
            let file_name = canonical
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            let parent = canonical
                .parent()
                .and_then(|p| p.to_str())
                .unwrap_or_default()
                .to_string();

            sl.set_relative_path(Some(format!(".\\{file_name}")));
            sl.set_working_dir(Some(parent));
            sl.set_link_info(Some(LinkInfo::new(file_name)));
        }

        Ok(sl)
    }

    /// Save a shell link to `path`, truncating and overwriting any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        debug!("Saving to {:?}", path.as_ref());
        let mut w = BufWriter::new(File::create(path)?);
        self.write_to(&mut w)
    }

    /// Serialise this shell link to `writer`.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), Error> {
        debug!("Writing header...");
        self.shell_link_header.write_to(writer)?;

        let link_flags = *self.shell_link_header.link_flags();

        if link_flags.contains(LinkFlags::HAS_LINK_TARGET_ID_LIST) {
            debug!("A LinkTargetIDList is marked as present. Writing.");
            let list = self.linktarget_id_list.as_ref().ok_or(Error::MissingIdList)?;
            list.write_to(writer)?;
        }

        if link_flags.contains(LinkFlags::HAS_LINK_INFO) {
            debug!("LinkInfo is marked as present. Writing.");
            let info = self.link_info.as_ref().ok_or(Error::MissingLinkInfo)?;
            info.write_to(writer, self.default_codepage)?;
        }

        debug!("Writing StringData...");
        self.string_data
            .write_to(writer, link_flags, self.default_codepage)?;

        if link_flags.contains(LinkFlags::HAS_DARWIN_ID) && self.extra_data.darwin_data.is_none() {
            return Err(Error::MissingExtraDataPayload("DarwinDataBlock"));
        }
        if link_flags.contains(LinkFlags::HAS_EXP_STRING)
            && self.extra_data.environment_variable_data.is_none()
        {
            return Err(Error::MissingExtraDataPayload("EnvironmentVariableDataBlock"));
        }
        if link_flags.contains(LinkFlags::HAS_EXP_ICON)
            && self.extra_data.icon_environment_data.is_none()
        {
            return Err(Error::MissingExtraDataPayload("IconEnvironmentDataBlock"));
        }
        if link_flags.contains(LinkFlags::RUN_WITH_SHIM_LAYER) && self.extra_data.shim_data.is_none() {
            return Err(Error::MissingExtraDataPayload("ShimDataBlock"));
        }

        debug!("Writing ExtraData...");
        self.extra_data.write_to(writer, self.default_codepage)?;

        Ok(())
    }

    /// Open and parse a shell link, assuming the system default code page is
    /// Windows-1252. See [`ShellLink::open_with_codepage`] to override this.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::open_with_codepage(path, WINDOWS_1252)
    }

    /// Open and parse a shell link, decoding 8-bit strings with `codepage`.
    pub fn open_with_codepage<P: AsRef<Path>>(
        path: P,
        codepage: &'static Encoding,
    ) -> Result<Self, Error> {
        debug!("Opening {:?}", path.as_ref());
        let mut reader = BufReader::new(File::open(path)?);
        Self::load_with_codepage(&mut reader, codepage)
    }

    /// Parse a shell link from an arbitrary stream, assuming Windows-1252.
    pub fn load<R: Read + Seek + ?Sized>(reader: &mut R) -> Result<Self, Error> {
        Self::load_with_codepage(reader, WINDOWS_1252)
    }

    /// Parse a shell link from an arbitrary stream, decoding 8-bit strings
    /// with `codepage`.
    pub fn load_with_codepage<R: Read + Seek + ?Sized>(
        reader: &mut R,
        codepage: &'static Encoding,
    ) -> Result<Self, Error> {
        trace!("Reading shell link header.");
        let shell_link_header = ShellLinkHeader::read_from(reader)?;
        debug!("Shell header: {:#?}", shell_link_header);

        let link_flags = *shell_link_header.link_flags();

        let linktarget_id_list = if link_flags.contains(LinkFlags::HAS_LINK_TARGET_ID_LIST) {
            debug!("A LinkTargetIDList is marked as present. Parsing now.");
            let list = LinkTargetIdList::read_from(reader)?;
            trace!("{:?}", list);
            Some(list)
        } else {
            None
        };

        let link_info = if link_flags.contains(LinkFlags::HAS_LINK_INFO) {
            debug!("LinkInfo is marked as present. Parsing now.");
            let info = LinkInfo::read_from(reader, codepage)?;
            trace!("{:?}", info);
            Some(info)
        } else {
            None
        };

        debug!("Parsing StringData...");
        let string_data = StringData::read_from(reader, link_flags, codepage)?;

        debug!("Parsing ExtraData...");
        let extra_data = ExtraData::read_from(reader, codepage)?;

        Ok(Self {
            shell_link_header,
            linktarget_id_list,
            link_info,
            string_data,
            extra_data,
            default_codepage: codepage,
        })
    }

    /// Get the header of the shell link
    pub fn header(&self) -> &ShellLinkHeader {
        &self.shell_link_header
    }

    /// Get a mutable instance of the shell link's header
    pub fn header_mut(&mut self) -> &mut ShellLinkHeader {
        &mut self.shell_link_header
    }

    /// The system default code page used for 8-bit strings on this shell link.
    pub fn default_codepage(&self) -> &'static Encoding {
        self.default_codepage
    }

    /// Set the system default code page used for 8-bit strings on this shell link.
    pub fn set_default_codepage(&mut self, codepage: &'static Encoding) {
        self.default_codepage = codepage;
    }

    /// Get the link target ID List
    pub fn link_target_id_list(&self) -> &Option<LinkTargetIdList> {
        &self.linktarget_id_list
    }

    /// Set the link target ID list, enabling or disabling
    /// [`LinkFlags::HAS_LINK_TARGET_ID_LIST`] to match.
    pub fn set_link_target_id_list(&mut self, list: Option<LinkTargetIdList>) {
        self.header_mut()
            .update_link_flags(LinkFlags::HAS_LINK_TARGET_ID_LIST, list.is_some());
        self.linktarget_id_list = list;
    }

    /// Get the link info structure
    pub fn link_info(&self) -> &Option<LinkInfo> {
        &self.link_info
    }

    /// Get a mutable reference to the link info structure, if the
    /// [`LinkFlags::HAS_LINK_INFO`] flag is enabled.
    pub fn link_info_mut(&mut self) -> Result<&mut LinkInfo, Error> {
        if !self.shell_link_header.link_flags().contains(LinkFlags::HAS_LINK_INFO) {
            return Err(Error::SectionNotEnabled("LinkInfo"));
        }
        self.link_info.as_mut().ok_or(Error::SectionNotEnabled("LinkInfo"))
    }

    /// Set the link info structure, enabling or disabling
    /// [`LinkFlags::HAS_LINK_INFO`] to match.
    pub fn set_link_info(&mut self, info: Option<LinkInfo>) {
        self.header_mut()
            .update_link_flags(LinkFlags::HAS_LINK_INFO, info.is_some());
        self.link_info = info;
    }

    /// Access the ExtraData chain.
    pub fn extra_data(&self) -> &ExtraData {
        &self.extra_data
    }

    /// Mutably access the ExtraData chain. Note that [`LinkFlags::HAS_DARWIN_ID`],
    /// [`LinkFlags::HAS_EXP_STRING`], [`LinkFlags::HAS_EXP_ICON`], and
    /// [`LinkFlags::RUN_WITH_SHIM_LAYER`] are not updated automatically by
    /// mutations made through this accessor; use the dedicated setters for
    /// those four block kinds if flag synchronisation is required.
    pub fn extra_data_mut(&mut self) -> &mut ExtraData {
        &mut self.extra_data
    }

    /// Get the shell link's name, if set
    pub fn name(&self) -> &Option<String> {
        self.string_data.name_string()
    }

    /// Set the shell link's name
    pub fn set_name(&mut self, name: Option<String>) {
        self.header_mut()
            .update_link_flags(LinkFlags::HAS_NAME, name.is_some());
        self.string_data.set_name_string(name);
    }

    /// Get the shell link's relative path, if set
    pub fn relative_path(&self) -> &Option<String> {
        self.string_data.relative_path()
    }

    /// Set the shell link's relative path
    pub fn set_relative_path(&mut self, relative_path: Option<String>) {
        self.header_mut()
            .update_link_flags(LinkFlags::HAS_RELATIVE_PATH, relative_path.is_some());
        self.string_data.set_relative_path(relative_path);
    }

    /// Get the shell link's working directory, if set
    pub fn working_dir(&self) -> &Option<String> {
        self.string_data.working_dir()
    }

    /// Set the shell link's working directory
    pub fn set_working_dir(&mut self, working_dir: Option<String>) {
        self.header_mut()
            .update_link_flags(LinkFlags::HAS_WORKING_DIR, working_dir.is_some());
        self.string_data.set_working_dir(working_dir);
    }

    /// Get the shell link's arguments, if set
    pub fn arguments(&self) -> &Option<String> {
        self.string_data.command_line_arguments()
    }

    /// Set the shell link's arguments
    pub fn set_arguments(&mut self, arguments: Option<String>) {
        self.header_mut()
            .update_link_flags(LinkFlags::HAS_ARGUMENTS, arguments.is_some());
        self.string_data.set_command_line_arguments(arguments);
    }

    /// Get the shell link's icon location, if set
    pub fn icon_location(&self) -> &Option<String> {
        self.string_data.icon_location()
    }

    /// Set the shell link's icon location
    pub fn set_icon_location(&mut self, icon_location: Option<String>) {
        self.header_mut()
            .update_link_flags(LinkFlags::HAS_ICON_LOCATION, icon_location.is_some());
        self.string_data.set_icon_location(icon_location);
    }

    /// Set the DarwinDataBlock, enabling or disabling [`LinkFlags::HAS_DARWIN_ID`] to match.
    pub fn set_darwin_data(&mut self, block: Option<extradata::darwin_data::DarwinDataBlock>) {
        self.header_mut()
            .update_link_flags(LinkFlags::HAS_DARWIN_ID, block.is_some());
        self.extra_data.darwin_data = block;
    }

    /// Set the EnvironmentVariableDataBlock, enabling or disabling
    /// [`LinkFlags::HAS_EXP_STRING`] to match.
    pub fn set_environment_variable_data(
        &mut self,
        block: Option<extradata::environment_variable_data::EnvironmentVariableDataBlock>,
    ) {
        self.header_mut()
            .update_link_flags(LinkFlags::HAS_EXP_STRING, block.is_some());
        self.extra_data.environment_variable_data = block;
    }

    /// Set the IconEnvironmentDataBlock, enabling or disabling
    /// [`LinkFlags::HAS_EXP_ICON`] to match.
    pub fn set_icon_environment_data(
        &mut self,
        block: Option<extradata::icon_environment_data::IconEnvironmentDataBlock>,
    ) {
        self.header_mut()
            .update_link_flags(LinkFlags::HAS_EXP_ICON, block.is_some());
        self.extra_data.icon_environment_data = block;
    }

    /// Set the ShimDataBlock, enabling or disabling [`LinkFlags::RUN_WITH_SHIM_LAYER`] to match.
    pub fn set_shim_data(&mut self, block: Option<extradata::shim_data::ShimDataBlock>) {
        self.header_mut()
            .update_link_flags(LinkFlags::RUN_WITH_SHIM_LAYER, block.is_some());
        self.extra_data.shim_data = block;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_shell_link_round_trips() {
        let link = ShellLink::new();
        let mut buf = Vec::new();
        link.write_to(&mut buf).unwrap();

        let read_back = ShellLink::load(&mut Cursor::new(buf)).unwrap();
        assert!(read_back.link_target_id_list().is_none());
        assert!(read_back.link_info().is_none());
        assert!(read_back.name().is_none());
    }

    #[test]
    fn shell_link_with_strings_and_target_round_trips() {
        let mut link = ShellLink::new();
        link.set_name(Some("My Shortcut".to_string()));
        link.set_arguments(Some("--help".to_string()));

        let mut list = LinkTargetIdList::new();
        list.push(ItemID::new(vec![1, 2, 3]));
        link.set_link_target_id_list(Some(list));

        link.set_link_info(Some(LinkInfo::new("target.exe".to_string())));

        let mut buf = Vec::new();
        link.write_to(&mut buf).unwrap();

        let read_back = ShellLink::load(&mut Cursor::new(buf)).unwrap();
        assert_eq!(read_back.name().as_deref(), Some("My Shortcut"));
        assert_eq!(read_back.arguments().as_deref(), Some("--help"));
        assert_eq!(read_back.link_target_id_list().as_ref().unwrap().id_list().len(), 1);
        assert_eq!(
            read_back.link_info().as_ref().unwrap().common_path_suffix(),
            "target.exe"
        );
    }

    #[test]
    fn flagged_but_missing_link_info_is_an_error() {
        let mut link = ShellLink::new();
        link.header_mut()
            .update_link_flags(LinkFlags::HAS_LINK_INFO, true);
        let mut buf = Vec::new();
        let err = link.write_to(&mut buf).unwrap_err();
        assert!(matches!(err, Error::MissingLinkInfo));
    }

    #[test]
    fn link_info_mut_requires_flag_enabled() {
        let mut link = ShellLink::new();
        assert!(matches!(
            link.link_info_mut().unwrap_err(),
            Error::SectionNotEnabled("LinkInfo")
        ));
    }
}
