use std::io::{self, Read, Write};

use encoding_rs::Encoding;
#[allow(unused)]
use log::{debug, error, info, trace, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;

use self::{
    console_data::ConsoleDataBlock, console_fe_data::ConsoleFEDataBlock,
    darwin_data::DarwinDataBlock, environment_variable_data::EnvironmentVariableDataBlock,
    icon_environment_data::IconEnvironmentDataBlock, known_folder_data::KnownFolderDataBlock,
    property_store_data::PropertyStoreDataBlock, shim_data::ShimDataBlock,
    special_folder_data::SpecialFolderDataBlock, tracker_data::TrackerDataBlock,
    vista_and_above_id_list_data::VistaAndAboveIdListDataBlock,
};

/// The ConsoleDataBlock structure specifies the display settings to use
/// when a link target specifies an application that is run in a console
/// window.
pub mod console_data;

/// The ConsoleFEDataBlock structure specifies the code page to use
/// for displaying text when a link target specifies an application
/// that is run in a console window.
pub mod console_fe_data;

/// The DarwinDataBlock structure specifies an application identifier
/// that can be used instead of a link target IDList to install an
/// application when a shell link is activated.
pub mod darwin_data;

/// The EnvironmentVariableDataBlock structure specifies a path to
/// environment variable information when the link target refers to
/// a location that has a corresponding environment variable.
pub mod environment_variable_data;

/// The IconEnvironmentDataBlock structure specifies the path to an
/// icon. The path is encoded using environment variables, which makes
/// it possible to find the icon across machines where the locations
/// vary but are expressed using environment variables.
pub mod icon_environment_data;

/// The KnownFolderDataBlock structure specifies the location of a
/// known folder. This data can be used when a link target is a
/// known folder to keep track of the folder so that the link target
/// IDList can be translated when the link is loaded.
pub mod known_folder_data;

/// A PropertyStoreDataBlock structure specifies a set of properties
/// that can be used by applications to store extra data in the
/// shell link.
pub mod property_store_data;

/// The ShimDataBlock structure specifies the name of a shim that can
/// be applied when activating a link target.
pub mod shim_data;

/// The SpecialFolderDataBlock structure specifies the location of a
/// special folder. This data can be used when a link target is a
/// special folder to keep track of the folder, so that the link target
/// IDList can be translated when the link is loaded.
pub mod special_folder_data;

/// The TrackerDataBlock structure specifies data that can be used to
/// resolve a link target if it is not found in its original location
/// when the link is resolved. This data is passed to the Link
/// Tracking service [MS-DLTW] to find the link target.
pub mod tracker_data;

/// The VistaAndAboveIDListDataBlock structure specifies an alternate
/// IDList that can be used instead of the LinkTargetIDList structure
/// (section 2.2) on platforms that support it.
pub mod vista_and_above_id_list_data;

const SIG_CONSOLE_PROPS: u32 = 0xa0000002;
const SIG_CONSOLE_FE_PROPS: u32 = 0xa0000004;
const SIG_DARWIN_PROPS: u32 = 0xa0000006;
const SIG_ENVIRONMENT_PROPS: u32 = 0xa0000001;
const SIG_ICON_ENVIRONMENT_PROPS: u32 = 0xa0000007;
const SIG_KNOWN_FOLDER_PROPS: u32 = 0xa000000b;
const SIG_PROPERTY_STORE_PROPS: u32 = 0xa0000009;
const SIG_SHIM_PROPS: u32 = 0xa0000008;
const SIG_SPECIAL_FOLDER_PROPS: u32 = 0xa0000005;
const SIG_TRACKER_PROPS: u32 = 0xa0000003;
const SIG_VISTA_AND_ABOVE_ID_LIST_PROPS: u32 = 0xa000000c;

/// ExtraData refers to a set of structures that convey additional information
/// about a link target. These optional structures can be present in an extra
/// data section that is appended to the basic Shell Link Binary File Format.
///
/// Every block kind may appear at most once; a second occurrence of the same
/// signature is rejected with [`Error::DuplicateExtraDataBlock`]. The section
/// is terminated by a 4-byte zero-valued TerminalBlock, which is written
/// automatically and is not itself represented in this struct.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ExtraData {
    /// The ConsoleDataBlock, if present.
    pub console_data: Option<ConsoleDataBlock>,
    /// The ConsoleFEDataBlock, if present.
    pub console_fe_data: Option<ConsoleFEDataBlock>,
    /// The DarwinDataBlock, if present.
    pub darwin_data: Option<DarwinDataBlock>,
    /// The EnvironmentVariableDataBlock, if present.
    pub environment_variable_data: Option<EnvironmentVariableDataBlock>,
    /// The IconEnvironmentDataBlock, if present.
    pub icon_environment_data: Option<IconEnvironmentDataBlock>,
    /// The KnownFolderDataBlock, if present.
    pub known_folder_data: Option<KnownFolderDataBlock>,
    /// The PropertyStoreDataBlock, if present.
    pub property_store_data: Option<PropertyStoreDataBlock>,
    /// The ShimDataBlock, if present.
    pub shim_data: Option<ShimDataBlock>,
    /// The SpecialFolderDataBlock, if present.
    pub special_folder_data: Option<SpecialFolderDataBlock>,
    /// The TrackerDataBlock, if present.
    pub tracker_data: Option<TrackerDataBlock>,
    /// The VistaAndAboveIDListDataBlock, if present.
    pub vista_and_above_id_list_data: Option<VistaAndAboveIdListDataBlock>,
}

impl ExtraData {
    /// An ExtraData section with no blocks.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read_from<R: Read + ?Sized>(
        reader: &mut R,
        default_codepage: &'static Encoding,
    ) -> Result<Self, Error> {
        let mut extra = Self::default();
        loop {
            let block_size = byte_io::read_u32(reader)?;
            if block_size == 0 {
                break;
            }
            let signature = byte_io::read_u32(reader)?;
            trace!("Reading extra data block 0x{signature:08x}, size {block_size}");
            match signature {
                SIG_CONSOLE_PROPS => {
                    if extra.console_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock("ConsoleDataBlock"));
                    }
                    extra.console_data = Some(ConsoleDataBlock::read_from(reader, block_size)?);
                }
                SIG_CONSOLE_FE_PROPS => {
                    if extra.console_fe_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock("ConsoleFEDataBlock"));
                    }
                    extra.console_fe_data = Some(ConsoleFEDataBlock::read_from(reader, block_size)?);
                }
                SIG_DARWIN_PROPS => {
                    if extra.darwin_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock("DarwinDataBlock"));
                    }
                    extra.darwin_data =
                        Some(DarwinDataBlock::read_from(reader, block_size, default_codepage)?);
                }
                SIG_ENVIRONMENT_PROPS => {
                    if extra.environment_variable_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock(
                            "EnvironmentVariableDataBlock",
                        ));
                    }
                    extra.environment_variable_data = Some(EnvironmentVariableDataBlock::read_from(
                        reader,
                        block_size,
                        default_codepage,
                    )?);
                }
                SIG_ICON_ENVIRONMENT_PROPS => {
                    if extra.icon_environment_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock("IconEnvironmentDataBlock"));
                    }
                    extra.icon_environment_data = Some(IconEnvironmentDataBlock::read_from(
                        reader,
                        block_size,
                        default_codepage,
                    )?);
                }
                SIG_KNOWN_FOLDER_PROPS => {
                    if extra.known_folder_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock("KnownFolderDataBlock"));
                    }
                    extra.known_folder_data =
                        Some(KnownFolderDataBlock::read_from(reader, block_size)?);
                }
                SIG_PROPERTY_STORE_PROPS => {
                    if extra.property_store_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock("PropertyStoreDataBlock"));
                    }
                    extra.property_store_data =
                        Some(PropertyStoreDataBlock::read_from(reader, block_size)?);
                }
                SIG_SHIM_PROPS => {
                    if extra.shim_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock("ShimDataBlock"));
                    }
                    extra.shim_data = Some(ShimDataBlock::read_from(reader, block_size)?);
                }
                SIG_SPECIAL_FOLDER_PROPS => {
                    if extra.special_folder_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock("SpecialFolderDataBlock"));
                    }
                    extra.special_folder_data =
                        Some(SpecialFolderDataBlock::read_from(reader, block_size)?);
                }
                SIG_TRACKER_PROPS => {
                    if extra.tracker_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock("TrackerDataBlock"));
                    }
                    extra.tracker_data =
                        Some(TrackerDataBlock::read_from(reader, block_size, default_codepage)?);
                }
                SIG_VISTA_AND_ABOVE_ID_LIST_PROPS => {
                    if extra.vista_and_above_id_list_data.is_some() {
                        return Err(Error::DuplicateExtraDataBlock(
                            "VistaAndAboveIDListDataBlock",
                        ));
                    }
                    extra.vista_and_above_id_list_data = Some(
                        VistaAndAboveIdListDataBlock::read_from(reader, block_size)?,
                    );
                }
                other => return Err(Error::UnknownExtraDataSignature(other)),
            }
        }
        Ok(extra)
    }

    pub(crate) fn write_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        default_codepage: &'static Encoding,
    ) -> io::Result<()> {
        if let Some(block) = &self.console_data {
            byte_io::write_u32(writer, console_data::BLOCK_SIZE)?;
            byte_io::write_u32(writer, SIG_CONSOLE_PROPS)?;
            block.write_to(writer)?;
        }
        if let Some(block) = &self.console_fe_data {
            byte_io::write_u32(writer, console_fe_data::BLOCK_SIZE)?;
            byte_io::write_u32(writer, SIG_CONSOLE_FE_PROPS)?;
            block.write_to(writer)?;
        }
        if let Some(block) = &self.darwin_data {
            byte_io::write_u32(writer, darwin_data::BLOCK_SIZE)?;
            byte_io::write_u32(writer, SIG_DARWIN_PROPS)?;
            block.write_to(writer, default_codepage)?;
        }
        if let Some(block) = &self.environment_variable_data {
            byte_io::write_u32(writer, environment_variable_data::BLOCK_SIZE)?;
            byte_io::write_u32(writer, SIG_ENVIRONMENT_PROPS)?;
            block.write_to(writer, default_codepage)?;
        }
        if let Some(block) = &self.icon_environment_data {
            byte_io::write_u32(writer, icon_environment_data::BLOCK_SIZE)?;
            byte_io::write_u32(writer, SIG_ICON_ENVIRONMENT_PROPS)?;
            block.write_to(writer, default_codepage)?;
        }
        if let Some(block) = &self.known_folder_data {
            byte_io::write_u32(writer, known_folder_data::BLOCK_SIZE)?;
            byte_io::write_u32(writer, SIG_KNOWN_FOLDER_PROPS)?;
            block.write_to(writer)?;
        }
        if let Some(block) = &self.property_store_data {
            let size = block.payload_len() as u32 + 8;
            byte_io::write_u32(writer, size)?;
            byte_io::write_u32(writer, SIG_PROPERTY_STORE_PROPS)?;
            block.write_to(writer)?;
        }
        if let Some(block) = &self.shim_data {
            let size = block.payload_len() as u32 + 8;
            byte_io::write_u32(writer, size)?;
            byte_io::write_u32(writer, SIG_SHIM_PROPS)?;
            block.write_to(writer)?;
        }
        if let Some(block) = &self.special_folder_data {
            byte_io::write_u32(writer, special_folder_data::BLOCK_SIZE)?;
            byte_io::write_u32(writer, SIG_SPECIAL_FOLDER_PROPS)?;
            block.write_to(writer)?;
        }
        if let Some(block) = &self.tracker_data {
            byte_io::write_u32(writer, tracker_data::BLOCK_SIZE)?;
            byte_io::write_u32(writer, SIG_TRACKER_PROPS)?;
            block.write_to(writer, default_codepage)?;
        }
        if let Some(block) = &self.vista_and_above_id_list_data {
            let size = block.id_list().on_disk_size() as u32 + 10;
            byte_io::write_u32(writer, size)?;
            byte_io::write_u32(writer, SIG_VISTA_AND_ABOVE_ID_LIST_PROPS)?;
            block.write_to(writer)?;
        }
        byte_io::write_u32(writer, 0)
    }
}
