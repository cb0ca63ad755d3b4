use std::io::{self, Read, Write};

use bitflags::bitflags;
use encoding_rs::Encoding;
use getset::{Getters, Setters};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;
use crate::error::Error;

const HEADER_SIZE_BASE: u32 = 0x1c;
const HEADER_SIZE_WITH_UNICODE: u32 = 0x24;

/// The LinkInfo structure specifies information necessary to resolve a
/// linktarget if it is not found in its original location. This includes
/// information about the volume that the target was stored on, the mapped
/// drive letter, and a Universal Naming Convention (UNC)form of the path
/// if one existed when the linkwas created. For more details about UNC
/// paths, see [MS-DFSNM] section 2.2.1.4
///
/// Offsets (`*_offset` fields in the on-disk structure) are not retained
/// here: they are a function of the rest of this struct and are
/// recomputed whenever the structure is serialized.
#[derive(Clone, Debug, Default, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct LinkInfo {
    /// Flags that specify whether the VolumeID, LocalBasePath,
    /// LocalBasePathUnicode, and CommonNetworkRelativeLinkfields are present
    /// in this structure.
    #[getset(skip)]
    link_info_flags: LinkInfoFlags,

    /// An optional VolumeID structure (section 2.3.1) that specifies
    /// information about the volume that the link target was on when the link
    /// was created.
    volume_id: Option<VolumeID>,

    /// An optional, NULL–terminated string, defined by the system default code
    /// page, which is used to construct the full path to the link item or link
    /// target by appending the string in the CommonPathSuffix field.
    local_base_path: Option<String>,

    /// An optional CommonNetworkRelativeLink structure (section 2.3.2) that
    /// specifies information about the network location where the link target
    /// is stored.
    common_network_relative_link: Option<CommonNetworkRelativeLink>,

    /// A NULL–terminated string, defined by the system default code page,
    /// which is used to construct the full path to the link item or link
    /// target by being appended to the string in the LocalBasePath field.
    common_path_suffix: String,

    /// An optional, NULL–terminated, Unicode string that is used to construct
    /// the full path to the link item or link target by appending the string
    /// in the CommonPathSuffixUnicode field.
    local_base_path_unicode: Option<String>,

    /// The Unicode counterpart of `common_path_suffix`.
    common_path_suffix_unicode: Option<String>,
}

impl LinkInfo {
    /// Builds an empty LinkInfo with only the (required) common path suffix
    /// set.
    pub fn new(common_path_suffix: String) -> Self {
        Self {
            common_path_suffix,
            ..Default::default()
        }
    }

    /// Whether the VolumeID and LocalBasePath fields are enabled on this
    /// structure. This is kept in sync automatically by the `set_volume_id`
    /// and `set_local_base_path` mutators; it does not need to be set
    /// directly.
    pub fn link_info_flags(&self) -> LinkInfoFlags {
        let mut flags = LinkInfoFlags::empty();
        if self.volume_id.is_some() || self.local_base_path.is_some() {
            flags |= LinkInfoFlags::VOLUME_ID_AND_LOCAL_BASE_PATH;
        }
        if self.common_network_relative_link.is_some() {
            flags |= LinkInfoFlags::COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX;
        }
        flags
    }

    fn header_size(&self) -> u32 {
        if self.local_base_path_unicode.is_some() || self.common_path_suffix_unicode.is_some() {
            HEADER_SIZE_WITH_UNICODE
        } else {
            HEADER_SIZE_BASE
        }
    }

    pub(crate) fn read_from<R: Read + ?Sized>(
        reader: &mut R,
        default_codepage: &'static Encoding,
    ) -> Result<Self, Error> {
        let link_info_size = byte_io::read_u32(reader)?;
        let link_info_header_size = byte_io::read_u32(reader)?;
        if link_info_header_size != HEADER_SIZE_BASE && link_info_header_size < HEADER_SIZE_WITH_UNICODE
        {
            return Err(Error::LinkInfoHeaderSizeInvalid(link_info_header_size));
        }
        let link_info_flags = LinkInfoFlags::from_bits_retain(byte_io::read_u32(reader)?);
        let volume_id_offset = byte_io::read_u32(reader)?;
        let local_base_path_offset = byte_io::read_u32(reader)?;
        let common_network_relative_link_offset = byte_io::read_u32(reader)?;
        let common_path_suffix_offset = byte_io::read_u32(reader)?;

        let has_unicode_offsets = link_info_header_size >= HEADER_SIZE_WITH_UNICODE;
        let local_base_path_offset_unicode = if has_unicode_offsets {
            Some(byte_io::read_u32(reader)?)
        } else {
            None
        };
        let common_path_suffix_offset_unicode = if has_unicode_offsets {
            Some(byte_io::read_u32(reader)?)
        } else {
            None
        };

        let header_consumed = 4 + 4 + 4 + 4 + 4 + 4 + 4 + if has_unicode_offsets { 8 } else { 0 };
        let rest_len = link_info_size.saturating_sub(header_consumed) as usize;
        let mut rest = vec![0u8; rest_len];
        reader.read_exact(&mut rest)?;

        let base = link_info_header_size;
        let field = |offset: u32| -> usize { (offset - base) as usize };

        let volume_id = if link_info_flags.has_volume_id_and_local_base_path() {
            let start = field(volume_id_offset);
            Some(VolumeID::parse(&rest[start..], default_codepage)?)
        } else {
            None
        };

        let local_base_path = if link_info_flags.has_volume_id_and_local_base_path() {
            let start = field(local_base_path_offset);
            Some(byte_io::read_nul_string_codepage(
                &mut &rest[start..],
                default_codepage,
            )?)
        } else {
            None
        };

        let common_network_relative_link = if link_info_flags
            .has_common_network_relative_link_and_path_suffix()
        {
            let start = field(common_network_relative_link_offset);
            Some(CommonNetworkRelativeLink::parse(
                &rest[start..],
                default_codepage,
            )?)
        } else {
            None
        };

        let common_path_suffix = {
            let start = field(common_path_suffix_offset);
            byte_io::read_nul_string_codepage(&mut &rest[start..], default_codepage)?
        };

        let local_base_path_unicode = match local_base_path_offset_unicode {
            Some(offset) if offset != 0 => {
                let start = field(offset);
                Some(byte_io::read_nul_string_wide(&mut &rest[start..])?)
            }
            _ => None,
        };

        let common_path_suffix_unicode = match common_path_suffix_offset_unicode {
            Some(offset) if offset != 0 => {
                let start = field(offset);
                Some(byte_io::read_nul_string_wide(&mut &rest[start..])?)
            }
            _ => None,
        };

        Ok(Self {
            link_info_flags,
            volume_id,
            local_base_path,
            common_network_relative_link,
            common_path_suffix,
            local_base_path_unicode,
            common_path_suffix_unicode,
        })
    }

    pub(crate) fn write_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        default_codepage: &'static Encoding,
    ) -> Result<(), Error> {
        let flags = self.link_info_flags();
        let header_size = self.header_size();

        let mut body = Vec::new();
        let mut volume_id_offset = 0u32;
        let mut local_base_path_offset = 0u32;
        let mut common_network_relative_link_offset = 0u32;

        if let Some(volume_id) = &self.volume_id {
            volume_id_offset = header_size + body.len() as u32;
            volume_id.serialize(&mut body, default_codepage)?;
        }
        if let Some(path) = &self.local_base_path {
            local_base_path_offset = header_size + body.len() as u32;
            byte_io::write_nul_string_codepage(&mut body, path, default_codepage)?;
        }
        if let Some(link) = &self.common_network_relative_link {
            common_network_relative_link_offset = header_size + body.len() as u32;
            link.serialize(&mut body, default_codepage)?;
        }
        let common_path_suffix_offset = header_size + body.len() as u32;
        byte_io::write_nul_string_codepage(&mut body, &self.common_path_suffix, default_codepage)?;

        let mut local_base_path_offset_unicode = 0u32;
        let mut common_path_suffix_offset_unicode = 0u32;
        if header_size >= HEADER_SIZE_WITH_UNICODE {
            if let Some(path) = &self.local_base_path_unicode {
                local_base_path_offset_unicode = header_size + body.len() as u32;
                byte_io::write_nul_string_wide(&mut body, path)?;
            }
            if let Some(suffix) = &self.common_path_suffix_unicode {
                common_path_suffix_offset_unicode = header_size + body.len() as u32;
                byte_io::write_nul_string_wide(&mut body, suffix)?;
            }
        }

        let link_info_size = header_size + body.len() as u32;

        byte_io::write_u32(writer, link_info_size)?;
        byte_io::write_u32(writer, header_size)?;
        byte_io::write_u32(writer, flags.bits())?;
        byte_io::write_u32(writer, volume_id_offset)?;
        byte_io::write_u32(writer, local_base_path_offset)?;
        byte_io::write_u32(writer, common_network_relative_link_offset)?;
        byte_io::write_u32(writer, common_path_suffix_offset)?;
        if header_size >= HEADER_SIZE_WITH_UNICODE {
            byte_io::write_u32(writer, local_base_path_offset_unicode)?;
            byte_io::write_u32(writer, common_path_suffix_offset_unicode)?;
        }
        writer.write_all(&body)?;
        Ok(())
    }
}

bitflags! {
    /// Flags that specify whether the VolumeID, LocalBasePath, LocalBasePathUnicode,
    /// and CommonNetworkRelativeLink fields are present in this structure.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    pub struct LinkInfoFlags: u32 {
        /// If set, the VolumeIDand LocalBasePath fields are present, and their
        /// locations are specified by the values of the VolumeIDOffset and
        /// LocalBasePathOffset fields, respectively.
        const VOLUME_ID_AND_LOCAL_BASE_PATH = 0b0000_0000_0000_0000_0000_0000_0000_0001;

        /// If set, the CommonNetworkRelativeLink field is present, and its
        /// location is specified by the value of the
        /// CommonNetworkRelativeLinkOffset field.
        const COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX = 0b0000_0000_0000_0000_0000_0000_0000_0010;
    }
}

impl Default for LinkInfoFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[allow(missing_docs)]
impl LinkInfoFlags {
    pub fn has_volume_id_and_local_base_path(&self) -> bool {
        self.contains(Self::VOLUME_ID_AND_LOCAL_BASE_PATH)
    }

    pub fn has_common_network_relative_link_and_path_suffix(&self) -> bool {
        self.contains(Self::COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX)
    }
}

/// The VolumeID structure specifies information about the volume that a link
/// target was on when the link was created. This information is useful for
/// resolving the link if the file is not found in its original location.
#[derive(Clone, Debug, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct VolumeID {
    /// A 32-bit, unsigned integer that specifies the type of drive the link
    /// target is stored on.
    drive_type: DriveType,

    /// A 32-bit, unsigned integer that specifies the drive serial number of
    /// the volume the link target is stored on.
    drive_serial_number: u32,

    /// The label of the volume that the link target is stored on.
    volume_label: String,
}

impl VolumeID {
    /// Builds a new VolumeID.
    pub fn new(drive_type: DriveType, drive_serial_number: u32, volume_label: String) -> Self {
        Self {
            drive_type,
            drive_serial_number,
            volume_label,
        }
    }

    fn parse(data: &[u8], default_codepage: &'static Encoding) -> Result<Self, Error> {
        let mut cur = data;
        let volume_id_size = byte_io::read_u32(&mut cur)?;
        let drive_type = DriveType::from_u32(byte_io::read_u32(&mut cur)?);
        let drive_serial_number = byte_io::read_u32(&mut cur)?;
        let volume_label_offset = byte_io::read_u32(&mut cur)?;
        let volume_label_offset_unicode = if volume_label_offset == 0x14 {
            Some(byte_io::read_u32(&mut cur)?)
        } else {
            None
        };

        let fixed_prefix = if volume_label_offset_unicode.is_some() {
            0x14
        } else {
            0x10
        };
        if volume_id_size <= fixed_prefix {
            return Err(Error::VolumeIdSizeTooSmall {
                minimum: fixed_prefix,
                actual: volume_id_size,
            });
        }

        let volume_label = match volume_label_offset_unicode {
            Some(offset) => {
                let start = offset as usize;
                byte_io::read_nul_string_wide(&mut &data[start..])?
            }
            None => {
                let start = volume_label_offset as usize;
                byte_io::read_nul_string_codepage(&mut &data[start..], default_codepage)?
            }
        };

        Ok(Self {
            drive_type,
            drive_serial_number,
            volume_label,
        })
    }

    fn serialize<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        default_codepage: &'static Encoding,
    ) -> Result<(), Error> {
        let header_len = 0x10u32;
        let mut label_bytes = Vec::new();
        byte_io::write_nul_string_codepage(&mut label_bytes, &self.volume_label, default_codepage)?;

        let volume_id_size = header_len + label_bytes.len() as u32;
        byte_io::write_u32(writer, volume_id_size)?;
        byte_io::write_u32(writer, self.drive_type.to_u32())?;
        byte_io::write_u32(writer, self.drive_serial_number)?;
        byte_io::write_u32(writer, header_len)?;
        writer.write_all(&label_bytes)?;
        Ok(())
    }
}

/// A 32-bit, unsigned integer that specifies the type of drive the link target is stored on.
/// Unrecognized values are preserved via [`DriveType::Other`].
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum DriveType {
    DriveUnknown,
    DriveNoRootDir,
    DriveRemovable,
    DriveFixed,
    DriveRemote,
    DriveCDRom,
    DriveRamdisk,
    Other(u32),
}

impl DriveType {
    fn from_u32(v: u32) -> Self {
        match v {
            0x00 => Self::DriveUnknown,
            0x01 => Self::DriveNoRootDir,
            0x02 => Self::DriveRemovable,
            0x03 => Self::DriveFixed,
            0x04 => Self::DriveRemote,
            0x05 => Self::DriveCDRom,
            0x06 => Self::DriveRamdisk,
            other => Self::Other(other),
        }
    }

    fn to_u32(self) -> u32 {
        match self {
            Self::DriveUnknown => 0x00,
            Self::DriveNoRootDir => 0x01,
            Self::DriveRemovable => 0x02,
            Self::DriveFixed => 0x03,
            Self::DriveRemote => 0x04,
            Self::DriveCDRom => 0x05,
            Self::DriveRamdisk => 0x06,
            Self::Other(v) => v,
        }
    }
}

/// The CommonNetworkRelativeLink structure specifies information about the network location where a
/// link target is stored, including the mapped drive letter and the UNC path prefix. For details on
/// UNC paths, see [MS-DFSNM] section 2.2.1.4.
///
/// <https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-shllink/23bb5877-e3dd-4799-9f50-79f05f938537>
#[derive(Clone, Debug, Getters, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub", set = "pub")]
pub struct CommonNetworkRelativeLink {
    /// A NULL–terminated string, as defined by the system default code
    /// page, which specifies a server share path; for example,
    /// "\\server\share".
    net_name: String,

    /// A NULL–terminated string, as defined by the system default code
    /// page, which specifies a device; for example, the drive letter
    /// "D:".
    device_name: Option<String>,

    /// NetworkProviderType (4 bytes): specifies the type of network provider,
    /// if known.
    network_provider_type: Option<NetworkProviderType>,

    /// The Unicode counterpart of `net_name`. Present only if the on-disk
    /// structure carries the two optional unicode offset fields.
    net_name_unicode: Option<String>,

    /// The Unicode counterpart of `device_name`.
    device_name_unicode: Option<String>,
}

impl CommonNetworkRelativeLink {
    /// Builds a new CommonNetworkRelativeLink.
    pub fn new(net_name: String) -> Self {
        Self {
            net_name,
            device_name: None,
            network_provider_type: None,
            net_name_unicode: None,
            device_name_unicode: None,
        }
    }

    fn flags(&self) -> CommonNetworkRelativeLinkFlags {
        let mut flags = CommonNetworkRelativeLinkFlags::empty();
        if self.device_name.is_some() {
            flags |= CommonNetworkRelativeLinkFlags::VALID_DEVICE;
        }
        if self.network_provider_type.is_some() {
            flags |= CommonNetworkRelativeLinkFlags::VALID_NET_TYPE;
        }
        flags
    }

    fn parse(data: &[u8], default_codepage: &'static Encoding) -> Result<Self, Error> {
        let mut cur = data;
        let size = byte_io::read_u32(&mut cur)?;
        if size < 0x14 {
            return Err(Error::ExtraDataBlockWrongSize {
                name: "CommonNetworkRelativeLink",
                expected: 0x14,
                actual: size,
            });
        }
        let flags = CommonNetworkRelativeLinkFlags::from_bits_retain(byte_io::read_u32(&mut cur)?);
        let net_name_offset = byte_io::read_u32(&mut cur)?;
        let device_name_offset = byte_io::read_u32(&mut cur)?;
        let network_provider_type_raw = byte_io::read_u32(&mut cur)?;
        let has_unicode = net_name_offset > 0x14;
        let (net_name_offset_unicode, device_name_offset_unicode) = if has_unicode {
            (
                Some(byte_io::read_u32(&mut cur)?),
                Some(byte_io::read_u32(&mut cur)?),
            )
        } else {
            (None, None)
        };

        let net_name =
            byte_io::read_nul_string_codepage(&mut &data[net_name_offset as usize..], default_codepage)?;
        let device_name = if flags.has_valid_device() {
            Some(byte_io::read_nul_string_codepage(
                &mut &data[device_name_offset as usize..],
                default_codepage,
            )?)
        } else {
            None
        };
        let network_provider_type = if flags.has_valid_net_type() {
            Some(NetworkProviderType(network_provider_type_raw))
        } else {
            None
        };
        let net_name_unicode = match net_name_offset_unicode {
            Some(offset) if offset != 0 => {
                Some(byte_io::read_nul_string_wide(&mut &data[offset as usize..])?)
            }
            _ => None,
        };
        let device_name_unicode = match device_name_offset_unicode {
            Some(offset) if offset != 0 => {
                Some(byte_io::read_nul_string_wide(&mut &data[offset as usize..])?)
            }
            _ => None,
        };

        Ok(Self {
            net_name,
            device_name,
            network_provider_type,
            net_name_unicode,
            device_name_unicode,
        })
    }

    fn serialize<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        default_codepage: &'static Encoding,
    ) -> Result<(), Error> {
        let flags = self.flags();
        let has_unicode = self.net_name_unicode.is_some() || self.device_name_unicode.is_some();
        let header_len = if has_unicode { 0x1Cu32 } else { 0x14u32 };

        let mut net_name_bytes = Vec::new();
        byte_io::write_nul_string_codepage(&mut net_name_bytes, &self.net_name, default_codepage)?;
        let net_name_offset = header_len;

        let mut device_name_bytes = Vec::new();
        let device_name_offset = if let Some(device_name) = &self.device_name {
            byte_io::write_nul_string_codepage(&mut device_name_bytes, device_name, default_codepage)?;
            net_name_offset + net_name_bytes.len() as u32
        } else {
            0
        };

        let mut net_name_unicode_bytes = Vec::new();
        let mut device_name_unicode_bytes = Vec::new();
        let mut net_name_offset_unicode = 0u32;
        let mut device_name_offset_unicode = 0u32;
        if has_unicode {
            let ansi_end = net_name_offset + net_name_bytes.len() as u32 + device_name_bytes.len() as u32;
            if let Some(net_name_unicode) = &self.net_name_unicode {
                byte_io::write_nul_string_wide(&mut net_name_unicode_bytes, net_name_unicode)?;
                net_name_offset_unicode = ansi_end;
            }
            if let Some(device_name_unicode) = &self.device_name_unicode {
                byte_io::write_nul_string_wide(&mut device_name_unicode_bytes, device_name_unicode)?;
                device_name_offset_unicode = ansi_end + net_name_unicode_bytes.len() as u32;
            }
        }

        let size = header_len
            + net_name_bytes.len() as u32
            + device_name_bytes.len() as u32
            + net_name_unicode_bytes.len() as u32
            + device_name_unicode_bytes.len() as u32;

        byte_io::write_u32(writer, size)?;
        byte_io::write_u32(writer, flags.bits())?;
        byte_io::write_u32(writer, net_name_offset)?;
        byte_io::write_u32(writer, device_name_offset)?;
        byte_io::write_u32(
            writer,
            self.network_provider_type.map(|t| t.0).unwrap_or(0),
        )?;
        if has_unicode {
            byte_io::write_u32(writer, net_name_offset_unicode)?;
            byte_io::write_u32(writer, device_name_offset_unicode)?;
        }
        writer.write_all(&net_name_bytes)?;
        writer.write_all(&device_name_bytes)?;
        writer.write_all(&net_name_unicode_bytes)?;
        writer.write_all(&device_name_unicode_bytes)?;
        Ok(())
    }
}

bitflags! {
    /// Flags that specify the contents of the DeviceNameOffset and NetProviderType fields.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    pub struct CommonNetworkRelativeLinkFlags: u32 {
        /// If set, the DeviceNameOffset field contains an offset to the device
        /// name. If not set, the DeviceNameOffset field does not contain an
        /// offset to the device name, and its value MUST be zero.
        const VALID_DEVICE = 0b0000_0000_0000_0000_0000_0000_0000_0001;
        /// If set, the NetProviderType field contains the network provider
        /// type. If not set, the NetProviderType field does not contain the
        /// network provider type, and its value MUST be zero.
        const VALID_NET_TYPE = 0b0000_0000_0000_0000_0000_0000_0000_0010;
    }
}

impl Default for CommonNetworkRelativeLinkFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[allow(missing_docs)]
impl CommonNetworkRelativeLinkFlags {
    pub fn has_valid_device(&self) -> bool {
        self.contains(Self::VALID_DEVICE)
    }

    pub fn has_valid_net_type(&self) -> bool {
        self.contains(Self::VALID_NET_TYPE)
    }
}

/// A 32-bit, unsigned integer that specifies the type of network provider. Unlike the closed
/// enumeration this value might suggest, [MS-SHLLINK] leaves this space open to vendor-defined
/// values, so it is represented as an opaque newtype rather than a fixed enum: readers accept any
/// value and preserve it byte-for-byte.
///
/// <https://learn.microsoft.com/de-de/windows/win32/api/winbase/ns-winbase-file_remote_protocol_info>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NetworkProviderType(pub u32);

impl NetworkProviderType {
    /// The documented [MS-SHLLINK] name for well-known provider values, if any.
    pub fn name(&self) -> Option<&'static str> {
        Some(match self.0 {
            0x00010000 => "MSNet",
            0x00020000 => "Smb",
            0x00030000 => "Netware",
            0x00040000 => "Vines",
            0x00050000 => "TenNet",
            0x00060000 => "Locus",
            0x00070000 => "SunPCNFS",
            0x00080000 => "LanStep",
            0x00090000 => "NineTiles",
            0x000A0000 => "Lantastic",
            0x000B0000 => "As400",
            0x000C0000 => "FTPNFS",
            0x000D0000 => "PathWorks",
            0x000E0000 => "LifeNet",
            0x000F0000 => "PowerLAN",
            0x00100000 => "BWNFS",
            0x00110000 => "Cogent",
            0x00120000 => "Farallon",
            0x00130000 => "AppleTalk",
            0x00140000 => "Intergraph",
            0x00150000 => "SymfoNet",
            0x00160000 => "ClearCase",
            0x00170000 => "Frontier",
            0x00180000 => "BMC",
            0x00190000 => "DCE",
            0x001a0000 => "Avid",
            0x001b0000 => "Docuspace",
            0x001c0000 => "Mangosoft",
            0x001d0000 => "Sernet",
            0x001e0000 => "Riverfront1",
            0x001f0000 => "Riverfront2",
            0x00200000 => "Decorb",
            0x00210000 => "Protstor",
            0x00220000 => "FjRedir",
            0x00230000 => "Distinct",
            0x00240000 => "Twins",
            0x00250000 => "Rdr2Sample",
            0x00260000 => "CSC",
            0x00270000 => "3In1",
            0x00290000 => "ExtendNet",
            0x002a0000 => "Stac",
            0x002b0000 => "Foxbat",
            0x002c0000 => "Yahoo",
            0x002d0000 => "Exifs",
            0x002e0000 => "Dav",
            0x002f0000 => "Knoware",
            0x00300000 => "ObjectDire",
            0x00310000 => "Masfax",
            0x00320000 => "HobNfs",
            0x00330000 => "Shiva",
            0x00340000 => "Ibmal",
            0x00350000 => "Lock",
            0x00360000 => "Termsrv",
            0x00370000 => "Srt",
            0x00380000 => "Quincy",
            0x00390000 => "Openafs",
            0x003a0000 => "Avid1",
            0x003b0000 => "Dfs",
            0x003c0000 => "Kwnp",
            0x003d0000 => "Zenworks",
            0x003e0000 => "Driveonweb",
            0x003f0000 => "Vmware",
            0x00400000 => "Rsfx",
            0x00410000 => "Mfiles",
            0x00420000 => "MsNfs",
            0x00430000 => "Google",
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;
    use std::io::Cursor;

    #[test]
    fn minimal_link_info_round_trips() {
        let info = LinkInfo::new("foo.txt".to_string());
        let mut buf = Vec::new();
        info.write_to(&mut buf, WINDOWS_1252).unwrap();

        let mut cur = Cursor::new(&buf);
        let read_back = LinkInfo::read_from(&mut cur, WINDOWS_1252).unwrap();
        assert_eq!(read_back.common_path_suffix(), "foo.txt");
        assert!(read_back.volume_id().is_none());
    }

    #[test]
    fn link_info_with_volume_and_network_round_trips() {
        let mut info = LinkInfo::new("bar.exe".to_string());
        info.set_volume_id(Some(VolumeID::new(
            DriveType::DriveFixed,
            0xdeadbeef,
            "SYSTEM".to_string(),
        )));
        info.set_local_base_path(Some("C:\\Windows\\bar.exe".to_string()));
        let mut network = CommonNetworkRelativeLink::new("\\\\server\\share".to_string());
        network.set_device_name(Some("Z:".to_string()));
        network.set_network_provider_type(Some(NetworkProviderType(0x00020000)));
        info.set_common_network_relative_link(Some(network));

        let mut buf = Vec::new();
        info.write_to(&mut buf, WINDOWS_1252).unwrap();

        let read_back = LinkInfo::read_from(&mut Cursor::new(&buf), WINDOWS_1252).unwrap();
        assert_eq!(read_back.common_path_suffix(), "bar.exe");
        assert_eq!(
            read_back.local_base_path().as_deref(),
            Some("C:\\Windows\\bar.exe")
        );
        let volume = read_back.volume_id().as_ref().unwrap();
        assert_eq!(volume.volume_label(), "SYSTEM");
        assert_eq!(*volume.drive_type(), DriveType::DriveFixed);
        let network = read_back.common_network_relative_link().as_ref().unwrap();
        assert_eq!(network.net_name(), "\\\\server\\share");
        assert_eq!(network.device_name().as_deref(), Some("Z:"));
        assert_eq!(
            network.network_provider_type().and_then(|t| t.name()),
            Some("Smb")
        );
    }

    #[test]
    fn volume_id_size_at_or_below_fixed_prefix_is_rejected() {
        // size=0x10, drive_type, serial, label_offset=0x10 (ANSI prefix, no payload)
        let bytes: Vec<u8> = vec![
            0x10, 0x00, 0x00, 0x00, // volume_id_size == fixed prefix, not > it
            0x03, 0x00, 0x00, 0x00, // DriveFixed
            0xef, 0xbe, 0xad, 0xde, // serial
            0x10, 0x00, 0x00, 0x00, // volume_label_offset
            0x00, // empty label
        ];
        let err = VolumeID::parse(&bytes, WINDOWS_1252).unwrap_err();
        assert!(matches!(
            err,
            Error::VolumeIdSizeTooSmall { minimum: 0x10, actual: 0x10 }
        ));
    }

    #[test]
    fn unknown_network_provider_type_is_preserved() {
        let provider = NetworkProviderType(0xffffffff);
        assert_eq!(provider.name(), None);
    }

    #[test]
    fn common_network_relative_link_unicode_names_round_trip() {
        let mut network = CommonNetworkRelativeLink::new("\\\\server\\share".to_string());
        network.set_device_name(Some("Z:".to_string()));
        network.set_net_name_unicode(Some("\\\\server\\share".to_string()));
        network.set_device_name_unicode(Some("Z:".to_string()));

        let mut buf = Vec::new();
        network.serialize(&mut buf, WINDOWS_1252).unwrap();
        let read_back = CommonNetworkRelativeLink::parse(&buf, WINDOWS_1252).unwrap();

        assert_eq!(read_back.net_name(), "\\\\server\\share");
        assert_eq!(read_back.device_name().as_deref(), Some("Z:"));
        assert_eq!(
            read_back.net_name_unicode().as_deref(),
            Some("\\\\server\\share")
        );
        assert_eq!(read_back.device_name_unicode().as_deref(), Some("Z:"));
    }
}
