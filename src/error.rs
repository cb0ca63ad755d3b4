use thiserror::Error;

/// The error type for shell link parsing, writing, and mutation errors.
///
/// This is a single flat taxonomy: every failure, whether raised while
/// reading a `.lnk` file, writing one, or mutating an in-memory
/// [`ShellLink`](crate::ShellLink), is reported through one of these
/// variants rather than through a per-section error type.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("an I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    /// Raised by the NUL-terminated and fixed-length string readers when a
    /// declared or accumulated length would require an unreasonably large
    /// buffer, most likely signalling corrupt input rather than a genuine
    /// oversized string.
    #[error("refusing to allocate a string buffer of {0} bytes")]
    StringAllocation(u64),

    #[error("header_size must be 0x4c, found 0x{0:x}")]
    HeaderSizeInvalid(u32),

    #[error("header class identifier does not match the shell link CLSID")]
    HeaderClsidInvalid,

    #[error("link_info_header_size must be 0x1c or >= 0x24, found 0x{0:x}")]
    LinkInfoHeaderSizeInvalid(u32),

    #[error("volume_id_size must be greater than {minimum}, found {actual}")]
    VolumeIdSizeTooSmall { minimum: u32, actual: u32 },

    #[error("unknown extra data block signature 0x{0:08x}")]
    UnknownExtraDataSignature(u32),

    #[error("duplicate {0} extra data block")]
    DuplicateExtraDataBlock(&'static str),

    #[error("{name} extra data block has wrong size: expected {expected}, found {actual}")]
    ExtraDataBlockWrongSize {
        name: &'static str,
        expected: u32,
        actual: u32,
    },

    #[error("TrackerDataBlock has wrong length: expected 0x58, found 0x{0:x}")]
    TrackerDataWrongLength(u32),

    #[error("TrackerDataBlock has wrong version: expected 0, found {0}")]
    TrackerDataWrongVersion(u32),

    #[error("IdList size accounting is inconsistent: declared total {declared}, laid out {actual}")]
    IdListSizeMismatch { declared: u16, actual: u16 },

    #[error("IdList is missing its two-byte zero terminator")]
    IdListTerminatorInvalid,

    #[error("LinkTargetIDList is flagged as present but is absent from the model")]
    MissingIdList,

    #[error("LinkInfo is flagged as present but is absent from the model")]
    MissingLinkInfo,

    #[error("IdList item index {0} is out of range")]
    MissingIdListItem(usize),

    #[error("VolumeID is flagged as present but its data is absent from the model")]
    MissingVolumeIdData,

    #[error("local_base_path is flagged as present but absent from the model")]
    MissingLocalBasePath,

    #[error("local_base_path_unicode is flagged as present but absent from the model")]
    MissingLocalBasePathUnicode,

    #[error("common_path_suffix is required but absent from the model")]
    MissingCommonPathSuffix,

    #[error("common_path_suffix_unicode is flagged as present but absent from the model")]
    MissingCommonPathSuffixUnicode,

    #[error("net_name is flagged as present but absent from the model")]
    MissingNetName,

    #[error("net_name_unicode is flagged as present but absent from the model")]
    MissingNetNameUnicode,

    #[error("device_name is flagged as present but absent from the model")]
    MissingDeviceName,

    #[error("device_name_unicode is flagged as present but absent from the model")]
    MissingDeviceNameUnicode,

    #[error("{0} StringData field is flagged as present but absent from the model")]
    MissingStringData(&'static str),

    #[error("{0} extra data block is enabled but its payload is absent from the model")]
    MissingExtraDataPayload(&'static str),

    /// A mutator was asked to operate on an optional section (e.g. an
    /// IdList item, or a LinkInfo sub-structure) that has not been enabled.
    #[error("{0} is not currently enabled on this shell link")]
    SectionNotEnabled(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
