use std::fmt;
use std::io::{self, Read, Write};

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::byte_io;

/// The FILETIME structure is a 64-bit value that represents the number of
/// 100-nanosecond intervals that have elapsed since January 1, 1601,
/// Coordinated Universal Time (UTC). A value of zero means "no timestamp
/// set".
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FileTime(u64);

impl fmt::Debug for FileTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            write!(f, "(unset)")
        } else {
            write!(f, "{}", self.datetime())
        }
    }
}

impl FileTime {
    /// A FILETIME value of zero, meaning "unset".
    pub const UNSET: FileTime = FileTime(0);

    fn epoch() -> NaiveDateTime {
        let epoch_date = NaiveDate::from_ymd_opt(1601, 1, 1).unwrap();
        let epoch_time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        NaiveDateTime::new(epoch_date, epoch_time)
    }

    /// `true` if this FILETIME is the all-zero "unset" sentinel.
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }

    /// Converts this FILETIME to a UTC-naive timestamp. Meaningless if
    /// [`is_unset`](Self::is_unset) is true.
    pub fn datetime(&self) -> NaiveDateTime {
        Self::epoch() + Duration::microseconds((self.0 as f64 / 10f64) as i64)
    }

    /// Creates a FILETIME representing the current instant.
    pub fn now() -> Self {
        Self::from(chrono::Utc::now().naive_utc())
    }

    pub(crate) fn read_from<R: Read + ?Sized>(r: &mut R) -> io::Result<Self> {
        Ok(Self(byte_io::read_u64(r)?))
    }

    pub(crate) fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        byte_io::write_u64(w, self.0)
    }
}

impl From<NaiveDateTime> for FileTime {
    fn from(value: NaiveDateTime) -> Self {
        let duration = value - Self::epoch();
        let ticks = duration.num_microseconds().unwrap_or(0) * 10;
        Self(ticks as u64)
    }
}

impl From<u64> for FileTime {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<FileTime> for u64 {
    fn from(val: FileTime) -> Self {
        val.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_zero() {
        assert!(FileTime::UNSET.is_unset());
        assert_eq!(u64::from(FileTime::UNSET), 0);
    }

    #[test]
    fn round_trips_through_u64() {
        let ft = FileTime::from(0x01c91515f2eee9d0u64);
        assert!(!ft.is_unset());
        assert_eq!(u64::from(ft), 0x01c91515f2eee9d0);
    }
}
