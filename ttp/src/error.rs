// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

use crate::header::{MAGIC, SUPPORTED_FILE_VERSIONS};

/// An error indicating that decoding a save file failed.
///
/// Every variant that originates from the byte stream itself carries the byte offset at which
/// the failure was detected, and most carry the name of the field being decoded, so callers can
/// report exactly where a file is damaged.
///
/// # Examples
///
/// ```
/// use ttp::{DecodeError, PlayerSaveFile};
///
/// // Garbage data
/// let data = [0, 0, 0, 0, 1];
/// let save = PlayerSaveFile::from_bytes(&data);
///
/// assert!(matches!(save, Err(DecodeError::BadMagic(_))));
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// An I/O error occurred while reading the byte source
    Io(io::Error),
    /// Fewer bytes remained than a field requires
    Truncated {
        /// The field being decoded
        field: &'static str,
        /// The offset the field starts at
        offset: u64,
        /// The number of bytes the field requires
        needed: usize,
        /// The number of bytes that were left
        available: usize,
    },
    /// The magic header is invalid
    BadMagic([u8; 4]),
    /// The save-file format version is unsupported
    UnsupportedFileVersion(i8),
    /// A record's version is unsupported
    UnsupportedRecordVersion {
        /// The name of the record
        record: &'static str,
        /// The version found in the file
        version: i8,
        /// The offset of the version byte
        offset: u64,
    },
    /// A boolean field holds a byte other than 0 or 1
    InvalidBoolEncoding {
        /// The field being decoded
        field: &'static str,
        /// The offset of the boolean byte
        offset: u64,
        /// The byte found in the file
        value: u8,
    },
    /// The byte source is larger than the configured limit
    FileTooLarge {
        /// The configured limit in bytes
        limit: u64,
    },
    /// Bytes were left over after the root record
    TrailingBytes {
        /// The offset of the first undecoded byte
        offset: u64,
        /// The number of undecoded bytes
        count: usize,
    },
}

impl DecodeError {
    /// Returns the byte offset at which decoding failed, if the error has one.
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        match self {
            DecodeError::Truncated { offset, .. }
            | DecodeError::UnsupportedRecordVersion { offset, .. }
            | DecodeError::InvalidBoolEncoding { offset, .. }
            | DecodeError::TrailingBytes { offset, .. } => Some(*offset),
            DecodeError::BadMagic(_) => Some(0),
            DecodeError::UnsupportedFileVersion(_) => Some(MAGIC.len() as u64),
            DecodeError::Io(_) | DecodeError::FileTooLarge { .. } => None,
        }
    }

    /// Returns the name of the field being decoded when the error occurred, if any.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DecodeError::Truncated { field, .. } | DecodeError::InvalidBoolEncoding { field, .. } => {
                Some(*field)
            }
            DecodeError::UnsupportedRecordVersion { .. } => Some("version"),
            DecodeError::BadMagic(_) => Some("magic"),
            DecodeError::UnsupportedFileVersion(_) => Some("file_version"),
            _ => None,
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DecodeError::Io(e) => write!(f, "I/O error: {e}"),
            DecodeError::Truncated {
                field,
                offset,
                needed,
                available,
            } => write!(
                f,
                "truncated {field} at offset {offset}: needed {needed} bytes, found {available}",
            ),
            DecodeError::BadMagic(magic) => {
                write!(f, "bad magic: expected {MAGIC:02x?}, found {magic:02x?}")
            }
            DecodeError::UnsupportedFileVersion(version) => write!(
                f,
                "unsupported file version: found {version}, supported versions are \
                 {SUPPORTED_FILE_VERSIONS:?}",
            ),
            DecodeError::UnsupportedRecordVersion {
                record,
                version,
                offset,
            } => write!(
                f,
                "unsupported {record} version at offset {offset}: found {version}",
            ),
            DecodeError::InvalidBoolEncoding {
                field,
                offset,
                value,
            } => write!(
                f,
                "invalid boolean {field} at offset {offset}: expected 0 or 1, found {value}",
            ),
            DecodeError::FileTooLarge { limit } => {
                write!(f, "file too large: limit is {limit} bytes")
            }
            DecodeError::TrailingBytes { offset, count } => {
                write!(f, "{count} trailing bytes at offset {offset}")
            }
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(value: io::Error) -> Self {
        DecodeError::Io(value)
    }
}
