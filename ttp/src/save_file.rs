// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{fs::File, io::Read, path::Path};

use crate::{
    config::DecodeConfig,
    decoder::Decoder,
    entity::EntityCreationRecord,
    error::DecodeError,
    header::{MAGIC, MAGIC_LEN, SUPPORTED_FILE_VERSIONS},
    record::{DecodeContext, Record},
};

/// A decoded player save file
///
/// A value of this type only ever exists fully decoded: every entry point either returns the
/// whole file or the first error encountered.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerSaveFile {
    magic: [u8; 4],
    version: i8,
    entity: EntityCreationRecord,
    decoded_len: u64,
}

impl PlayerSaveFile {
    /// Decodes a save file from bytes already in memory with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not a well-formed save file of a supported version.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttp::PlayerSaveFile;
    ///
    /// # fn main() -> Result<(), ttp::DecodeError> {
    /// let data = [
    ///     b'P', b'T', b'T', b'P', 1, 1, 7, 0, 0, 0, 42, 0, 0, 0, 0, 0, 0x80, 0x3f, 0, 0, 0x80,
    ///     0x40, 0, 0, 0xa0, 0x40, 0, 0, 0xc0, 0x40, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    /// ];
    /// let save = PlayerSaveFile::from_bytes(&data)?;
    ///
    /// assert_eq!(save.entity().entity_id(), 42);
    /// assert!(save.entity().on_ground());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        Self::from_bytes_with_config(data, &DecodeConfig::default())
    }

    /// Decodes a save file from bytes already in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not a well-formed save file of a supported version.
    pub fn from_bytes_with_config(data: &[u8], config: &DecodeConfig) -> Result<Self, DecodeError> {
        let mut decoder = Decoder::new(data).with_strict_bools(config.is_strict_bools());
        let save = Self::decode(&mut decoder)?;

        if !config.is_trailing_bytes_allowed() && !decoder.is_empty() {
            return Err(DecodeError::TrailingBytes {
                offset: decoder.position(),
                count: decoder.remaining(),
            });
        }

        Ok(save)
    }

    /// Decodes a save file from a stream with the default configuration.
    ///
    /// The stream is read to the end before decoding begins.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the stream fails, the stream is larger than the configured
    /// limit, or the data is not a well-formed save file of a supported version.
    pub fn from_reader<R>(reader: R) -> Result<Self, DecodeError>
    where
        R: Read,
    {
        Self::from_reader_with_config(reader, &DecodeConfig::default())
    }

    /// Decodes a save file from a stream.
    ///
    /// The stream is read to the end, up to [`DecodeConfig::max_file_size()`] bytes, before
    /// decoding begins.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the stream fails, the stream is larger than the configured
    /// limit, or the data is not a well-formed save file of a supported version.
    pub fn from_reader_with_config<R>(reader: R, config: &DecodeConfig) -> Result<Self, DecodeError>
    where
        R: Read,
    {
        let limit = config.get_max_file_size();
        let mut data = Vec::new();
        // Read one byte past the limit so an oversized stream can be told apart from one that
        // is exactly at it
        reader.take(limit.saturating_add(1)).read_to_end(&mut data)?;
        if data.len() as u64 > limit {
            return Err(DecodeError::FileTooLarge { limit });
        }

        Self::from_bytes_with_config(&data, config)
    }

    /// Opens and decodes the save file at `path` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is larger than the configured limit, or is
    /// not a well-formed save file of a supported version.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ttp::PlayerSaveFile;
    ///
    /// # fn main() -> Result<(), ttp::DecodeError> {
    /// let save = PlayerSaveFile::open("Player.ttp")?;
    /// println!("{}", save.entity().position());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open<P>(path: P) -> Result<Self, DecodeError>
    where
        P: AsRef<Path>,
    {
        Self::open_with_config(path, &DecodeConfig::default())
    }

    /// Opens and decodes the save file at `path`.
    ///
    /// The file is closed before this function returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is larger than the configured limit, or is
    /// not a well-formed save file of a supported version.
    pub fn open_with_config<P>(path: P, config: &DecodeConfig) -> Result<Self, DecodeError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;

        Self::from_reader_with_config(file, config)
    }

    fn decode(decoder: &mut Decoder<'_>) -> Result<Self, DecodeError> {
        let magic = decoder.read_array::<MAGIC_LEN>("magic")?;
        if magic != MAGIC {
            return Err(DecodeError::BadMagic(magic));
        }

        let version = decoder.read_byte("file_version")?;
        if !SUPPORTED_FILE_VERSIONS.contains(&version) {
            return Err(DecodeError::UnsupportedFileVersion(version));
        }

        let context = DecodeContext::new(version);
        let entity = EntityCreationRecord::decode(decoder, &context)?;

        Ok(Self {
            magic,
            version,
            entity,
            decoded_len: decoder.position(),
        })
    }

    /// Returns the magic header
    #[must_use]
    pub const fn magic(&self) -> [u8; 4] {
        self.magic
    }

    /// Returns the save-file format version
    #[must_use]
    pub const fn version(&self) -> i8 {
        self.version
    }

    /// Returns the root entity record
    #[must_use]
    pub const fn entity(&self) -> &EntityCreationRecord {
        &self.entity
    }

    /// Returns the number of bytes the decoded records occupy
    ///
    /// Bytes past this offset belong to parts of the format this build does not decode.
    #[must_use]
    pub const fn decoded_len(&self) -> u64 {
        self.decoded_len
    }

    /// Consumes the save file, returning the root entity record
    #[must_use]
    pub fn into_entity(self) -> EntityCreationRecord {
        self.entity
    }
}
