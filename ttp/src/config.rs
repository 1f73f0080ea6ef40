// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Configuration for a decode operation.
///
/// The defaults reject anything that is not structurally exact, which is what you want for files
/// written by the game itself. Some options can be relaxed to read damaged or hand-edited files.
///
/// # Examples
///
/// ```
/// use ttp::DecodeConfig;
///
/// let mut config = DecodeConfig::new();
/// config.strict_bools(false).max_file_size(4096);
///
/// assert!(!config.is_strict_bools());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct DecodeConfig {
    strict_bools: bool,
    max_file_size: u64,
    allow_trailing_bytes: bool,
}

impl DecodeConfig {
    /// Creates a new configuration for decode operations
    ///
    /// This configuration can be reused across decode operations.
    pub const fn new() -> Self {
        Self {
            strict_bools: Self::DEFAULT_STRICT_BOOLS,
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
            allow_trailing_bytes: Self::DEFAULT_ALLOW_TRAILING_BYTES,
        }
    }

    /// Sets whether boolean fields must be encoded as exactly 0 or 1.
    ///
    /// When disabled, any nonzero byte decodes as `true`. This matches how older tools read the
    /// format, at the cost of silently accepting corrupted bytes.
    pub fn strict_bools(&mut self, strict: bool) -> &mut Self {
        self.strict_bools = strict;
        self
    }

    /// Sets the maximum number of bytes read from a stream or file.
    ///
    /// Inputs larger than this fail with [`DecodeError::FileTooLarge`](crate::DecodeError)
    /// before any decoding happens. Does not apply to [`PlayerSaveFile::from_bytes()`], since the
    /// caller has already loaded the data.
    ///
    /// [`PlayerSaveFile::from_bytes()`]: crate::PlayerSaveFile::from_bytes
    pub fn max_file_size(&mut self, size: u64) -> &mut Self {
        self.max_file_size = size;
        self
    }

    /// Sets whether bytes may remain after the root record has been decoded.
    pub fn allow_trailing_bytes(&mut self, allow: bool) -> &mut Self {
        self.allow_trailing_bytes = allow;
        self
    }

    /// Returns whether boolean fields are decoded strictly
    #[must_use]
    pub const fn is_strict_bools(&self) -> bool {
        self.strict_bools
    }

    /// Returns the maximum number of bytes read from a stream or file
    #[must_use]
    pub const fn get_max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Returns whether trailing bytes are accepted
    #[must_use]
    pub const fn is_trailing_bytes_allowed(&self) -> bool {
        self.allow_trailing_bytes
    }

    /// Whether booleans are strict by default
    pub const DEFAULT_STRICT_BOOLS: bool = true;

    /// The default maximum file size
    ///
    /// Real save files are a few kilobytes, so 1 MiB leaves plenty of headroom while still
    /// refusing to buffer arbitrarily large inputs.
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

    /// Whether trailing bytes are allowed by default
    ///
    /// The body damage sub-record is not decoded yet, so real files always carry bytes after the
    /// part this crate understands.
    pub const DEFAULT_ALLOW_TRAILING_BYTES: bool = true;
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new()
    }
}
