// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use byteorder::{ByteOrder, LittleEndian};

use crate::error::DecodeError;

/// A sequential reader of the primitive values a save file is built from
///
/// Every read names the field it decodes so that failures can point at it. A read either
/// consumes exactly the width of its value or fails without moving the cursor, though callers
/// should treat a decoder that returned an error as spent until [`Decoder::reset()`] is called.
///
/// # Examples
///
/// ```
/// use ttp::Decoder;
///
/// # fn main() -> Result<(), ttp::DecodeError> {
/// let data = [0x2a, 0, 0, 0, 1];
/// let mut decoder = Decoder::new(&data);
///
/// assert_eq!(decoder.read_i32("entity_id")?, 42);
/// assert!(decoder.read_bool("on_ground")?);
/// assert!(decoder.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    strict_bools: bool,
}

impl<'a> Decoder<'a> {
    /// Creates a new `Decoder` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            strict_bools: true,
        }
    }

    /// Sets whether booleans must be encoded as exactly 0 or 1.
    ///
    /// See [`DecodeConfig::strict_bools()`](crate::DecodeConfig::strict_bools).
    #[must_use]
    pub const fn with_strict_bools(mut self, strict: bool) -> Self {
        self.strict_bools = strict;
        self
    }

    /// Returns the offset of the next byte to be read
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos as u64
    }

    /// Returns the number of bytes left to read
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` if every byte has been read
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Rewinds the decoder to the start of its data.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Reads exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], DecodeError> {
        let bytes = self.peek(n, field)?;
        self.pos += n;

        Ok(bytes)
    }

    /// Reads exactly `N` bytes into an array.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(
        &mut self,
        field: &'static str,
    ) -> Result<[u8; N], DecodeError> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_bytes(N, field)?);

        Ok(out)
    }

    /// Reads a signed byte.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if no bytes remain.
    pub fn read_byte(&mut self, field: &'static str) -> Result<i8, DecodeError> {
        let [byte] = self.read_array(field)?;

        Ok(i8::from_le_bytes([byte]))
    }

    /// Reads a little-endian 32-bit signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than 4 bytes remain.
    pub fn read_i32(&mut self, field: &'static str) -> Result<i32, DecodeError> {
        Ok(LittleEndian::read_i32(self.read_bytes(4, field)?))
    }

    /// Reads a little-endian IEEE-754 single-precision float.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than 4 bytes remain.
    pub fn read_f32(&mut self, field: &'static str) -> Result<f32, DecodeError> {
        Ok(LittleEndian::read_f32(self.read_bytes(4, field)?))
    }

    /// Reads a one-byte boolean.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if no bytes remain, or
    /// [`DecodeError::InvalidBoolEncoding`] if the byte is neither 0 nor 1 and the decoder is
    /// strict.
    pub fn read_bool(&mut self, field: &'static str) -> Result<bool, DecodeError> {
        let value = self.peek(1, field)?[0];
        let flag = match value {
            0 => false,
            1 => true,
            _ if !self.strict_bools => true,
            _ => {
                return Err(DecodeError::InvalidBoolEncoding {
                    field,
                    offset: self.position(),
                    value,
                });
            }
        };
        self.pos += 1;

        Ok(flag)
    }

    fn peek(&self, n: usize, field: &'static str) -> Result<&'a [u8], DecodeError> {
        let available = self.remaining();
        if available < n {
            return Err(DecodeError::Truncated {
                field,
                offset: self.position(),
                needed: n,
                available,
            });
        }

        Ok(&self.data[self.pos..self.pos + n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let data = [0xfe, 0xff, 0xff, 0xff, 0x00, 0x00, 0x80, 0x3f];
        let mut decoder = Decoder::new(&data);

        assert_eq!(decoder.read_i32("a").unwrap(), -2);
        assert_eq!(decoder.read_f32("b").unwrap(), 1.0);
        assert!(decoder.is_empty());
    }

    #[test]
    fn byte_is_signed() {
        let mut decoder = Decoder::new(&[0xff]);

        assert_eq!(decoder.read_byte("version").unwrap(), -1);
    }

    #[test]
    fn truncated_read_leaves_cursor() {
        let data = [1, 2, 3];
        let mut decoder = Decoder::new(&data);
        decoder.read_byte("first").unwrap();

        let err = decoder.read_i32("value").unwrap_err();

        assert!(matches!(
            err,
            DecodeError::Truncated {
                field: "value",
                offset: 1,
                needed: 4,
                available: 2,
            }
        ));
        assert_eq!(decoder.position(), 1);
    }

    #[test]
    fn read_bytes_exact() {
        let data = [1, 2, 3, 4, 5];
        let mut decoder = Decoder::new(&data);

        assert_eq!(decoder.read_bytes(3, "run").unwrap(), &[1, 2, 3]);
        assert_eq!(decoder.remaining(), 2);
        assert!(decoder.read_bytes(3, "run").is_err());
        assert_eq!(decoder.read_bytes(0, "empty").unwrap(), &[] as &[u8]);
    }

    #[test]
    fn strict_bool_rejects_other_bytes() {
        let data = [0, 1, 2];
        let mut decoder = Decoder::new(&data);

        assert!(!decoder.read_bool("a").unwrap());
        assert!(decoder.read_bool("b").unwrap());
        assert!(matches!(
            decoder.read_bool("c"),
            Err(DecodeError::InvalidBoolEncoding {
                field: "c",
                offset: 2,
                value: 2,
            })
        ));
        assert_eq!(decoder.position(), 2);
    }

    #[test]
    fn lenient_bool_accepts_nonzero() {
        let mut decoder = Decoder::new(&[0x80]).with_strict_bools(false);

        assert!(decoder.read_bool("flag").unwrap());
    }

    #[test]
    fn reset_rewinds() {
        let data = [7, 0, 0, 0];
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_i32("x").unwrap(), 7);

        decoder.reset();

        assert_eq!(decoder.position(), 0);
        assert_eq!(decoder.read_i32("x").unwrap(), 7);
    }
}
