// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::fmt::{self, Display, Formatter};

use crate::{decoder::Decoder, error::DecodeError};

/// State shared by every record decoded from one save file
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DecodeContext {
    file_version: i8,
}

impl DecodeContext {
    /// Creates a context for a save file of format version `file_version`.
    #[must_use]
    pub const fn new(file_version: i8) -> Self {
        Self { file_version }
    }

    /// Returns the save-file format version of the enclosing file
    #[must_use]
    pub const fn file_version(&self) -> i8 {
        self.file_version
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A versioned group of fields decoded as a unit
///
/// The set of records is fixed by the format, so this trait is sealed.
pub trait Record: sealed::Sealed + Sized {
    /// The name of the record used in error reports
    const NAME: &'static str;

    /// Decodes the record from `decoder`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes at the cursor are truncated, malformed or carry a version
    /// this build does not support. The cursor position is unspecified afterwards.
    fn decode(decoder: &mut Decoder<'_>, context: &DecodeContext) -> Result<Self, DecodeError>;
}

pub(crate) use sealed::Sealed;

/// A 3D vector of single-precision floats
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Vector3 {
    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the x component
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Returns the y component
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Returns the z component
    #[must_use]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// Reads the x, y and z components in that order.
    ///
    /// `fields` names the components for error reports, e.g. `["pos.x", "pos.y", "pos.z"]`.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while reading a component.
    pub fn decode(
        decoder: &mut Decoder<'_>,
        fields: [&'static str; 3],
    ) -> Result<Self, DecodeError> {
        let [x, y, z] = fields;

        Ok(Self {
            x: decoder.read_f32(x)?,
            y: decoder.read_f32(y)?,
            z: decoder.read_f32(z)?,
        })
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(value: Vector3) -> Self {
        [value.x, value.y, value.z]
    }
}
