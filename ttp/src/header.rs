// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// The magic bytes at the start of every player save file
pub const MAGIC: [u8; 4] = *b"PTTP";

/// Save-file format versions this build can decode
pub const SUPPORTED_FILE_VERSIONS: &[i8] = &[1];

/// Entity creation record versions this build can decode
pub const SUPPORTED_ENTITY_VERSIONS: &[i8] = &[1];

pub(crate) const MAGIC_LEN: usize = MAGIC.len();

