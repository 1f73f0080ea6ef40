// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Decoding of `.ttp` player save files.
//!
//! A player save file is a short magic header and a format version followed by a tree of
//! versioned records, each a fixed sequence of little-endian primitive fields. This crate reads
//! the format sequentially and either returns a fully decoded [`PlayerSaveFile`] or an error
//! naming the field and byte offset at which decoding failed. It never writes the format.
//!
//! # Examples
//!
//! Printing where a player is standing:
//!
//! ```no_run
//! use ttp::PlayerSaveFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let save = PlayerSaveFile::open("Player.ttp")?;
//! let entity = save.entity();
//!
//! println!("{}", entity.entity_id());
//! println!("{}", entity.position());
//! println!("{}", entity.on_ground());
//! # Ok(())
//! # }
//! ```
//!
//! Reading a file written by an older tool that encoded booleans loosely:
//!
//! ```no_run
//! use std::fs::File;
//! use ttp::{DecodeConfig, PlayerSaveFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("Player.ttp")?;
//! let mut config = DecodeConfig::new();
//! config.strict_bools(false);
//! let save = PlayerSaveFile::from_reader_with_config(file, &config)?;
//!
//! println!("{}", save.entity().on_ground());
//! # Ok(())
//! # }
//! ```

mod config;
mod decoder;
mod entity;
mod error;
mod header;
mod record;
mod save_file;

pub use config::DecodeConfig;
pub use decoder::Decoder;
pub use entity::{BodyDamageRecord, EntityCreationRecord};
pub use error::DecodeError;
pub use header::{MAGIC, SUPPORTED_ENTITY_VERSIONS, SUPPORTED_FILE_VERSIONS};
pub use record::{DecodeContext, Record, Vector3};
pub use save_file::PlayerSaveFile;
