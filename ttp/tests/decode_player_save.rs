// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use std::{
    error::Error,
    fs::{self, File},
    io::{ErrorKind, Write},
    path::Path,
};

use ttp::{DecodeConfig, DecodeError, PlayerSaveFile, Vector3};

const SAVE_FILE_NAME: &str = "Player.ttp";

/// Magic "PTTP", file version 1, record version 1, class 7, entity 42, lifetime 1.0,
/// position (4, 5, 6), rotation (0, 0, 0), on ground
const PLAYER: [u8; 43] = [
    0x50, 0x54, 0x54, 0x50, 0x01, 0x01, 0x07, 0, 0, 0, 0x2a, 0, 0, 0, 0, 0, 0x80, 0x3f, 0, 0, 0x80,
    0x40, 0, 0, 0xa0, 0x40, 0, 0, 0xc0, 0x40, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
];

/// Builds a save file the same way the game lays one out
fn encode(class_id: i32, entity_id: i32, lifetime: f32, pos: [f32; 3], rot: [f32; 3]) -> Vec<u8> {
    let mut out = b"PTTP".to_vec();
    out.push(1);
    out.push(1);
    out.extend_from_slice(&class_id.to_le_bytes());
    out.extend_from_slice(&entity_id.to_le_bytes());
    out.extend_from_slice(&lifetime.to_le_bytes());
    for component in pos.into_iter().chain(rot) {
        out.extend_from_slice(&component.to_le_bytes());
    }
    out.push(0);
    out
}

#[test]
fn player() -> Result<(), Box<dyn Error>> {
    let save = PlayerSaveFile::from_bytes(&PLAYER)?;
    let entity = save.entity();

    assert_eq!(save.magic(), *b"PTTP");
    assert_eq!(save.version(), 1);
    assert_eq!(entity.version(), 1);
    assert_eq!(entity.class_id(), 7);
    assert_eq!(entity.entity_id(), 42);
    assert!((entity.lifetime() - 1.0).abs() < f32::EPSILON);
    assert_eq!(entity.position(), Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(entity.rotation(), Vector3::new(0.0, 0.0, 0.0));
    assert!(entity.on_ground());

    Ok(())
}

#[test]
fn encoded_values_survive() -> Result<(), Box<dyn Error>> {
    let data = encode(-3, i32::MAX, -0.5, [1.5, -2.25, 1e6], [90.0, 180.0, -45.0]);
    let entity = PlayerSaveFile::from_bytes(&data)?.into_entity();

    assert_eq!(entity.class_id(), -3);
    assert_eq!(entity.entity_id(), i32::MAX);
    assert_eq!(entity.lifetime(), -0.5);
    assert_eq!(<[f32; 3]>::from(entity.position()), [1.5, -2.25, 1e6]);
    assert_eq!(<[f32; 3]>::from(entity.rotation()), [90.0, 180.0, -45.0]);
    assert!(!entity.on_ground());

    Ok(())
}

#[test]
fn deterministic() -> Result<(), Box<dyn Error>> {
    let first = PlayerSaveFile::from_bytes(&PLAYER)?;
    let second = PlayerSaveFile::from_bytes(&PLAYER)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn unsupported_record_version() {
    let mut data = PLAYER;
    data[5] = 99;

    let err = PlayerSaveFile::from_bytes(&data).unwrap_err();

    assert!(matches!(
        err,
        DecodeError::UnsupportedRecordVersion {
            version: 99,
            offset: 5,
            ..
        }
    ));
}

#[test]
fn file_on_disk() -> Result<(), Box<dyn Error>> {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(SAVE_FILE_NAME);
    {
        let mut file = File::create(&path)?;
        file.write_all(&PLAYER)?;
    }

    let save = PlayerSaveFile::open(&path)?;
    assert_eq!(save.entity().entity_id(), 42);

    let mut config = DecodeConfig::new();
    config.max_file_size(16);
    assert!(matches!(
        PlayerSaveFile::open_with_config(&path, &config),
        Err(DecodeError::FileTooLarge { limit: 16 })
    ));

    fs::remove_file(&path)?;

    Ok(())
}

#[test]
fn missing_file() {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join("does-not-exist.ttp");

    match PlayerSaveFile::open(path) {
        Err(DecodeError::Io(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
        other => panic!("expected I/O error, got {other:?}"),
    }
}
