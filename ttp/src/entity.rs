// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{
    decoder::Decoder,
    error::DecodeError,
    header::SUPPORTED_ENTITY_VERSIONS,
    record::{DecodeContext, Record, Sealed, Vector3},
};

/// The state needed to recreate an entity, stored at the root of a player save file
#[derive(Clone, Debug, PartialEq)]
pub struct EntityCreationRecord {
    version: i8,
    class_id: i32,
    entity_id: i32,
    lifetime: f32,
    position: Vector3,
    rotation: Vector3,
    on_ground: bool,
    body_damage: BodyDamageRecord,
}

impl EntityCreationRecord {
    /// Returns the record format version
    #[must_use]
    pub const fn version(&self) -> i8 {
        self.version
    }

    /// Returns the id of the entity's class
    #[must_use]
    pub const fn class_id(&self) -> i32 {
        self.class_id
    }

    /// Returns the entity id
    #[must_use]
    pub const fn entity_id(&self) -> i32 {
        self.entity_id
    }

    /// Returns the entity's remaining lifetime
    #[must_use]
    pub const fn lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Returns the entity's position
    #[must_use]
    pub const fn position(&self) -> Vector3 {
        self.position
    }

    /// Returns the entity's rotation
    #[must_use]
    pub const fn rotation(&self) -> Vector3 {
        self.rotation
    }

    /// Returns `true` if the entity is standing on the ground
    #[must_use]
    pub const fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Returns the entity's body damage
    #[must_use]
    pub const fn body_damage(&self) -> &BodyDamageRecord {
        &self.body_damage
    }
}

impl Sealed for EntityCreationRecord {}

impl Record for EntityCreationRecord {
    const NAME: &'static str = "entity creation record";

    fn decode(decoder: &mut Decoder<'_>, context: &DecodeContext) -> Result<Self, DecodeError> {
        let offset = decoder.position();
        let version = decoder.read_byte("version")?;
        if !SUPPORTED_ENTITY_VERSIONS.contains(&version) {
            return Err(DecodeError::UnsupportedRecordVersion {
                record: Self::NAME,
                version,
                offset,
            });
        }

        // Every supported version shares this layout
        let class_id = decoder.read_i32("class_id")?;
        let entity_id = decoder.read_i32("entity_id")?;
        let lifetime = decoder.read_f32("lifetime")?;
        let position = Vector3::decode(decoder, ["position.x", "position.y", "position.z"])?;
        let rotation = Vector3::decode(decoder, ["rotation.x", "rotation.y", "rotation.z"])?;
        let on_ground = decoder.read_bool("on_ground")?;
        let body_damage = BodyDamageRecord::decode(decoder, context)?;

        Ok(Self {
            version,
            class_id,
            entity_id,
            lifetime,
            position,
            rotation,
            on_ground,
            body_damage,
        })
    }
}

/// Damage to an entity's body parts
///
/// The layout of this sub-record is not known yet, so decoding it consumes no bytes and the record
/// carries no data. Whatever follows the entity's on-ground flag in a real file is left unread.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct BodyDamageRecord {}

impl Sealed for BodyDamageRecord {}

impl Record for BodyDamageRecord {
    const NAME: &'static str = "body damage record";

    // TODO: decode the real layout once it is known, gated on its own version byte like
    // `EntityCreationRecord`
    fn decode(_decoder: &mut Decoder<'_>, _context: &DecodeContext) -> Result<Self, DecodeError> {
        Ok(Self {})
    }
}
