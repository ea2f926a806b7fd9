use log::error;

use crate::data_reader::DataReader;
use crate::error::{ReplayError, Result};
use crate::version::flags::{FeatureMatrix, ObjectTypeFlags, VersionTriple};

/// Tag byte meaning "no more flags for this type".
const TAG_END: u8 = 0xFF;

/// One decoded entry from the `.dat` object-type dictionary.
#[derive(Debug, Clone)]
pub struct ObjectType {
    pub id: u16,
    pub flags: ObjectTypeFlags,
    pub width: u8,
    pub height: u8,
    pub layers: u8,
    pub pattern_x: u8,
    pub pattern_y: u8,
    pub pattern_z: u8,
    pub phases: u8,
    pub sprite_indices: Vec<u32>,
}

impl ObjectType {
    pub fn frame_count(&self) -> usize {
        self.width as usize
            * self.height as usize
            * self.layers as usize
            * self.pattern_x as usize
            * self.pattern_y as usize
            * self.pattern_z as usize
            * self.phases as usize
    }
}

/// Maps a version-dependent tag byte to the flag it sets. Versions before
/// 8.60 do not carry the `CHARGES` tag at all; this table is intentionally
/// small since only a handful of tags vary across the versions this engine
/// targets.
fn tag_to_flag(version: VersionTriple, tag: u8) -> Option<ObjectTypeFlags> {
    match tag {
        0x00 => Some(ObjectTypeFlags::GROUND),
        0x01 => Some(ObjectTypeFlags::ALWAYS_ON_TOP),
        0x02 => Some(ObjectTypeFlags::CONTAINER),
        0x03 => Some(ObjectTypeFlags::STACKABLE),
        0x04 if version.major >= 8 => Some(ObjectTypeFlags::FLUID),
        0x05 => Some(ObjectTypeFlags::MULTI_USE),
        0x0A => Some(ObjectTypeFlags::WRITABLE),
        0x0B => Some(ObjectTypeFlags::LIGHT_EMITTING),
        0x0F => Some(ObjectTypeFlags::HANGABLE),
        0x10 => Some(ObjectTypeFlags::ROTATABLE),
        0x13 => Some(ObjectTypeFlags::WALKABLE),
        0x17 => Some(ObjectTypeFlags::TAKEABLE),
        0x1D if version.major >= 9 => Some(ObjectTypeFlags::CHARGES),
        0x1E => Some(ObjectTypeFlags::ANIMATED),
        _ => None,
    }
}

/// One or more named dictionaries decoded from a single `.dat` payload:
/// items, outfits, effects, and missiles, in that fixed order.
#[derive(Debug, Clone, Default)]
pub struct ObjectCatalogue {
    pub items: Vec<ObjectType>,
    pub outfits: Vec<ObjectType>,
    pub effects: Vec<ObjectType>,
    pub missiles: Vec<ObjectType>,
}

impl ObjectCatalogue {
    pub fn item(&self, id: u16) -> Option<&ObjectType> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn outfit(&self, id: u16) -> Option<&ObjectType> {
        self.outfits.iter().find(|t| t.id == id)
    }
}

/// Decodes a `.dat` buffer into an [`ObjectCatalogue`].
///
/// Layout: a u32 content-version signature (ignored beyond sanity
/// checking), then four u16 counts (items, outfits, effects, missiles),
/// then that many object-type records back to back. Each record is a
/// sequence of one-byte tags until `TAG_END`, followed by the sprite
/// dimensions and index table.
pub fn parse_object_file(bytes: &[u8], version: VersionTriple) -> Result<ObjectCatalogue> {
    let matrix = FeatureMatrix::for_version(version);
    let mut reader = DataReader::new(bytes);

    let _signature = reader.read_u32()?;
    let item_count = reader.read_u16()?;
    let outfit_count = reader.read_u16()?;
    let effect_count = reader.read_u16()?;
    let missile_count = reader.read_u16()?;

    let mut catalogue = ObjectCatalogue::default();
    catalogue.items = parse_types(&mut reader, 100, item_count, matrix.wide_sprite_ids, version)?;
    catalogue.outfits = parse_types(&mut reader, 1, outfit_count, matrix.wide_sprite_ids, version)?;
    catalogue.effects = parse_types(&mut reader, 1, effect_count, matrix.wide_sprite_ids, version)?;
    catalogue.missiles = parse_types(&mut reader, 1, missile_count, matrix.wide_sprite_ids, version)?;

    Ok(catalogue)
}

fn parse_types(
    reader: &mut DataReader,
    first_id: u16,
    count: u16,
    wide_sprite_ids: bool,
    version: VersionTriple,
) -> Result<Vec<ObjectType>> {
    let mut out = Vec::with_capacity(count as usize);

    for offset in 0..count {
        let id = first_id + offset;
        let mut flags = ObjectTypeFlags::empty();

        loop {
            let tag = reader.read_u8()?;
            if tag == TAG_END {
                break;
            }
            match tag_to_flag(version, tag) {
                Some(flag) => flags |= flag,
                None => {
                    error!(
                        "unknown .dat flag tag {tag:#x} for type {id} under version {version:?}"
                    );
                    return Err(ReplayError::version_mismatch(format!(
                        "unknown .dat flag tag {tag:#x} for type {id} under version {version:?}"
                    )));
                }
            }
        }

        let width = reader.read_u8()?;
        let height = reader.read_u8()?;
        let layers = reader.read_u8()?;
        let pattern_x = reader.read_u8()?;
        let pattern_y = reader.read_u8()?;
        let pattern_z = reader.read_u8()?;
        let phases = reader.read_u8()?;

        let frame_count = width as usize
            * height as usize
            * layers as usize
            * pattern_x as usize
            * pattern_y as usize
            * pattern_z as usize
            * phases as usize;

        let mut sprite_indices = Vec::with_capacity(frame_count);
        for _ in 0..frame_count {
            let index = if wide_sprite_ids {
                reader.read_u32()?
            } else {
                reader.read_u16()? as u32
            };
            sprite_indices.push(index);
        }

        out.push(ObjectType {
            id,
            flags,
            width,
            height,
            layers,
            pattern_x,
            pattern_y,
            pattern_z,
            phases,
            sprite_indices,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_minimal_dat() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x4D41_4721u32.to_le_bytes()); // signature
        bytes.extend_from_slice(&1u16.to_le_bytes()); // items
        bytes.extend_from_slice(&0u16.to_le_bytes()); // outfits
        bytes.extend_from_slice(&0u16.to_le_bytes()); // effects
        bytes.extend_from_slice(&0u16.to_le_bytes()); // missiles

        // One item: ground flag, then end tag, 1x1x1x1x1x1 with one sprite.
        bytes.push(0x00); // GROUND
        bytes.push(TAG_END);
        bytes.extend_from_slice(&[1, 1, 1, 1, 1, 1, 1]); // dims
        bytes.extend_from_slice(&42u16.to_le_bytes()); // sprite index (narrow)

        bytes
    }

    #[test]
    fn parses_a_single_ground_item() {
        let bytes = encode_minimal_dat();
        let catalogue = parse_object_file(&bytes, VersionTriple::new(7, 6, 0)).unwrap();
        assert_eq!(catalogue.items.len(), 1);
        let item = &catalogue.items[0];
        assert_eq!(item.id, 100);
        assert!(item.flags.contains(ObjectTypeFlags::GROUND));
        assert_eq!(item.sprite_indices, vec![42]);
    }

    #[test]
    fn unknown_tag_is_a_version_mismatch_error() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.push(0x7E); // not a known tag
        bytes.push(TAG_END);

        let err = parse_object_file(&bytes, VersionTriple::new(7, 6, 0)).unwrap_err();
        assert!(matches!(err, ReplayError::VersionMismatch { .. }));
    }
}
