use crate::data_reader::DataReader;
use crate::error::Result;
use crate::sprite::Sprite;

const SPRITE_SIZE: u16 = 32;

/// A catalogue of fixed 32x32 run-length-encoded sprites indexed by
/// position in the `.spr` file.
#[derive(Debug, Clone, Default)]
pub struct SpriteCatalogue {
    offsets: Vec<u32>,
}

impl SpriteCatalogue {
    pub fn sprite(&self, raw: &[u8], index: u32) -> Option<Sprite> {
        let idx = index as usize;
        if idx == 0 || idx > self.offsets.len() {
            return None;
        }
        let absolute = self.offsets[idx - 1] as usize;
        if absolute == 0 {
            // Zero offset means "blank sprite" in the original format.
            return Some(Sprite::new(SPRITE_SIZE, SPRITE_SIZE, Vec::new()));
        }

        let mut reader = DataReader::new(raw);
        reader.skip(absolute).ok()?;
        // Each entry stores its own color-key (3 bytes, ignored) then a
        // u16 byte-length for the RLE payload that follows.
        reader.skip(3).ok()?;
        let len = reader.read_u16().ok()? as usize;
        let payload = reader.read_bytes(len).ok()?;
        Some(Sprite::new(SPRITE_SIZE, SPRITE_SIZE, payload.to_vec()))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Decodes a `.spr` file header into a [`SpriteCatalogue`]: a u32
/// signature, a count (u16 or u32 depending on `wide_sprite_ids`), and
/// that many u32 offsets into the remainder of the same buffer.
pub fn parse_sprite_file(bytes: &[u8], wide_sprite_ids: bool) -> Result<SpriteCatalogue> {
    let mut reader = DataReader::new(bytes);
    let _signature = reader.read_u32()?;
    let count = if wide_sprite_ids {
        reader.read_u32()?
    } else {
        reader.read_u16()? as u32
    };

    let mut offsets = Vec::with_capacity(count as usize);
    for _ in 0..count {
        offsets.push(reader.read_u32()?);
    }

    Ok(SpriteCatalogue { offsets })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sprite_has_zero_offset() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes()); // offset 0 == blank

        let catalogue = parse_sprite_file(&bytes, false).unwrap();
        assert_eq!(catalogue.len(), 1);
        let sprite = catalogue.sprite(&bytes, 1).unwrap();
        assert!(sprite.buffer.is_empty());
    }

    #[test]
    fn out_of_range_index_returns_none() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());

        let catalogue = parse_sprite_file(&bytes, false).unwrap();
        assert!(catalogue.sprite(&bytes, 0).is_none());
        assert!(catalogue.sprite(&bytes, 99).is_none());
    }
}
