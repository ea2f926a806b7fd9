use core::data_reader::DataReader;
use core::error::Result;
use core::types::{Container, Object, CREATURE_MARKER};

use crate::world::GameState;

/// Opens (or re-opens) a container, replacing its header fields. Existing
/// slot contents are preserved until `ContainerAddItem` frames overwrite
/// them, matching a client that redraws a container window incrementally.
pub fn apply_container_open(state: &mut GameState, reader: &mut DataReader) -> Result<()> {
    let id = reader.read_u32()?;
    let item_id = reader.read_u16()?;
    let name = reader.read_string()?;
    let has_parent = reader.read_u8()? != 0;
    let slots_per_page = reader.read_u8()?;

    let container = state.containers.open(id, || Container::new(id, item_id, name.clone()));
    container.item_id = item_id;
    container.name = name;
    container.has_parent = has_parent;
    container.slots_per_page = slots_per_page;
    Ok(())
}

pub fn apply_container_close(state: &mut GameState, reader: &mut DataReader) -> Result<()> {
    let id = reader.read_u32()?;
    state.containers.close(id);
    Ok(())
}

pub fn apply_container_add_item(state: &mut GameState, reader: &mut DataReader) -> Result<()> {
    let id = reader.read_u32()?;
    let slot = reader.read_u8()? as usize;
    let item_id = reader.read_u16()?;

    let object = if item_id == CREATURE_MARKER {
        Object::creature(reader.read_u32()?)
    } else {
        Object::item(item_id, reader.read_u8()?)
    };

    if let Some(container) = state.containers.get_mut(id) {
        container.set_slot(slot, object);
        container.total_objects = container.total_objects.max(slot as u16 + 1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_add_item_populates_slot() {
        let mut state = GameState::new();
        let mut open_bytes = Vec::new();
        open_bytes.extend_from_slice(&1u32.to_le_bytes());
        open_bytes.extend_from_slice(&100u16.to_le_bytes());
        open_bytes.extend_from_slice(&3u16.to_le_bytes());
        open_bytes.extend_from_slice(b"bag");
        open_bytes.push(0);
        open_bytes.push(20);
        let mut reader = DataReader::new(&open_bytes);
        apply_container_open(&mut state, &mut reader).unwrap();

        let mut add_bytes = Vec::new();
        add_bytes.extend_from_slice(&1u32.to_le_bytes());
        add_bytes.push(0);
        add_bytes.extend_from_slice(&55u16.to_le_bytes());
        add_bytes.push(0);
        let mut reader = DataReader::new(&add_bytes);
        apply_container_add_item(&mut state, &mut reader).unwrap();

        let container = state.containers.get(1).unwrap();
        assert_eq!(container.objects[0].id, 55);
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = GameState::new();
        let bytes = 1u32.to_le_bytes().to_vec();
        let mut reader = DataReader::new(&bytes);
        apply_container_close(&mut state, &mut reader).unwrap();
        let mut reader = DataReader::new(&bytes);
        apply_container_close(&mut state, &mut reader).unwrap();
        assert!(state.containers.is_empty());
    }
}
