use core::data_reader::DataReader;
use core::error::{ReplayError, Result};
use core::types::{Object, CREATURE_MARKER};

use crate::world::GameState;

fn read_position(reader: &mut DataReader) -> Result<(i32, i32, i32)> {
    let x = reader.read_u16()? as i32;
    let y = reader.read_u16()? as i32;
    let z = reader.read_u8()? as i32;
    Ok((x, y, z))
}

fn read_object(reader: &mut DataReader) -> Result<Object> {
    let id = reader.read_u16()?;
    if id == CREATURE_MARKER {
        let creature_id = reader.read_u32()?;
        Ok(Object::creature(creature_id))
    } else {
        let extra_byte = reader.read_u8()?;
        Ok(Object::item(id, extra_byte))
    }
}

fn require_synchronised(state: &GameState) -> Result<()> {
    if !state.synchronised {
        return Err(ReplayError::protocol(
            "partial tile update received before the first full map redraw",
        ));
    }
    Ok(())
}

/// Inserts a single object at `stack_position`, shifting everything above
/// it up.
pub fn apply_add_object(state: &mut GameState, reader: &mut DataReader) -> Result<()> {
    require_synchronised(state)?;
    let (x, y, z) = read_position(reader)?;
    let stack_position = reader.read_u8()?;
    let object = read_object(reader)?;
    state.map.tile_mut(x, y, z).insert_object(object, stack_position);
    Ok(())
}

/// Replaces the object already occupying `stack_position` in place.
pub fn apply_transform_object(state: &mut GameState, reader: &mut DataReader) -> Result<()> {
    require_synchronised(state)?;
    let (x, y, z) = read_position(reader)?;
    let stack_position = reader.read_u8()?;
    let object = read_object(reader)?;
    state.map.tile_mut(x, y, z).set_object(object, stack_position);
    Ok(())
}

/// Removes the object at `stack_position`, shifting everything above it
/// down.
pub fn apply_remove_object(state: &mut GameState, reader: &mut DataReader) -> Result<()> {
    require_synchronised(state)?;
    let (x, y, z) = read_position(reader)?;
    let stack_position = reader.read_u8()?;
    state.map.tile_mut(x, y, z).remove_object(stack_position);
    Ok(())
}
