use core::data_reader::DataReader;
use core::error::Result;
use core::position::Position;
use core::types::{DamageEffect, Missile, NumericalEffect, TextEffect};

use crate::world::GameState;

/// Applies a graphical effect at a tile, plus an optional damage
/// annotation whose encoding (numeric value vs. literal text) is fixed
/// by the session's feature matrix.
pub fn apply_graphical_effect(
    state: &mut GameState,
    numerical_effects: bool,
    reader: &mut DataReader,
) -> Result<()> {
    let x = reader.read_u16()? as i32;
    let y = reader.read_u16()? as i32;
    let z = reader.read_u8()? as i32;
    let effect_id = reader.read_u8()?;
    let has_damage = reader.read_u8()? != 0;

    let tick = state.current_tick;
    let tile = state.map.tile_mut(x, y, z);
    tile.add_graphical_effect(effect_id, tick);

    if has_damage {
        let color = reader.read_u8()?;
        let damage = if numerical_effects {
            let value = reader.read_u32()?;
            DamageEffect::Numerical(NumericalEffect { start_tick: tick, color, value })
        } else {
            let text = reader.read_string()?;
            DamageEffect::Text(TextEffect { start_tick: tick, color, text })
        };
        tile.add_damage_effect(damage);
    }

    Ok(())
}

/// Appends a missile to the session's in-flight ring, evicting the
/// oldest entry once it is full.
pub fn apply_missile_effect(state: &mut GameState, reader: &mut DataReader) -> Result<()> {
    let id = reader.read_u8()?;
    let origin = Position::new(reader.read_u16()?, reader.read_u16()?, reader.read_u8()?);
    let target = Position::new(reader.read_u16()?, reader.read_u16()?, reader.read_u8()?);

    state.missiles.add(Missile { id, start_tick: state.current_tick, origin, target });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numerical_damage_populates_tile_damage_slot() {
        let mut state = GameState::new();
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.push(7);
        bytes.push(3); // effect_id
        bytes.push(1); // has_damage
        bytes.push(0); // color
        bytes.extend_from_slice(&50u32.to_le_bytes());
        let mut reader = DataReader::new(&bytes);

        apply_graphical_effect(&mut state, true, &mut reader).unwrap();
        let tile = state.map.tile(1, 1, 7);
        assert!(tile.damage_effects[0].is_some());
    }

    #[test]
    fn missile_is_recorded_with_current_tick() {
        let mut state = GameState::new();
        state.current_tick = 500;
        let mut bytes = Vec::new();
        bytes.push(9);
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.push(7);
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.push(7);
        let mut reader = DataReader::new(&bytes);

        apply_missile_effect(&mut state, &mut reader).unwrap();
        assert_eq!(state.missiles.len(), 1);
    }
}
