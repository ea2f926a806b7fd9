use core::data_reader::DataReader;
use core::error::Result;
use core::types::Skill;

use crate::world::GameState;

/// Decodes a player stats frame. The field widths differ across the
/// protocol's lifetime (`extended_player_stats`); both layouts populate
/// the same superset struct.
pub fn apply_player_stats(
    state: &mut GameState,
    extended_player_stats: bool,
    reader: &mut DataReader,
) -> Result<()> {
    let player = &mut state.player;

    if extended_player_stats {
        player.health = reader.read_u32()?;
        player.max_health = reader.read_u32()?;
        player.mana = reader.read_u32()?;
        player.max_mana = reader.read_u32()?;
        player.capacity = reader.read_u32()?;
        player.experience = reader.read_u64()?;
        player.level_percent = reader.read_u8()?;
        player.stamina_minutes = reader.read_u16()?;
        player.magic_level = reader.read_u8()?;
        player.soul = reader.read_u8()?;
        player.blessings = reader.read_u8()?;
        player.pvp_flags = reader.read_u8()?;
        player.icons = reader.read_u32()?;
        for skill in player.skills.iter_mut() {
            *skill = Skill { level: reader.read_u16()?, percent: reader.read_u8()? };
        }
    } else {
        player.health = reader.read_u16()? as u32;
        player.max_health = reader.read_u16()? as u32;
        player.mana = reader.read_u16()? as u32;
        player.max_mana = reader.read_u16()? as u32;
        player.capacity = reader.read_u16()? as u32;
        player.experience = reader.read_u32()? as u64;
        player.level_percent = reader.read_u8()?;
        player.magic_level = reader.read_u8()?;
        for skill in player.skills.iter_mut() {
            *skill = Skill { level: reader.read_u8()? as u16, percent: reader.read_u8()? };
        }
    }

    Ok(())
}
