use core::data_reader::DataReader;
use core::error::{ReplayError, Result};
use core::position::Position;
use core::types::{
    Appearance, CharacterSkull, Creature, CreatureType, Direction, MovementInformation,
    NpcCategory, PartyShield, WarIcon,
};
use log::{debug, error};

use crate::map_ops::{self, ScrollDirection};
use crate::world::GameState;

fn direction_from_byte(byte: u8) -> Direction {
    match byte {
        0 => Direction::North,
        1 => Direction::East,
        2 => Direction::South,
        _ => Direction::West,
    }
}

fn creature_type_from_byte(byte: u8) -> CreatureType {
    match byte {
        0 => CreatureType::Player,
        1 => CreatureType::Monster,
        2 => CreatureType::Npc,
        3 => CreatureType::SummonOwn,
        _ => CreatureType::SummonOthers,
    }
}

fn npc_category_from_byte(byte: u8) -> NpcCategory {
    match byte {
        0 => NpcCategory::None,
        1 => NpcCategory::Normal,
        2 => NpcCategory::Trader,
        3 => NpcCategory::Quest,
        _ => NpcCategory::TraderQuest,
    }
}

fn skull_from_byte(byte: u8) -> CharacterSkull {
    match byte {
        0 => CharacterSkull::None,
        1 => CharacterSkull::Yellow,
        2 => CharacterSkull::Green,
        3 => CharacterSkull::White,
        4 => CharacterSkull::Red,
        5 => CharacterSkull::Black,
        _ => CharacterSkull::Orange,
    }
}

fn shield_from_byte(byte: u8) -> PartyShield {
    match byte {
        0 => PartyShield::None,
        1 => PartyShield::WhiteYellow,
        2 => PartyShield::WhiteBlue,
        3 => PartyShield::Blue,
        4 => PartyShield::Yellow,
        5 => PartyShield::BlueSharedExp,
        6 => PartyShield::YellowSharedExp,
        7 => PartyShield::BlueNoSharedExpBlink,
        8 => PartyShield::YellowNoSharedExpBlink,
        9 => PartyShield::BlueNoSharedExp,
        10 => PartyShield::YellowNoSharedExp,
        _ => PartyShield::Gray,
    }
}

fn war_icon_from_byte(byte: u8) -> WarIcon {
    match byte {
        0 => WarIcon::None,
        1 => WarIcon::Ally,
        2 => WarIcon::Enemy,
        3 => WarIcon::Neutral,
        4 => WarIcon::Member,
        _ => WarIcon::Other,
    }
}

/// Applies a creature move: a creature already known to the session steps
/// from `origin` to `target`. Updates the tile stacks at both ends and
/// refreshes the creature's walk-interpolation state. If the moving
/// creature is the one the viewport is centered on, the window scrolls to
/// follow it.
pub fn apply_creature_move(state: &mut GameState, reader: &mut DataReader) -> Result<()> {
    if !state.synchronised {
        return Err(ReplayError::protocol(
            "creature move received before the first full map redraw",
        ));
    }

    let creature_id = reader.read_u32()?;
    let origin = Position::new(reader.read_u16()?, reader.read_u16()?, reader.read_u8()?);
    let origin_stack_position = reader.read_u8()?;
    let target = Position::new(reader.read_u16()?, reader.read_u16()?, reader.read_u8()?);
    let speed = reader.read_i16()?;

    // A move referencing a creature the session has never heard of cannot
    // be applied safely: look it up before touching any tile state, so a
    // rejected move leaves the map exactly as it was.
    if state.creatures.get(creature_id).is_none() {
        error!("creature move references unknown creature id {creature_id}");
        return Err(ReplayError::protocol(format!(
            "creature move references unknown creature id {creature_id}"
        )));
    }

    let is_player_move = origin == state.map.position;

    state
        .map
        .tile_mut(origin.x as i32, origin.y as i32, origin.z as i32)
        .remove_object(origin_stack_position);

    let object = core::types::Object::creature(creature_id);
    state
        .map
        .tile_mut(target.x as i32, target.y as i32, target.z as i32)
        .insert_object(object, 0xFF);

    let start_tick = state.current_tick;
    let walk_end_tick = start_tick.saturating_add(walk_duration_ms(speed));

    let creature = state.creatures.get_mut(creature_id).expect("checked above");
    creature.movement = MovementInformation {
        walk_start_tick: start_tick,
        walk_end_tick,
        origin,
        target,
    };
    creature.speed = speed;

    if is_player_move && origin.z == target.z {
        let dx = target.x as i32 - origin.x as i32;
        let dy = target.y as i32 - origin.y as i32;
        if let Some(direction) = ScrollDirection::from_delta(dx, dy) {
            map_ops::scroll(&mut state.map, direction);
            debug!("viewport scrolled {direction:?} following creature {creature_id}");
        }
    }

    Ok(())
}

/// Walking one tile takes longer the slower the creature; this mirrors
/// the inverse relationship the client uses to animate movement, without
/// replicating its exact step table.
fn walk_duration_ms(speed: i16) -> u32 {
    if speed <= 0 {
        1000
    } else {
        (100_000 / speed as u32).max(50)
    }
}

/// Applies a creature appearance/stat update, including the known/unknown
/// handshake: if `old_id` names a creature already in the table it is
/// rekeyed to `new_id`; otherwise a fresh entry is created under
/// `new_id`.
pub fn apply_creature_update(state: &mut GameState, reader: &mut DataReader) -> Result<()> {
    let new_id = reader.read_u32()?;
    let old_id = reader.read_u32()?;
    let has_name = reader.read_u8()? != 0;
    let name = if has_name {
        Some(reader.read_string()?)
    } else {
        None
    };

    let creature_type = creature_type_from_byte(reader.read_u8()?);
    let npc_category = npc_category_from_byte(reader.read_u8()?);
    let health_percent = reader.read_u8()?;
    let heading = direction_from_byte(reader.read_u8()?);
    let light_intensity = reader.read_u8()?;
    let light_color = reader.read_u8()?;
    let speed = reader.read_i16()?;
    let skull = skull_from_byte(reader.read_u8()?);
    let shield = shield_from_byte(reader.read_u8()?);
    let war_icon = war_icon_from_byte(reader.read_u8()?);
    let impassable = reader.read_u8()? != 0;

    let outfit = Appearance {
        outfit_id: reader.read_u16()?,
        mount_id: reader.read_u16()?,
        head_color: reader.read_u8()?,
        primary_color: reader.read_u8()?,
        secondary_color: reader.read_u8()?,
        detail_color: reader.read_u8()?,
        addons: reader.read_u8()?,
    };

    let guild_members_online = reader.read_u16()?;
    let mark = reader.read_u8()?;
    let mark_is_permanent = reader.read_u8()? != 0;

    let fallback_name = name.clone().unwrap_or_default();
    let creature = state
        .creatures
        .replace_creature(new_id, old_id, || Creature::new(new_id, fallback_name));

    if let Some(name) = name {
        creature.name = name;
    }
    creature.creature_type = creature_type;
    creature.npc_category = npc_category;
    creature.health_percent = health_percent;
    creature.heading = heading;
    creature.light_intensity = light_intensity;
    creature.light_color = light_color;
    creature.speed = speed;
    creature.skull = skull;
    creature.shield = shield;
    creature.war_icon = war_icon;
    creature.impassable = impassable;
    creature.outfit = outfit;
    creature.guild_members_online = guild_members_online;
    creature.mark = mark;
    creature.mark_is_permanent = mark_is_permanent;

    Ok(())
}
