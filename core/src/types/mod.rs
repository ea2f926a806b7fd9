//! Data model: the structures the protocol interpreter reads and writes.

mod container;
mod creature;
mod effect;
mod map;
mod message;
mod missile;
mod object;
mod player;
mod tile;

pub use container::Container;
pub use creature::{
    Appearance, CharacterSkull, Creature, CreatureType, Direction, MovementInformation,
    NpcCategory, PartyShield, WarIcon,
};
pub use effect::{DamageEffect, GraphicalEffect, NumericalEffect, TextEffect};
pub use map::Map;
pub use message::{Message, MessageType};
pub use missile::Missile;
pub use object::{Object, ObjectVariant, CREATURE_MARKER};
pub use player::{InventorySlot, Player, Skill, INVENTORY_SLOT_COUNT};
pub use tile::Tile;
