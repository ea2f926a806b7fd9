use core::types::{Map, Player};

use crate::container_list::ContainerList;
use crate::creature_table::CreatureTable;
use crate::message_list::MessageList;
use crate::missile_ring::MissileRing;

/// The in-memory snapshot the protocol interpreter mutates: one instance
/// per playback session.
pub struct GameState {
    pub player: Player,
    pub map: Map,
    pub creatures: CreatureTable,
    pub containers: ContainerList,
    pub messages: MessageList,
    pub missiles: MissileRing,
    pub current_tick: u32,
    /// Set once the first full-map redraw has been processed; partial
    /// map updates and movement are only legal once synchronised.
    pub synchronised: bool,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            player: Player::default(),
            map: Map::new(),
            creatures: CreatureTable::new(),
            containers: ContainerList::new(),
            messages: MessageList::new(),
            missiles: MissileRing::new(),
            current_tick: 0,
            synchronised: false,
        }
    }

    pub fn reset(&mut self) {
        *self = GameState::new();
    }
}
