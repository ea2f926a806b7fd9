//! The protocol interpreter: decodes one frame's payload against a
//! [`VersionCatalogue`]'s feature matrix and applies it to a
//! [`GameState`].

mod chat;
mod containers;
mod creatures;
mod effects;
mod full_map;
mod opcodes;
mod partial_map;
mod player_stats;

pub use opcodes::OpcodeKind;

use core::data_reader::DataReader;
use core::error::{ReplayError, Result};
use core::version::FeatureMatrix;
use log::{error, trace};

use crate::world::GameState;

/// Reads one opcode byte from `reader` and applies the frame it
/// introduces to `state`. An opcode byte the feature matrix does not
/// recognize is a fatal protocol error — playback cannot safely guess at
/// an unknown frame's length and continue.
pub fn apply_frame(state: &mut GameState, features: &FeatureMatrix, reader: &mut DataReader) -> Result<()> {
    let byte = reader.read_u8()?;
    let kind = opcodes::opcode_for(byte, features.extended_player_stats).ok_or_else(|| {
        error!("unknown opcode byte {byte:#04x}");
        ReplayError::protocol(format!("unknown opcode byte {byte:#04x}"))
    })?;
    trace!("dispatching opcode byte {byte:#04x} as {kind:?}");

    let result = match kind {
        OpcodeKind::FullMapRedraw => full_map::apply_full_map_redraw(state, reader),
        OpcodeKind::TileAddObject => partial_map::apply_add_object(state, reader),
        OpcodeKind::TileTransformObject => partial_map::apply_transform_object(state, reader),
        OpcodeKind::TileRemoveObject => partial_map::apply_remove_object(state, reader),
        OpcodeKind::CreatureMove => creatures::apply_creature_move(state, reader),
        OpcodeKind::CreatureUpdate => creatures::apply_creature_update(state, reader),
        OpcodeKind::ContainerOpen => containers::apply_container_open(state, reader),
        OpcodeKind::ContainerClose => containers::apply_container_close(state, reader),
        OpcodeKind::ContainerAddItem => containers::apply_container_add_item(state, reader),
        OpcodeKind::ChatMessage => {
            chat::apply_chat_message(state, features.messages_carry_position, reader)
        }
        OpcodeKind::GraphicalEffect => {
            effects::apply_graphical_effect(state, features.numerical_effects, reader)
        }
        OpcodeKind::MissileEffect => effects::apply_missile_effect(state, reader),
        OpcodeKind::PlayerStats => {
            player_stats::apply_player_stats(state, features.extended_player_stats, reader)
        }
    };

    if let Err(err) = &result {
        error!("opcode {kind:?} (byte {byte:#04x}) failed: {err}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::version::VersionTriple;

    #[test]
    fn unknown_opcode_is_a_fatal_protocol_error() {
        let mut state = GameState::new();
        let features = FeatureMatrix::for_version(VersionTriple::new(8, 0, 0));
        let bytes = [0xEE];
        let mut reader = DataReader::new(&bytes);
        assert!(apply_frame(&mut state, &features, &mut reader).is_err());
    }

    #[test]
    fn container_close_frame_dispatches_through_the_table() {
        let mut state = GameState::new();
        let features = FeatureMatrix::for_version(VersionTriple::new(8, 0, 0));
        let mut bytes = vec![0x08];
        bytes.extend_from_slice(&7u32.to_le_bytes());
        let mut reader = DataReader::new(&bytes);
        apply_frame(&mut state, &features, &mut reader).unwrap();
        assert!(state.containers.is_empty());
    }
}
