use core::data_reader::DataReader;
use core::error::{ReplayError, Result};
use core::position::Position;
use core::types::MessageType;

use crate::world::GameState;

fn message_type_from_byte(byte: u8) -> Result<MessageType> {
    use MessageType::*;
    Ok(match byte {
        0 => PrivateIn,
        1 => PrivateOut,
        2 => ChannelManagement,
        3 => ChannelYellow,
        4 => ChannelWhite,
        5 => ChannelRed,
        6 => ChannelOrange,
        7 => Say,
        8 => Whisper,
        9 => Yell,
        10 => Spell,
        11 => NpcFrom,
        12 => NpcTo,
        13 => Broadcast,
        14 => Healing,
        15 => Experience,
        16 => HealingOthers,
        17 => ExperienceOthers,
        18 => Login,
        19 => Warning,
        other => {
            return Err(ReplayError::protocol(format!("unknown message type byte {other}")))
        }
    })
}

/// Inserts a chat/game message into the session's live list. Older
/// protocol versions do not carry an explicit coordinate per message —
/// in that case the message is attached to the viewport's current
/// position instead.
pub fn apply_chat_message(
    state: &mut GameState,
    messages_carry_position: bool,
    reader: &mut DataReader,
) -> Result<()> {
    let message_type = message_type_from_byte(reader.read_u8()?)?;

    let position = if messages_carry_position {
        Position::new(reader.read_u16()?, reader.read_u16()?, reader.read_u8()?)
    } else {
        state.map.position
    };

    let author = reader.read_string()?;
    let text = reader.read_string()?;

    let tick = state.current_tick;
    state.messages.add_message(message_type, position, author, text, tick);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_message_inherits_viewport_position() {
        let mut state = GameState::new();
        state.map.position = Position::new(5, 5, 7);

        let mut bytes = Vec::new();
        bytes.push(7); // Say
        bytes.extend_from_slice(&3u16.to_le_bytes());
        bytes.extend_from_slice(b"bob");
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(b"hi");
        let mut reader = DataReader::new(&bytes);

        apply_chat_message(&mut state, false, &mut reader).unwrap();
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn unknown_message_type_byte_is_a_protocol_error() {
        let mut state = GameState::new();
        let bytes = [200u8];
        let mut reader = DataReader::new(&bytes);
        assert!(apply_chat_message(&mut state, false, &mut reader).is_err());
    }
}
