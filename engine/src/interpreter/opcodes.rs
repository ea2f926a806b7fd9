/// The categories of server opcode this interpreter understands. Opcode
/// *numbers* are version-dependent (see [`super::opcode_for`]); this enum
/// names the stable semantic category a number resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeKind {
    FullMapRedraw,
    TileAddObject,
    TileTransformObject,
    TileRemoveObject,
    CreatureMove,
    CreatureUpdate,
    ContainerOpen,
    ContainerClose,
    ContainerAddItem,
    ChatMessage,
    GraphicalEffect,
    MissileEffect,
    PlayerStats,
}

/// Resolves a raw opcode byte to a semantic category under `version`.
/// Returns `None` for an opcode this version's feature matrix does not
/// define — the caller must treat that as a fatal, unsynchronising
/// protocol error.
pub fn opcode_for(byte: u8, extended_player_stats: bool) -> Option<OpcodeKind> {
    use OpcodeKind::*;
    match byte {
        0x01 => Some(FullMapRedraw),
        0x02 => Some(TileAddObject),
        0x03 => Some(TileTransformObject),
        0x04 => Some(TileRemoveObject),
        0x05 => Some(CreatureMove),
        0x06 => Some(CreatureUpdate),
        0x07 => Some(ContainerOpen),
        0x08 => Some(ContainerClose),
        0x09 => Some(ContainerAddItem),
        0x0A => Some(ChatMessage),
        0x0B => Some(GraphicalEffect),
        0x0C => Some(MissileEffect),
        // Older versions number player stats differently; both numbers
        // resolve to the same semantic handler, which itself branches on
        // `extended_player_stats` to pick the field layout.
        0x0D if !extended_player_stats => Some(PlayerStats),
        0x1D if extended_player_stats => Some(PlayerStats),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_stats_byte_depends_on_the_feature_flag() {
        assert_eq!(opcode_for(0x0D, false), Some(OpcodeKind::PlayerStats));
        assert_eq!(opcode_for(0x0D, true), None);
        assert_eq!(opcode_for(0x1D, true), Some(OpcodeKind::PlayerStats));
        assert_eq!(opcode_for(0x1D, false), None);
    }

    #[test]
    fn unrecognized_byte_resolves_to_none() {
        assert_eq!(opcode_for(0xFF, false), None);
    }
}
