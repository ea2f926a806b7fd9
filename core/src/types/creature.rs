use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatureType {
    Player,
    Monster,
    Npc,
    SummonOwn,
    SummonOthers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpcCategory {
    None,
    Normal,
    Trader,
    Quest,
    TraderQuest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterSkull {
    None,
    Yellow,
    Green,
    White,
    Red,
    Black,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyShield {
    None,
    WhiteYellow,
    WhiteBlue,
    Blue,
    Yellow,
    BlueSharedExp,
    YellowSharedExp,
    BlueNoSharedExpBlink,
    YellowNoSharedExpBlink,
    BlueNoSharedExp,
    YellowNoSharedExp,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarIcon {
    None,
    Ally,
    Enemy,
    Neutral,
    Member,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Appearance {
    pub outfit_id: u16,
    pub mount_id: u16,
    pub head_color: u8,
    pub primary_color: u8,
    pub secondary_color: u8,
    pub detail_color: u8,
    pub addons: u8,
}

/// Interpolation state for a creature currently walking between two
/// tiles, consumed by the renderer to produce smooth sub-tile motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementInformation {
    pub walk_start_tick: u32,
    pub walk_end_tick: u32,
    pub origin: Position,
    pub target: Position,
}

#[derive(Debug, Clone)]
pub struct Creature {
    pub id: u32,
    pub creature_type: CreatureType,
    pub npc_category: NpcCategory,
    pub name: String,
    pub health_percent: u8,
    pub heading: Direction,
    pub light_intensity: u8,
    pub light_color: u8,
    pub speed: i16,
    pub skull: CharacterSkull,
    pub shield: PartyShield,
    pub war_icon: WarIcon,
    pub impassable: bool,
    pub outfit: Appearance,
    pub guild_members_online: u16,
    pub mark: u8,
    pub mark_is_permanent: bool,
    pub movement: MovementInformation,
}

impl Creature {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Creature {
            id,
            creature_type: CreatureType::Monster,
            npc_category: NpcCategory::None,
            name: name.into(),
            health_percent: 100,
            heading: Direction::South,
            light_intensity: 0,
            light_color: 0,
            speed: 0,
            skull: CharacterSkull::None,
            shield: PartyShield::None,
            war_icon: WarIcon::None,
            impassable: false,
            outfit: Appearance::default(),
            guild_members_online: 0,
            mark: 0,
            mark_is_permanent: false,
            movement: MovementInformation::default(),
        }
    }
}
