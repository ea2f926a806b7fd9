//! Fixed dimensions and magic numbers shared by the asset decoder, the
//! world-state machine, and the recording-container parsers.

// === Viewport window ===

pub const TILE_BUFFER_WIDTH: usize = 18;
pub const TILE_BUFFER_HEIGHT: usize = 14;
pub const TILE_BUFFER_DEPTH: usize = 8;
pub const TILE_BUFFER_SIZE: usize = TILE_BUFFER_WIDTH * TILE_BUFFER_HEIGHT * TILE_BUFFER_DEPTH;

/// One entry per 32px tile of the rendered frame, with a one-tile apron on
/// every side. See DESIGN.md for the index-formula rationale.
pub const RENDER_HEIGHTMAP_WIDTH: usize = TILE_BUFFER_WIDTH + 2;
pub const RENDER_HEIGHTMAP_HEIGHT: usize = TILE_BUFFER_HEIGHT + 2;
pub const RENDER_HEIGHTMAP_SIZE: usize = RENDER_HEIGHTMAP_WIDTH * RENDER_HEIGHTMAP_HEIGHT;
pub const RENDER_TILE_PIXELS: usize = 32;

// === Tile stack ===

pub const MAX_OBJECTS_PER_TILE: usize = 10;
pub const MAX_EFFECTS_PER_TILE: usize = 8;
pub const TILE_STACKPOSITION_TOP: u8 = 0xFF;
pub const TILE_OBJECT_CREATURE_MARKER: u16 = 0x63;

// === Containers ===

pub const MAX_CONTAINER_SLOTS: usize = 32;
pub const MAX_CONTAINER_NAME_LEN: usize = 64;

// === Messages ===

pub const MESSAGE_DISPLAY_TIME_MS: u32 = 3000;
pub const MESSAGE_MAX_TEXT_LENGTH: usize = 256;
pub const MESSAGE_MAX_AUTHOR_LENGTH: usize = 64;

// === Missiles ===

pub const MAX_MISSILES_IN_GAMESTATE: usize = 64;

// === Recording containers ===

pub const TRP_MAGIC: [u8; 4] = *b"TRP\0";
pub const MAX_FRAME_PAYLOAD_LEN: usize = 65535;
