use core::constants::{TILE_BUFFER_DEPTH, TILE_BUFFER_HEIGHT, TILE_BUFFER_WIDTH};
use core::position::Position;
use core::types::Map;

/// The eight directions the viewport window can shift in, one per scroll
/// opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    East,
    West,
    North,
    South,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ScrollDirection {
    fn delta(self) -> (i32, i32) {
        match self {
            ScrollDirection::East => (1, 0),
            ScrollDirection::West => (-1, 0),
            ScrollDirection::North => (0, -1),
            ScrollDirection::South => (0, 1),
            ScrollDirection::NorthEast => (1, -1),
            ScrollDirection::NorthWest => (-1, -1),
            ScrollDirection::SouthEast => (1, 1),
            ScrollDirection::SouthWest => (-1, 1),
        }
    }

    /// The scroll direction for a one-tile step `(dx, dy)`, or `None` for
    /// no horizontal/vertical movement at all (a pure floor change, or no
    /// movement).
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx.signum(), dy.signum()) {
            (1, 0) => Some(ScrollDirection::East),
            (-1, 0) => Some(ScrollDirection::West),
            (0, -1) => Some(ScrollDirection::North),
            (0, 1) => Some(ScrollDirection::South),
            (1, -1) => Some(ScrollDirection::NorthEast),
            (-1, -1) => Some(ScrollDirection::NorthWest),
            (1, 1) => Some(ScrollDirection::SouthEast),
            (-1, 1) => Some(ScrollDirection::SouthWest),
            _ => None,
        }
    }
}

/// Shifts the window's world-space origin by one tile in `direction` and
/// clears exactly the tiles that scrolled into view — the torus reuses
/// their storage slots for new world coordinates, and until the
/// interpreter receives fresh data for them they must read as empty
/// rather than show stale content from whatever used to occupy that
/// slot.
pub fn scroll(map: &mut Map, direction: ScrollDirection) {
    let (dx, dy) = direction.delta();

    let old_x = map.position.x as i32;
    let old_y = map.position.y as i32;
    map.position = Position::new(
        (old_x + dx).max(0) as u16,
        (old_y + dy).max(0) as u16,
        map.position.z,
    );

    if dx != 0 {
        let revealed_x = if dx > 0 {
            old_x + TILE_BUFFER_WIDTH as i32
        } else {
            old_x - 1
        };
        for z in 0..TILE_BUFFER_DEPTH as i32 {
            for y in 0..TILE_BUFFER_HEIGHT as i32 {
                map.tile_mut(revealed_x, old_y + y, z).clear();
            }
        }
    }

    if dy != 0 {
        let revealed_y = if dy > 0 {
            old_y + TILE_BUFFER_HEIGHT as i32
        } else {
            old_y - 1
        };
        for z in 0..TILE_BUFFER_DEPTH as i32 {
            for x in 0..TILE_BUFFER_WIDTH as i32 {
                map.tile_mut(old_x + x, revealed_y, z).clear();
            }
        }
    }
}
