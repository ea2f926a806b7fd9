use core::constants::{TILE_BUFFER_DEPTH, TILE_BUFFER_HEIGHT, TILE_BUFFER_SIZE, TILE_BUFFER_WIDTH};
use core::data_reader::DataReader;
use core::error::{ReplayError, Result};
use core::position::Position;
use core::types::{Object, CREATURE_MARKER};
use log::{debug, error};

use crate::world::GameState;

/// Marker byte beginning an empty-tile run: the following byte is the run
/// length.
const EMPTY_RUN_MARKER: u8 = 0xFE;
/// Terminates a tile's object-descriptor sequence. As the very first byte
/// of a tile's stream it means "zero objects".
const TILE_TERMINATOR: u8 = 0xFF;

/// Applies a full-map redraw: player position, then one object-descriptor
/// stream per tile across the whole `WIDTH x HEIGHT x DEPTH` window in
/// `(z outer, y, x)` row-major order, matching the toroidal index
/// formula the window itself uses.
pub fn apply_full_map_redraw(state: &mut GameState, reader: &mut DataReader) -> Result<()> {
    let x = reader.read_u16()?;
    let y = reader.read_u16()?;
    let z = reader.read_u8()?;
    state.map.position = Position::new(x, y, z);
    state.map.clear();

    let mut remaining = TILE_BUFFER_SIZE;

    'tiles: for tz in 0..TILE_BUFFER_DEPTH as i32 {
        for ty in 0..TILE_BUFFER_HEIGHT as i32 {
            for tx in 0..TILE_BUFFER_WIDTH as i32 {
                if remaining == 0 {
                    break 'tiles;
                }

                let marker = reader.peek_u8()?;
                if marker == EMPTY_RUN_MARKER {
                    reader.read_u8()?;
                    let run = reader.read_u8()? as usize;
                    if run == 0 || run > remaining {
                        error!(
                            "full map redraw: empty run of {run} exceeds remaining budget {remaining}"
                        );
                        return Err(ReplayError::protocol(format!(
                            "full map redraw: empty run of {run} exceeds remaining budget {remaining}"
                        )));
                    }
                    remaining -= run;
                    // The run covers this tile plus `run - 1` more; skip
                    // them by continuing the outer loop with an adjusted
                    // counter rather than a second nested loop.
                    let mut skipped = 1;
                    let mut cursor = (tx, ty, tz);
                    while skipped < run {
                        cursor = next_coord(cursor);
                        skipped += 1;
                    }
                    let _ = cursor;
                    continue;
                }

                apply_one_tile(state, tx, ty, tz, reader)?;
                remaining -= 1;
            }
        }
    }

    if remaining != 0 {
        error!("full map redraw: stream ended with {remaining} tiles undelivered");
        return Err(ReplayError::protocol(format!(
            "full map redraw: stream ended with {remaining} tiles undelivered"
        )));
    }

    state.synchronised = true;
    debug!("full map redraw complete, viewport centered on ({x}, {y}, {z})");
    Ok(())
}

fn next_coord((x, y, z): (i32, i32, i32)) -> (i32, i32, i32) {
    let mut x = x + 1;
    let mut y = y;
    let mut z = z;
    if x >= TILE_BUFFER_WIDTH as i32 {
        x = 0;
        y += 1;
    }
    if y >= TILE_BUFFER_HEIGHT as i32 {
        y = 0;
        z += 1;
    }
    (x, y, z)
}

fn apply_one_tile(
    state: &mut GameState,
    x: i32,
    y: i32,
    z: i32,
    reader: &mut DataReader,
) -> Result<()> {
    loop {
        let marker = reader.read_u8()?;
        if marker == TILE_TERMINATOR {
            return Ok(());
        }

        let id = u16::from_le_bytes([marker, reader.read_u8()?]);
        let object = if id == CREATURE_MARKER {
            let creature_id = reader.read_u32()?;
            Object::creature(creature_id)
        } else {
            let extra_byte = reader.read_u8()?;
            Object::item(id, extra_byte)
        };

        state.map.tile_mut(x, y, z).insert_object(object, 0xFF);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_all_ground(ground_id: u16) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.push(7);

        for _ in 0..TILE_BUFFER_SIZE {
            bytes.extend_from_slice(&ground_id.to_le_bytes());
            bytes.push(0); // extra_byte
            bytes.push(TILE_TERMINATOR);
        }

        bytes
    }

    #[test]
    fn single_redraw_fills_every_tile_with_one_object() {
        let bytes = encode_all_ground(100);
        let mut reader = DataReader::new(&bytes);
        let mut state = GameState::new();

        apply_full_map_redraw(&mut state, &mut reader).unwrap();

        assert!(state.synchronised);
        for z in 0..TILE_BUFFER_DEPTH as i32 {
            for y in 0..TILE_BUFFER_HEIGHT as i32 {
                for x in 0..TILE_BUFFER_WIDTH as i32 {
                    assert_eq!(state.map.tile(x, y, z).object_count, 1);
                }
            }
        }
    }

    #[test]
    fn empty_run_covering_everything_leaves_all_tiles_clear() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.push(7);
        // One run can cover at most 255 tiles; chain runs to cover all.
        let mut remaining = TILE_BUFFER_SIZE;
        while remaining > 0 {
            let run = remaining.min(255);
            bytes.push(EMPTY_RUN_MARKER);
            bytes.push(run as u8);
            remaining -= run;
        }

        let mut reader = DataReader::new(&bytes);
        let mut state = GameState::new();
        apply_full_map_redraw(&mut state, &mut reader).unwrap();

        assert_eq!(state.map.tile(0, 0, 0).object_count, 0);
    }

    #[test]
    fn budget_underrun_is_a_protocol_violation() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.push(7);
        bytes.push(EMPTY_RUN_MARKER);
        bytes.push(255);
        // Truncated: no more data, but budget is nowhere near satisfied.
        let mut reader = DataReader::new(&bytes);
        let mut state = GameState::new();
        assert!(apply_full_map_redraw(&mut state, &mut reader).is_err());
    }
}
