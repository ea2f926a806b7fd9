use crate::constants::{
    RENDER_HEIGHTMAP_SIZE, RENDER_HEIGHTMAP_WIDTH, RENDER_TILE_PIXELS, TILE_BUFFER_DEPTH,
    TILE_BUFFER_HEIGHT, TILE_BUFFER_SIZE, TILE_BUFFER_WIDTH,
};
use crate::position::Position;
use crate::types::tile::Tile;

/// The player-centered viewport window: a torus of
/// `TILE_BUFFER_WIDTH x TILE_BUFFER_HEIGHT x TILE_BUFFER_DEPTH` tiles
/// addressed modulo its own dimensions, plus an occlusion cache.
pub struct Map {
    pub light_intensity: u8,
    pub light_color: u8,
    /// World coordinate of the window's top-left corner.
    pub position: Position,
    tiles: Vec<Tile>,
    render_height_map: Vec<u8>,
}

impl Default for Map {
    fn default() -> Self {
        Map::new()
    }
}

impl Map {
    pub fn new() -> Self {
        Map {
            light_intensity: 0,
            light_color: 0,
            position: Position::default(),
            tiles: (0..TILE_BUFFER_SIZE).map(|_| Tile::default()).collect(),
            render_height_map: vec![0u8; RENDER_HEIGHTMAP_SIZE],
        }
    }

    /// Toroidal index per the original index formula:
    /// `x + (y + z * HEIGHT) * WIDTH`, each coordinate first reduced
    /// modulo its dimension.
    fn tile_index(x: i32, y: i32, z: i32) -> usize {
        let x = x.rem_euclid(TILE_BUFFER_WIDTH as i32) as usize;
        let y = y.rem_euclid(TILE_BUFFER_HEIGHT as i32) as usize;
        let z = z.rem_euclid(TILE_BUFFER_DEPTH as i32) as usize;
        x + (y + z * TILE_BUFFER_HEIGHT) * TILE_BUFFER_WIDTH
    }

    pub fn tile(&self, x: i32, y: i32, z: i32) -> &Tile {
        &self.tiles[Self::tile_index(x, y, z)]
    }

    pub fn tile_mut(&mut self, x: i32, y: i32, z: i32) -> &mut Tile {
        let idx = Self::tile_index(x, y, z);
        &mut self.tiles[idx]
    }

    pub fn clear(&mut self) {
        for tile in &mut self.tiles {
            tile.clear();
        }
        self.render_height_map.iter_mut().for_each(|h| *h = 0);
    }

    /// Render-space pixel coordinates to an apron-inclusive heightmap
    /// cell: `(render_x / 32 + 1, render_y / 32 + 1)`, linearised as
    /// `col + row * (TILE_BUFFER_WIDTH + 2)`. Out-of-bounds coordinates
    /// are reported as maximum occlusion height rather than panicking.
    fn heightmap_index(render_x: i32, render_y: i32) -> Option<usize> {
        if render_x < 0 || render_y < 0 {
            return None;
        }
        let col = (render_x as usize / RENDER_TILE_PIXELS) + 1;
        let row = (render_y as usize / RENDER_TILE_PIXELS) + 1;
        let idx = col + row * RENDER_HEIGHTMAP_WIDTH;
        (idx < RENDER_HEIGHTMAP_SIZE).then_some(idx)
    }

    pub fn get_render_height(&self, render_x: i32, render_y: i32) -> u8 {
        match Self::heightmap_index(render_x, render_y) {
            Some(idx) => self.render_height_map[idx],
            None => u8::MAX,
        }
    }

    pub fn update_render_height(&mut self, render_x: i32, render_y: i32, height: u8) {
        if let Some(idx) = Self::heightmap_index(render_x, render_y) {
            let slot = &mut self.render_height_map[idx];
            *slot = (*slot).max(height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_coordinates_wrap_via_toroidal_index() {
        let map = Map::new();
        let a = Map::tile_index(-1, 0, 0);
        let b = Map::tile_index(TILE_BUFFER_WIDTH as i32 - 1, 0, 0);
        assert_eq!(a, b);
        let _ = map.tile(0, 0, 0);
    }

    #[test]
    fn render_height_apron_indexes_within_bounds() {
        let mut map = Map::new();
        map.update_render_height(0, 0, 5);
        assert_eq!(map.get_render_height(0, 0), 5);
        // One tile to the right stays a distinct cell.
        map.update_render_height(RENDER_TILE_PIXELS as i32, 0, 9);
        assert_eq!(map.get_render_height(0, 0), 5);
        assert_eq!(map.get_render_height(RENDER_TILE_PIXELS as i32, 0), 9);
    }

    #[test]
    fn negative_render_coordinates_return_max_height() {
        let map = Map::new();
        assert_eq!(map.get_render_height(-1, -1), u8::MAX);
    }

    #[test]
    fn clear_resets_all_tiles_and_heights() {
        let mut map = Map::new();
        map.update_render_height(0, 0, 5);
        map.clear();
        assert_eq!(map.get_render_height(0, 0), 0);
    }
}
