use core::circular_buffer::CircularBuffer;
use core::constants::MAX_MISSILES_IN_GAMESTATE;
use core::types::Missile;

/// Fixed 64-slot ring of missiles currently in flight.
pub struct MissileRing {
    buffer: CircularBuffer<Missile>,
}

impl Default for MissileRing {
    fn default() -> Self {
        MissileRing::new()
    }
}

impl MissileRing {
    pub fn new() -> Self {
        MissileRing {
            buffer: CircularBuffer::new(MAX_MISSILES_IN_GAMESTATE),
        }
    }

    pub fn add(&mut self, missile: Missile) {
        self.buffer.push(missile);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Missile> {
        (0..MAX_MISSILES_IN_GAMESTATE).filter_map(move |i| self.buffer.get(i))
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::position::Position;

    fn missile(id: u8) -> Missile {
        Missile { id, start_tick: 0, origin: Position::default(), target: Position::default() }
    }

    #[test]
    fn sixty_fifth_missile_overwrites_the_oldest() {
        let mut ring = MissileRing::new();
        for i in 0..65u16 {
            ring.add(missile((i % 256) as u8));
        }
        assert_eq!(ring.len(), MAX_MISSILES_IN_GAMESTATE);
        // The first-ever missile (id 0) must be gone; only ids 1..=64 remain.
        assert!(ring.iter().all(|m| m.id != 0));
    }
}
