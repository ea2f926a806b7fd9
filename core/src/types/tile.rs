use crate::constants::{MAX_EFFECTS_PER_TILE, MAX_OBJECTS_PER_TILE, TILE_STACKPOSITION_TOP};
use crate::types::effect::{DamageEffect, GraphicalEffect};
use crate::types::object::Object;

/// One cell of the viewport window.
///
/// Stack order within `objects[..object_count]`: ground (if any) at index
/// 0, then always-on-top items in insertion order, then other items in
/// reverse insertion order, then creatures on top.
#[derive(Debug, Clone, Default)]
pub struct Tile {
    pub object_count: u8,
    pub objects: [Option<Object>; MAX_OBJECTS_PER_TILE],
    pub graphical_effects: [Option<GraphicalEffect>; MAX_EFFECTS_PER_TILE],
    pub graphical_index: u8,
    pub damage_effects: [Option<DamageEffect>; MAX_EFFECTS_PER_TILE],
    pub damage_index: u8,
}

impl Tile {
    pub fn clear(&mut self) {
        *self = Tile::default();
    }

    /// Resolves a stack position, where `0xFF` means "top of stack".
    fn resolve_index(&self, stack_position: u8) -> Option<usize> {
        if stack_position == TILE_STACKPOSITION_TOP {
            if self.object_count == 0 {
                None
            } else {
                Some(self.object_count as usize - 1)
            }
        } else if (stack_position as usize) < self.object_count as usize {
            Some(stack_position as usize)
        } else {
            None
        }
    }

    pub fn get_object(&self, stack_position: u8) -> Option<Object> {
        self.resolve_index(stack_position)
            .and_then(|idx| self.objects[idx])
    }

    /// Inserts an object at `stack_position`, shifting everything above
    /// it up. Evicts the bottom-most non-ground object on overflow, per
    /// the fixed `MAX_OBJECTS_PER_TILE` capacity.
    pub fn insert_object(&mut self, object: Object, stack_position: u8) {
        let insert_at = if stack_position == TILE_STACKPOSITION_TOP {
            self.object_count as usize
        } else {
            (stack_position as usize).min(self.object_count as usize)
        };

        let count = self.object_count as usize;
        if count >= MAX_OBJECTS_PER_TILE {
            let evict_at = if count > 1 { 1 } else { 0 };
            for i in evict_at..count - 1 {
                self.objects[i] = self.objects[i + 1];
            }
            self.objects[count - 1] = None;
            self.object_count -= 1;
        }

        let count = self.object_count as usize;
        let insert_at = insert_at.min(count);
        for i in (insert_at..count).rev() {
            self.objects[i + 1] = self.objects[i];
        }
        self.objects[insert_at] = Some(object);
        self.object_count += 1;
    }

    pub fn set_object(&mut self, object: Object, stack_position: u8) {
        if let Some(idx) = self.resolve_index(stack_position) {
            self.objects[idx] = Some(object);
        }
    }

    pub fn remove_object(&mut self, stack_position: u8) {
        let Some(idx) = self.resolve_index(stack_position) else {
            return;
        };
        let count = self.object_count as usize;
        for i in idx..count - 1 {
            self.objects[i] = self.objects[i + 1];
        }
        self.objects[count - 1] = None;
        self.object_count -= 1;
    }

    pub fn add_graphical_effect(&mut self, id: u8, current_tick: u32) {
        let idx = self.graphical_index as usize % MAX_EFFECTS_PER_TILE;
        self.graphical_effects[idx] = Some(GraphicalEffect { id, start_tick: current_tick });
        self.graphical_index = self.graphical_index.wrapping_add(1);
    }

    pub fn add_damage_effect(&mut self, effect: DamageEffect) {
        let idx = self.damage_index as usize % MAX_EFFECTS_PER_TILE;
        self.damage_effects[idx] = Some(effect);
        self.damage_index = self.damage_index.wrapping_add(1);
    }
}
