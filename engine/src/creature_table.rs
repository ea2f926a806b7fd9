use std::collections::HashMap;

use core::types::Creature;

#[derive(Debug, Default)]
pub struct CreatureTable {
    creatures: HashMap<u32, Creature>,
}

impl CreatureTable {
    pub fn new() -> Self {
        CreatureTable::default()
    }

    pub fn get(&self, id: u32) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Creature> {
        self.creatures.get_mut(&id)
    }

    pub fn remove(&mut self, id: u32) {
        self.creatures.remove(&id);
    }

    pub fn insert(&mut self, creature: Creature) {
        self.creatures.insert(creature.id, creature);
    }

    /// The "known"/"unknown" creature handshake: reuses the entry keyed
    /// by `old_id` under `new_id` if `old_id` is known, preserving its
    /// fields; otherwise inserts `make()` fresh under `new_id`. If
    /// `old_id != new_id` the entry is always re-keyed.
    pub fn replace_creature(
        &mut self,
        new_id: u32,
        old_id: u32,
        make: impl FnOnce() -> Creature,
    ) -> &mut Creature {
        if let Some(mut creature) = self.creatures.remove(&old_id) {
            creature.id = new_id;
            self.creatures.insert(new_id, creature);
        } else {
            self.creatures.entry(new_id).or_insert_with(make);
        }
        self.creatures.get_mut(&new_id).expect("just inserted")
    }
}
