use crate::constants::{MAX_CONTAINER_NAME_LEN, MAX_CONTAINER_SLOTS};
use crate::types::object::Object;

#[derive(Debug, Clone)]
pub struct Container {
    pub id: u32,
    pub item_id: u16,
    pub name: String,
    pub mark: u8,
    pub animation: u8,
    pub slots_per_page: u8,
    pub has_parent: bool,
    pub drag_and_drop: bool,
    pub pagination: bool,
    pub start_index: u16,
    pub total_objects: u16,
    pub objects: Vec<Object>,
}

impl Container {
    pub fn new(id: u32, item_id: u16, name: impl Into<String>) -> Self {
        let mut name = name.into();
        name.truncate(MAX_CONTAINER_NAME_LEN);
        Container {
            id,
            item_id,
            name,
            mark: 0,
            animation: 0,
            slots_per_page: MAX_CONTAINER_SLOTS as u8,
            has_parent: false,
            drag_and_drop: false,
            pagination: false,
            start_index: 0,
            total_objects: 0,
            objects: Vec::new(),
        }
    }

    pub fn set_slot(&mut self, slot: usize, object: Object) {
        if slot >= MAX_CONTAINER_SLOTS {
            return;
        }
        if slot >= self.objects.len() {
            self.objects.resize(slot + 1, object);
        }
        self.objects[slot] = object;
    }

    pub fn remove_slot(&mut self, slot: usize) {
        if slot < self.objects.len() {
            self.objects.remove(slot);
        }
    }
}
