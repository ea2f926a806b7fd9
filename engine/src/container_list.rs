use core::types::Container;
use log::debug;

/// Maps server-assigned container ids to their resident state.
///
/// Backed by a `Vec` rather than a `HashMap` so iteration is
/// insertion-ordered and stable for a UI listing open containers.
/// Lookup is linear, which is fine at the handful-of-open-containers
/// scale a session actually reaches. Access-order reordering (bringing a
/// recently-used container to the front) is a known desired feature that
/// is explicitly deferred, matching upstream.
#[derive(Debug, Default)]
pub struct ContainerList {
    containers: Vec<Container>,
}

impl ContainerList {
    pub fn new() -> Self {
        ContainerList::default()
    }

    /// Returns the existing container for `id`, or creates one using
    /// `make` if absent, appended to the end of the insertion order.
    pub fn open(&mut self, id: u32, make: impl FnOnce() -> Container) -> &mut Container {
        if let Some(index) = self.containers.iter().position(|c| c.id == id) {
            return &mut self.containers[index];
        }
        debug!("container {id} opened");
        self.containers.push(make());
        self.containers.last_mut().expect("just pushed")
    }

    /// Removing an id that was never opened, or removing it twice, is a
    /// no-op both times.
    pub fn close(&mut self, id: u32) {
        if self.containers.iter().any(|c| c.id == id) {
            debug!("container {id} closed");
        }
        self.containers.retain(|c| c.id != id);
    }

    pub fn get(&self, id: u32) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Iterates open containers in the order they were first opened.
    pub fn iter(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }
}
