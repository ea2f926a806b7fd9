use core::error::Result;
use core::version::VersionCatalogue;

use crate::recording::{Recording, EXHAUSTED};
use crate::world::GameState;

/// Drives a single recording against a fixed [`VersionCatalogue`],
/// exposing a "catch up to wall-clock tick" operation the host calls
/// once per render frame.
pub struct Session {
    pub catalogue: VersionCatalogue,
    pub state: GameState,
    recording: Recording,
}

impl Session {
    pub fn new(catalogue: VersionCatalogue, recording: Recording) -> Self {
        Session { catalogue, state: GameState::new(), recording }
    }

    /// True once every frame in the recording has been applied.
    pub fn is_finished(&self) -> bool {
        self.recording.next_timestamp() == EXHAUSTED
    }

    /// Applies every frame whose timestamp is `<= tick`, in order, and
    /// stops at the first one that is still in the future — or the
    /// first one that fails, in which case the error propagates and the
    /// session's state reflects everything applied before it.
    pub fn advance_to(&mut self, tick: u32) -> Result<()> {
        while !self.is_finished() && self.recording.next_timestamp() <= tick {
            self.recording.process_next(&mut self.state, &self.catalogue.features)?;
        }
        Ok(())
    }
}
