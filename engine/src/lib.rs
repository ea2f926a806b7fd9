//! Session-level playback machinery: the mutable world model, the
//! protocol interpreter that drives it frame by frame, and the
//! recording-container parsers that supply those frames.

pub mod container_list;
pub mod creature_table;
pub mod error;
pub mod interpreter;
pub mod map_ops;
pub mod message_list;
pub mod missile_ring;
pub mod recording;
pub mod session;
pub mod world;
