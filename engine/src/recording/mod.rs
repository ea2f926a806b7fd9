//! Recording containers: four on-disk formats, each a sequence of
//! `(timestamp_ms, payload)` frames fed to the protocol interpreter one
//! at a time.

mod hex_text;
mod packet_dump;
mod tibia_movie;
mod trp;

use core::error::Result;
use core::version::VersionTriple;

use crate::interpreter;
use crate::world::GameState;

/// A terminal sentinel `next_timestamp` returns once a recording is
/// exhausted, distinguishing "no more frames" from a real timestamp.
pub const EXHAUSTED: u32 = u32::MAX;

pub enum Recording {
    Trp(trp::TrpRecording),
    PacketDump(packet_dump::PacketDumpRecording),
    TibiaMovie(tibia_movie::TibiaMovieRecording),
    HexText(hex_text::HexTextRecording),
}

impl Recording {
    /// The timestamp of the next undelivered frame, or [`EXHAUSTED`] once
    /// the stream has no more frames.
    pub fn next_timestamp(&self) -> u32 {
        match self {
            Recording::Trp(r) => r.next_timestamp(),
            Recording::PacketDump(r) => r.next_timestamp(),
            Recording::TibiaMovie(r) => r.next_timestamp(),
            Recording::HexText(r) => r.next_timestamp(),
        }
        .unwrap_or(EXHAUSTED)
    }

    /// The version triple this recording declares, if its format header
    /// carries one.
    pub fn declared_version(&self) -> Option<VersionTriple> {
        match self {
            Recording::Trp(r) => Some(r.version),
            Recording::TibiaMovie(r) => Some(r.version),
            Recording::PacketDump(_) | Recording::HexText(_) => None,
        }
    }

    /// Applies the next frame to `state`, setting `state.current_tick` to
    /// the frame's timestamp first. On failure the stream remains
    /// positioned on the failed frame — retrying is not meaningful, a
    /// caller encountering an error should abort playback.
    pub fn process_next(
        &mut self,
        state: &mut GameState,
        features: &core::version::FeatureMatrix,
    ) -> Result<()> {
        let (timestamp, payload) = match self {
            Recording::Trp(r) => r.peek_next()?,
            Recording::PacketDump(r) => r.peek_next()?,
            Recording::TibiaMovie(r) => r.peek_next()?,
            Recording::HexText(r) => r.peek_next()?,
        };

        state.current_tick = timestamp;
        let mut reader = core::data_reader::DataReader::new(payload);
        interpreter::apply_frame(state, features, &mut reader)?;

        match self {
            Recording::Trp(r) => r.advance(),
            Recording::PacketDump(r) => r.advance(),
            Recording::TibiaMovie(r) => r.advance(),
            Recording::HexText(r) => r.advance(),
        }

        Ok(())
    }
}

/// Parses `bytes` as a `.trp` recording.
pub fn open_trp(bytes: &[u8]) -> Result<Recording> {
    trp::parse(bytes).map(Recording::Trp)
}

/// Parses `bytes` as a raw packet-dump recording.
pub fn open_packet_dump(bytes: &[u8]) -> Result<Recording> {
    packet_dump::parse(bytes).map(Recording::PacketDump)
}

/// Parses `bytes` as a `tibia.com` movie recording.
pub fn open_tibia_movie(bytes: &[u8]) -> Result<Recording> {
    tibia_movie::parse(bytes).map(Recording::TibiaMovie)
}

/// Parses `text` as a newline-delimited hex-text recording.
pub fn open_hex_text(text: &str) -> Result<Recording> {
    hex_text::parse(text).map(Recording::HexText)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::version::{FeatureMatrix, VersionTriple};

    fn trp_bytes(frames: &[(u32, &[u8])]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&core::constants::TRP_MAGIC);
        bytes.extend_from_slice(&(frames.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&7u16.to_le_bytes());
        bytes.extend_from_slice(&60u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        for (ts, payload) in frames {
            bytes.extend_from_slice(&ts.to_le_bytes());
            bytes.extend_from_slice(&(payload.len() as u16).to_le_bytes());
            bytes.extend_from_slice(payload);
        }
        bytes
    }

    #[test]
    fn exhausted_recording_reports_the_terminal_sentinel() {
        let bytes = trp_bytes(&[]);
        let recording = open_trp(&bytes).unwrap();
        assert_eq!(recording.next_timestamp(), EXHAUSTED);
    }

    #[test]
    fn process_next_sets_current_tick_before_interpreting() {
        let mut container_close = vec![0x08u8];
        container_close.extend_from_slice(&1u32.to_le_bytes());
        let bytes = trp_bytes(&[(0, &container_close)]);
        let mut recording = open_trp(&bytes).unwrap();
        let mut state = GameState::new();
        let features = FeatureMatrix::for_version(VersionTriple::new(7, 60, 0));

        recording.process_next(&mut state, &features).unwrap();
        assert_eq!(state.current_tick, 0);
    }

    #[test]
    fn failed_frame_leaves_stream_positioned_on_it() {
        let bytes = trp_bytes(&[(0, &[0xEE])]);
        let mut recording = open_trp(&bytes).unwrap();
        let mut state = GameState::new();
        let features = FeatureMatrix::for_version(VersionTriple::new(7, 60, 0));

        assert!(recording.process_next(&mut state, &features).is_err());
        assert_eq!(recording.next_timestamp(), 0);
    }
}
