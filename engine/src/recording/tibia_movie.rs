use core::data_reader::DataReader;
use core::error::{ReplayError, Result};
use core::version::VersionTriple;
use log::error;

/// The `tibia.com` movie container: a version triple header, then frames
/// of `(u16 length, u16 delta_timestamp, payload)`.
pub struct TibiaMovieRecording {
    pub version: VersionTriple,
    frames: Vec<(u32, Vec<u8>)>,
    cursor: usize,
}

impl TibiaMovieRecording {
    pub fn next_timestamp(&self) -> Option<u32> {
        self.frames.get(self.cursor).map(|(ts, _)| *ts)
    }

    pub fn peek_next(&self) -> Result<(u32, &[u8])> {
        self.frames
            .get(self.cursor)
            .map(|(ts, payload)| (*ts, payload.as_slice()))
            .ok_or_else(|| ReplayError::protocol("no more frames in tibia.com movie"))
    }

    pub fn advance(&mut self) {
        self.cursor += 1;
    }
}

pub fn parse(bytes: &[u8]) -> Result<TibiaMovieRecording> {
    let mut reader = DataReader::new(bytes);
    let version = VersionTriple::new(reader.read_u16()?, reader.read_u16()?, reader.read_u16()?);

    let mut frames = Vec::new();
    let mut timestamp = 0u32;

    while !reader.is_empty() {
        let length = reader.read_u16()? as usize;
        if length == 0 {
            error!("tibia.com movie frame declares a zero-length payload");
            return Err(ReplayError::protocol("zero-length frame is not permitted"));
        }
        let delta = reader.read_u16()? as u32;
        timestamp += delta;
        let payload = reader.read_bytes(length)?.to_vec();
        frames.push((timestamp, payload));
    }

    Ok(TibiaMovieRecording { version, frames, cursor: 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(version: (u16, u16, u16), frames: &[(u16, &[u8])]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&version.0.to_le_bytes());
        bytes.extend_from_slice(&version.1.to_le_bytes());
        bytes.extend_from_slice(&version.2.to_le_bytes());
        for (delta, payload) in frames {
            bytes.extend_from_slice(&(payload.len() as u16).to_le_bytes());
            bytes.extend_from_slice(&delta.to_le_bytes());
            bytes.extend_from_slice(payload);
        }
        bytes
    }

    #[test]
    fn reads_version_header_and_frames() {
        let bytes = encode((7, 60, 0), &[(0, &[9, 9]), (40, &[1])]);
        let mut recording = parse(&bytes).unwrap();
        assert_eq!(recording.version, VersionTriple::new(7, 60, 0));
        assert_eq!(recording.peek_next().unwrap().0, 0);
        recording.advance();
        assert_eq!(recording.peek_next().unwrap().0, 40);
    }
}
