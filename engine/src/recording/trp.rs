use core::data_reader::DataReader;
use core::error::{ReplayError, Result};
use core::version::VersionTriple;
use log::{error, trace};

/// The native container: `TRP\0`, a frame count, a version triple, then
/// `frame_count` frames of `(u32 timestamp_ms, u16 length, payload)`.
pub struct TrpRecording {
    pub version: VersionTriple,
    frames: Vec<(u32, Vec<u8>)>,
    cursor: usize,
}

const MAGIC: [u8; 4] = core::constants::TRP_MAGIC;

impl TrpRecording {
    pub fn next_timestamp(&self) -> Option<u32> {
        self.frames.get(self.cursor).map(|(ts, _)| *ts)
    }

    /// Returns the next undelivered frame without consuming it — call
    /// [`TrpRecording::advance`] only once it has been applied
    /// successfully, so a failed frame stays current.
    pub fn peek_next(&self) -> Result<(u32, &[u8])> {
        self.frames
            .get(self.cursor)
            .map(|(ts, payload)| (*ts, payload.as_slice()))
            .ok_or_else(|| ReplayError::protocol("no more frames in .trp recording"))
    }

    pub fn advance(&mut self) {
        self.cursor += 1;
    }
}

pub fn parse(bytes: &[u8]) -> Result<TrpRecording> {
    let mut reader = DataReader::new(bytes);

    let magic = reader.read_bytes(4)?;
    if magic != MAGIC {
        error!("not a .trp recording: bad magic {magic:02x?}");
        return Err(ReplayError::protocol("not a .trp recording: bad magic"));
    }

    let frame_count = reader.read_u32()? as usize;
    let version = VersionTriple::new(reader.read_u16()?, reader.read_u16()?, reader.read_u16()?);
    trace!("parsing .trp recording: {frame_count} frames at version {version:?}");

    let mut frames = Vec::with_capacity(frame_count);
    let mut last_timestamp: Option<u32> = None;

    for index in 0..frame_count {
        let timestamp = reader.read_u32()?;
        if let Some(prev) = last_timestamp {
            if timestamp < prev {
                error!(
                    "frame {index} timestamp {timestamp} precedes previous frame's {prev}"
                );
                return Err(ReplayError::protocol(
                    "frame timestamps are not monotone non-decreasing",
                ));
            }
        } else if timestamp != 0 {
            error!("first frame has timestamp {timestamp}, expected 0");
            return Err(ReplayError::protocol("first frame must have timestamp 0"));
        }
        last_timestamp = Some(timestamp);

        let length = reader.read_u16()? as usize;
        if length == 0 {
            error!("frame {index} declares a zero-length payload");
            return Err(ReplayError::protocol("zero-length frame is not permitted"));
        }
        let payload = reader.read_bytes(length)?.to_vec();
        frames.push((timestamp, payload));
    }

    Ok(TrpRecording { version, frames, cursor: 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(frames: &[(u32, &[u8])]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC);
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
    fn round_trips_two_frames() {
        let bytes = encode(&[(0, &[1, 2, 3]), (100, &[4, 5])]);
        let mut recording = parse(&bytes).unwrap();
        assert_eq!(recording.next_timestamp(), Some(0));
        let (ts, payload) = recording.peek_next().unwrap();
        assert_eq!((ts, payload), (0, &[1u8, 2, 3][..]));
        recording.advance();
        let (ts, payload) = recording.peek_next().unwrap();
        assert_eq!((ts, payload), (100, &[4u8, 5][..]));
        recording.advance();
        assert_eq!(recording.next_timestamp(), None);
    }

    #[test]
    fn rejects_bad_magic() {
        let bytes = [0u8; 16];
        assert!(parse(&bytes).is_err());
    }

    #[test]
    fn truncated_frame_is_fatal_and_non_advancing() {
        let mut bytes = encode(&[(0, &[1, 2, 3])]);
        bytes.truncate(bytes.len() - 1);
        assert!(parse(&bytes).is_err());
    }

    #[test]
    fn rejects_non_monotone_timestamps() {
        let bytes = encode(&[(10, &[1]), (0, &[2])]);
        assert!(parse(&bytes).is_err());
    }
}
