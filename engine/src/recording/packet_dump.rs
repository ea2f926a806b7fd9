use core::data_reader::DataReader;
use core::error::{ReplayError, Result};
use log::error;

/// A raw packet-dump container: no header, just frames of
/// `(u16 length, u32 delta_timestamp, payload)` until the buffer is
/// exhausted.
pub struct PacketDumpRecording {
    frames: Vec<(u32, Vec<u8>)>,
    cursor: usize,
}

impl PacketDumpRecording {
    pub fn next_timestamp(&self) -> Option<u32> {
        self.frames.get(self.cursor).map(|(ts, _)| *ts)
    }

    pub fn peek_next(&self) -> Result<(u32, &[u8])> {
        self.frames
            .get(self.cursor)
            .map(|(ts, payload)| (*ts, payload.as_slice()))
            .ok_or_else(|| ReplayError::protocol("no more frames in packet dump"))
    }

    pub fn advance(&mut self) {
        self.cursor += 1;
    }
}

pub fn parse(bytes: &[u8]) -> Result<PacketDumpRecording> {
    let mut reader = DataReader::new(bytes);
    let mut frames = Vec::new();
    let mut timestamp = 0u32;

    while !reader.is_empty() {
        let length = reader.read_u16()? as usize;
        if length == 0 || length > core::constants::MAX_FRAME_PAYLOAD_LEN {
            error!("invalid packet-dump frame length {length}");
            return Err(ReplayError::protocol(format!("invalid frame length {length}")));
        }
        let delta = reader.read_u32()?;
        timestamp = timestamp.checked_add(delta).ok_or_else(|| {
            error!("cumulative packet-dump timestamp overflowed u32 at delta {delta}");
            ReplayError::protocol("cumulative timestamp overflowed u32")
        })?;
        let payload = reader.read_bytes(length)?.to_vec();
        frames.push((timestamp, payload));
    }

    Ok(PacketDumpRecording { frames, cursor: 0 })
}
