use core::error::{ReplayError, Result};
use log::error;

/// A human-authored debugging container: one frame per line, each line
/// an 8-hex-digit big-endian timestamp followed by the payload's hex
/// bytes, with no separator between the two.
pub struct HexTextRecording {
    frames: Vec<(u32, Vec<u8>)>,
    cursor: usize,
}

impl HexTextRecording {
    pub fn next_timestamp(&self) -> Option<u32> {
        self.frames.get(self.cursor).map(|(ts, _)| *ts)
    }

    pub fn peek_next(&self) -> Result<(u32, &[u8])> {
        self.frames
            .get(self.cursor)
            .map(|(ts, payload)| (*ts, payload.as_slice()))
            .ok_or_else(|| ReplayError::protocol("no more frames in hex-text recording"))
    }

    pub fn advance(&mut self) {
        self.cursor += 1;
    }
}

fn decode_hex(text: &str) -> Result<Vec<u8>> {
    if text.len() % 2 != 0 {
        error!("hex frame has an odd number of digits: {} chars", text.len());
        return Err(ReplayError::protocol("hex frame has an odd number of digits"));
    }
    (0..text.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&text[i..i + 2], 16).map_err(|_| {
                error!("invalid hex digit pair at offset {i}");
                ReplayError::protocol(format!("invalid hex digit pair at offset {i}"))
            })
        })
        .collect()
}

pub fn parse(text: &str) -> Result<HexTextRecording> {
    let mut frames = Vec::new();
    let mut last_timestamp: Option<u32> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.len() < 8 {
            error!("hex-text line shorter than the timestamp field: {line:?}");
            return Err(ReplayError::protocol("hex-text line shorter than the timestamp field"));
        }

        let timestamp = u32::from_str_radix(&line[..8], 16).map_err(|_| {
            error!("invalid hex timestamp in line {line:?}");
            ReplayError::protocol("invalid hex timestamp")
        })?;
        if let Some(prev) = last_timestamp {
            if timestamp < prev {
                error!("frame timestamp {timestamp} precedes previous frame's {prev}");
                return Err(ReplayError::protocol(
                    "frame timestamps are not monotone non-decreasing",
                ));
            }
        } else if timestamp != 0 {
            error!("first frame has timestamp {timestamp}, expected 0");
            return Err(ReplayError::protocol("first frame must have timestamp 0"));
        }
        last_timestamp = Some(timestamp);

        let payload = decode_hex(&line[8..])?;
        frames.push((timestamp, payload));
    }

    Ok(HexTextRecording { frames, cursor: 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_two_lines() {
        let text = "00000000010203\n00000064ff\n";
        let mut recording = parse(text).unwrap();
        let (ts, payload) = recording.peek_next().unwrap();
        assert_eq!((ts, payload), (0, &[1u8, 2, 3][..]));
        recording.advance();
        let (ts, payload) = recording.peek_next().unwrap();
        assert_eq!((ts, payload), (100, &[0xff][..]));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let text = "\n00000000ab\n\n";
        let recording = parse(text).unwrap();
        assert_eq!(recording.frames.len(), 1);
    }

    #[test]
    fn odd_digit_count_is_an_error() {
        assert!(parse("00000000abc").is_err());
    }
}
