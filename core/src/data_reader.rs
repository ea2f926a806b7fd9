use crate::error::{ReplayError, Result};

/// A bounded cursor over an immutable byte slice.
///
/// Every read either advances the cursor by exactly the number of bytes it
/// consumed and returns `Ok`, or leaves the cursor untouched and returns
/// `Err(ReplayError::Truncated)`. There is no other failure mode: the
/// reader never panics on malformed input, only on a caller-supplied
/// position outside of `0..=len` via [`DataReader::restore`].
pub struct DataReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> DataReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        DataReader { bytes, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Saves the current position so it can later be restored, e.g. when a
    /// multi-field read fails partway through and the caller wants to
    /// report the whole structure as truncated rather than leave the
    /// cursor mid-structure.
    pub fn checkpoint(&self) -> usize {
        self.position
    }

    pub fn restore(&mut self, checkpoint: usize) {
        assert!(checkpoint <= self.bytes.len(), "checkpoint out of range");
        self.position = checkpoint;
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.position.checked_add(n).ok_or_else(|| {
            ReplayError::truncated(format!("requested {n} bytes, overflowed cursor"))
        })?;
        let slice = self.bytes.get(self.position..end).ok_or_else(|| {
            ReplayError::truncated(format!(
                "requested {n} bytes at offset {}, only {} remaining",
                self.position,
                self.remaining()
            ))
        })?;
        self.position = end;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let b = self.take(8)?;
        Ok(u64::from_le_bytes(b.try_into().unwrap()))
    }

    /// Reads the proprietary float encoding: one byte `Exponent`, then a
    /// little-endian u32 `Significand`. The value is
    /// `(Significand - i32::MAX) / 10^Exponent`.
    pub fn read_proprietary_float(&mut self) -> Result<f64> {
        let exponent = self.read_u8()?;
        let significand = self.read_u32()?;
        let numerator = significand as i64 - i32::MAX as i64;
        Ok(numerator as f64 / 10f64.powi(exponent as i32))
    }

    /// Reads a u16 length prefix followed by that many raw bytes, decoded
    /// as Latin-1 (every byte is its own codepoint, matching the game's
    /// non-Unicode text encoding).
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let bytes = self.take(len)?;
        Ok(bytes.iter().map(|&b| b as char).collect())
    }

    pub fn skip_string(&mut self) -> Result<()> {
        let len = self.read_u16()? as usize;
        self.take(len)?;
        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n)?;
        Ok(())
    }

    pub fn peek_u8(&self) -> Result<u8> {
        self.bytes
            .get(self.position)
            .copied()
            .ok_or_else(|| ReplayError::truncated("peek past end of buffer"))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers_in_sequence() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut r = DataReader::new(&bytes);
        assert_eq!(r.read_u8().unwrap(), 0x01);
        assert_eq!(r.read_u16().unwrap(), 0x0302);
        assert_eq!(r.read_u32().unwrap(), u32::from_le_bytes([0x04, 0x05, 0x06, 0x07]));
        assert_eq!(r.position(), 7);
    }

    #[test]
    fn read_past_end_fails_and_leaves_cursor_unchanged() {
        let bytes = [0x01, 0x02];
        let mut r = DataReader::new(&bytes);
        let before = r.position();
        assert!(r.read_u32().is_err());
        assert_eq!(r.position(), before);
    }

    #[test]
    fn checkpoint_restore_round_trip() {
        let bytes = [1u8, 2, 3, 4];
        let mut r = DataReader::new(&bytes);
        let cp = r.checkpoint();
        r.read_u16().unwrap();
        r.restore(cp);
        assert_eq!(r.position(), cp);
        assert_eq!(r.read_u32().unwrap(), u32::from_le_bytes(bytes));
    }

    #[test]
    fn string_reads_length_prefixed_bytes() {
        let mut bytes = vec![3, 0];
        bytes.extend_from_slice(b"abc");
        let mut r = DataReader::new(&bytes);
        assert_eq!(r.read_string().unwrap(), "abc");
    }

    #[test]
    fn proprietary_float_matches_reference_formula() {
        // Significand == i32::MAX encodes zero at any exponent.
        let mut bytes = Vec::new();
        bytes.push(2u8); // exponent
        bytes.extend_from_slice(&(i32::MAX as u32).to_le_bytes());
        let mut r = DataReader::new(&bytes);
        assert_eq!(r.read_proprietary_float().unwrap(), 0.0);
    }

    #[test]
    fn peek_does_not_advance() {
        let bytes = [9u8, 8];
        let r = DataReader::new(&bytes);
        assert_eq!(r.peek_u8().unwrap(), 9);
        assert_eq!(r.position(), 0);
    }
}
