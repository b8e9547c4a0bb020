#![allow(dead_code)]

use rand_core::{CryptoRng, RngCore};

/// A "random" source that hands out a fixed byte sequence, so a session can be built
/// with a chosen exponent. Panics when drained.
pub struct FixedBytes {
    bytes: Vec<u8>,
    offset: usize,
}

impl FixedBytes {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            offset: 0,
        }
    }

    pub fn consumed(&self) -> usize {
        self.offset
    }
}

impl RngCore for FixedBytes {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_be_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let end = self.offset + dest.len();
        assert!(end <= self.bytes.len(), "fixed byte source drained");
        dest.copy_from_slice(&self.bytes[self.offset..end]);
        self.offset = end;
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedBytes {}

/// Returns a copy of `bytes` with bit `bit` flipped.
pub fn flip_bit(bytes: &[u8], bit: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out[bit / 8] ^= 1 << (bit % 8);
    out
}
