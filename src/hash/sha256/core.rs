use super::H256_INIT;
use super::computations::all_rounds;
use crate::primitives::U256;

/// Compresses one 64-byte block into `state`.
///
/// `block` must hold exactly 64 bytes; callers only ever pass full blocks.
#[inline(always)]
pub fn compress(block: &[u8], state: &mut [u32; 8]) {
    debug_assert_eq!(block.len(), 64);

    let mut w = [0u32; 16];

    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    all_rounds(state, w);
}

/// Incremental SHA-256 hasher.
///
/// Feed data with [`update`](Sha256::update) in any number of chunks, then
/// call [`finalize`](Sha256::finalize). The digest does not depend on how
/// the input was split.
#[derive(Clone, Debug)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; 64],
    buffered: usize,
    length: u64,
}

impl Sha256 {
    pub fn new() -> Self {
        Self {
            state: H256_INIT,
            buffer: [0u8; 64],
            buffered: 0,
            length: 0,
        }
    }

    /// Absorbs `input` into the hash state.
    pub fn update(&mut self, mut input: &[u8]) {
        self.length = self.length.wrapping_add(input.len() as u64);

        if self.buffered > 0 {
            let take = (64 - self.buffered).min(input.len());

            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];

            if self.buffered < 64 {
                return;
            }

            compress(&self.buffer, &mut self.state);
            self.buffered = 0;
        }

        let blocks = input.chunks_exact(64);
        let rest = blocks.remainder();

        for block in blocks {
            compress(block, &mut self.state);
        }

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Applies the final padding and returns the big-endian digest.
    pub fn finalize(mut self) -> U256 {
        let bit_len = self.length.wrapping_mul(8);

        let mut block = [0u8; 64];
        block[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
        block[self.buffered] = 0x80;

        if self.buffered > 55 {
            compress(&block, &mut self.state);
            block = [0u8; 64];
        }

        block[56..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&block, &mut self.state);

        let mut out = [0u8; 32];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        U256::from(out)
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

/// Hashes `input` in one call.
pub fn sha256(input: &[u8]) -> U256 {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize()
}
