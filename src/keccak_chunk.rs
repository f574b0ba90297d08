// Streaming interface (generic): one beat = 32 bytes + byte-validity mask.
// valid/ready/last ca la AXI-Stream; mask bit i => data[i] valid.

use rhdl::prelude::*;

use crate::keccak_params::{mask_bits, prefix_mask, CHUNK_BYTES};

#[derive(Clone, Copy, Debug, Default)]
pub struct ByteChunk {
    pub data: [u8; CHUNK_BYTES],
    pub mask: Bits<U32>,
}

impl ByteChunk {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Low-order packed chunk; `None` when `bytes` is wider than the stream.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > CHUNK_BYTES {
            return None;
        }
        let mut data = [0u8; CHUNK_BYTES];
        data[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            data,
            mask: mask_bits(prefix_mask(bytes.len())),
        })
    }

    #[inline(always)]
    pub fn mask_u32(&self) -> u32 {
        self.mask.raw() as u32
    }

    #[inline(always)]
    pub fn is_valid(&self, i: usize) -> bool {
        (self.mask_u32() >> i) & 1 == 1
    }

    pub fn valid_count(&self) -> usize {
        self.mask_u32().count_ones() as usize
    }

    /// Valid bytes gathered to the front, in lane order.
    pub fn compact(&self) -> ([u8; CHUNK_BYTES], usize) {
        let mut out = [0u8; CHUNK_BYTES];
        let mut n = 0usize;
        for i in 0..CHUNK_BYTES {
            if self.is_valid(i) {
                out[n] = self.data[i];
                n += 1;
            }
        }
        (out, n)
    }

    /// The valid bytes, zero-masked ones dropped.
    pub fn valid_bytes(&self) -> Vec<u8> {
        let (buf, n) = self.compact();
        buf[..n].to_vec()
    }
}

/// Producer side of the input stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChunkIn {
    pub valid: bool,
    pub chunk: ByteChunk,
    /// end-of-message
    pub last: bool,
}

/// Engine side of the output stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChunkOut {
    pub valid: bool,
    pub chunk: ByteChunk,
    /// end-of-output, fixed-length modes only
    pub last: bool,
}
