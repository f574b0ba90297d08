// Squeeze engine: one 32-byte output window from the rate block at the squeeze cursor.

use crate::keccak_chunk::ByteChunk;
use crate::keccak_mode::ModeParams;
use crate::keccak_params::{mask_bits, prefix_mask, CHUNK_BYTES, STATE_BYTES};
use crate::keccak_state::KeccakState;

#[derive(Clone, Copy, Debug, Default)]
pub struct SqueezeOut {
    pub chunk: ByteChunk,
    /// Cursor after this window, saturated at the rate.
    pub cursor: usize,
    /// Rate block exhausted: permute before the next window.
    pub repermute: bool,
    /// Fixed-length output complete (never set for SHAKE).
    pub last: bool,
}

pub fn squeeze_step(st: &KeccakState, params: &ModeParams, cursor: usize) -> SqueezeOut {
    let rate = params.rate_bytes();
    debug_assert!(cursor <= rate, "squeeze cursor past rate");

    let mut data = [0u8; CHUNK_BYTES];
    for (i, d) in data.iter_mut().enumerate() {
        let p = cursor + i;
        if p < STATE_BYTES {
            *d = st.byte(p);
        }
    }

    let remaining = rate.saturating_sub(cursor);
    let mut valid = remaining.min(CHUNK_BYTES);
    let next = cursor + CHUNK_BYTES;

    let last = match params.output_bytes() {
        Some(total) => {
            valid = valid.min(total.saturating_sub(cursor));
            next >= total
        }
        None => false,
    };

    // zero the bytes past the valid window
    for d in data.iter_mut().skip(valid) {
        *d = 0;
    }

    SqueezeOut {
        chunk: ByteChunk {
            data,
            mask: mask_bits(prefix_mask(valid)),
        },
        cursor: next.min(rate),
        repermute: next >= rate,
        last,
    }
}
