// Absorb engine: XOR one chunk into the rate block at the absorb cursor.
// Ce nu incape in blocul curent devine carry (aliniat la byte 0) pentru ciclul urmator.

use crate::keccak_chunk::ByteChunk;
use crate::keccak_params::{mask_bits, prefix_mask, CHUNK_BYTES, LANE_BYTES, MAX_RATE_LANES};
use crate::keccak_state::KeccakState;

#[derive(Clone, Copy, Debug, Default)]
pub struct AbsorbIn {
    pub rate_bytes: usize,
    pub cursor: usize,
    pub chunk: ByteChunk,
    /// Pending carry-over; takes priority over `chunk`.
    pub carry: Option<ByteChunk>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AbsorbOut {
    pub cursor: usize,
    /// Bytes absorbed this call.
    pub absorbed: usize,
    pub carry: Option<ByteChunk>,
}

/// XOR `data` into the state starting at byte `pos` of the rate block.
/// Lanes at or past the rate (or `MAX_RATE_LANES`) are never written.
fn xor_into_rate(st: &mut KeccakState, rate_bytes: usize, pos: usize, data: &[u8]) {
    let rate_lanes = rate_bytes / LANE_BYTES;
    for (i, &b) in data.iter().enumerate() {
        let p = pos + i;
        let lane = p / LANE_BYTES;
        if lane >= rate_lanes || lane >= MAX_RATE_LANES {
            continue;
        }
        st.xor_lane_at(lane, (b as u64) << (8 * (p % LANE_BYTES)));
    }
}

pub fn absorb_step(mut st: KeccakState, inp: AbsorbIn) -> (KeccakState, AbsorbOut) {
    debug_assert!(inp.cursor <= inp.rate_bytes, "absorb cursor past rate");

    let src = inp.carry.unwrap_or(inp.chunk);
    let (buf, n) = src.compact();
    let space = inp.rate_bytes.saturating_sub(inp.cursor);

    let take = n.min(space);
    xor_into_rate(&mut st, inp.rate_bytes, inp.cursor, &buf[..take]);

    let carry = if n > space {
        let rest = n - take;
        let mut data = [0u8; CHUNK_BYTES];
        data[..rest].copy_from_slice(&buf[take..n]);
        Some(ByteChunk {
            data,
            mask: mask_bits(prefix_mask(rest)),
        })
    } else {
        None
    };

    let out = AbsorbOut {
        cursor: inp.cursor + take,
        absorbed: take,
        carry,
    };
    (st, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(bytes: &[u8]) -> ByteChunk {
        ByteChunk::from_slice(bytes).unwrap()
    }

    #[test]
    fn full_chunk_into_empty_block() {
        let data: Vec<u8> = (1..=32).collect();
        let (st, out) = absorb_step(
            KeccakState::zero(),
            AbsorbIn { rate_bytes: 136, cursor: 0, chunk: chunk(&data), carry: None },
        );
        assert_eq!(out.cursor, 32);
        assert!(out.carry.is_none());
        assert_eq!(st.lane(0, 0), u64::from_le_bytes(data[0..8].try_into().unwrap()));
        assert_eq!(st.lane(3, 0), u64::from_le_bytes(data[24..32].try_into().unwrap()));
        assert_eq!(st.lane(4, 0), 0);
    }

    #[test]
    fn overflow_produces_shifted_carry() {
        // rate 136, cursor 128: 8 bytes fit, 24 carry over
        let data: Vec<u8> = (0..32).map(|i| 0xC0 | i as u8).collect();
        let (st, out) = absorb_step(
            KeccakState::zero(),
            AbsorbIn { rate_bytes: 136, cursor: 128, chunk: chunk(&data), carry: None },
        );
        assert_eq!(out.cursor, 136);
        assert_eq!(out.absorbed, 8);
        assert_eq!(st.lanes()[16], u64::from_le_bytes(data[0..8].try_into().unwrap()));
        assert_eq!(st.lanes()[17], 0);

        let carry = out.carry.unwrap();
        assert_eq!(carry.mask_u32(), 0x00FF_FFFF);
        assert_eq!(&carry.data[..24], &data[8..32]);
        assert_eq!(&carry.data[24..], &[0u8; 8]);
    }

    #[test]
    fn carry_has_priority_over_new_input() {
        let carry = chunk(&[0x11; 4]);
        let (st, out) = absorb_step(
            KeccakState::zero(),
            AbsorbIn { rate_bytes: 72, cursor: 0, chunk: chunk(&[0xEE; 32]), carry: Some(carry) },
        );
        assert_eq!(out.cursor, 4);
        assert!(out.carry.is_none());
        assert_eq!(st.lane(0, 0), 0x1111_1111);
    }

    #[test]
    fn unaligned_cursor_lands_mid_lane() {
        let (st, out) = absorb_step(
            KeccakState::zero(),
            AbsorbIn { rate_bytes: 168, cursor: 6, chunk: chunk(&[0xAB, 0xCD, 0xEF]), carry: None },
        );
        assert_eq!(out.cursor, 9);
        assert_eq!(st.lane(0, 0), 0xCDAB_u64 << 48);
        assert_eq!(st.lane(1, 0), 0xEF);
    }

    #[test]
    fn capacity_lanes_are_never_written() {
        // SHA3-512: rate 72 bytes = 9 lanes; everything past lane 8 is capacity
        let (st, out) = absorb_step(
            KeccakState::zero(),
            AbsorbIn { rate_bytes: 72, cursor: 64, chunk: chunk(&[0xFF; 32]), carry: None },
        );
        assert_eq!(out.cursor, 72);
        assert_eq!(st.lanes()[8], u64::MAX);
        assert!(st.lanes()[9..].iter().all(|&l| l == 0));
        assert_eq!(out.carry.unwrap().valid_count(), 24);
    }

    #[test]
    fn empty_chunk_is_a_no_op() {
        let (st, out) = absorb_step(
            KeccakState::zero(),
            AbsorbIn { rate_bytes: 136, cursor: 40, chunk: ByteChunk::empty(), carry: None },
        );
        assert!(st.is_zero());
        assert_eq!(out.cursor, 40);
        assert!(out.carry.is_none());
    }
}
