// Padding injector: domain suffix + pad10*1 over the last (partial) rate block.
// head si tail pot fi aceeasi lane; efectele se combina prin XOR.

use crate::keccak_params::{LANE_BYTES, PAD_TERMINAL};
use crate::keccak_state::KeccakState;

/// `cursor` is the message end inside the rate block, `domain` the suffix
/// byte with the first pad bit already set (0x06 for SHA3, 0x1F for SHAKE).
pub fn pad_step(mut st: KeccakState, rate_bytes: usize, cursor: usize, domain: u8) -> KeccakState {
    debug_assert!(cursor < rate_bytes, "pad with a full rate block");

    let head = cursor / LANE_BYTES;
    let offset = cursor % LANE_BYTES;
    st.xor_lane_at(head, (domain as u64) << (8 * offset));

    let tail = rate_bytes / LANE_BYTES - 1;
    st.xor_lane_at(tail, (PAD_TERMINAL as u64) << 56);

    st
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_sha3_256() {
        let st = pad_step(KeccakState::zero(), 136, 0, 0x06);
        assert_eq!(st.lanes()[0], 0x06);
        assert_eq!(st.lanes()[16], 0x80 << 56);
        assert_eq!(st.lanes().iter().filter(|&&l| l != 0).count(), 2);
    }

    #[test]
    fn head_and_tail_merge_in_one_byte() {
        // message ends one byte before the rate boundary
        let st = pad_step(KeccakState::zero(), 136, 135, 0x06);
        assert_eq!(st.lanes()[16], 0x86 << 56);
        assert_eq!(st.lanes().iter().filter(|&&l| l != 0).count(), 1);

        let st = pad_step(KeccakState::zero(), 168, 167, 0x1F);
        assert_eq!(st.lanes()[20], 0x9F << 56);
    }

    #[test]
    fn padding_xors_over_message_bytes() {
        let mut st = KeccakState::zero();
        st.xor_lane_at(8, 0xFFFF_FFFF_FFFF_FFFF);
        let st = pad_step(st, 72, 68, 0x06);
        // byte 68 = lane 8, offset 4; byte 71 = lane 8, offset 7
        assert_eq!(st.lanes()[8], !(0x06u64 << 32) ^ (0x80 << 56));
        assert!(st.lanes()[9..].iter().all(|&l| l == 0));
    }

    #[test]
    fn same_lane_different_bytes() {
        let st = pad_step(KeccakState::zero(), 136, 130, 0x1F);
        assert_eq!(st.lanes()[16], (0x1F << 16) | (0x80 << 56));
    }
}
