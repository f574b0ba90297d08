// src/keccak.rs
// Keccak-f[1600] permutation step engine (24 rounds)
// rotația folosește rotate_left ca să nu facă shift cu 64.

use crate::keccak_params::ROUNDS;
use crate::keccak_state::KeccakState;

/// Round constants, compact form: bit j set means bit 2^j - 1 of the lane constant.
const RC_COMPACT: [u8; ROUNDS] = [
    0x01, 0x1A, 0x5E, 0x70, 0x1F, 0x21, 0x79, 0x55,
    0x0E, 0x0C, 0x35, 0x26, 0x3F, 0x4F, 0x5D, 0x53,
    0x52, 0x48, 0x16, 0x66, 0x79, 0x58, 0x21, 0x74,
];

/// rho offsets, ROT[x][y]
const ROT: [[u32; 5]; 5] = [
    [ 0, 36,  3, 41, 18],
    [ 1, 44, 10, 45,  2],
    [62,  6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39,  8, 14],
];

/// The five sub-transforms of one round, in execution order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundStep {
    #[default]
    Theta,
    Rho,
    Pi,
    Chi,
    Iota,
}

impl RoundStep {
    pub const ORDER: [RoundStep; 5] = [
        RoundStep::Theta,
        RoundStep::Rho,
        RoundStep::Pi,
        RoundStep::Chi,
        RoundStep::Iota,
    ];

    /// Next sub-transform in the same round; `None` after iota.
    pub const fn next(self) -> Option<RoundStep> {
        match self {
            RoundStep::Theta => Some(RoundStep::Rho),
            RoundStep::Rho => Some(RoundStep::Pi),
            RoundStep::Pi => Some(RoundStep::Chi),
            RoundStep::Chi => Some(RoundStep::Iota),
            RoundStep::Iota => None,
        }
    }
}

#[inline(always)]
fn rol(x: u64, n: u32) -> u64 {
    x.rotate_left(n)
}

pub const fn round_constant(round: usize) -> u64 {
    let c = RC_COMPACT[round];
    let mut rc = 0u64;
    let mut j = 0;
    while j < 7 {
        if (c >> j) & 1 == 1 {
            rc |= 1u64 << ((1u32 << j) - 1);
        }
        j += 1;
    }
    rc
}

pub fn theta(st: &mut KeccakState) {
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = st.lane(x, 0) ^ st.lane(x, 1) ^ st.lane(x, 2) ^ st.lane(x, 3) ^ st.lane(x, 4);
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ rol(c[(x + 1) % 5], 1);
        for y in 0..5 {
            st.set_lane(x, y, st.lane(x, y) ^ d);
        }
    }
}

pub fn rho(st: &mut KeccakState) {
    for y in 0..5 {
        for x in 0..5 {
            st.set_lane(x, y, rol(st.lane(x, y), ROT[x][y]));
        }
    }
}

/// A'[x][y] = A[(x + 3y) mod 5][x]
pub fn pi(st: &mut KeccakState) {
    let a = *st;
    for y in 0..5 {
        for x in 0..5 {
            st.set_lane(x, y, a.lane((x + 3 * y) % 5, x));
        }
    }
}

pub fn chi(st: &mut KeccakState) {
    for y in 0..5 {
        let row = [st.lane(0, y), st.lane(1, y), st.lane(2, y), st.lane(3, y), st.lane(4, y)];
        for x in 0..5 {
            st.set_lane(x, y, row[x] ^ ((!row[(x + 1) % 5]) & row[(x + 2) % 5]));
        }
    }
}

pub fn iota(st: &mut KeccakState, round: usize) {
    st.set_lane(0, 0, st.lane(0, 0) ^ round_constant(round));
}

/// Apply a single sub-transform; `round` only matters for iota.
pub fn apply_step(st: &mut KeccakState, step: RoundStep, round: usize) {
    match step {
        RoundStep::Theta => theta(st),
        RoundStep::Rho => rho(st),
        RoundStep::Pi => pi(st),
        RoundStep::Chi => chi(st),
        RoundStep::Iota => iota(st, round),
    }
}

pub fn keccak_round(st: &mut KeccakState, round: usize) {
    for step in RoundStep::ORDER {
        apply_step(st, step, round);
    }
}

pub fn keccak_f1600(st: &mut KeccakState) {
    for round in 0..ROUNDS {
        keccak_round(st, round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RC: [u64; ROUNDS] = [
        0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
        0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
        0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
        0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
        0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
        0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
    ];

    fn single_bit(x: usize, y: usize) -> KeccakState {
        let mut st = KeccakState::zero();
        st.set_lane(x, y, 1);
        st
    }

    #[test]
    fn compact_round_constants_expand() {
        for (round, &rc) in RC.iter().enumerate() {
            assert_eq!(round_constant(round), rc, "round {round}");
        }
    }

    #[test]
    fn theta_spreads_single_bit() {
        // bit in column 0 hits columns 4 (left parity) and 1 (rotated right parity)
        let mut st = single_bit(0, 0);
        theta(&mut st);
        for y in 0..5 {
            assert_eq!(st.lane(1, y), 1);
            assert_eq!(st.lane(4, y), 2);
            assert_eq!(st.lane(2, y), 0);
            assert_eq!(st.lane(3, y), 0);
        }
        assert_eq!(st.lane(0, 0), 1);
        assert_eq!(st.lane(0, 1), 0);
    }

    #[test]
    fn rho_rotates_by_position() {
        let mut st = KeccakState::from_lanes([1u64; 25]);
        rho(&mut st);
        assert_eq!(st.lane(0, 0), 1);
        assert_eq!(st.lane(1, 0), 1 << 1);
        assert_eq!(st.lane(0, 1), 1 << 36);
        assert_eq!(st.lane(4, 4), 1 << 14);
    }

    #[test]
    fn pi_moves_lanes_without_touching_bits() {
        let mut st = single_bit(1, 0);
        pi(&mut st);
        assert_eq!(st.lane(0, 2), 1);
        assert_eq!(st.lanes().iter().filter(|&&l| l != 0).count(), 1);

        let mut seq = KeccakState::from_lanes(core::array::from_fn(|i| i as u64));
        pi(&mut seq);
        let mut sorted = *seq.lanes();
        sorted.sort_unstable();
        assert_eq!(sorted, core::array::from_fn::<u64, 25, _>(|i| i as u64));
        assert_eq!(seq.lane(0, 0), 0);
    }

    #[test]
    fn chi_is_rowwise() {
        let mut st = single_bit(1, 0);
        chi(&mut st);
        // lane (0,0) = 0 ^ (!1 & 0) = 0; lane (4,0) = 0 ^ (!0 & 1) = 1
        assert_eq!(st.lane(1, 0), 1);
        assert_eq!(st.lane(4, 0), 1);
        assert_eq!(st.lane(0, 0), 0);
        assert_eq!(st.lane(0, 1), 0);

        let mut ones = KeccakState::from_lanes([1u64; 25]);
        chi(&mut ones);
        assert_eq!(*ones.lanes(), [1u64; 25]);
    }

    #[test]
    fn iota_touches_lane_zero_only() {
        let mut st = KeccakState::zero();
        iota(&mut st, 1);
        assert_eq!(st.lane(0, 0), 0x0000000000008082);
        assert_eq!(st.lanes()[1..], [0u64; 24]);
    }

    #[test]
    fn step_sequence_equals_round() {
        let mut a = KeccakState::from_lanes(core::array::from_fn(|i| (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)));
        let mut b = a;
        for round in 0..ROUNDS {
            let mut step = Some(RoundStep::Theta);
            while let Some(s) = step {
                apply_step(&mut a, s, round);
                step = s.next();
            }
            keccak_round(&mut b, round);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn f1600_of_zero_state() {
        let mut st = KeccakState::zero();
        keccak_f1600(&mut st);
        assert_eq!(st.lane(0, 0), 0xF1258F7940E1DDE7);
        assert_eq!(st.lane(1, 0), 0x84D5CCF933C0478A);
    }
}
