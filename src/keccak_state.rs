// The 1600-bit Keccak state: 5x5 lanes of 64 bits, lane (x, y) at index x + 5y.
// Little-endian lanes, ca in FIPS 202.

use core::fmt;

use crate::keccak_params::{LANE_BYTES, STATE_BYTES, STATE_LANES};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeccakState {
    lanes: [u64; STATE_LANES],
}

impl Default for KeccakState {
    fn default() -> Self {
        Self::zero()
    }
}

impl KeccakState {
    pub const fn zero() -> Self {
        Self { lanes: [0u64; STATE_LANES] }
    }

    pub const fn from_lanes(lanes: [u64; STATE_LANES]) -> Self {
        Self { lanes }
    }

    #[inline(always)]
    pub fn lanes(&self) -> &[u64; STATE_LANES] {
        &self.lanes
    }

    #[inline(always)]
    pub fn lanes_mut(&mut self) -> &mut [u64; STATE_LANES] {
        &mut self.lanes
    }

    #[inline(always)]
    pub fn lane(&self, x: usize, y: usize) -> u64 {
        self.lanes[x + 5 * y]
    }

    #[inline(always)]
    pub fn set_lane(&mut self, x: usize, y: usize, v: u64) {
        self.lanes[x + 5 * y] = v;
    }

    /// XOR into the lane at linear index `i` (x = i mod 5, y = i div 5).
    #[inline(always)]
    pub fn xor_lane_at(&mut self, i: usize, v: u64) {
        self.set_lane(i % 5, i / 5, self.lane(i % 5, i / 5) ^ v);
    }

    /// Byte `i` of the linearized state.
    #[inline(always)]
    pub fn byte(&self, i: usize) -> u8 {
        let lane = self.lanes[i / LANE_BYTES];
        ((lane >> (8 * (i % LANE_BYTES))) & 0xFF) as u8
    }

    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0u8; STATE_BYTES];
        for (i, lane) in self.lanes.iter().enumerate() {
            out[i * LANE_BYTES..(i + 1) * LANE_BYTES].copy_from_slice(&lane.to_le_bytes());
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.lanes.iter().all(|&l| l == 0)
    }
}

/// FIPS 202 layout: y = 4 on top, (0, 0) bottom left.
impl fmt::Display for KeccakState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..5).rev() {
            write!(f, "y={y}:")?;
            for x in 0..5 {
                write!(f, "  0x{:016x}", self.lane(x, y))?;
            }
            writeln!(f)?;
        }
        write!(f, "     x=0                 x=1                 x=2                 x=3                 x=4")
    }
}

impl fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "KeccakState")?;
        fmt::Display::fmt(self, f)
    }
}
