// Keccak-f[1600] sponge params (FIPS 202): 5x5 lanes de 64 biti, 24 runde
use rhdl::prelude::*;

pub const LANE_BYTES: usize = 8;
pub const STATE_LANES: usize = 25;
pub const STATE_BYTES: usize = STATE_LANES * LANE_BYTES; // 200
pub const ROUNDS: usize = 24;

/// Width of one stream beat, input and output (256 bits).
pub const CHUNK_BYTES: usize = 32;

/// Largest rate of the four instances (SHAKE128), in lanes.
pub const MAX_RATE_LANES: usize = 21;
pub const MAX_RATE_BYTES: usize = MAX_RATE_LANES * LANE_BYTES; // 168

// rate in bits; capacity = 1600 - rate
pub const SHA3_256_RATE_BITS: u16 = 1088;
pub const SHA3_512_RATE_BITS: u16 = 576;
pub const SHAKE128_RATE_BITS: u16 = 1344;
pub const SHAKE256_RATE_BITS: u16 = 1088;

pub const SHA3_256_OUTPUT_BITS: u16 = 256;
pub const SHA3_512_OUTPUT_BITS: u16 = 512;

/// Domain-separation suffix "01", stored LSB-first.
pub const SHA3_SUFFIX: u8 = 0b10;
pub const SHA3_SUFFIX_LEN: u8 = 2;
/// Domain-separation suffix "1111".
pub const SHAKE_SUFFIX: u8 = 0b1111;
pub const SHAKE_SUFFIX_LEN: u8 = 4;

/// Last bit of pad10*1, in the last byte of the rate block.
pub const PAD_TERMINAL: u8 = 0x80;

/// Byte-validity mask of a full chunk.
pub const FULL_MASK: u32 = u32::MAX;

#[inline(always)]
pub fn u8b(x: usize) -> Bits<U8> {
    debug_assert!(x <= u8::MAX as usize);
    bits(x as u128)
}

#[inline(always)]
pub fn mask_bits(m: u32) -> Bits<U32> {
    bits(m as u128)
}

/// Mask with the low `n` byte lanes valid.
#[inline(always)]
pub fn prefix_mask(n: usize) -> u32 {
    if n >= CHUNK_BYTES {
        FULL_MASK
    } else {
        (1u32 << n) - 1
    }
}
