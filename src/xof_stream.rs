// Incremental SHAKE stream built on the sponge controller.
// - absorb(seed...) once, then squeeze bytes incrementally with next_u8() / fill_bytes().
// - each output beat of the controller is 32 bytes with a validity mask; the
//   short beat at the end of a rate block triggers the re-permutation.

use crate::keccak_core::{settle, sponge_step, Phase, SpongeIn, SpongeState};
use crate::keccak_mode::Mode;
use crate::keccak_params::CHUNK_BYTES;
use crate::shake::absorb_message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShakeKind {
    Shake128,
    Shake256,
}

impl ShakeKind {
    pub const fn mode(self) -> Mode {
        match self {
            ShakeKind::Shake128 => Mode::Shake128,
            ShakeKind::Shake256 => Mode::Shake256,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShakeStream {
    kind: ShakeKind,
    st: SpongeState,
    buf: [u8; CHUNK_BYTES],
    len: usize, // valid bytes in buf
    pos: usize, // next read position inside buf
    permutations: u64,
}

impl ShakeStream {
    /// Create a SHAKE128 stream: absorb input, then ready to squeeze bytes.
    pub fn shake128(input: &[u8]) -> Self {
        Self::new(ShakeKind::Shake128, input)
    }

    /// Create a SHAKE256 stream: absorb input, then ready to squeeze bytes.
    pub fn shake256(input: &[u8]) -> Self {
        Self::new(ShakeKind::Shake256, input)
    }

    pub fn kind(&self) -> ShakeKind {
        self.kind
    }

    /// Re-permutations run while squeezing so far.
    pub fn permutations(&self) -> u64 {
        self.permutations
    }

    /// Get next byte from XOF stream.
    #[inline(always)]
    pub fn next_u8(&mut self) -> u8 {
        while self.pos >= self.len {
            self.refill();
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        b
    }

    /// Fill `out` with bytes from the stream.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for o in out.iter_mut() {
            *o = self.next_u8();
        }
    }

    // ------------------------------------------------------------------------
    // Internal sponge logic
    // ------------------------------------------------------------------------

    fn new(kind: ShakeKind, input: &[u8]) -> Self {
        Self {
            kind,
            st: absorb_message(kind.mode(), input),
            buf: [0u8; CHUNK_BYTES],
            len: 0,
            pos: 0,
            permutations: 0,
        }
    }

    fn refill(&mut self) {
        let mut st = self.st;
        if st.phase != Phase::Squeeze {
            st = settle(st).0;
            self.permutations += 1;
        }
        debug_assert_eq!(st.phase, Phase::Squeeze);

        let (ns, out) = sponge_step(st, SpongeIn::consume());
        let (buf, n) = out.data.chunk.compact();
        self.buf = buf;
        self.len = n;
        self.pos = 0;
        self.st = ns;
    }
}

impl Iterator for ShakeStream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_matches_oneshot_shake256() {
        let mut stream = ShakeStream::shake256(&[]);
        let mut a = [0u8; 64];
        stream.fill_bytes(&mut a);

        let mut b = [0u8; 64];
        crate::shake::shake256(&[], &mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn stream_matches_oneshot_shake128() {
        let mut stream = ShakeStream::shake128(b"abc");
        let mut a = [0u8; 400];
        stream.fill_bytes(&mut a);

        let mut b = [0u8; 400];
        crate::shake::shake128(b"abc", &mut b);

        assert_eq!(a, b);
        // 400 bytes span three SHAKE128 rate blocks
        assert_eq!(stream.permutations(), 2);
    }

    #[test]
    fn byte_iterator() {
        let bytes: Vec<u8> = ShakeStream::shake128(b"").take(4).collect();
        assert_eq!(bytes, vec![0x7f, 0x9c, 0x2b, 0xa4]);
    }
}
