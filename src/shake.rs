// One-shot SHA3 / SHAKE built on the sponge controller.
// Mesajul intra pe stream in chunk-uri de 32 de bytes, ultimul marcat `last`.

use crate::keccak_chunk::ByteChunk;
use crate::keccak_core::{input_ready, settle, sponge_step, Phase, SpongeIn, SpongeState};
use crate::keccak_mode::Mode;
use crate::keccak_params::{mask_bits, prefix_mask, CHUNK_BYTES};

/// Start a session and absorb the whole message; returns the controller
/// parked at its first squeeze chunk.
pub(crate) fn absorb_message(mode: Mode, input: &[u8]) -> SpongeState {
    let (mut st, _) = sponge_step(SpongeState::default(), SpongeIn::start(mode.selector()));

    let mut pieces = input.chunks(CHUNK_BYTES).peekable();
    loop {
        let (piece, last) = match pieces.next() {
            Some(p) => (p, pieces.peek().is_none()),
            None => (&[][..], true),
        };
        st = settle(st).0;
        debug_assert!(input_ready(&st));

        let mut chunk = ByteChunk::default();
        chunk.data[..piece.len()].copy_from_slice(piece);
        chunk.mask = mask_bits(prefix_mask(piece.len()));
        st = sponge_step(st, SpongeIn::data(chunk, last)).0;

        if last {
            break;
        }
    }
    settle(st).0
}

/// Accept output chunks into `out`; returns the controller after the last
/// accepted chunk (Idle once a fixed-length digest is complete).
pub(crate) fn squeeze_into(mut st: SpongeState, out: &mut [u8]) -> SpongeState {
    let mut produced = 0usize;
    while produced < out.len() {
        st = settle(st).0;
        if st.phase != Phase::Squeeze {
            break;
        }
        let (ns, o) = sponge_step(st, SpongeIn::consume());
        let (buf, n) = o.data.chunk.compact();
        let take = n.min(out.len() - produced);
        out[produced..produced + take].copy_from_slice(&buf[..take]);
        produced += take;
        st = ns;
    }
    st
}

fn hash_into(mode: Mode, input: &[u8], out: &mut [u8]) {
    // SHAKE: the session is simply dropped once `out` is full
    squeeze_into(absorb_message(mode, input), out);
}

pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    hash_into(Mode::Sha3_256, input, &mut out);
    out
}

pub fn sha3_512(input: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    hash_into(Mode::Sha3_512, input, &mut out);
    out
}

pub fn shake128(input: &[u8], out: &mut [u8]) {
    hash_into(Mode::Shake128, input, out);
}

pub fn shake256(input: &[u8], out: &mut [u8]) {
    hash_into(Mode::Shake256, input, out);
}
