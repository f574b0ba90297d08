//! Checked software driver for the sponge controller.
//!
//! [`Sponge`] owns one [`SpongeState`] and exposes the control surface
//! (`start`, `stop`), the flow-controlled input stream (`push`, `write`,
//! `finish`) and the output stream (`pull`, [`Sponge::chunks`]). Every call
//! first runs the permutation pipeline up to the next blocking point, then
//! checks the flow-control precondition; a call the controller would not
//! accept returns a [`SpongeError`] and leaves the session as it was.
//!
//! ```ignore
//! let mut sp = Sponge::new();
//! sp.start(Mode::Sha3_256)?;
//! sp.finish(b"abc")?;
//! let digest = sp.pull()?;
//! ```

use crate::keccak_chunk::{ByteChunk, ChunkOut};
use crate::keccak_core::{input_ready, is_blocked, sponge_step, Phase, SpongeIn, SpongeOut, SpongeState};
use crate::keccak_errors::SpongeError;
use crate::keccak_mode::{Mode, ModeParams};
use crate::keccak_params::CHUNK_BYTES;

#[derive(Clone, Debug, Default)]
pub struct Sponge {
    st: SpongeState,
    steps: u64,
    permutations: u64,
}

impl Sponge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.st.phase
    }

    pub fn is_idle(&self) -> bool {
        self.st.phase == Phase::Idle
    }

    /// Latched parameters of the running session.
    pub fn params(&self) -> Option<ModeParams> {
        if self.is_idle() {
            None
        } else {
            Some(self.st.params)
        }
    }

    /// Controller steps executed since construction (one per clock in hardware).
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Completed Keccak-f[1600] permutations since construction.
    pub fn permutations(&self) -> u64 {
        self.permutations
    }

    pub fn state(&self) -> &SpongeState {
        &self.st
    }

    fn tick(&mut self, inp: SpongeIn) -> SpongeOut {
        let (ns, out) = sponge_step(self.st, inp);
        self.st = ns;
        self.steps += 1;
        if out.permuted {
            self.permutations += 1;
        }
        out
    }

    /// Run the controller until it needs the producer, the consumer, or a new session.
    pub fn advance(&mut self) -> u64 {
        let mut n = 0u64;
        while !is_blocked(&self.st) {
            self.tick(SpongeIn::default());
            n += 1;
        }
        n
    }

    pub fn start(&mut self, mode: Mode) -> Result<ModeParams, SpongeError> {
        self.start_raw(mode.selector())
    }

    /// Start from a raw selector; unknown selectors fall back to SHA3-256.
    pub fn start_raw(&mut self, selector: u8) -> Result<ModeParams, SpongeError> {
        if !self.is_idle() {
            return Err(SpongeError::SessionActive { phase: self.st.phase });
        }
        self.tick(SpongeIn::start(selector));
        Ok(self.st.params)
    }

    /// Cancel an extendable-output session; only valid while squeezing.
    pub fn stop(&mut self) -> Result<(), SpongeError> {
        self.advance();
        if self.st.phase != Phase::Squeeze {
            return Err(SpongeError::StopOutsideSqueeze { phase: self.st.phase });
        }
        self.tick(SpongeIn::stop());
        Ok(())
    }

    pub fn input_ready(&mut self) -> bool {
        self.advance();
        input_ready(&self.st)
    }

    /// Offer one chunk; `last` marks the end of the message.
    pub fn push(&mut self, chunk: ByteChunk, last: bool) -> Result<(), SpongeError> {
        if !self.input_ready() {
            return Err(SpongeError::InputNotReady { phase: self.st.phase });
        }
        let out = self.tick(SpongeIn::data(chunk, last));
        debug_assert!(out.in_ready);
        Ok(())
    }

    pub fn push_bytes(&mut self, bytes: &[u8], last: bool) -> Result<(), SpongeError> {
        let chunk = ByteChunk::from_slice(bytes).ok_or(SpongeError::ChunkTooLong {
            len: bytes.len(),
            max: CHUNK_BYTES,
        })?;
        self.push(chunk, last)
    }

    /// Feed message bytes, at most one stream beat per chunk, without ending the message.
    pub fn write(&mut self, data: &[u8]) -> Result<(), SpongeError> {
        for piece in data.chunks(CHUNK_BYTES) {
            self.push_bytes(piece, false)?;
        }
        Ok(())
    }

    /// Feed the tail of the message and mark end-of-message.
    /// An empty tail sends one empty final chunk.
    pub fn finish(&mut self, tail: &[u8]) -> Result<(), SpongeError> {
        if tail.is_empty() {
            return self.push(ByteChunk::empty(), true);
        }
        let mut pieces = tail.chunks(CHUNK_BYTES).peekable();
        while let Some(piece) = pieces.next() {
            self.push_bytes(piece, pieces.peek().is_none())?;
        }
        Ok(())
    }

    /// Accept the presented output chunk.
    pub fn pull(&mut self) -> Result<ChunkOut, SpongeError> {
        self.advance();
        if self.st.phase != Phase::Squeeze {
            return Err(SpongeError::OutputNotReady { phase: self.st.phase });
        }
        let out = self.tick(SpongeIn::consume());
        Ok(out.data)
    }

    /// Squeeze exactly `out.len()` bytes (fewer if a fixed-length digest ends first).
    /// Returns the number of bytes written.
    pub fn read(&mut self, out: &mut [u8]) -> Result<usize, SpongeError> {
        let mut filled = 0usize;
        while filled < out.len() {
            let chunk = self.pull()?;
            let bytes = chunk.chunk.valid_bytes();
            let take = bytes.len().min(out.len() - filled);
            out[filled..filled + take].copy_from_slice(&bytes[..take]);
            filled += take;
            if chunk.last {
                break;
            }
        }
        Ok(filled)
    }

    /// Output chunks until end-of-output (never ends for SHAKE; pair with `take` and `stop`).
    pub fn chunks(&mut self) -> OutputChunks<'_> {
        OutputChunks { sponge: self, ended: false }
    }
}

pub struct OutputChunks<'a> {
    sponge: &'a mut Sponge,
    ended: bool,
}

impl Iterator for OutputChunks<'_> {
    type Item = ChunkOut;

    fn next(&mut self) -> Option<ChunkOut> {
        if self.ended {
            return None;
        }
        match self.sponge.pull() {
            Ok(c) => {
                self.ended = c.last;
                Some(c)
            }
            Err(_) => {
                self.ended = true;
                None
            }
        }
    }
}
