// Sponge controller: one-step FSM over the absorb / pad / permute / squeeze engines.
// Un pas = un chunk absorbit, o sub-transformare de runda, sau un chunk de iesire.
//
// Idle -> Absorb -> Pad -> (Theta Rho Pi Chi Iota) x 24 -> Squeeze -> Idle
// Absorb revine in permutare la fiecare bloc plin; Squeeze la fiecare bloc epuizat (SHAKE).

use rhdl::prelude::*;

use crate::keccak::{apply_step, RoundStep};
use crate::keccak_absorb::{absorb_step, AbsorbIn};
use crate::keccak_chunk::{ByteChunk, ChunkIn, ChunkOut};
use crate::keccak_mode::{mode_params, ModeParams};
use crate::keccak_pad::pad_step;
use crate::keccak_params::{u8b, ROUNDS};
use crate::keccak_squeeze::squeeze_step;
use crate::keccak_state::KeccakState;

/// FSM phases
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Absorb,
    Pad,
    Theta,
    Rho,
    Pi,
    Chi,
    Iota,
    Squeeze,
}

impl Phase {
    pub const fn round_step(self) -> Option<RoundStep> {
        match self {
            Phase::Theta => Some(RoundStep::Theta),
            Phase::Rho => Some(RoundStep::Rho),
            Phase::Pi => Some(RoundStep::Pi),
            Phase::Chi => Some(RoundStep::Chi),
            Phase::Iota => Some(RoundStep::Iota),
            _ => None,
        }
    }

    pub const fn is_permuting(self) -> bool {
        self.round_step().is_some()
    }
}

impl From<RoundStep> for Phase {
    fn from(s: RoundStep) -> Self {
        match s {
            RoundStep::Theta => Phase::Theta,
            RoundStep::Rho => Phase::Rho,
            RoundStep::Pi => Phase::Pi,
            RoundStep::Chi => Phase::Chi,
            RoundStep::Iota => Phase::Iota,
        }
    }
}

/// Control-surface misuse. The step that reports it leaves the state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    StartWhileBusy,
    StopOutsideSqueeze,
}

/// Controller inputs for one step
#[derive(Clone, Copy, Debug, Default)]
pub struct SpongeIn {
    pub start: bool,
    /// Mode selector, sampled only with `start` in Idle.
    pub mode: u8,
    pub stop: bool,
    pub data: ChunkIn,
    /// consumer ready for the presented output chunk
    pub out_ready: bool,
}

impl SpongeIn {
    pub fn start(mode: u8) -> Self {
        Self { start: true, mode, ..Self::default() }
    }

    pub fn data(chunk: ByteChunk, last: bool) -> Self {
        Self {
            data: ChunkIn { valid: true, chunk, last },
            ..Self::default()
        }
    }

    pub fn consume() -> Self {
        Self { out_ready: true, ..Self::default() }
    }

    pub fn stop() -> Self {
        Self { stop: true, ..Self::default() }
    }
}

/// Controller outputs
#[derive(Clone, Copy, Debug, Default)]
pub struct SpongeOut {
    pub busy: bool,
    /// absorber accepts `data` this step
    pub in_ready: bool,
    pub data: ChunkOut,
    /// session returned to Idle on this step
    pub done: bool,
    /// a 24-round permutation completed on this step
    pub permuted: bool,
    pub fault: Option<Fault>,
}

/// State for the sponge controller
#[derive(Clone, Copy, Debug, Default)]
pub struct SpongeState {
    pub phase: Phase,

    // latched at start
    pub params: ModeParams,

    pub state: KeccakState,
    pub round: Bits<U8>, // 0..23

    pub absorb_cursor: Bits<U8>,  // 0..=rate/8
    pub squeeze_cursor: Bits<U8>, // 0..=rate/8

    // carry-over from a chunk that overflowed the rate block
    pub carry_valid: bool,
    pub carry: ByteChunk,

    pub msg_received: bool,
    /// Pad done: permutations now return to Squeeze.
    pub absorb_done: bool,
}

impl SpongeState {
    #[inline(always)]
    pub fn absorb_cursor(&self) -> usize {
        self.absorb_cursor.raw() as usize
    }

    #[inline(always)]
    pub fn squeeze_cursor(&self) -> usize {
        self.squeeze_cursor.raw() as usize
    }

    #[inline(always)]
    pub fn round(&self) -> usize {
        self.round.raw() as usize
    }
}

/// Absorb is waiting for, and would take, a new input chunk.
pub fn input_ready(st: &SpongeState) -> bool {
    st.phase == Phase::Absorb
        && st.absorb_cursor() < st.params.rate_bytes()
        && !st.carry_valid
        && !st.msg_received
}

/// The controller can only move with outside help: Idle, Squeeze, or Absorb awaiting input.
pub fn is_blocked(st: &SpongeState) -> bool {
    match st.phase {
        Phase::Idle | Phase::Squeeze => true,
        Phase::Absorb => input_ready(st),
        _ => false,
    }
}

/// One step of the FSM
pub fn sponge_step(st: SpongeState, inp: SpongeIn) -> (SpongeState, SpongeOut) {
    let mut ns = st;
    let mut out = SpongeOut::default();

    out.busy = st.phase != Phase::Idle;

    if inp.start && st.phase != Phase::Idle {
        tracing::warn!(phase = ?st.phase, mode = inp.mode, "start while a session is active, ignored");
        out.fault = Some(Fault::StartWhileBusy);
        return (st, out);
    }
    if inp.stop && st.phase != Phase::Squeeze {
        tracing::warn!(phase = ?st.phase, "stop outside squeeze, ignored");
        out.fault = Some(Fault::StopOutsideSqueeze);
        return (st, out);
    }

    out.in_ready = input_ready(&st);
    let rate = st.params.rate_bytes();

    match st.phase {
        Phase::Idle => {
            if inp.start {
                let params = mode_params(inp.mode);
                ns = SpongeState {
                    phase: Phase::Absorb,
                    params,
                    ..SpongeState::default()
                };
                tracing::debug!(mode = %params.mode, rate = params.rate_bytes(), "sponge session start");
            }
        }

        Phase::Absorb => {
            let cursor = st.absorb_cursor();
            debug_assert!(cursor <= rate, "absorb cursor past rate");

            if cursor == rate {
                // bloc plin -> permutare
                ns.round = u8b(0);
                ns.phase = Phase::Theta;
            } else if st.carry_valid {
                let (s, a) = absorb_step(
                    st.state,
                    AbsorbIn {
                        rate_bytes: rate,
                        cursor,
                        chunk: ByteChunk::empty(),
                        carry: Some(st.carry),
                    },
                );
                ns.state = s;
                ns.absorb_cursor = u8b(a.cursor);
                ns.carry_valid = a.carry.is_some();
                ns.carry = a.carry.unwrap_or_default();
                tracing::trace!(absorbed = a.absorbed, cursor = a.cursor, "carry-over drained");
            } else if st.msg_received {
                ns.phase = Phase::Pad;
            } else if inp.data.valid {
                let (s, a) = absorb_step(
                    st.state,
                    AbsorbIn {
                        rate_bytes: rate,
                        cursor,
                        chunk: inp.data.chunk,
                        carry: None,
                    },
                );
                ns.state = s;
                ns.absorb_cursor = u8b(a.cursor);
                ns.carry_valid = a.carry.is_some();
                ns.carry = a.carry.unwrap_or_default();
                ns.msg_received = inp.data.last;
                if let Some(c) = a.carry {
                    tracing::trace!(carried = c.valid_count(), "chunk overflowed rate block");
                }
            }
        }

        Phase::Pad => {
            ns.state = pad_step(st.state, rate, st.absorb_cursor(), st.params.domain_byte());
            ns.absorb_done = true;
            ns.round = u8b(0);
            ns.phase = Phase::Theta;
        }

        Phase::Theta | Phase::Rho | Phase::Pi | Phase::Chi | Phase::Iota => {
            let round = st.round();
            let step = st.phase.round_step().unwrap_or_default();
            apply_step(&mut ns.state, step, round);

            match step.next() {
                Some(next) => ns.phase = next.into(),
                None if round + 1 < ROUNDS => {
                    ns.round = u8b(round + 1);
                    ns.phase = Phase::Theta;
                }
                None => {
                    ns.round = u8b(0);
                    out.permuted = true;
                    if st.absorb_done {
                        ns.squeeze_cursor = u8b(0);
                        ns.phase = Phase::Squeeze;
                    } else {
                        ns.absorb_cursor = u8b(0);
                        ns.phase = Phase::Absorb;
                    }
                    tracing::trace!(squeezing = st.absorb_done, "keccak-f[1600] complete");
                }
            }
        }

        Phase::Squeeze => {
            let sq = squeeze_step(&st.state, &st.params, st.squeeze_cursor());

            if inp.stop {
                ns = SpongeState::default();
                out.done = true;
                tracing::debug!(mode = %st.params.mode, "squeeze stopped");
            } else {
                out.data = ChunkOut {
                    valid: true,
                    chunk: sq.chunk,
                    last: sq.last,
                };
                if inp.out_ready {
                    if sq.last {
                        ns = SpongeState::default();
                        out.done = true;
                        tracing::debug!(mode = %st.params.mode, "digest complete");
                    } else {
                        ns.squeeze_cursor = u8b(sq.cursor);
                        if sq.repermute {
                            ns.round = u8b(0);
                            ns.phase = Phase::Theta;
                        }
                    }
                }
            }
        }
    }

    (ns, out)
}

/// Step with idle inputs until the controller blocks; returns the step count.
pub fn settle(mut st: SpongeState) -> (SpongeState, u64) {
    let mut steps = 0u64;
    while !is_blocked(&st) {
        st = sponge_step(st, SpongeIn::default()).0;
        steps += 1;
    }
    (st, steps)
}
