//! # Errors of the checked sponge driver.
//!
//! The controller itself ([`crate::keccak_core::sponge_step`]) never fails: a
//! protocol violation shows up as a [`crate::keccak_core::Fault`] on the step
//! output and the state is left untouched. [`crate::keccak_stream::Sponge`]
//! checks the same preconditions up front and reports them as [`SpongeError`].

use crate::keccak_core::Phase;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpongeError {
    /// Selector outside the mode table (strict conversion only).
    #[error("unknown mode selector {0}")]
    UnknownMode(u8),
    /// `start` while a session is in flight; the latched mode is kept.
    #[error("a session is already active (phase {phase:?})")]
    SessionActive { phase: Phase },
    /// `stop` is only defined while squeezing.
    #[error("stop is only valid while squeezing (phase {phase:?})")]
    StopOutsideSqueeze { phase: Phase },
    /// Input offered while the absorber holds `ready` low.
    #[error("input offered while the absorber is not ready (phase {phase:?})")]
    InputNotReady { phase: Phase },
    /// Output requested while no squeeze chunk is presented.
    #[error("no output chunk available (phase {phase:?})")]
    OutputNotReady { phase: Phase },
    #[error("chunk of {len} bytes exceeds the {max}-byte stream width")]
    ChunkTooLong { len: usize, max: usize },
    #[error("malformed vector on line {line}: {reason}")]
    MalformedVector { line: usize, reason: String },
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}
