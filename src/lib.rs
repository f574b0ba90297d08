pub mod keccak_params;
pub mod keccak_errors;
pub mod keccak_mode;
pub mod keccak_state;
pub mod keccak;

pub mod keccak_chunk;
pub mod keccak_absorb;
pub mod keccak_pad;
pub mod keccak_squeeze;
pub mod keccak_core;
pub mod keccak_stream;

pub mod shake;
pub mod xof_stream;
pub mod keccak_vectors;

pub use keccak_errors::SpongeError;
pub use keccak_mode::{mode_params, Mode, ModeParams};
pub use keccak_stream::Sponge;
