use keccak_sponge::keccak_chunk::ByteChunk;
use keccak_sponge::keccak_core::{settle, sponge_step, Phase, SpongeIn, SpongeState};
use keccak_sponge::keccak_params::{mask_bits, prefix_mask};
use keccak_sponge::shake::{sha3_256, sha3_512, shake128, shake256};
use keccak_sponge::xof_stream::ShakeStream;
use keccak_sponge::Mode;

fn main() {
    let msg = b"abc";

    let mut x128 = [0u8; 32];
    let mut x256 = [0u8; 64];
    shake128(msg, &mut x128);
    shake256(msg, &mut x256);

    println!("SHA3-256(abc)  = {}", hex::encode(sha3_256(msg)));
    println!("SHA3-512(abc)  = {}", hex::encode(sha3_512(msg)));
    println!("SHAKE128(abc)  = {}", hex::encode(x128));
    println!("SHAKE256(abc)  = {}", hex::encode(x256));

    let mut stream = ShakeStream::shake128(msg);
    let mut long = [0u8; 512];
    stream.fill_bytes(&mut long);
    println!("SHAKE128 stream: 512 bytes, {} re-permutations, tail = {}", stream.permutations(), hex::encode(&long[496..]));

    // FSM pas cu pas: starea dupa padding si dupa prima permutare
    let (st, _) = sponge_step(SpongeState::default(), SpongeIn::start(Mode::Sha3_256.selector()));
    let mut chunk = ByteChunk::empty();
    chunk.data[..msg.len()].copy_from_slice(msg);
    chunk.mask = mask_bits(prefix_mask(msg.len()));
    let (mut st, _) = sponge_step(st, SpongeIn::data(chunk, true));
    while st.phase != Phase::Theta {
        st = sponge_step(st, SpongeIn::default()).0;
    }
    println!();
    println!("state after padding:");
    println!("{}", st.state);

    let (st, steps) = settle(st);
    println!("state after keccak-f[1600] ({steps} steps):");
    println!("{}", st.state);
}
