// Compares the sponge controller against the RustCrypto sha3 crate:
//  1) byte-level equality for every mode over a range of message lengths
//  2) timing (the controller steps one phase at a time, so expect it to be slow)

use std::time::Instant;

use keccak_sponge::shake;
use keccak_sponge::Mode;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Digest;

fn lib_hash(mode: Mode, msg: &[u8], out: &mut [u8]) {
    match mode {
        Mode::Sha3_256 => out.copy_from_slice(&sha3::Sha3_256::digest(msg)),
        Mode::Sha3_512 => out.copy_from_slice(&sha3::Sha3_512::digest(msg)),
        Mode::Shake128 => {
            let mut h = sha3::Shake128::default();
            Update::update(&mut h, msg);
            h.finalize_xof().read(out);
        }
        Mode::Shake256 => {
            let mut h = sha3::Shake256::default();
            Update::update(&mut h, msg);
            h.finalize_xof().read(out);
        }
    }
}

fn hw_hash(mode: Mode, msg: &[u8], out: &mut [u8]) {
    match mode {
        Mode::Sha3_256 => out.copy_from_slice(&shake::sha3_256(msg)),
        Mode::Sha3_512 => out.copy_from_slice(&shake::sha3_512(msg)),
        Mode::Shake128 => shake::shake128(msg, out),
        Mode::Shake256 => shake::shake256(msg, out),
    }
}

fn main() {
    println!("=== equality vs sha3 crate ===");
    let mut failures = 0usize;
    for mode in Mode::ALL {
        let r = mode.params().rate_bytes();
        let out_len = mode.params().output_bytes().unwrap_or(3 * r);
        for len in [0, 1, r - 1, r, r + 1, 2 * r, 1000, 4096] {
            let msg: Vec<u8> = (0..len).map(|i| (i * 131 + 7) as u8).collect();
            let mut a = vec![0u8; out_len];
            let mut b = vec![0u8; out_len];
            hw_hash(mode, &msg, &mut a);
            lib_hash(mode, &msg, &mut b);
            if a != b {
                failures += 1;
                println!("FAIL: {mode} len={len}");
                println!("  hw  {}", hex::encode(&a));
                println!("  lib {}", hex::encode(&b));
            }
        }
        println!("{mode}: checked");
    }
    println!("mismatches: {failures}");
    println!();

    println!("=== timing (1 KiB message) ===");
    let msg = vec![0x3Cu8; 1024];
    const ITERS: u32 = 200;
    for mode in Mode::ALL {
        let out_len = mode.params().output_bytes().unwrap_or(64);
        let mut out = vec![0u8; out_len];

        let t0 = Instant::now();
        for _ in 0..ITERS {
            hw_hash(mode, &msg, &mut out);
        }
        let hw = t0.elapsed() / ITERS;

        let t0 = Instant::now();
        for _ in 0..ITERS {
            lib_hash(mode, &msg, &mut out);
        }
        let lib = t0.elapsed() / ITERS;

        println!("{mode}: controller {:?}/op, sha3 crate {:?}/op", hw, lib);
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
