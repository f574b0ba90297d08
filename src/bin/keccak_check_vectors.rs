// Checks a vector file (default: vectors/keccak_vectors.txt) through the sponge driver.
// Format per line: MODE OUTLEN MSG DIGEST

use std::env;
use std::fs;
use std::process::ExitCode;

use keccak_sponge::keccak_vectors::parse_vectors;

fn main() -> ExitCode {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "vectors/keccak_vectors.txt".to_string());
    let txt = fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {path}: {e}"));

    let vectors = match parse_vectors(&txt) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut ok = 0usize;
    let mut fail = 0usize;
    for (i, v) in vectors.iter().enumerate() {
        let got = v.compute().expect("sponge session failed");
        if got == v.digest {
            ok += 1;
        } else {
            fail += 1;
            println!("FAIL #{i}: {} msg_len={} out_bits={}", v.mode, v.msg.len(), v.out_bits);
            println!("  expected {}", hex::encode(&v.digest));
            println!("  got      {}", hex::encode(&got));
        }
    }

    println!("{path}: {ok} OK, {fail} FAIL");
    if fail == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
