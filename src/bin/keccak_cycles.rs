// Step counts for the sponge controller (one step = one clock) and the
// resulting latency / throughput at a few target frequencies.

use keccak_sponge::keccak_stream::Sponge;
use keccak_sponge::Mode;

struct Run {
    steps: u64,
    permutations: u64,
}

fn session_steps(mode: Mode, msg_len: usize) -> Run {
    let msg = vec![0xA5u8; msg_len];
    let out_len = mode.params().output_bytes().unwrap_or(mode.params().rate_bytes());

    let mut sp = Sponge::new();
    sp.start(mode).expect("start");
    sp.finish(&msg).expect("absorb");
    let mut out = vec![0u8; out_len];
    sp.read(&mut out).expect("squeeze");
    if !sp.is_idle() {
        sp.stop().expect("stop");
    }
    assert!(sp.is_idle(), "{mode} stuck");

    Run {
        steps: sp.steps(),
        permutations: sp.permutations(),
    }
}

fn main() {
    let freqs_mhz = [100.0, 200.0, 250.0];
    let lens = [0usize, 64, 200, 1024];

    println!("Latency formula: T_us = steps / F_MHz");
    println!("Throughput formula: MB/s = msg_bytes * F_MHz / steps");
    println!();

    for mode in Mode::ALL {
        println!("{mode} (rate {} bytes)", mode.params().rate_bytes());
        for len in lens {
            let r = session_steps(mode, len);
            print!("  msg {:5} B: {:6} steps, {} permutations |", len, r.steps, r.permutations);
            for f in freqs_mhz {
                let lat_us = r.steps as f64 / f;
                let mbps = len as f64 * f / r.steps as f64;
                print!(" {:.0} MHz: {:7.3} us {:7.2} MB/s |", f, lat_us, mbps);
            }
            println!();
        }
        println!();
    }
}
