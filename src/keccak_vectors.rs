//! Line-oriented test vectors: `MODE OUTLEN MSG DIGEST`.
//!
//! MODE is one of `SHA3_256`, `SHA3_512`, `SHAKE128`, `SHAKE256` (dashes are
//! accepted), OUTLEN is in bits, MSG is hex or `EMPTY`, DIGEST is hex.
//! Blank lines and `#` comments are skipped.

use core::str::FromStr;

use crate::keccak_errors::SpongeError;
use crate::keccak_mode::Mode;
use crate::keccak_stream::Sponge;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestVector {
    pub mode: Mode,
    pub out_bits: usize,
    pub msg: Vec<u8>,
    pub digest: Vec<u8>,
}

fn malformed(line: usize, reason: impl Into<String>) -> SpongeError {
    SpongeError::MalformedVector {
        line,
        reason: reason.into(),
    }
}

fn parse_line(lineno: usize, line: &str) -> Result<TestVector, SpongeError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[mode, out_bits, msg, digest] = fields.as_slice() else {
        return Err(malformed(lineno, format!("expected 4 fields, got {}", fields.len())));
    };

    let mode = Mode::from_str(mode).map_err(|e| malformed(lineno, e))?;
    let out_bits: usize = out_bits
        .parse()
        .map_err(|_| malformed(lineno, format!("bad output length {out_bits:?}")))?;
    if out_bits % 8 != 0 {
        return Err(malformed(lineno, "output length is not a whole number of bytes"));
    }
    let msg = if msg.eq_ignore_ascii_case("EMPTY") {
        Vec::new()
    } else {
        hex::decode(msg)?
    };
    let digest = hex::decode(digest)?;
    if digest.len() * 8 != out_bits {
        return Err(malformed(
            lineno,
            format!("digest has {} bits, header says {out_bits}", digest.len() * 8),
        ));
    }

    Ok(TestVector { mode, out_bits, msg, digest })
}

pub fn parse_vectors(text: &str) -> Result<Vec<TestVector>, SpongeError> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .map(|(i, l)| parse_line(i, l))
        .collect()
}

impl TestVector {
    /// Run a full session through the checked driver.
    pub fn compute(&self) -> Result<Vec<u8>, SpongeError> {
        let mut sp = Sponge::new();
        sp.start(self.mode)?;
        sp.finish(&self.msg)?;

        let mut out = vec![0u8; self.out_bits / 8];
        let n = sp.read(&mut out)?;
        out.truncate(n);
        if !sp.is_idle() {
            sp.stop()?;
        }
        Ok(out)
    }

    pub fn check(&self) -> Result<bool, SpongeError> {
        Ok(self.compute()? == self.digest)
    }
}
