// Mode table: selector -> rate, domain suffix, output length.
// Un selector necunoscut cade pe SHA3-256; o rata zero ar bloca controllerul.

use core::fmt;
use core::str::FromStr;

use crate::keccak_errors::SpongeError;
use crate::keccak_params::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Sha3_256,
    Sha3_512,
    Shake128,
    Shake256,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Sha3_256, Mode::Sha3_512, Mode::Shake128, Mode::Shake256];

    /// Raw selector value driven on the control surface.
    pub const fn selector(self) -> u8 {
        match self {
            Mode::Sha3_256 => 0,
            Mode::Sha3_512 => 1,
            Mode::Shake128 => 2,
            Mode::Shake256 => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Mode::Sha3_256 => "SHA3_256",
            Mode::Sha3_512 => "SHA3_512",
            Mode::Shake128 => "SHAKE128",
            Mode::Shake256 => "SHAKE256",
        }
    }

    pub const fn params(self) -> ModeParams {
        match self {
            Mode::Sha3_256 => ModeParams {
                mode: self,
                rate_bits: SHA3_256_RATE_BITS,
                suffix: SHA3_SUFFIX,
                suffix_len: SHA3_SUFFIX_LEN,
                output_bits: Some(SHA3_256_OUTPUT_BITS),
            },
            Mode::Sha3_512 => ModeParams {
                mode: self,
                rate_bits: SHA3_512_RATE_BITS,
                suffix: SHA3_SUFFIX,
                suffix_len: SHA3_SUFFIX_LEN,
                output_bits: Some(SHA3_512_OUTPUT_BITS),
            },
            Mode::Shake128 => ModeParams {
                mode: self,
                rate_bits: SHAKE128_RATE_BITS,
                suffix: SHAKE_SUFFIX,
                suffix_len: SHAKE_SUFFIX_LEN,
                output_bits: None,
            },
            Mode::Shake256 => ModeParams {
                mode: self,
                rate_bits: SHAKE256_RATE_BITS,
                suffix: SHAKE_SUFFIX,
                suffix_len: SHAKE_SUFFIX_LEN,
                output_bits: None,
            },
        }
    }

    pub const fn is_xof(self) -> bool {
        matches!(self, Mode::Shake128 | Mode::Shake256)
    }
}

impl TryFrom<u8> for Mode {
    type Error = SpongeError;

    fn try_from(sel: u8) -> Result<Self, Self::Error> {
        match sel {
            0 => Ok(Mode::Sha3_256),
            1 => Ok(Mode::Sha3_512),
            2 => Ok(Mode::Shake128),
            3 => Ok(Mode::Shake256),
            other => Err(SpongeError::UnknownMode(other)),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "SHA3_256" => Ok(Mode::Sha3_256),
            "SHA3_512" => Ok(Mode::Sha3_512),
            "SHAKE128" | "SHAKE_128" => Ok(Mode::Shake128),
            "SHAKE256" | "SHAKE_256" => Ok(Mode::Shake256),
            _ => Err(format!("unknown mode name {s:?}")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Session parameters, latched at start and held until Idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeParams {
    pub mode: Mode,
    pub rate_bits: u16,
    /// Suffix bits, LSB-first.
    pub suffix: u8,
    pub suffix_len: u8,
    /// `None` for extendable output.
    pub output_bits: Option<u16>,
}

impl Default for ModeParams {
    fn default() -> Self {
        Mode::default().params()
    }
}

impl ModeParams {
    #[inline(always)]
    pub const fn rate_bytes(&self) -> usize {
        self.rate_bits as usize / 8
    }

    #[inline(always)]
    pub const fn rate_lanes(&self) -> usize {
        self.rate_bytes() / LANE_BYTES
    }

    /// Suffix followed by the first `1` of pad10*1, as written at the message end.
    #[inline(always)]
    pub const fn domain_byte(&self) -> u8 {
        self.suffix | (1 << self.suffix_len)
    }

    pub const fn output_bytes(&self) -> Option<usize> {
        match self.output_bits {
            Some(b) => Some(b as usize / 8),
            None => None,
        }
    }

    pub const fn is_xof(&self) -> bool {
        self.output_bits.is_none()
    }
}

/// Fail-safe lookup: an unknown selector resolves to SHA3-256.
pub fn mode_params(sel: u8) -> ModeParams {
    match Mode::try_from(sel) {
        Ok(mode) => mode.params(),
        Err(_) => {
            tracing::warn!(selector = sel, "unknown mode selector, falling back to SHA3_256");
            Mode::Sha3_256.params()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_fips202() {
        let rates: Vec<usize> = Mode::ALL.iter().map(|m| m.params().rate_bytes()).collect();
        assert_eq!(rates, vec![136, 72, 168, 136]);

        assert_eq!(Mode::Sha3_256.params().domain_byte(), 0x06);
        assert_eq!(Mode::Sha3_512.params().domain_byte(), 0x06);
        assert_eq!(Mode::Shake128.params().domain_byte(), 0x1F);
        assert_eq!(Mode::Shake256.params().domain_byte(), 0x1F);

        assert_eq!(Mode::Sha3_256.params().output_bytes(), Some(32));
        assert_eq!(Mode::Sha3_512.params().output_bytes(), Some(64));
        assert!(Mode::Shake128.params().is_xof());
        assert!(Mode::Shake256.params().is_xof());
    }

    #[test]
    fn selector_roundtrip() {
        for m in Mode::ALL {
            assert_eq!(Mode::try_from(m.selector()).unwrap(), m);
            assert_eq!(mode_params(m.selector()), m.params());
        }
    }

    #[test]
    fn unknown_selector_never_zeroes_rate() {
        for sel in 4u8..=255 {
            let p = mode_params(sel);
            assert_eq!(p, Mode::Sha3_256.params());
            assert!(p.rate_bytes() > 0);
        }
        assert_eq!(Mode::try_from(7), Err(SpongeError::UnknownMode(7)));
    }

    #[test]
    fn parses_vector_file_names() {
        assert_eq!("SHA3-256".parse::<Mode>().unwrap(), Mode::Sha3_256);
        assert_eq!("sha3_512".parse::<Mode>().unwrap(), Mode::Sha3_512);
        assert_eq!("SHAKE128".parse::<Mode>().unwrap(), Mode::Shake128);
        assert!("SHA2_256".parse::<Mode>().is_err());
    }
}
