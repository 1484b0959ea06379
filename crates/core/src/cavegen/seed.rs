//! Seed values and their resolution to the numeric stream seed.

use std::convert::Infallible;
use std::fmt;
use std::process;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// A configured seed: either a raw number or free text hashed to one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    pub fn to_u64(&self) -> u64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => xxh3_64(text.as_bytes()),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::Text("cave".to_string())
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Digits parse as a number; anything else is kept as text.
impl FromStr for Seed {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(raw.parse::<u64>().map_or_else(|_| Self::Text(raw.to_string()), Self::Number))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

pub(super) fn resolve_seed(seed: &Seed, randomize: bool) -> u64 {
    if randomize { runtime_seed() } else { seed.to_u64() }
}

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Time-varying seed; successive calls in one process never repeat.
pub fn runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15);

    mix_seed(entropy)
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_seeds_hash_stably_and_distinctly() {
        assert_eq!(Seed::from("abc").to_u64(), Seed::from("abc").to_u64());
        assert_ne!(Seed::from("abc").to_u64(), Seed::from("abd").to_u64());
    }

    #[test]
    fn numeric_seeds_pass_through() {
        assert_eq!(Seed::Number(42).to_u64(), 42);
        assert_eq!(resolve_seed(&Seed::Number(42), false), 42);
    }

    #[test]
    fn parsing_prefers_numbers_and_falls_back_to_text() {
        assert_eq!("1234".parse::<Seed>(), Ok(Seed::Number(1234)));
        assert_eq!("abc".parse::<Seed>(), Ok(Seed::Text("abc".to_string())));
        assert_eq!("-5".parse::<Seed>(), Ok(Seed::Text("-5".to_string())));
    }

    #[test]
    fn randomize_ignores_the_configured_seed() {
        let first = resolve_seed(&Seed::Number(7), true);
        let second = resolve_seed(&Seed::Number(7), true);
        assert_ne!(first, second, "runtime seeds should vary per call");
    }

    #[test]
    fn serialized_seeds_keep_their_kind() {
        assert_eq!(serde_json::from_str::<Seed>("42").expect("number"), Seed::Number(42));
        assert_eq!(serde_json::from_str::<Seed>("\"abc\"").expect("text"), Seed::from("abc"));
        assert_eq!(serde_json::to_string(&Seed::from("abc")).expect("serialize"), "\"abc\"");
    }
}
