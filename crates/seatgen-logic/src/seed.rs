//! Seed handling.
//!
//! A seed is whatever string the user typed (or nothing). It is folded into
//! one 64-bit value which initializes a ChaCha stream, so the same seed
//! replays the same generation on every platform.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Initializer used when no seed is given.
pub const DEFAULT_SEED_VALUE: u64 = 0;

/// Random source threaded through a whole generation run.
pub type SeatRng = ChaCha20Rng;

/// Map an optional seed string to the 64-bit random-source initializer.
///
/// Integer seeds (`"42"`, `"-7"`) are used as-is; anything else, including
/// padded integers like `" 42"`, is hashed.
pub fn seed_value(seed: Option<&str>) -> u64 {
    match seed {
        None => DEFAULT_SEED_VALUE,
        Some(s) => match s.parse::<i64>() {
            Ok(n) => n as u64,
            Err(_) => hash_seed(s),
        },
    }
}

/// Polynomial string hash (`h * 31 + byte`) over the UTF-8 bytes.
pub fn hash_seed(seed: &str) -> u64 {
    seed.bytes()
        .fold(0u64, |h, b| h.wrapping_mul(31).wrapping_add(u64::from(b)))
}

/// Build the random source for one generation run.
pub fn rng_from_seed(seed: Option<&str>) -> SeatRng {
    SeatRng::seed_from_u64(seed_value(seed))
}
