//! Random name tokens for generated worker objects.
//!
//! The random source is always supplied by the caller. Use `rand::rng()`
//! for a thread-local, OS-seeded generator, or a seeded `StdRng` when the
//! output has to be reproducible.

use rand::Rng;

use crate::NamingConfig;

/// Characters allowed in the first position. Names must start with a letter.
const LEADING_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Characters allowed after the first position.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz1234567890";

/// Generate a lowercase alphanumeric token of `len` characters.
///
/// The first character is always a letter so the token is usable as a
/// DNS label on its own. A zero length yields an empty string.
#[must_use]
pub fn random_token<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|i| {
            let charset = if i == 0 { LEADING_CHARSET } else { CHARSET };
            char::from(charset[rng.random_range(0..charset.len())])
        })
        .collect()
}

/// Build a worker object name as `{base}-{token}`.
#[must_use]
pub fn worker_name<R: Rng>(base: &str, config: &NamingConfig, rng: &mut R) -> String {
    format!("{base}-{}", random_token(rng, config.suffix_length))
}
