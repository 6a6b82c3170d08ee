//! Salted-hash password credentials.
//!
//! A stored credential is a pair of hex strings: a random salt and the
//! digest `sha256(password || salt)` over the UTF-8 bytes of both. The
//! construction matches the stored-credential format and is deliberately
//! kept as-is; it is not a key-derivation function and new designs should
//! reach for one.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes in a freshly generated salt.
const SALT_BYTES: usize = 16;

/// Generate a fresh cryptographically random salt, hex-encoded.
///
/// 16 random bytes, so the result is always 32 hex characters.
#[must_use]
pub fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Digest a password with the given salt.
///
/// Returns the hex-encoded sha256 of `password || salt`.
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}
