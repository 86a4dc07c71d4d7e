/**
 * Password Hashing
 *
 * Thin wrappers around bcrypt for hashing and verifying passwords.
 * bcrypt embeds a random salt per hash, so two hashes of the same
 * password never compare equal, and verification is resistant to
 * early-exit timing differences.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a plaintext password against a stored hash
///
/// Returns `Ok(false)` for a wrong password. An `Err` means the stored
/// hash itself is malformed, which is a server-side problem and must not
/// be reported as bad credentials.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BcryptError> {
    verify(password, password_hash)
}
