//! Identity entity — the resumable authentication token bound to a user
//!
//! An `Identity` owns the rotating remember-me secret (the "cookie key") and
//! the flag recording whether the current session was established through the
//! persistent-login path. Rotation is the security hinge of logout: once the
//! key is regenerated, every artifact derived from the old value is dead.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A secret that can be handed out and later revoked wholesale by
/// regenerating it. Implemented by [`Identity`] for its cookie key.
pub trait RotatableToken {
    /// Current secret value (opaque hex string)
    fn secret(&self) -> &str;

    /// Replace the secret with `bytes` fresh random bytes. All holders of
    /// the previous value lose authentication capability.
    fn rotate_secret(&mut self, bytes: usize);
}

/// Identity record — one per user, created alongside it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Owning user's id
    pub user_id: String,
    /// Rotating remember-me secret, hex-encoded
    pub cookie_key: String,
    /// Whether the session should be resumable via the cookie key
    pub login_by_cookie: bool,
}

impl Identity {
    /// Mint a fresh identity for `user_id` with a `key_bytes`-byte cookie key
    pub fn issue(user_id: impl Into<String>, key_bytes: usize) -> Self {
        Self {
            user_id: user_id.into(),
            cookie_key: fresh_key(key_bytes),
            login_by_cookie: false,
        }
    }

    /// Toggle the persistent-login path for the session being established
    pub fn set_persistent(&mut self, persistent: bool) {
        self.login_by_cookie = persistent;
    }

    pub fn is_persistent(&self) -> bool {
        self.login_by_cookie
    }

    /// Check a presented cookie key against the stored one.
    ///
    /// Compares SHA-256 digests rather than the raw strings, so the
    /// comparison cost does not depend on where the candidate diverges.
    pub fn validate_cookie_key(&self, candidate: &str) -> bool {
        Sha256::digest(candidate.as_bytes()) == Sha256::digest(self.cookie_key.as_bytes())
    }
}

impl RotatableToken for Identity {
    fn secret(&self) -> &str {
        &self.cookie_key
    }

    fn rotate_secret(&mut self, bytes: usize) {
        self.cookie_key = fresh_key(bytes);
    }
}

fn fresh_key(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_generates_hex_key() {
        let identity = Identity::issue("u1", 32);
        assert_eq!(identity.cookie_key.len(), 64);
        assert!(identity.cookie_key.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!identity.login_by_cookie);
    }

    #[test]
    fn test_rotation_replaces_key() {
        let mut identity = Identity::issue("u1", 32);
        let before = identity.cookie_key.clone();
        identity.rotate_secret(32);
        assert_ne!(identity.cookie_key, before);
        assert_eq!(identity.cookie_key.len(), before.len());
    }

    #[test]
    fn test_validate_cookie_key() {
        let mut identity = Identity::issue("u1", 32);
        let captured = identity.cookie_key.clone();
        assert!(identity.validate_cookie_key(&captured));

        identity.rotate_secret(32);
        assert!(!identity.validate_cookie_key(&captured));
        assert!(identity.validate_cookie_key(&identity.cookie_key.clone()));
    }

    #[test]
    fn test_persistent_flag() {
        let mut identity = Identity::issue("u1", 32);
        identity.set_persistent(true);
        assert!(identity.is_persistent());
        identity.set_persistent(false);
        assert!(!identity.is_persistent());
    }

    #[test]
    fn test_serialization_round_trip() {
        let identity = Identity::issue("u1", 16);
        let json = serde_json::to_string(&identity).unwrap();
        let parsed: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.cookie_key, identity.cookie_key);
        assert_eq!(parsed.user_id, "u1");
    }
}
