//! User entity — the registered principal
//!
//! A user owns its credential and validates candidate passwords itself; the
//! service never sees hash material. Creating a user also mints its paired
//! [`Identity`](crate::identity::Identity) — the two always exist together.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::identity::Identity;

/// A verifiable secret. The only thing the rest of the crate may ask of a
/// credential is whether a candidate matches.
pub trait Credential {
    fn verify(&self, candidate: &str) -> bool;
}

/// Argon2id credential in PHC string format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Hash a raw password with a fresh OS-random salt
    pub fn derive(password: &str) -> Result<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();
        Ok(Self(phc))
    }

    /// Rehydrate from a stored PHC string
    pub fn from_phc(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }
}

impl Credential for HashedPassword {
    fn verify(&self, candidate: &str) -> bool {
        // A hash that no longer parses can never match.
        let Ok(parsed) = PasswordHash::new(&self.0) else {
            return false;
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

/// User record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub login: String,
    pub credential: HashedPassword,
    pub created_at: String,
}

impl User {
    /// Build a new user from raw signup input, minting its identity.
    ///
    /// The cookie key of the returned identity is `key_bytes` random bytes.
    pub fn create(login: impl Into<String>, password: &str, key_bytes: usize) -> Result<(Self, Identity)> {
        let user_id = Uuid::new_v4().to_string();
        let identity = Identity::issue(user_id.clone(), key_bytes);
        let user = Self {
            user_id,
            login: login.into(),
            credential: HashedPassword::derive(password)?,
            created_at: Utc::now().to_rfc3339(),
        };
        Ok((user, identity))
    }

    /// Check a candidate password against the stored credential
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.credential.verify(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_and_verify() {
        let cred = HashedPassword::derive("s3cret").unwrap();
        assert!(cred.verify("s3cret"));
        assert!(!cred.verify("wrong"));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let cred = HashedPassword::from_phc("not-a-phc-string");
        assert!(!cred.verify("anything"));
    }

    #[test]
    fn test_create_pairs_user_and_identity() {
        let (user, identity) = User::create("alice", "s3cret", 32).unwrap();
        assert_eq!(identity.user_id, user.user_id);
        assert_eq!(user.login, "alice");
        assert!(user.verify_password("s3cret"));
        assert!(!user.verify_password("S3cret"));
    }

    #[test]
    fn test_user_serialization_round_trip() {
        let (user, _) = User::create("bob", "pw", 16).unwrap();
        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.login, "bob");
        assert!(parsed.verify_password("pw"));
    }
}
