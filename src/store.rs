//! CredentialStore — repository seam for users and identities
//!
//! The core never talks to storage directly; it consumes the two query
//! shapes and two write shapes below. Login uses the combined lookup so a
//! user and its identity arrive from one round trip; signup uses the
//! user-only lookup because no identity exists yet at that point.

use async_trait::async_trait;

use crate::error::Result;
use crate::identity::Identity;
use crate::user::User;

/// Storage capabilities required by the authentication core.
///
/// Implementations own all cross-request consistency: `create_user` must be
/// atomic with respect to concurrent calls for the same login, so two racing
/// signups cannot both succeed.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user by login, without loading its identity
    async fn find_user_by_login(&self, login: &str) -> Result<Option<User>>;

    /// Look up a user together with its identity in a single retrieval
    async fn find_user_with_identity(&self, login: &str) -> Result<Option<(User, Identity)>>;

    /// Insert a freshly created user/identity pair, enforcing login
    /// uniqueness. Returns `DuplicateLogin` if the login is taken.
    async fn create_user(&self, user: &User, identity: &Identity) -> Result<()>;

    /// Write back an identity whose cookie key was rotated
    async fn save_identity(&self, identity: &Identity) -> Result<()>;
}

#[cfg(feature = "memory")]
pub use memory::MemoryStore;

#[cfg(feature = "memory")]
mod memory {
    use std::collections::HashMap;

    use parking_lot::Mutex;
    use tracing::debug;

    use super::*;
    use crate::error::AuthError;

    #[derive(Default)]
    struct Tables {
        /// login -> user
        users: HashMap<String, User>,
        /// user_id -> identity
        identities: HashMap<String, Identity>,
    }

    /// In-memory credential store.
    ///
    /// A single mutex serializes writes, which is what gives `create_user`
    /// its check-then-insert atomicity. Suitable for tests and single-process
    /// deployments; anything durable should implement [`CredentialStore`]
    /// over a real database.
    #[derive(Default)]
    pub struct MemoryStore {
        tables: Mutex<Tables>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl CredentialStore for MemoryStore {
        async fn find_user_by_login(&self, login: &str) -> Result<Option<User>> {
            Ok(self.tables.lock().users.get(login).cloned())
        }

        async fn find_user_with_identity(&self, login: &str) -> Result<Option<(User, Identity)>> {
            let tables = self.tables.lock();
            let Some(user) = tables.users.get(login) else {
                return Ok(None);
            };
            let identity = tables.identities.get(&user.user_id).cloned().ok_or_else(|| {
                AuthError::Persistence(format!("identity missing for user {}", user.user_id))
            })?;
            Ok(Some((user.clone(), identity)))
        }

        async fn create_user(&self, user: &User, identity: &Identity) -> Result<()> {
            let mut tables = self.tables.lock();
            if tables.users.contains_key(&user.login) {
                return Err(AuthError::DuplicateLogin(user.login.clone()));
            }
            tables.users.insert(user.login.clone(), user.clone());
            tables
                .identities
                .insert(identity.user_id.clone(), identity.clone());
            debug!(login = %user.login, "User stored");
            Ok(())
        }

        async fn save_identity(&self, identity: &Identity) -> Result<()> {
            let mut tables = self.tables.lock();
            match tables.identities.get_mut(&identity.user_id) {
                Some(slot) => {
                    *slot = identity.clone();
                    Ok(())
                }
                None => Err(AuthError::Persistence(format!(
                    "no identity record for user {}",
                    identity.user_id
                ))),
            }
        }
    }
}
