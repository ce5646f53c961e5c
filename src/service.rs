//! AuthService — orchestrates login, logout, signup, and guest checks
//!
//! Per caller context the session cycles between two states: guest, and
//! authenticated with a bound identity. Login moves guest -> authenticated;
//! logout rotates the identity's cookie key, persists it, and only then
//! returns to guest. The rotation-before-unbind ordering is what makes a
//! logout revoke previously issued remember-me artifacts.

use tracing::{debug, info};

use crate::config::{AuthConfig, RebindPolicy};
use crate::error::{AuthError, Result};
use crate::identity::RotatableToken;
use crate::session::SessionBinder;
use crate::store::CredentialStore;
use crate::user::User;

/// Authentication service over a credential store and a session binder.
///
/// Both collaborators are explicit dependencies; the service holds no
/// ambient state of its own. One instance serves one caller context.
pub struct AuthService<S: CredentialStore, B: SessionBinder> {
    store: S,
    session: B,
    config: AuthConfig,
}

impl<S: CredentialStore, B: SessionBinder> AuthService<S, B> {
    pub fn new(store: S, session: B) -> Self {
        Self::with_config(store, session, AuthConfig::new())
    }

    pub fn with_config(store: S, session: B, config: AuthConfig) -> Self {
        Self {
            store,
            session,
            config,
        }
    }

    /// Verify a login/password pair and bind the session on success.
    ///
    /// A missing login and a failed password check both surface as
    /// [`AuthError::InvalidCredentials`] — callers cannot tell which logins
    /// exist. `persistent` is recorded on the identity in memory only; it
    /// reaches the store with the next rotation write (see `logout`).
    pub async fn login(&mut self, login: &str, password: &str, persistent: bool) -> Result<bool> {
        let Some((user, mut identity)) = self.store.find_user_with_identity(login).await? else {
            debug!(login = %login, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };
        if !user.verify_password(password) {
            debug!(login = %login, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        if !self.session.is_guest() && self.config.rebind == RebindPolicy::Reject {
            return Err(AuthError::AlreadyAuthenticated);
        }

        identity.set_persistent(persistent);
        let bound = self.session.bind(&identity);
        info!(login = %login, persistent, "Login successful");
        Ok(bound)
    }

    /// Terminate the authenticated session.
    ///
    /// If an identity is bound, its cookie key is rotated and persisted
    /// before the unbind. A persistence failure propagates and leaves the
    /// session bound: staying visibly authenticated beats appearing logged
    /// out while the old remember-me key still works.
    pub async fn logout(&mut self) -> Result<bool> {
        if let Some(mut identity) = self.session.current() {
            identity.rotate_secret(self.config.cookie_key_bytes);
            self.store.save_identity(&identity).await?;
            info!(user_id = %identity.user_id, "Cookie key rotated");
        }
        Ok(self.session.unbind())
    }

    /// Register a new user. Does not authenticate the caller.
    pub async fn signup(&self, login: &str, password: &str) -> Result<()> {
        if self.store.find_user_by_login(login).await?.is_some() {
            return Err(AuthError::DuplicateLogin(login.to_string()));
        }

        let (user, identity) = User::create(login, password, self.config.cookie_key_bytes)?;
        self.store.create_user(&user, &identity).await?;
        info!(login = %login, user_id = %user.user_id, "User registered");
        Ok(())
    }

    /// Whether the session is currently unauthenticated
    pub fn is_guest(&self) -> bool {
        self.session.is_guest()
    }

    /// The underlying credential store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying session binder
    pub fn session(&self) -> &B {
        &self.session
    }
}
