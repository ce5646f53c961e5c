//! # Authway
//!
//! Authentication core — turns a login/password pair into an authenticated
//! identity and back. Covers credential verification, session lifecycle,
//! signup with login uniqueness, and a rotating remember-me secret that is
//! regenerated on every logout so stale persistent-login artifacts die with
//! the session that issued them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                AuthService                  │
//! │    (login / logout / signup / is_guest)     │
//! ├───────────────────────┬─────────────────────┤
//! │    CredentialStore    │    SessionBinder    │
//! │  (users, identities)  │  (guest <-> bound)  │
//! ├───────────────────────┴─────────────────────┤
//! │             User        Identity            │
//! │   (verifies password)   (rotates secret)    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Storage and session transport sit behind traits; the crate ships
//! [`MemoryStore`] and [`SessionState`] as default implementations.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use authway::{AuthService, MemoryStore, SessionState};
//!
//! #[tokio::main]
//! async fn main() -> authway::Result<()> {
//!     let mut auth = AuthService::new(MemoryStore::new(), SessionState::new());
//!
//!     auth.signup("alice", "s3cret").await?;
//!     auth.login("alice", "s3cret", true).await?;
//!     assert!(!auth.is_guest());
//!
//!     // Rotates the remember-me key before returning to guest
//!     auth.logout().await?;
//!     assert!(auth.is_guest());
//!     Ok(())
//! }
//! ```
//!
//! ## Properties
//!
//! - **No login enumeration**: unknown login and wrong password are the same
//!   error.
//! - **Rotation on logout**: the remember-me key is regenerated and persisted
//!   before the session unbinds; old keys never authenticate again.
//! - **Fail closed**: if persisting the rotated key fails, the session stays
//!   bound and the error propagates.
//! - **Railway Programming**: all fallible operations return
//!   `Result<T, AuthError>`.

pub mod config;
pub mod error;
pub mod identity;
pub mod service;
pub mod session;
pub mod store;
pub mod user;

// Re-exports for convenience
pub use config::{AuthConfig, RebindPolicy};
pub use error::{AuthError, Result};
pub use identity::{Identity, RotatableToken};
pub use service::AuthService;
pub use session::{SessionBinder, SessionState};
pub use store::CredentialStore;
pub use user::{Credential, HashedPassword, User};

#[cfg(feature = "memory")]
pub use store::MemoryStore;
