//! SessionBinder — the ambient "current session" made explicit
//!
//! Instead of reading process-wide state, the service receives a binder as a
//! dependency and drives it to reflect authentication outcomes. The binder
//! tracks one caller context: either guest, or bound to an identity.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Session tracking capabilities required by the authentication core.
///
/// The transport behind it (cookies, headers, a TUI prompt) is not this
/// crate's concern; a binder only needs to hold the bound identity and
/// answer who, if anyone, is authenticated.
pub trait SessionBinder: Send + Sync {
    /// Bind the session to `identity`. Returns whether the bind took effect.
    fn bind(&mut self, identity: &Identity) -> bool;

    /// Return to guest state. Returns false if nothing was bound.
    fn unbind(&mut self) -> bool;

    fn is_guest(&self) -> bool;

    /// The currently bound identity, if any
    fn current(&self) -> Option<Identity>;
}

/// Default in-process binder — starts as guest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    bound: Option<Identity>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBinder for SessionState {
    fn bind(&mut self, identity: &Identity) -> bool {
        self.bound = Some(identity.clone());
        true
    }

    fn unbind(&mut self) -> bool {
        self.bound.take().is_some()
    }

    fn is_guest(&self) -> bool {
        self.bound.is_none()
    }

    fn current(&self) -> Option<Identity> {
        self.bound.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_as_guest() {
        let session = SessionState::new();
        assert!(session.is_guest());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_bind_and_unbind() {
        let mut session = SessionState::new();
        let identity = Identity::issue("u1", 32);

        assert!(session.bind(&identity));
        assert!(!session.is_guest());
        assert_eq!(session.current().unwrap().user_id, "u1");

        assert!(session.unbind());
        assert!(session.is_guest());
    }

    #[test]
    fn test_unbind_when_guest_reports_false() {
        let mut session = SessionState::new();
        assert!(!session.unbind());
    }

    #[test]
    fn test_rebind_replaces_identity() {
        let mut session = SessionState::new();
        session.bind(&Identity::issue("u1", 32));
        session.bind(&Identity::issue("u2", 32));
        assert_eq!(session.current().unwrap().user_id, "u2");
    }
}
