//! Configuration for the authentication core

/// Policy for a login attempt while the session is already bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebindPolicy {
    /// Re-bind the session to the newly authenticated identity
    Replace,
    /// Fail the attempt with `AlreadyAuthenticated`
    Reject,
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Byte length of the remember-me cookie key (hex-encoded on issue)
    pub cookie_key_bytes: usize,

    /// What `login` does when the session is already authenticated
    pub rebind: RebindPolicy,
}

impl AuthConfig {
    /// Create config with sensible defaults
    pub fn new() -> Self {
        Self {
            cookie_key_bytes: 32,
            rebind: RebindPolicy::Replace,
        }
    }

    /// Override the cookie key length
    pub fn with_cookie_key_bytes(mut self, bytes: usize) -> Self {
        self.cookie_key_bytes = bytes;
        self
    }

    /// Override the double-login policy
    pub fn with_rebind(mut self, rebind: RebindPolicy) -> Self {
        self.rebind = rebind;
        self
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = AuthConfig::new();
        assert_eq!(cfg.cookie_key_bytes, 32);
        assert_eq!(cfg.rebind, RebindPolicy::Replace);
    }

    #[test]
    fn test_builder_pattern() {
        let cfg = AuthConfig::new()
            .with_cookie_key_bytes(16)
            .with_rebind(RebindPolicy::Reject);

        assert_eq!(cfg.cookie_key_bytes, 16);
        assert_eq!(cfg.rebind, RebindPolicy::Reject);
    }
}
