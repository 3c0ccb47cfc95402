//! API key handling.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable read by [`ApiKey::from_env`].
pub const API_KEY_ENV: &str = "STRIPE_SECRET_KEY";

const KEY_PREFIXES: [&str; 4] = ["sk_live_", "sk_test_", "rk_live_", "rk_test_"];

/// A Stripe secret (`sk_…`) or restricted (`rk_…`) API key.
///
/// Each client carries its own key, so clients with different credentials
/// can be used side by side.
#[derive(Clone)]
pub struct ApiKey {
    secret: SecretString,
    prefix: &'static str,
}

impl ApiKey {
    /// Wrap a secret or restricted key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty key or a publishable key
    /// (`pk_…`), which cannot authenticate server-side requests.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();

        if key.trim().is_empty() {
            return Err(Error::Config("API key is empty".to_string()));
        }
        if key.starts_with("pk_") {
            return Err(Error::Config(
                "publishable keys cannot be used for API requests".to_string(),
            ));
        }

        let prefix = KEY_PREFIXES
            .iter()
            .find(|p| key.starts_with(**p))
            .copied()
            .unwrap_or("");

        Ok(Self {
            secret: SecretString::from(key),
            prefix,
        })
    }

    /// Read the key from the `STRIPE_SECRET_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{API_KEY_ENV} is not set")))?;
        Self::new(key)
    }

    /// Returns `true` for test mode keys.
    pub fn is_test_mode(&self) -> bool {
        self.prefix.ends_with("test_")
    }

    /// Returns `true` for live mode keys.
    pub fn is_live_mode(&self) -> bool {
        self.prefix.ends_with("live_")
    }

    /// Value for the `Authorization` header.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.secret.expose_secret())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({}****)", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes() {
        assert!(ApiKey::new("sk_test_123").unwrap().is_test_mode());
        assert!(ApiKey::new("rk_live_123").unwrap().is_live_mode());

        let unknown = ApiKey::new("custom_123").unwrap();
        assert!(!unknown.is_test_mode());
        assert!(!unknown.is_live_mode());
    }

    #[test]
    fn test_rejects_empty_and_publishable() {
        assert!(matches!(ApiKey::new("  "), Err(Error::Config(_))));
        assert!(matches!(ApiKey::new("pk_test_123"), Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_redacts() {
        let key = ApiKey::new("sk_live_supersecret").unwrap();
        let printed = format!("{key:?}");
        assert!(!printed.contains("supersecret"));
        assert_eq!(key.bearer(), "Bearer sk_live_supersecret");
    }
}
