//! Primitive types and newtypes for type-safe API interactions.
//!
//! Strongly-typed wrappers around the identifiers that select an endpoint
//! path, so a customer ID cannot be passed where a connected account ID is
//! expected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer ID (`cus_…`).
///
/// # Example
///
/// ```
/// use stripe_rs::CustomerId;
///
/// let customer = CustomerId::new("cus_123");
/// println!("Customer: {}", customer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Create a new customer ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CustomerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A connected account ID (`acct_…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// API version in `YYYY-MM-DD` format.
///
/// Stripe versions its API by release date. Pinning a version sends it as
/// the `Stripe-Version` header on every request.
///
/// # Example
///
/// ```
/// use stripe_rs::ApiVersion;
///
/// let version = ApiVersion::new("2024-06-20").expect("valid version");
/// assert_eq!(version.as_str(), "2024-06-20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Create a new API version, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the version is not a valid `YYYY-MM-DD` date.
    pub fn new(version: &str) -> crate::Result<Self> {
        let date = NaiveDate::parse_from_str(version, "%Y-%m-%d").map_err(|_| {
            crate::Error::InvalidInput(format!(
                "Invalid API version format: {version}. Expected YYYY-MM-DD"
            ))
        })?;

        // parse_from_str accepts unpadded fields; the header must match exactly.
        if date.format("%Y-%m-%d").to_string() != version {
            return Err(crate::Error::InvalidInput(format!(
                "Invalid API version format: {version}. Expected YYYY-MM-DD"
            )));
        }

        Ok(ApiVersion(version.to_string()))
    }

    /// Get the version as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
