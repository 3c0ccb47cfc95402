//! HTTP client and service layer for the Stripe API.
//!
//! This module provides the main entry point [`StripeClient`] for
//! interacting with the Stripe API, and the [`ListIter`] cursor returned by
//! every list endpoint.
//!
//! # Example
//!
//! ```no_run
//! use stripe_rs::{ApiKey, ClientConfig, RetryConfig, StripeClient};
//!
//! # async fn example() -> stripe_rs::Result<()> {
//! let client = StripeClient::with_config(
//!     ApiKey::from_env()?,
//!     ClientConfig::default().with_retry(RetryConfig::default().with_max_retries(2)),
//! )?;
//!
//! let charge = client.charges().get("ch_123", None).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;

pub use config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL};
pub use http::StripeClient;
pub use paginated::{IterState, List, ListIter, ListMeta};
pub(crate) use http::ClientInner;
