//! # stripe-rs
//!
//! An async Rust client for the Stripe API.
//!
//! This crate covers bank accounts, cards, sources, customer payment sources
//! and charges. Request parameters are plain structs encoded as Stripe's
//! bracketed form fields; responses decode into typed models.
//!
//! ## Features
//!
//! - **Form encoding**: `serde`-driven encoding of nested parameters into
//!   `application/x-www-form-urlencoded` bodies
//! - **Expandable fields**: fields that hold either an ID or the expanded
//!   object decode into [`models::Expandable`]
//! - **Pagination**: list endpoints return a [`ListIter`] that fetches pages
//!   on demand
//! - **Retries**: idempotent requests are retried on transient failures
//! - **Async-first**: Built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stripe_rs::StripeClient;
//! use stripe_rs::models::{ChargeParams, Currency, SourceParams};
//!
//! #[tokio::main]
//! async fn main() -> stripe_rs::Result<()> {
//!     // Reads STRIPE_SECRET_KEY
//!     let client = StripeClient::from_env()?;
//!
//!     let charge = client
//!         .charges()
//!         .create(&ChargeParams {
//!             amount: Some(2000),
//!             currency: Some(Currency::Usd),
//!             source: Some(SourceParams::token("tok_visa")),
//!             description: Some("Order #6735".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("Charge {} is {:?}", charge.id, charge.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Listing
//!
//! ```rust,no_run
//! use stripe_rs::StripeClient;
//! use stripe_rs::models::{ListParams, SourceListParams};
//!
//! #[tokio::main]
//! async fn main() -> stripe_rs::Result<()> {
//!     let client = StripeClient::from_env()?;
//!
//!     let params = SourceListParams {
//!         list: ListParams::new().with_limit(10),
//!         ..SourceListParams::for_customer("cus_123")
//!     };
//!     let mut sources = client.payment_sources().list(&params).await?;
//!
//!     while sources.advance().await {
//!         if let Some(card) = sources.current().and_then(|s| s.as_card()) {
//!             println!("{}", card.display());
//!         }
//!     }
//!
//!     if let Some(err) = sources.err() {
//!         eprintln!("listing failed: {err}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod form;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::ApiKey;
pub use client::{ClientConfig, ListIter, RetryConfig, StripeClient};
pub use error::{Error, Result};
pub use models::{AccountId, ApiVersion, CustomerId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use stripe_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::ApiKey;
    pub use crate::client::{ClientConfig, ListIter, RetryConfig, StripeClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        AccountId, ApiVersion, Currency, CustomerId,
        // Common parameters
        ListParams, Params,
        // Expandable references
        Expandable, Object,
        // Resources
        BankAccount, BankAccountListParams, BankAccountParams, CaptureParams, Card, CardParams,
        Charge, ChargeListParams, ChargeParams, Customer, CustomerSourceParams, PaymentSource,
        SourceListParams, SourceObject, SourceObjectParams, SourceParams, SourceVerifyParams,
    };
}
