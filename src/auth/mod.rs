//! Authentication for the Stripe API.
//!
//! Every request is authenticated with a secret or restricted API key sent
//! as a bearer token. Keys are held in an [`ApiKey`], which never prints the
//! secret.
//!
//! ```
//! use stripe_rs::ApiKey;
//!
//! let key = ApiKey::new("sk_test_4eC39HqLyjWDarjtT1zdp7dc").unwrap();
//! assert!(key.is_test_mode());
//! assert_eq!(format!("{key:?}"), "ApiKey(sk_test_****)");
//! ```

mod api_key;

pub use api_key::ApiKey;
