//! Data models for the Stripe API.
//!
//! This module contains the request parameter types and response objects
//! for the supported endpoints. Models are organized by resource:
//!
//! - [`primitives`] - Identifier newtypes and the API version
//! - [`enums`] - Status, brand and flow enumerations
//! - [`currency`] - ISO currency codes
//! - [`params`] - Options shared by every request and every list
//! - [`expandable`] - Fields holding either an ID or the expanded object
//! - [`bank_account`] - Bank accounts
//! - [`card`] - Cards
//! - [`source`] - Source parameters and source objects
//! - [`payment_source`] - A customer's polymorphic payment sources
//! - [`charge`] - Charges
//! - [`customer`] - Customers
//! - [`address`] - Addresses and shipping details

pub mod address;
pub mod bank_account;
pub mod card;
pub mod charge;
pub mod currency;
pub mod customer;
pub mod enums;
pub mod expandable;
pub mod params;
pub mod payment_source;
pub mod primitives;
pub mod source;

// Re-export commonly used types
pub use address::*;
pub use bank_account::*;
pub use card::*;
pub use charge::*;
pub use currency::*;
pub use customer::*;
pub use enums::*;
pub use expandable::*;
pub use params::*;
pub use payment_source::*;
pub use primitives::*;
pub use source::*;
