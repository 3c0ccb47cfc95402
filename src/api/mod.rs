//! API service modules for Stripe endpoints.
//!
//! Each service provides methods for interacting with a specific
//! resource of the Stripe API.

mod bank_accounts;
mod charges;
mod payment_sources;
mod sources;

pub use bank_accounts::BankAccountsService;
pub use charges::ChargesService;
pub use payment_sources::PaymentSourcesService;
pub use sources::SourcesService;

use crate::models::CustomerId;
use crate::{Error, Result};

/// Customer-scoped endpoints cannot be addressed without a customer.
pub(crate) fn require_customer(customer: Option<&CustomerId>) -> Result<&CustomerId> {
    customer.ok_or_else(|| Error::InvalidInput("A customer ID is required".to_string()))
}
