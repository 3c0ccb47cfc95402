//! Payment sources attached to a customer.

use serde::{Deserialize, Serialize};

use super::bank_account::BankAccount;
use super::card::Card;
use super::expandable::Object;
use super::params::{ListParams, Params};
use super::primitives::CustomerId;
use super::source::{SourceObject, SourceParams};

/// A customer's payment source, discriminated by its `object` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum PaymentSource {
    /// A card
    Card(Card),
    /// A bank account
    BankAccount(BankAccount),
    /// A source object
    Source(SourceObject),
}

impl PaymentSource {
    /// The card, if this source is one.
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            PaymentSource::Card(card) => Some(card),
            _ => None,
        }
    }

    /// The bank account, if this source is one.
    pub fn as_bank_account(&self) -> Option<&BankAccount> {
        match self {
            PaymentSource::BankAccount(account) => Some(account),
            _ => None,
        }
    }

    /// The source object, if this source is one.
    pub fn as_source_object(&self) -> Option<&SourceObject> {
        match self {
            PaymentSource::Source(source) => Some(source),
            _ => None,
        }
    }

    /// Returns `true` on the response to a delete request.
    pub fn is_deleted(&self) -> bool {
        match self {
            PaymentSource::Card(card) => card.deleted,
            PaymentSource::BankAccount(account) => account.deleted,
            PaymentSource::Source(_) => false,
        }
    }
}

impl Object for PaymentSource {
    fn id(&self) -> &str {
        match self {
            PaymentSource::Card(card) => &card.id,
            PaymentSource::BankAccount(account) => &account.id,
            PaymentSource::Source(source) => &source.id,
        }
    }
}

/// Parameters for creating, fetching, updating or deleting a customer's
/// payment source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerSourceParams {
    /// Customer owning the source
    #[serde(skip)]
    pub customer: Option<CustomerId>,
    /// The source to attach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceParams>,
    /// Common request options
    #[serde(flatten)]
    pub params: Params,
}

impl CustomerSourceParams {
    /// Parameters scoped to the given customer.
    pub fn for_customer(customer: impl Into<CustomerId>) -> Self {
        Self {
            customer: Some(customer.into()),
            ..Default::default()
        }
    }

    /// Set the source from a token or card details.
    ///
    /// ```
    /// use stripe_rs::models::CustomerSourceParams;
    ///
    /// let mut params = CustomerSourceParams::for_customer("cus_123");
    /// params.set_source("tok_visa");
    /// ```
    pub fn set_source(&mut self, source: impl Into<SourceParams>) {
        self.source = Some(source.into());
    }
}

/// Parameters for verifying a customer's bank account with micro-deposits.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceVerifyParams {
    /// Customer owning the bank account
    #[serde(skip)]
    pub customer: Option<CustomerId>,
    /// The two deposited amounts, in cents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amounts: Option<[u8; 2]>,
    /// Common request options
    #[serde(flatten)]
    pub params: Params,
}

impl SourceVerifyParams {
    /// Verify with the two micro-deposit amounts.
    pub fn new(customer: impl Into<CustomerId>, amounts: [u8; 2]) -> Self {
        Self {
            customer: Some(customer.into()),
            amounts: Some(amounts),
            ..Default::default()
        }
    }
}

/// Parameters for listing a customer's payment sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceListParams {
    /// Customer owning the sources
    #[serde(skip)]
    pub customer: Option<CustomerId>,
    /// Pagination options
    #[serde(flatten)]
    pub list: ListParams,
}

impl SourceListParams {
    /// List the given customer's sources.
    pub fn for_customer(customer: impl Into<CustomerId>) -> Self {
        Self {
            customer: Some(customer.into()),
            ..Default::default()
        }
    }
}
