//! Bank accounts attached to customers or connected accounts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::customer::Customer;
use super::enums::{AccountHolderType, BankAccountStatus};
use super::expandable::{Expandable, Object};
use super::params::{ListParams, Params};
use super::primitives::{AccountId, CustomerId};
use crate::form::Values;

/// Parameters for creating, updating, fetching or deleting a bank account.
///
/// Bank accounts live under a parent: a customer (as a payment source) or a
/// connected account (as an external account). Exactly one of `customer` and
/// `account_id` selects the endpoint; neither is sent in the body.
///
/// Updates are encoded field by field. Creation goes through
/// [`append_to_as_source_or_external_account`](Self::append_to_as_source_or_external_account)
/// instead, because the shape of the body depends on the parent and on
/// whether a token was given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BankAccountParams {
    /// Parent customer
    #[serde(skip)]
    pub customer: Option<CustomerId>,
    /// Parent connected account
    #[serde(skip)]
    pub account_id: Option<AccountId>,
    /// Token from Stripe.js referencing the account details
    #[serde(skip)]
    pub token: Option<String>,
    /// Account number, used when no token is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Name of the person or business owning the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    /// Type of entity owning the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_type: Option<AccountHolderType>,
    /// Two-letter country code of the bank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Currency paid out to the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Make this the default account for its currency
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub default_for_currency: bool,
    /// Routing number of the bank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    /// Common request options
    #[serde(flatten)]
    pub params: Params,
}

impl BankAccountParams {
    /// Parameters for a bank account owned by a customer.
    pub fn for_customer(customer: impl Into<CustomerId>) -> Self {
        Self {
            customer: Some(customer.into()),
            ..Default::default()
        }
    }

    /// Parameters for an external account of a connected account.
    pub fn for_account(account: impl Into<AccountId>) -> Self {
        Self {
            account_id: Some(account.into()),
            ..Default::default()
        }
    }

    /// Use a token instead of raw account details.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Append the account as a `source` (customer) or `external_account`
    /// (connected account) for a create request.
    ///
    /// With a token only the token and the default flag are written. Raw
    /// details always carry `object`, `country`, `account_number` and
    /// `currency`, even when empty; holder name and type are only accepted
    /// for customers.
    pub fn append_to_as_source_or_external_account(&self, body: &mut Values) {
        let is_customer = self
            .customer
            .as_ref()
            .is_some_and(|c| !c.as_str().is_empty());
        let base = if is_customer {
            "source"
        } else {
            "external_account"
        };
        let key = |field: &str| format!("{base}[{field}]");

        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            body.add(base, token);
            if self.default_for_currency {
                body.add("default_for_currency", "true");
            }
            return;
        }

        body.add(key("object"), "bank_account");
        body.add(key("country"), self.country.as_deref().unwrap_or_default());
        body.add(
            key("account_number"),
            self.account_number.as_deref().unwrap_or_default(),
        );
        body.add(
            key("currency"),
            self.currency.as_ref().map(Currency::as_str).unwrap_or_default(),
        );

        if is_customer {
            body.add(
                key("account_holder_name"),
                self.account_holder_name.as_deref().unwrap_or_default(),
            );
            body.add(
                key("account_holder_type"),
                self.account_holder_type
                    .map(|t| t.as_str())
                    .unwrap_or_default(),
            );
        }

        if let Some(routing) = self.routing_number.as_deref().filter(|r| !r.is_empty()) {
            body.add(key("routing_number"), routing);
        }

        if self.default_for_currency {
            body.add(key("default_for_currency"), "true");
        }
    }
}

/// Parameters for listing the bank accounts of a customer or connected
/// account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BankAccountListParams {
    /// Parent customer
    #[serde(skip)]
    pub customer: Option<CustomerId>,
    /// Parent connected account
    #[serde(skip)]
    pub account_id: Option<AccountId>,
    /// Pagination options
    #[serde(flatten)]
    pub list: ListParams,
}

impl BankAccountListParams {
    /// List a customer's bank accounts.
    pub fn for_customer(customer: impl Into<CustomerId>) -> Self {
        Self {
            customer: Some(customer.into()),
            ..Default::default()
        }
    }

    /// List a connected account's external bank accounts.
    pub fn for_account(account: impl Into<AccountId>) -> Self {
        Self {
            account_id: Some(account.into()),
            ..Default::default()
        }
    }
}

/// A bank account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier (`ba_…`)
    pub id: String,
    /// Name of the bank
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Name of the account holder
    #[serde(default)]
    pub account_holder_name: Option<String>,
    /// Type of the account holder
    #[serde(default)]
    pub account_holder_type: Option<AccountHolderType>,
    /// Connected account the bank account belongs to
    #[serde(default)]
    pub account: Option<String>,
    /// Two-letter country code of the bank
    #[serde(default)]
    pub country: Option<String>,
    /// Currency paid out to the account
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Whether this is the default account for its currency
    #[serde(default)]
    pub default_for_currency: bool,
    /// Last four digits of the account number
    #[serde(default)]
    pub last4: String,
    /// Uniquely identifies this account number across Stripe
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Verification status
    #[serde(default)]
    pub status: BankAccountStatus,
    /// Routing number of the bank
    #[serde(default)]
    pub routing_number: Option<String>,
    /// Set on the response to a delete request
    #[serde(default)]
    pub deleted: bool,
    /// Customer owning the account
    #[serde(default)]
    pub customer: Option<Expandable<Customer>>,
    /// Attached metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl BankAccount {
    /// Human-readable description, e.g. `Bank account ending in 6789`.
    pub fn display(&self) -> String {
        format!("Bank account ending in {}", self.last4)
    }
}

impl Object for BankAccount {
    fn id(&self) -> &str {
        &self.id
    }
}
