//! Cards attached to customers or connected accounts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::customer::Customer;
use super::enums::{CardBrand, CardFunding};
use super::expandable::{Expandable, Object};
use super::params::Params;
use super::primitives::{AccountId, CustomerId};
use crate::form::{self, format_key, Values};
use crate::Result;

/// Card details sent with a request.
///
/// Used on its own for card endpoints and embedded in
/// [`SourceParams::Card`](super::SourceParams::Card) when a charge or
/// customer takes raw card details.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardParams {
    /// Parent connected account, when adding a debit card for payouts
    #[serde(skip)]
    pub account: Option<AccountId>,
    /// Parent customer
    #[serde(skip)]
    pub customer: Option<CustomerId>,
    /// Token from Stripe.js referencing the card
    #[serde(skip)]
    pub token: Option<String>,
    /// Make this the default card for its currency (connected accounts)
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub default_for_currency: bool,
    /// Card number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Card security code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    /// Currency of a debit card used for payouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Expiration month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<String>,
    /// Expiration year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_year: Option<String>,
    /// Cardholder name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Billing address line 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Billing address line 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// Billing address city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    /// Billing address state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    /// Billing address postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    /// Billing address country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    /// Common request options
    #[serde(flatten)]
    pub params: Params,
}

impl CardParams {
    /// Append the card as a `source` (customer) or `external_account`
    /// (connected account), nested under `key_parts`.
    ///
    /// A token is written as the bare value of the base key. Raw details are
    /// written under it with `object=card`, skipping empty fields.
    pub fn append_to_as_card_source_or_external_account(
        &self,
        body: &mut Values,
        key_parts: &[&str],
    ) -> Result<()> {
        form::append_with_prefix(body, key_parts, &self.params)?;

        let base = if self.account.is_some() {
            "external_account"
        } else {
            "source"
        };
        let key = |field: &str| {
            let mut parts = key_parts.to_vec();
            parts.push(base);
            if !field.is_empty() {
                parts.push(field);
            }
            format_key(&parts)
        };

        if self.default_for_currency {
            let mut parts = key_parts.to_vec();
            parts.push("default_for_currency");
            body.add(format_key(&parts), "true");
        }

        if let Some(token) = non_empty(&self.token) {
            body.add(key(""), token);
        }

        if let Some(number) = non_empty(&self.number) {
            body.add(key("object"), "card");
            body.add(key("number"), number);
        }

        let fields = [
            ("cvc", non_empty(&self.cvc)),
            ("currency", self.currency.as_ref().map(Currency::as_str)),
            ("exp_month", non_empty(&self.exp_month)),
            ("exp_year", non_empty(&self.exp_year)),
            ("name", non_empty(&self.name)),
            ("address_line1", non_empty(&self.address_line1)),
            ("address_line2", non_empty(&self.address_line2)),
            ("address_city", non_empty(&self.address_city)),
            ("address_state", non_empty(&self.address_state)),
            ("address_zip", non_empty(&self.address_zip)),
            ("address_country", non_empty(&self.address_country)),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                body.add(key(field), value);
            }
        }

        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier (`card_…`)
    pub id: String,
    /// Card brand
    #[serde(default)]
    pub brand: Option<CardBrand>,
    /// Funding type
    #[serde(default)]
    pub funding: Option<CardFunding>,
    /// Last four digits of the card number
    #[serde(default)]
    pub last4: String,
    /// Expiration month
    #[serde(default)]
    pub exp_month: Option<u32>,
    /// Expiration year
    #[serde(default)]
    pub exp_year: Option<u32>,
    /// Cardholder name
    #[serde(default)]
    pub name: Option<String>,
    /// Two-letter country code of the issuer
    #[serde(default)]
    pub country: Option<String>,
    /// Currency of a debit card attached to a connected account
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Uniquely identifies this card number across Stripe
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Billing address line 1
    #[serde(default)]
    pub address_line1: Option<String>,
    /// Billing address line 2
    #[serde(default)]
    pub address_line2: Option<String>,
    /// Billing address city
    #[serde(default)]
    pub address_city: Option<String>,
    /// Billing address state
    #[serde(default)]
    pub address_state: Option<String>,
    /// Billing address postal code
    #[serde(default)]
    pub address_zip: Option<String>,
    /// Billing address country
    #[serde(default)]
    pub address_country: Option<String>,
    /// Whether this is the default card for its currency
    #[serde(default)]
    pub default_for_currency: bool,
    /// Set on the response to a delete request
    #[serde(default)]
    pub deleted: bool,
    /// Customer owning the card
    #[serde(default)]
    pub customer: Option<Expandable<Customer>>,
    /// Attached metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Card {
    /// Human-readable description, e.g. `Visa ending in 4242`.
    pub fn display(&self) -> String {
        let brand = self.brand.unwrap_or(CardBrand::Unknown);
        format!("{} ending in {}", brand.name(), self.last4)
    }
}

impl Object for Card {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_for_customer() {
        let params = CardParams {
            customer: Some(CustomerId::new("cus_123")),
            token: Some("tok_visa".to_string()),
            ..Default::default()
        };

        let mut body = Values::new();
        params
            .append_to_as_card_source_or_external_account(&mut body, &[])
            .unwrap();

        assert_eq!(body.keys(), vec!["source"]);
        assert_eq!(body.get("source"), vec!["tok_visa"]);
    }

    #[test]
    fn test_raw_card_for_account_with_default() {
        let params = CardParams {
            account: Some(AccountId::new("acct_123")),
            default_for_currency: true,
            number: Some("4000056655665556".to_string()),
            exp_month: Some("12".to_string()),
            exp_year: Some("2030".to_string()),
            currency: Some(Currency::Usd),
            name: Some(String::new()),
            ..Default::default()
        };

        let mut body = Values::new();
        params
            .append_to_as_card_source_or_external_account(&mut body, &[])
            .unwrap();

        assert_eq!(
            body.keys(),
            vec![
                "default_for_currency",
                "external_account[object]",
                "external_account[number]",
                "external_account[currency]",
                "external_account[exp_month]",
                "external_account[exp_year]",
            ]
        );
        assert_eq!(body.get("external_account[object]"), vec!["card"]);
        assert_eq!(body.get("external_account[currency]"), vec!["usd"]);
    }

    #[test]
    fn test_nested_under_key_parts() {
        let mut params = CardParams {
            number: Some("4242424242424242".to_string()),
            address_zip: Some("94107".to_string()),
            ..Default::default()
        };
        params.params.add_metadata("order", "6735");

        let mut body = Values::new();
        params
            .append_to_as_card_source_or_external_account(&mut body, &["card"])
            .unwrap();

        assert_eq!(body.get("card[metadata][order]"), vec!["6735"]);
        assert_eq!(body.get("card[source][object]"), vec!["card"]);
        assert_eq!(body.get("card[source][number]"), vec!["4242424242424242"]);
        assert_eq!(body.get("card[source][address_zip]"), vec!["94107"]);
    }

    #[test]
    fn test_display() {
        let card: Card = serde_json::from_str(
            r#"{"id": "card_123", "object": "card", "brand": "Visa", "funding": "credit", "last4": "4242", "exp_month": 8, "exp_year": 2030}"#,
        )
        .unwrap();

        assert_eq!(card.display(), "Visa ending in 4242");
        assert_eq!(card.funding, Some(CardFunding::Credit));
        assert!(card.customer.is_none());
    }
}
