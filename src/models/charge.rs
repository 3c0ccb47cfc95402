//! Charges against a card, bank account or source.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::{ShippingDetails, ShippingDetailsParams};
use super::currency::Currency;
use super::customer::Customer;
use super::enums::{ChargeStatus, FraudReport};
use super::expandable::{Expandable, Object};
use super::params::{ListParams, Params};
use super::payment_source::PaymentSource;
use super::source::SourceParams;

/// Parameters for creating or updating a charge.
///
/// # Example
///
/// ```
/// use stripe_rs::form;
/// use stripe_rs::models::{ChargeParams, Currency};
///
/// let params = ChargeParams {
///     amount: Some(2000),
///     currency: Some(Currency::Usd),
///     destination: Some("acct_123".into()),
///     ..Default::default()
/// };
///
/// let body = form::to_values(&params).unwrap();
/// assert_eq!(body.to_string(), "amount=2000&currency=usd&destination%5Baccount%5D=acct_123");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChargeParams {
    /// Amount in the smallest currency unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency of the amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Customer to charge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Arbitrary description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Connected account receiving the funds
    #[serde(rename = "destination[account]", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Merchant's fraud assessment, on update
    #[serde(
        rename = "fraud_details[user_report]",
        skip_serializing_if = "Option::is_none"
    )]
    pub fraud_report: Option<FraudReport>,
    /// Payment source to charge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceParams>,
    /// Capture immediately; `false` only authorizes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    /// Fee taken by the platform, in the smallest currency unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<i64>,
    /// Where to send the receipt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_email: Option<String>,
    /// Text on the customer's statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Shipping information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetailsParams>,
    /// Common request options
    #[serde(flatten)]
    pub params: Params,
}

impl ChargeParams {
    /// Set the source from a token or card details.
    pub fn set_source(&mut self, source: impl Into<SourceParams>) {
        self.source = Some(source.into());
    }
}

/// Parameters for capturing an authorized charge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CaptureParams {
    /// Amount to capture, if less than authorized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Fee taken by the platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<i64>,
    /// Where to send the receipt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_email: Option<String>,
    /// Text on the customer's statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Common request options
    #[serde(flatten)]
    pub params: Params,
}

/// Parameters for listing charges.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChargeListParams {
    /// Only charges for this customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Only charges for this source object
    #[serde(rename = "source[object]", skip_serializing_if = "Option::is_none")]
    pub source_object: Option<String>,
    /// Pagination options
    #[serde(flatten)]
    pub list: ListParams,
}

/// Fraud assessments on a charge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FraudDetails {
    /// Assessment reported by the merchant
    #[serde(default)]
    pub user_report: Option<FraudReport>,
    /// Assessment made by Stripe
    #[serde(default)]
    pub stripe_report: Option<FraudReport>,
}

/// A charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Unique identifier (`ch_…`)
    pub id: String,
    /// Amount in the smallest currency unit
    pub amount: i64,
    /// Amount refunded so far
    #[serde(default)]
    pub amount_refunded: i64,
    /// Whether the charge was captured
    #[serde(default)]
    pub captured: bool,
    /// Creation time
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Currency of the amount
    pub currency: Currency,
    /// Customer charged
    #[serde(default)]
    pub customer: Option<Expandable<Customer>>,
    /// Arbitrary description
    #[serde(default)]
    pub description: Option<String>,
    /// Connected account receiving the funds
    #[serde(default)]
    pub destination: Option<String>,
    /// Error code explaining a failed charge
    #[serde(default)]
    pub failure_code: Option<String>,
    /// Message explaining a failed charge
    #[serde(default)]
    pub failure_message: Option<String>,
    /// Fraud assessments
    #[serde(default)]
    pub fraud_details: FraudDetails,
    /// Whether the charge was made in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Attached metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Whether the charge succeeded or was authorized
    #[serde(default)]
    pub paid: bool,
    /// Where the receipt was sent
    #[serde(default)]
    pub receipt_email: Option<String>,
    /// Whether the charge was fully refunded
    #[serde(default)]
    pub refunded: bool,
    /// Shipping information
    #[serde(default)]
    pub shipping: Option<ShippingDetails>,
    /// Source that was charged
    #[serde(default)]
    pub source: Option<PaymentSource>,
    /// Text on the customer's statement
    #[serde(default)]
    pub statement_descriptor: Option<String>,
    /// Current status
    pub status: ChargeStatus,
}

impl Object for Charge {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form;
    use crate::models::{AddressParams, CardParams};

    #[test]
    fn test_amount() {
        let body = form::to_values(&ChargeParams {
            amount: Some(123),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body.get("amount"), vec!["123"]);
    }

    #[test]
    fn test_destination_path() {
        let body = form::to_values(&ChargeParams {
            destination: Some("acct_123".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body.get("destination[account]"), vec!["acct_123"]);
    }

    #[test]
    fn test_fraud_report_path() {
        let body = form::to_values(&ChargeParams {
            fraud_report: Some(FraudReport::Fraudulent),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body.get("fraud_details[user_report]"), vec!["fraudulent"]);
    }

    #[test]
    fn test_card_source() {
        let mut params = ChargeParams::default();
        params.set_source(CardParams {
            name: Some("a card".to_string()),
            ..Default::default()
        });

        let body = form::to_values(&params).unwrap();
        assert_eq!(body.get("source[name]"), vec!["a card"]);
        assert_eq!(body.get("source[object]"), vec!["card"]);
    }

    #[test]
    fn test_shipping_and_metadata() {
        let mut params = ChargeParams {
            amount: Some(500),
            shipping: Some(ShippingDetailsParams {
                address: AddressParams {
                    city: Some("San Francisco".to_string()),
                    ..AddressParams::new("510 Townsend St")
                },
                name: "Jenny Rosen".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        params.params.add_metadata("order_id", "6735");

        let body = form::to_values(&params).unwrap();
        assert_eq!(
            body.keys(),
            vec![
                "amount",
                "shipping[address][line1]",
                "shipping[address][city]",
                "shipping[name]",
                "metadata[order_id]",
            ]
        );
    }

    #[test]
    fn test_list_params() {
        let params = ChargeListParams {
            customer: Some("cus_123".to_string()),
            list: ListParams::new().with_limit(3),
            ..Default::default()
        };
        let body = form::to_values(&params).unwrap();
        assert_eq!(body.to_string(), "customer=cus_123&limit=3");
    }

    #[test]
    fn test_deserialize_charge() {
        let json = r#"{
            "id": "ch_123",
            "object": "charge",
            "amount": 2000,
            "captured": true,
            "created": 1500000000,
            "currency": "usd",
            "customer": "cus_123",
            "paid": true,
            "status": "succeeded",
            "fraud_details": {},
            "source": {"id": "card_123", "object": "card", "brand": "Visa", "last4": "4242"}
        }"#;

        let charge: Charge = serde_json::from_str(json).unwrap();
        assert_eq!(charge.status, ChargeStatus::Succeeded);
        assert_eq!(charge.customer.as_ref().map(|c| c.id()), Some("cus_123"));
        assert_eq!(
            charge.source.as_ref().and_then(|s| s.as_card()).map(|c| c.display()),
            Some("Visa ending in 4242".to_string())
        );
    }
}
