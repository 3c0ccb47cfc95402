//! Customers, as referenced from other resources.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::expandable::{Expandable, Object};
use super::payment_source::PaymentSource;
use crate::client::List;

/// A customer.
///
/// Usually seen as the expanded form of a `customer` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier (`cus_…`)
    pub id: String,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Arbitrary description
    #[serde(default)]
    pub description: Option<String>,
    /// Source charged when none is given
    #[serde(default)]
    pub default_source: Option<Expandable<PaymentSource>>,
    /// Attached payment sources
    #[serde(default)]
    pub sources: Option<List<PaymentSource>>,
    /// Creation time
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Whether the customer lives in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Attached metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Set on the response to a delete request
    #[serde(default)]
    pub deleted: bool,
}

impl Object for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_and_sources() {
        let json = r#"{
            "id": "cus_123",
            "object": "customer",
            "email": "SomethingIdentifiable@gmail.om",
            "default_source": "card_123",
            "sources": {
                "object": "list",
                "url": "/v1/customers/cus_123/sources",
                "has_more": false,
                "total_count": 1,
                "data": [{"id": "card_123", "object": "card", "brand": "Visa", "last4": "4242"}]
            }
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.default_source.as_ref().map(|s| s.id()), Some("card_123"));

        let sources = customer.sources.unwrap();
        assert_eq!(sources.meta.total_count, Some(1));
        assert_eq!(sources.data[0].id(), "card_123");
    }

    #[test]
    fn test_null_default_source() {
        let customer: Customer =
            serde_json::from_str(r#"{"id": "cus_123", "default_source": null}"#).unwrap();
        assert!(customer.default_source.is_none());
    }
}
