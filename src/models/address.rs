//! Postal addresses and shipping details.

use serde::{Deserialize, Serialize};

/// A postal address as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Street address line 1
    #[serde(default)]
    pub line1: Option<String>,
    /// Street address line 2
    #[serde(default)]
    pub line2: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// State, county or province
    #[serde(default)]
    pub state: Option<String>,
    /// Postal/ZIP code
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Two-letter country code
    #[serde(default)]
    pub country: Option<String>,
}

/// A postal address sent with a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddressParams {
    /// Street address line 1
    pub line1: String,
    /// Street address line 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State, county or province
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal/ZIP code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Two-letter country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl AddressParams {
    /// Create an address with only the first line set.
    pub fn new(line1: impl Into<String>) -> Self {
        Self {
            line1: line1.into(),
            ..Default::default()
        }
    }
}

/// Shipping information attached to a charge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// Shipping address
    #[serde(default)]
    pub address: Address,
    /// Recipient name
    #[serde(default)]
    pub name: String,
    /// Recipient phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Delivery service
    #[serde(default)]
    pub carrier: Option<String>,
    /// Tracking number from the carrier
    #[serde(default)]
    pub tracking_number: Option<String>,
}

/// Shipping information sent with a charge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShippingDetailsParams {
    /// Shipping address
    pub address: AddressParams,
    /// Recipient name
    pub name: String,
    /// Recipient phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Delivery service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Tracking number from the carrier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}
