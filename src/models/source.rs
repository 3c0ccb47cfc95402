//! Sources: tokens, raw cards and source objects used to pay.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::address::{Address, AddressParams};
use super::card::CardParams;
use super::currency::Currency;
use super::enums::{SourceFlow, SourceStatus, SourceUsage};
use super::expandable::Object;
use super::params::Params;
use super::primitives::CustomerId;

/// A payment source given either as a token or as raw card details.
///
/// Serialized under a parent field (usually `source`), a token becomes the
/// bare value (`source=tok_visa`) and a card becomes a nested object tagged
/// with `object=card` (`source[object]=card&source[number]=…`).
///
/// # Example
///
/// ```
/// use stripe_rs::form;
/// use stripe_rs::models::{CardParams, ChargeParams, SourceParams};
///
/// let params = ChargeParams {
///     source: Some(SourceParams::card(CardParams {
///         name: Some("Jenny Rosen".into()),
///         ..Default::default()
///     })),
///     ..Default::default()
/// };
///
/// let body = form::to_values(&params).unwrap();
/// assert_eq!(body.get("source[object]"), vec!["card"]);
/// assert_eq!(body.get("source[name]"), vec!["Jenny Rosen"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SourceParams {
    /// A token or existing source ID
    Token(String),
    /// Raw card details. A card carrying a token is sent as that token.
    Card(Box<CardParams>),
}

impl SourceParams {
    /// A source given by token or ID.
    pub fn token(token: impl Into<String>) -> Self {
        SourceParams::Token(token.into())
    }

    /// A source given by raw card details.
    pub fn card(card: CardParams) -> Self {
        SourceParams::Card(Box::new(card))
    }
}

impl From<&str> for SourceParams {
    fn from(token: &str) -> Self {
        SourceParams::token(token)
    }
}

impl From<String> for SourceParams {
    fn from(token: String) -> Self {
        SourceParams::Token(token)
    }
}

impl From<CardParams> for SourceParams {
    fn from(card: CardParams) -> Self {
        SourceParams::card(card)
    }
}

impl Serialize for SourceParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct CardSource<'a> {
            object: &'static str,
            #[serde(flatten)]
            card: &'a CardParams,
        }

        match self {
            SourceParams::Token(token) => serializer.serialize_str(token),
            SourceParams::Card(card) => match card.token.as_deref().filter(|t| !t.is_empty()) {
                Some(token) => serializer.serialize_str(token),
                None => CardSource {
                    object: "card",
                    card,
                }
                .serialize(serializer),
            },
        }
    }
}

/// Owner information sent when creating or updating a source object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceOwnerParams {
    /// Owner's address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressParams>,
    /// Owner's email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Owner's full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owner's phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Redirect settings for sources using the redirect flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RedirectParams {
    /// Where the customer returns after authenticating
    pub return_url: String,
}

/// Parameters for creating or updating a source object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceObjectParams {
    /// Source type, e.g. `card`, `sepa_debit` or `bitcoin`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Amount in the smallest currency unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency of the amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Customer whose reusable source is being shared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Authentication flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<SourceFlow>,
    /// Owner information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<SourceOwnerParams>,
    /// Redirect settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<RedirectParams>,
    /// Text on the customer's statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Token to create the source from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Whether the source can be reused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<SourceUsage>,
    /// Common request options
    #[serde(flatten)]
    pub params: Params,
}

/// Parameters for detaching a source object from a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceObjectDetachParams {
    /// Customer the source is attached to
    #[serde(skip)]
    pub customer: Option<CustomerId>,
    /// Common request options
    #[serde(flatten)]
    pub params: Params,
}

impl SourceObjectDetachParams {
    /// Detach from the given customer.
    pub fn for_customer(customer: impl Into<CustomerId>) -> Self {
        Self {
            customer: Some(customer.into()),
            ..Default::default()
        }
    }
}

/// Owner of a source object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceOwner {
    /// Owner's address
    #[serde(default)]
    pub address: Option<Address>,
    /// Owner's email address
    #[serde(default)]
    pub email: Option<String>,
    /// Owner's full name
    #[serde(default)]
    pub name: Option<String>,
    /// Owner's phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Address as verified by the payment provider
    #[serde(default)]
    pub verified_address: Option<Address>,
    /// Email as verified by the payment provider
    #[serde(default)]
    pub verified_email: Option<String>,
    /// Name as verified by the payment provider
    #[serde(default)]
    pub verified_name: Option<String>,
    /// Phone as verified by the payment provider
    #[serde(default)]
    pub verified_phone: Option<String>,
}

/// Redirect state of a source object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRedirect {
    /// Where the customer returns after authenticating
    #[serde(default)]
    pub return_url: Option<String>,
    /// Redirect status, e.g. `pending` or `succeeded`
    #[serde(default)]
    pub status: Option<String>,
    /// URL the customer should be sent to
    #[serde(default)]
    pub url: Option<String>,
}

/// A source object (`src_…`).
///
/// Fields specific to the source's type (e.g. the `bitcoin` or `sepa_debit`
/// hash) are kept as raw JSON; see [`type_data`](Self::type_data).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceObject {
    /// Unique identifier
    pub id: String,
    /// Amount in the smallest currency unit
    #[serde(default)]
    pub amount: Option<i64>,
    /// Secret used by Stripe.js to fetch the source client-side
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Creation time
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Currency of the amount
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Authentication flow
    #[serde(default)]
    pub flow: Option<SourceFlow>,
    /// Whether the source lives in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Attached metadata
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Owner information
    #[serde(default)]
    pub owner: Option<SourceOwner>,
    /// Redirect state
    #[serde(default)]
    pub redirect: Option<SourceRedirect>,
    /// Text on the customer's statement
    #[serde(default)]
    pub statement_descriptor: Option<String>,
    /// Current status
    #[serde(default)]
    pub status: Option<SourceStatus>,
    /// Source type, e.g. `card` or `bitcoin`
    #[serde(rename = "type", default)]
    pub source_type: String,
    /// Whether the source can be reused
    #[serde(default)]
    pub usage: Option<SourceUsage>,
    /// Remaining fields, including the type-specific hash
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SourceObject {
    /// The hash named after the source's type, e.g. `bitcoin` for a bitcoin
    /// receiver.
    pub fn type_data(&self) -> Option<&Map<String, Value>> {
        self.extra.get(&self.source_type).and_then(Value::as_object)
    }
}

impl Object for SourceObject {
    fn id(&self) -> &str {
        &self.id
    }
}
