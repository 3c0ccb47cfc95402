//! Parameters shared by every request.

use std::collections::BTreeMap;

use serde::Serialize;

/// Options common to all requests.
///
/// Embedded with `#[serde(flatten)]` in every parameter type. `expand` and
/// `metadata` go into the form body; the idempotency key and connected
/// account are sent as headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Params {
    /// Related objects to expand in the response, e.g. `customer`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Key/value pairs to attach to the object
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    /// Sent as the `Idempotency-Key` header
    #[serde(skip)]
    pub idempotency_key: Option<String>,
    /// Sent as the `Stripe-Account` header to act on a connected account
    #[serde(skip)]
    pub stripe_account: Option<String>,
}

impl Params {
    /// Create empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request expansion of a related object.
    pub fn add_expand(&mut self, field: impl Into<String>) {
        self.expand.push(field.into());
    }

    /// Attach a metadata entry.
    pub fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Set the idempotency key for the request.
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Act on behalf of a connected account.
    pub fn with_stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }
}

/// Pagination options shared by every list request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListParams {
    /// Page size, between 1 and 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Cursor: return objects after this ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Cursor: return objects before this ID; iteration then runs backwards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    /// Stop after the first page instead of following `has_more`
    #[serde(skip)]
    pub single: bool,
    /// Common request options
    #[serde(flatten)]
    pub params: Params,
}

impl ListParams {
    /// Create empty list parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start after the given object ID.
    pub fn with_starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    /// Page backwards from the given object ID.
    pub fn with_ending_before(mut self, id: impl Into<String>) -> Self {
        self.ending_before = Some(id.into());
        self
    }

    /// Only fetch a single page.
    pub fn single_page(mut self) -> Self {
        self.single = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form;

    #[test]
    fn test_headers_are_not_encoded() {
        let params = Params::new()
            .with_idempotency_key("key-1")
            .with_stripe_account("acct_123");

        assert!(form::to_values(&params).unwrap().is_empty());
    }

    #[test]
    fn test_list_params_flatten_common_params() {
        let mut list = ListParams::new().with_limit(10).with_starting_after("ba_1");
        list.params.add_expand("data.customer");
        list.single = true;

        let body = form::to_values(&list).unwrap();
        assert_eq!(body.keys(), vec!["limit", "starting_after", "expand[0]"]);
        assert_eq!(body.get("expand[0]"), vec!["data.customer"]);
    }
}
