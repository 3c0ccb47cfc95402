//! Form encoding of request parameters.
//!
//! Stripe expects request parameters as `application/x-www-form-urlencoded`
//! fields, with nested objects written in bracket notation:
//!
//! ```text
//! source[object]=card&source[name]=Jenny+Rosen&metadata[order_id]=6735
//! ```
//!
//! Parameter types derive [`serde::Serialize`] and are flattened into
//! [`Values`] by [`append_to`]. The usual serde attributes drive the wire
//! shape:
//!
//! - `#[serde(rename = "...")]` sets the wire name, which may itself be a
//!   path such as `destination[account]`
//! - `#[serde(skip)]` keeps a field away from the generic encoder, either
//!   because it only selects the endpoint path or because a custom appender
//!   writes it
//! - `#[serde(flatten)]` promotes an embedded struct's fields to the parent's
//!   level without a prefix
//! - `Option::None` and empty nested objects contribute nothing
//!
//! # Example
//!
//! ```
//! use serde::Serialize;
//! use stripe_rs::form;
//!
//! #[derive(Serialize)]
//! struct Owner {
//!     email: Option<String>,
//! }
//!
//! #[derive(Serialize)]
//! struct Params {
//!     amount: Option<i64>,
//!     owner: Option<Owner>,
//! }
//!
//! let body = form::to_values(&Params {
//!     amount: Some(1000),
//!     owner: Some(Owner { email: Some("jenny.rosen@example.com".into()) }),
//! })
//! .unwrap();
//!
//! assert_eq!(body.get("amount"), vec!["1000"]);
//! assert_eq!(body.get("owner[email]"), vec!["jenny.rosen@example.com"]);
//! ```

mod values;

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

pub use values::Values;

/// Encode `params` into a fresh set of form values.
pub fn to_values<T>(params: &T) -> Result<Values>
where
    T: ?Sized + Serialize,
{
    let mut body = Values::new();
    append_to(&mut body, params)?;
    Ok(body)
}

/// Encode `params` and append the resulting fields to `body`.
///
/// The top-level value must serialize to a struct or map; `None` appends
/// nothing.
pub fn append_to<T>(body: &mut Values, params: &T) -> Result<()>
where
    T: ?Sized + Serialize,
{
    append_with_prefix(body, &[], params)
}

/// Encode `params` under the key formed by `key_parts`.
///
/// With `key_parts = ["card"]` a field `name` is written as `card[name]`.
pub fn append_with_prefix<T>(body: &mut Values, key_parts: &[&str], params: &T) -> Result<()>
where
    T: ?Sized + Serialize,
{
    let value = serde_json::to_value(params).map_err(|e| Error::Encoding(e.to_string()))?;
    let prefix = format_key(key_parts);

    match value {
        Value::Null => Ok(()),
        Value::Object(_) => {
            append_value(body, &prefix, value);
            Ok(())
        }
        other if !prefix.is_empty() => {
            append_value(body, &prefix, other);
            Ok(())
        }
        other => Err(Error::Encoding(format!(
            "top-level parameters must be a struct or map, got {}",
            kind_of(&other)
        ))),
    }
}

/// Join key segments into a bracket path.
///
/// ```
/// use stripe_rs::form::format_key;
///
/// assert_eq!(format_key(&["source", "owner", "email"]), "source[owner][email]");
/// assert_eq!(format_key(&["external_account"]), "external_account");
/// ```
pub fn format_key(parts: &[&str]) -> String {
    parts
        .iter()
        .fold(String::new(), |key, part| nest_key(&key, part))
}

/// Nest `child` under `parent`.
///
/// A child that is already a path (`destination[account]`) keeps its inner
/// segments: under `charge` it becomes `charge[destination][account]`.
pub(crate) fn nest_key(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        return child.to_string();
    }

    match child.split_once('[') {
        Some((head, rest)) => format!("{parent}[{head}][{rest}"),
        None => format!("{parent}[{child}]"),
    }
}

fn append_value(body: &mut Values, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => body.add(key, b.to_string()),
        Value::Number(n) => body.add(key, n.to_string()),
        Value::String(s) => body.add(key, s),
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                append_value(body, &nest_key(key, &index.to_string()), item);
            }
        }
        Value::Object(fields) => {
            for (name, field) in fields {
                append_value(body, &nest_key(key, &name), field);
            }
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Serialize, Default)]
    struct Owner {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    }

    #[derive(Serialize, Default)]
    struct Paging {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        starting_after: Option<String>,
    }

    #[derive(Serialize, Default)]
    struct Params {
        #[serde(flatten)]
        paging: Paging,
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        capture: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        owner: Option<Owner>,
        #[serde(rename = "destination[account]", skip_serializing_if = "Option::is_none")]
        destination: Option<String>,
        #[serde(skip)]
        customer: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        expand: Vec<String>,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        metadata: BTreeMap<String, String>,
    }

    #[test]
    fn test_zero_values_produce_empty_body() {
        let body = to_values(&Params::default()).unwrap();
        assert!(body.is_empty(), "unexpected fields: {:?}", body.keys());
    }

    #[test]
    fn test_scalars() {
        let body = to_values(&Params {
            amount: Some(123),
            capture: Some(false),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(body.get("amount"), vec!["123"]);
        assert_eq!(body.get("capture"), vec!["false"]);
    }

    #[test]
    fn test_nested_struct_is_bracketed_in_child_order() {
        let owner = Owner {
            name: Some("Jenny Rosen".into()),
            email: Some("jenny.rosen@example.com".into()),
        };
        let alone = to_values(&owner).unwrap();

        let body = to_values(&Params {
            owner: Some(owner),
            ..Default::default()
        })
        .unwrap();

        let expected: Vec<String> = alone.keys().iter().map(|k| format!("owner[{k}]")).collect();
        assert_eq!(body.keys(), expected);
        assert_eq!(body.get("owner[email]"), vec!["jenny.rosen@example.com"]);
    }

    #[test]
    fn test_empty_nested_struct_adds_nothing() {
        let body = to_values(&Params {
            owner: Some(Owner::default()),
            ..Default::default()
        })
        .unwrap();

        assert!(body.is_empty());
    }

    #[test]
    fn test_flatten_promotes_without_prefix() {
        let body = to_values(&Params {
            paging: Paging {
                limit: Some(3),
                starting_after: Some("ch_123".into()),
            },
            amount: Some(50),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(body.keys(), vec!["limit", "starting_after", "amount"]);
    }

    #[test]
    fn test_path_wire_name() {
        let body = to_values(&Params {
            destination: Some("acct_123".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body.get("destination[account]"), vec!["acct_123"]);

        let mut nested = Values::new();
        append_with_prefix(
            &mut nested,
            &["charge"],
            &Params {
                destination: Some("acct_123".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(nested.get("charge[destination][account]"), vec!["acct_123"]);
    }

    #[test]
    fn test_skipped_field_is_never_encoded() {
        let body = to_values(&Params {
            customer: Some("cus_123".into()),
            ..Default::default()
        })
        .unwrap();

        assert!(body.is_empty());
    }

    #[test]
    fn test_sequences_and_maps() {
        let mut metadata = BTreeMap::new();
        metadata.insert("order_id".to_string(), "6735".to_string());

        let body = to_values(&Params {
            expand: vec!["customer".into(), "source".into()],
            metadata,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(body.get("expand[0]"), vec!["customer"]);
        assert_eq!(body.get("expand[1]"), vec!["source"]);
        assert_eq!(body.get("metadata[order_id]"), vec!["6735"]);
    }

    #[test]
    fn test_top_level_scalar_is_an_encoding_error() {
        let err = to_values(&42).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn test_none_at_top_level_is_empty() {
        let body = to_values(&Option::<Params>::None).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_format_key() {
        assert_eq!(format_key(&[]), "");
        assert_eq!(format_key(&["source"]), "source");
        assert_eq!(format_key(&["source", "object"]), "source[object]");
    }
}
