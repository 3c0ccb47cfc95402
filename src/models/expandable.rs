//! Fields that hold either an object ID or the expanded object.
//!
//! Stripe returns related resources as a bare ID unless the request asked
//! for them to be expanded (`expand[]=customer`), in which case the full
//! object is embedded instead:
//!
//! ```json
//! { "id": "ba_123", "customer": "cus_123" }
//! { "id": "ba_123", "customer": { "id": "cus_123", "object": "customer", ... } }
//! ```
//!
//! [`Expandable`] holds either shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A Stripe resource with its own identifier.
pub trait Object {
    /// The resource's ID, e.g. `cus_123`.
    fn id(&self) -> &str;
}

/// A reference that is either an unexpanded ID or the full object.
///
/// # Example
///
/// ```
/// use stripe_rs::models::{Customer, Expandable};
///
/// let reference: Expandable<Customer> = serde_json::from_str(r#""cus_123""#).unwrap();
/// assert_eq!(reference.id(), "cus_123");
/// assert!(!reference.is_expanded());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expandable<T> {
    /// Only the ID was returned.
    Id(String),
    /// The object was expanded in place.
    Object(Box<T>),
}

impl<T: Object> Expandable<T> {
    /// The referenced object's ID, whichever shape was returned.
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(object) => object.id(),
        }
    }
}

impl<T> Expandable<T> {
    /// Returns `true` if the full object is present.
    pub fn is_expanded(&self) -> bool {
        matches!(self, Expandable::Object(_))
    }

    /// The expanded object, if present.
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(object),
        }
    }

    /// Take the expanded object, if present.
    pub fn into_object(self) -> Option<T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(*object),
        }
    }
}

/// Decode raw response bytes for an expandable field.
///
/// The bytes are first decoded as the full object. If that fails they are
/// taken to be a quoted ID: one leading and one trailing byte are stripped
/// and the remainder is used verbatim. This never fails; an input that is
/// neither an object nor a quoted string yields a meaningless ID.
///
/// The ID keeps the raw bytes between the quotes, so JSON escapes are not
/// resolved (`"a\u0062"` gives `a\u0062`). Decoding a field through
/// `Deserialize` instead yields the unescaped string (`ab`).
///
/// ```
/// use stripe_rs::models::{decode_expandable, BankAccount};
///
/// let reference = decode_expandable::<BankAccount>(br#""ba_123""#);
/// assert_eq!(reference.id(), "ba_123");
/// ```
pub fn decode_expandable<T: DeserializeOwned>(bytes: &[u8]) -> Expandable<T> {
    match serde_json::from_slice::<T>(bytes) {
        Ok(object) => Expandable::Object(Box::new(object)),
        Err(_) => Expandable::Id(strip_quotes(&String::from_utf8_lossy(bytes))),
    }
}

fn strip_quotes(raw: &str) -> String {
    if raw.chars().count() < 2 {
        return raw.to_string();
    }
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}

/// A JSON string becomes the ID after unescaping. Anything else is decoded
/// as `T`, falling back to [`decode_expandable`]'s quote stripping.
impl<'de, T> Deserialize<'de> for Expandable<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        if let Value::String(id) = value {
            return Ok(Expandable::Id(id));
        }

        match T::deserialize(&value) {
            Ok(object) => Ok(Expandable::Object(Box::new(object))),
            Err(_) => Ok(Expandable::Id(strip_quotes(&value.to_string()))),
        }
    }
}

impl<T: Serialize> Serialize for Expandable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Expandable::Id(id) => serializer.serialize_str(id),
            Expandable::Object(object) => object.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Thing {
        id: String,
        name: String,
    }

    impl Object for Thing {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        thing: Option<Expandable<Thing>>,
    }

    #[test]
    fn test_decode_id() {
        let reference = decode_expandable::<Thing>(br#""thing_123""#);
        assert_eq!(reference, Expandable::Id("thing_123".into()));
        assert_eq!(reference.id(), "thing_123");
        assert!(reference.as_object().is_none());
    }

    #[test]
    fn test_decode_expanded_matches_id() {
        let expanded = decode_expandable::<Thing>(br#"{"id": "thing_123", "name": "gold"}"#);
        let bare = decode_expandable::<Thing>(br#""thing_123""#);

        assert!(expanded.is_expanded());
        assert_eq!(expanded.id(), bare.id());
        assert_eq!(expanded.into_object().unwrap().name, "gold");
    }

    #[test]
    fn test_decode_never_fails_on_garbage() {
        let reference = decode_expandable::<Thing>(b"12345");
        assert_eq!(reference.id(), "234");

        let short = decode_expandable::<Thing>(b"7");
        assert_eq!(short.id(), "7");
    }

    #[test]
    fn test_nested_field() {
        let holder: Holder = serde_json::from_str(r#"{"thing": "thing_1"}"#).unwrap();
        assert_eq!(holder.thing.unwrap().id(), "thing_1");

        let holder: Holder =
            serde_json::from_str(r#"{"thing": {"id": "thing_2", "name": "silver"}}"#).unwrap();
        let thing = holder.thing.unwrap();
        assert!(thing.is_expanded());
        assert_eq!(thing.id(), "thing_2");

        let holder: Holder = serde_json::from_str(r#"{"thing": null}"#).unwrap();
        assert!(holder.thing.is_none());
    }

    #[test]
    fn test_escaped_id_per_decode_path() {
        let raw = decode_expandable::<Thing>(br#""a\u0062""#);
        assert_eq!(raw.id(), r"a\u0062");

        let holder: Holder = serde_json::from_str(r#"{"thing": "a\u0062"}"#).unwrap();
        assert_eq!(holder.thing.unwrap().id(), "ab");
    }

    #[test]
    fn test_serialize_round_trips_id_shape() {
        let reference: Expandable<Thing> = Expandable::Id("thing_9".into());
        assert_eq!(serde_json::to_string(&reference).unwrap(), r#""thing_9""#);
    }
}
