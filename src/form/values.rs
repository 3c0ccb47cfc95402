//! Ordered multi-map holding an encoded request body.

use std::fmt;

use url::form_urlencoded;

/// An ordered collection of form fields.
///
/// Keys may repeat, and iteration always follows insertion order so that
/// encoded bodies are reproducible.
///
/// # Example
///
/// ```
/// use stripe_rs::form::Values;
///
/// let mut body = Values::new();
/// body.add("source[object]", "card");
/// body.add("source[name]", "Jenny Rosen");
///
/// assert_eq!(body.get("source[object]"), vec!["card"]);
/// assert_eq!(
///     body.encode(),
///     "source%5Bobject%5D=card&source%5Bname%5D=Jenny+Rosen"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    pairs: Vec<(String, String)>,
}

impl Values {
    /// Create an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for `key`, keeping any existing values.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replace the value of `key`.
    ///
    /// The first occurrence keeps its position, later duplicates are dropped.
    /// A missing key is appended at the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || *k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// All values stored under `key`, in insertion order.
    pub fn get(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// The first value stored under `key`.
    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if at least one value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Remove every value stored under `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Append every pair of `other`.
    pub fn append(&mut self, other: &Values) {
        self.pairs.extend(other.pairs.iter().cloned());
    }

    /// Returns `true` if no fields have been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterate over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All keys in insertion order, duplicates included.
    pub fn keys(&self) -> Vec<&str> {
        self.pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        values.extend(iter);
        values
    }
}

impl<K, V> Extend<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.add(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_duplicates_in_order() {
        let mut values = Values::new();
        values.add("expand[0]", "customer");
        values.add("amount", "100");
        values.add("amount", "200");

        assert_eq!(values.get("amount"), vec!["100", "200"]);
        assert_eq!(values.keys(), vec!["expand[0]", "amount", "amount"]);
    }

    #[test]
    fn test_set_replaces_first_in_place() {
        let mut values: Values = [("limit", "3"), ("starting_after", "ba_1"), ("starting_after", "ba_0")]
            .into_iter()
            .collect();

        values.set("starting_after", "ba_2");
        assert_eq!(values.keys(), vec!["limit", "starting_after"]);
        assert_eq!(values.get_first("starting_after"), Some("ba_2"));

        values.set("object", "bank_account");
        assert_eq!(values.keys(), vec!["limit", "starting_after", "object"]);
    }

    #[test]
    fn test_remove() {
        let mut values = Values::new();
        values.add("a", "1");
        values.add("b", "2");
        values.add("a", "3");
        values.remove("a");

        assert!(!values.contains_key("a"));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_encode_percent_encodes_brackets_and_spaces() {
        let mut values = Values::new();
        values.add("source[account_holder_name]", "Jane Austen");
        values.add("email", "jenny+test@example.com");

        assert_eq!(
            values.to_string(),
            "source%5Baccount_holder_name%5D=Jane+Austen&email=jenny%2Btest%40example.com"
        );
    }

    #[test]
    fn test_empty_encodes_to_empty_string() {
        assert_eq!(Values::new().encode(), "");
    }
}
