//! Transport-neutral key/value request payloads.
//!
//! A [`Payload`] is an ordered list of string pairs. Keys may repeat, which is
//! how list-valued fields travel (`expand[]=a&expand[]=b`). The HTTP backend
//! sends the pairs as a query string for GET/DELETE and as a form body for
//! POST.

use serde::Serialize;
use serde_json::Value;

/// An ordered list of `(key, value)` pairs.
///
/// # Example
///
/// ```rust
/// use stripe_cards::clients::Payload;
///
/// let mut payload = Payload::new();
/// payload.push("limit", "10");
/// payload.push("starting_after", "card_1");
///
/// assert_eq!(payload.get("limit"), Some("10"));
/// assert_eq!(payload.encode(), "limit=10&starting_after=card_1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Payload(Vec<(String, String)>);

impl Payload {
    /// Creates an empty payload.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Flattens a serializable params struct into a payload.
    ///
    /// - `null`, empty strings and zero numbers are omitted
    /// - other numbers and booleans are stringified
    /// - arrays become repeated `key[]` entries
    /// - nested objects become `key[field]` entries
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `params` cannot be represented as JSON.
    ///
    /// Top-level fields come out sorted by key, not in declaration order.
    /// Repeated `key[]` entries keep the order of their source array.
    pub fn from_serialize<T: Serialize>(params: &T) -> Result<Self, serde_json::Error> {
        let mut payload = Self::new();
        if let Value::Object(map) = serde_json::to_value(params)? {
            for (key, value) in map {
                payload.append_value(key, value);
            }
        }
        Ok(payload)
    }

    fn append_value(&mut self, key: String, value: Value) {
        match value {
            Value::Null => {}
            Value::String(s) => {
                if !s.is_empty() {
                    self.0.push((key, s));
                }
            }
            Value::Number(n) => {
                if n.as_u64() != Some(0) && n.as_i64() != Some(0) {
                    self.0.push((key, n.to_string()));
                }
            }
            Value::Bool(b) => self.0.push((key, b.to_string())),
            Value::Array(items) => {
                let key = format!("{key}[]");
                for item in items {
                    self.append_value(key.clone(), item);
                }
            }
            Value::Object(map) => {
                for (field, item) in map {
                    self.append_value(format!("{key}[{field}]"), item);
                }
            }
        }
    }

    /// Appends a pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the first value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value recorded for `key`, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns `true` if at least one pair uses `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Removes every pair using `key`.
    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    /// Returns the distinct keys, in first-seen order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for (key, _) in &self.0 {
            if !keys.contains(&key.as_str()) {
                keys.push(key.as_str());
            }
        }
        keys
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the payload holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encodes the payload as `k=v&k=v`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parses a query string or form body back into a payload.
    ///
    /// `+` is read as a space, as in `application/x-www-form-urlencoded`.
    /// Segments that are not valid UTF-8 after decoding are kept verbatim.
    #[must_use]
    pub fn parse(encoded: &str) -> Self {
        let decode = |raw: &str| {
            let raw = raw.replace('+', " ");
            urlencoding::decode(&raw).map_or_else(|_| raw.clone(), |s| s.into_owned())
        };

        let pairs = encoded
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let mut parts = segment.splitn(2, '=');
                let key = parts.next().unwrap_or_default();
                let value = parts.next().unwrap_or_default();
                (decode(key), decode(value))
            })
            .collect();

        Self(pairs)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
