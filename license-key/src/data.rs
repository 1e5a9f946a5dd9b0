//! The key-value payload carried by a license key.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{LicenseKeyError, LicenseKeyResult};

/// An ordered mapping from string keys to string values.
///
/// Iteration order is insertion order. The signature covers the encoded
/// bytes, so order is significant: the same entries in a different order
/// produce a different token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseData {
    entries: Vec<(String, String)>,
}

impl LicenseData {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, stringified through its `Display` impl.
    ///
    /// Re-inserting an existing key replaces its value but keeps its
    /// original position. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) -> Option<String> {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Builds license data from a flat JSON object.
    ///
    /// Strings pass through unchanged; numbers, booleans and `null` become
    /// their literal JSON text. Nested arrays and objects are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseKeyError::Encoding`] if `value` is not an object or
    /// holds a nested value.
    pub fn from_json(value: &Value) -> LicenseKeyResult<Self> {
        let Value::Object(map) = value else {
            return Err(LicenseKeyError::Encoding(
                "license data must be a JSON object".to_string(),
            ));
        };

        let mut data = Self::new();
        for (key, value) in map {
            data.insert(key.as_str(), stringify(key, value)?);
        }
        Ok(data)
    }

    /// Parses license data from JSON text, with the same rules as
    /// [`from_json`](Self::from_json).
    ///
    /// # Errors
    ///
    /// Returns [`LicenseKeyError::Serialization`] if `json` is not valid JSON
    /// or is not a flat object of scalars.
    pub fn from_json_str(json: &str) -> LicenseKeyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts to a JSON object with string values.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                .collect(),
        )
    }
}

fn stringify(key: &str, value: &Value) -> LicenseKeyResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Array(_) | Value::Object(_) => Err(LicenseKeyError::Encoding(format!(
            "value for key {key:?} must be a string, number, boolean or null"
        ))),
    }
}

impl TryFrom<Value> for LicenseData {
    type Error = LicenseKeyError;

    fn try_from(value: Value) -> LicenseKeyResult<Self> {
        Self::from_json(&value)
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for LicenseData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (k, v) in iter {
            data.insert(k, v);
        }
        data
    }
}

impl IntoIterator for LicenseData {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for LicenseData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LicenseData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DataVisitor;

        impl<'de> Visitor<'de> for DataVisitor {
            type Value = LicenseData;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flat map of scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LicenseData, A::Error> {
                let mut data = LicenseData::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    let value = stringify(&key, &value).map_err(<A::Error as de::Error>::custom)?;
                    data.insert(key, value);
                }
                Ok(data)
            }
        }

        deserializer.deserialize_map(DataVisitor)
    }
}
