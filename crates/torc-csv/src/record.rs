//! Ordered string records.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// An ordered sequence of [`Record`]s sharing one column schema.
pub type Table = Vec<Record>;

/// One row of tabular data: an ordered mapping from column name to cell
/// value. Key order is insertion order, which is what the encoder uses to
/// derive column order from the first record.
///
/// Cell values are always strings; the decoder performs no type inference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Insert a value under `key`. An existing key keeps its position and has
    /// its value replaced; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Cell values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of column names to scalar cell values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Record, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = Record::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, CellText(value))) = access.next_entry::<String, CellText>()? {
            record.insert(key, value);
        }
        Ok(record)
    }
}

/// Cell deserialization helper: accepts strings directly and stringifies
/// other scalars. Null becomes the empty string rather than the word "null".
struct CellText(String);

impl<'de> Deserialize<'de> for CellText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CellTextVisitor)
    }
}

struct CellTextVisitor;

impl<'de> Visitor<'de> for CellTextVisitor {
    type Value = CellText;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number, boolean, or null")
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<CellText, E> {
        Ok(CellText(value.to_owned()))
    }

    fn visit_string<E: serde::de::Error>(self, value: String) -> Result<CellText, E> {
        Ok(CellText(value))
    }

    fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<CellText, E> {
        Ok(CellText(value.to_string()))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<CellText, E> {
        Ok(CellText(value.to_string()))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<CellText, E> {
        Ok(CellText(value.to_string()))
    }

    fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<CellText, E> {
        Ok(CellText(value.to_string()))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<CellText, E> {
        Ok(CellText(String::new()))
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<CellText, E> {
        Ok(CellText(String::new()))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<CellText, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CellTextVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order_and_replaces_in_place() {
        let mut record = Record::new();
        record.insert("name", "John");
        record.insert("age", "25");
        record.insert("name", "Jane");
        assert_eq!(record.len(), 2);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(record.get("name"), Some("Jane"));
    }

    #[test]
    fn serializes_as_ordered_map() {
        let record: Record = [("b", "1"), ("a", "2")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"b":"1","a":"2"}"#);
    }

    #[test]
    fn deserializes_scalars_to_strings() {
        let record: Record =
            serde_json::from_str(r#"{"name":"John","age":25,"active":true,"note":null}"#).unwrap();
        assert_eq!(record.get("name"), Some("John"));
        assert_eq!(record.get("age"), Some("25"));
        assert_eq!(record.get("active"), Some("true"));
        assert_eq!(record.get("note"), Some(""));
    }
}
