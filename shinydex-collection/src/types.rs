//! Persisted collection shapes.
//!
//! These mirror what the storage layer writes: a map from a per-form id to
//! either a legacy boolean or a structured record. Fields this crate does
//! not know about are carried through untouched.
//!
//! Older clients wrote loose shapes (`null` flags, numbers in text fields),
//! so reading is lenient per field: a bad value becomes the field default
//! instead of failing the whole collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

// ── Entry ───────────────────────────────────────────────────────────────────

/// One logged capture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaughtEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ball: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mark: String,
    /// Game title as picked in the UI. May be empty.
    #[serde(default, deserialize_with = "lenient_string")]
    pub game: String,
    /// Method label as picked in the UI. May be empty.
    #[serde(default, deserialize_with = "lenient_string")]
    pub method: String,
    /// Encounter count; stored as a number or a string depending on client version.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub checks: Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub entry_id: Value,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CaughtEntry {
    pub fn new(game: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            method: method.into(),
            ..Self::default()
        }
    }
}

// ── Record ──────────────────────────────────────────────────────────────────

/// Structured per-form record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaughtRecord {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub caught: bool,
    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub entries: Vec<CaughtEntry>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CaughtRecord {
    /// The structured form of a legacy boolean record.
    pub fn from_legacy(caught: bool) -> Self {
        Self {
            caught,
            ..Self::default()
        }
    }
}

/// A stored record, in either its legacy or current shape.
///
/// A `null` record reads as `Legacy(false)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredRecord {
    Legacy(bool),
    Record(CaughtRecord),
}

impl<'de> Deserialize<'de> for StoredRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Bool(caught) => Ok(Self::Legacy(caught)),
            Value::Null => Ok(Self::Legacy(false)),
            value @ Value::Object(_) => CaughtRecord::deserialize(value)
                .map(Self::Record)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected a boolean or a record, found {other}"
            ))),
        }
    }
}

impl From<CaughtRecord> for StoredRecord {
    fn from(record: CaughtRecord) -> Self {
        Self::Record(record)
    }
}

/// A user's collection as loaded from storage.
pub type Collection = BTreeMap<String, StoredRecord>;

/// A collection after migration: every record is structured.
pub type MigratedCollection = BTreeMap<String, CaughtRecord>;

/// Lift a migrated collection back into the stored shape.
pub fn to_stored(collection: &MigratedCollection) -> Collection {
    collection
        .iter()
        .map(|(key, record)| (key.clone(), StoredRecord::Record(record.clone())))
        .collect()
}

/// Strings as-is, numbers and booleans as their text, anything else empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Booleans as-is, `"true"` and nonzero numbers as true, anything else false.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    })
}

fn null_as_empty_list<'de, D>(deserializer: D) -> Result<Vec<CaughtEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<CaughtEntry>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
