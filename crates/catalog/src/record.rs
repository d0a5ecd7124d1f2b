use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::column::CatalogColumn;
use crate::error::CatalogError;

/// Placeholder shown in result lists for a missing name.
const MISSING_LABEL: &str = "—";

/// One archive row with canonical (lower-case) column names.
///
/// Keys are normalized once when the record is built. JSON `null` is treated
/// as an absent field. If a row carries two spellings of the same column the
/// lower-case spelling wins, regardless of the order they arrive in.
///
/// # Examples
///
/// ```
/// use catalog::{CatalogColumn, CatalogRecord};
/// use serde_json::json;
///
/// let record = CatalogRecord::from_value(json!({
///     "PL_NAME": "Kepler-22 b",
///     "pl_orbper": "289.86",
///     "st_mass": null,
/// }));
///
/// assert_eq!(record.text("pl_name").as_deref(), Some("Kepler-22 b"));
/// assert_eq!(record.num(CatalogColumn::OrbitalPeriod, 365.0), 289.86);
/// assert_eq!(record.num(CatalogColumn::StellarMass, 1.0), 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CatalogRecord {
    fields: BTreeMap<String, Value>,
}

impl CatalogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from any JSON value. Anything other than an object
    /// yields an empty record, so every lookup falls back to its default.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        let mut record = Self::default();
        for (key, value) in map {
            record.insert(key, value);
        }
        record
    }

    /// Parses a single JSON object, e.g. a row stashed by the search page.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    /// Inserts a field under its canonical name.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        if value.is_null() {
            return;
        }

        let key = key.into();
        let canonical = key.to_lowercase();

        if canonical == key {
            self.fields.insert(canonical, value);
        } else {
            self.fields.entry(canonical).or_insert(value);
        }
    }

    /// Builder form of [`CatalogRecord::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Raw value for `key`, looked up case-insensitively.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.fields.get(&key.as_ref().to_lowercase())
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.get(key).is_some()
    }

    /// Finite numeric value for `key`, if any.
    ///
    /// JSON numbers and numeric strings (surrounding whitespace ignored)
    /// are accepted. Empty strings, booleans, arrays, objects, and values
    /// that are NaN or infinite after coercion yield `None`.
    pub fn number(&self, key: impl AsRef<str>) -> Option<f64> {
        self.get(key).and_then(coerce_number)
    }

    /// Like [`CatalogRecord::number`] but substitutes `fallback`.
    pub fn num(&self, key: impl AsRef<str>, fallback: f64) -> f64 {
        self.number(key).unwrap_or(fallback)
    }

    /// Display text for `key`: a non-empty string, or a number's JSON form.
    pub fn text(&self, key: impl AsRef<str>) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// `"<planet> (<host>)"`, as shown in a search result list.
    pub fn list_label(&self) -> String {
        let name = self
            .text(CatalogColumn::PlanetName)
            .unwrap_or_else(|| MISSING_LABEL.to_string());
        let host = self
            .text(CatalogColumn::HostName)
            .unwrap_or_else(|| MISSING_LABEL.to_string());
        format!("{} ({})", name, host)
    }

    /// Canonical keys present in this record.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    number.is_finite().then_some(number)
}

impl<'de> Deserialize<'de> for CatalogRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from_value(Value::deserialize(deserializer)?))
    }
}

impl From<Value> for CatalogRecord {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
