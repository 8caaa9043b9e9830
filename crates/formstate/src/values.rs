//! Field-keyed value and error maps.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FieldError, ValidationError};
use crate::form::FieldSet;

/// Current string value of each field.
///
/// Serialises as a JSON object keyed by field identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues<F: FieldSet>(BTreeMap<F, String>);

impl<F: FieldSet> Default for FormValues<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<F: FieldSet> FormValues<F> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a value, builder style.
    #[must_use]
    pub fn with(mut self, field: F, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Adds or replaces a value.
    pub fn insert(&mut self, field: F, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, field: F) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Copies every entry of `other` over this map.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Iterates over entries in field order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.0.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<F: FieldSet, S: Into<String>> FromIterator<(F, S)> for FormValues<F> {
    fn from_iter<I: IntoIterator<Item = (F, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(f, v)| (f, v.into())).collect())
    }
}

impl<F: FieldSet> Serialize for FormValues<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_keyed(&self.0, serializer)
    }
}

impl<'de, F: FieldSet> Deserialize<'de> for FormValues<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(name, value)| {
                F::from_name(&name)
                    .map(|field| (field, value))
                    .ok_or_else(|| D::Error::custom(format!("unknown field: {name}")))
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

/// Stored validation outcome of each field, one entry per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors<F: FieldSet>(BTreeMap<F, FieldError>);

impl<F: FieldSet> FormErrors<F> {
    pub(crate) fn from_map(map: BTreeMap<F, FieldError>) -> Self {
        Self(map)
    }

    /// Returns the error of a field, if it has one.
    pub fn get(&self, field: F) -> Option<&ValidationError> {
        self.0.get(&field).and_then(Option::as_ref)
    }

    /// Fields currently in error, in field order.
    pub fn invalid_fields(&self) -> Vec<F> {
        self.0
            .iter()
            .filter(|(_, error)| error.is_some())
            .map(|(field, _)| *field)
            .collect()
    }

    /// Returns whether no field is in error.
    pub fn is_clear(&self) -> bool {
        self.0.values().all(Option::is_none)
    }

    /// Iterates over every field and its outcome.
    pub fn iter(&self) -> impl Iterator<Item = (F, Option<&ValidationError>)> {
        self.0.iter().map(|(f, e)| (*f, e.as_ref()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<F: FieldSet> Serialize for FormErrors<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_keyed(&self.0, serializer)
    }
}

fn serialize_keyed<F, V, S>(map: &BTreeMap<F, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    F: FieldSet,
    V: Serialize,
    S: Serializer,
{
    let mut out = serializer.serialize_map(Some(map.len()))?;
    for (field, value) in map {
        out.serialize_entry(field.as_str(), value)?;
    }
    out.end()
}
