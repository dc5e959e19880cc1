//! Preference values keyed by well-known names.
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeSet, HashMap},
    fmt,
};

/// Preference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Preference {
    /// Boolean value.
    Bool(bool),
    /// Number value.
    Number(f64),
    /// String value.
    String(String),
    /// Set of strings.
    StringSet(BTreeSet<String>),
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(val) => write!(f, "{}", val),
            Self::Number(val) => write!(f, "{}", val),
            Self::String(val) => write!(f, "{}", val),
            Self::StringSet(val) => {
                write!(f, "[")?;
                for (index, s) in val.iter().enumerate() {
                    write!(f, r#""{}""#, s)?;
                    if index < val.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Preference {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Preference {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Preference {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<String> for Preference {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<BTreeSet<String>> for Preference {
    fn from(value: BTreeSet<String>) -> Self {
        Self::StringSet(value)
    }
}

/// Collection of preferences.
///
/// Values are looked up with kind-checked accessors; reading a key
/// whose stored value has a different kind is an error.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceMap(HashMap<String, Preference>);

impl PreferenceMap {
    /// Number of preferences.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the preferences collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterator of the preferences.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Preference)> {
        self.0.iter()
    }

    /// Get a preference without checking the kind.
    pub fn get_unchecked(&self, key: impl AsRef<str>) -> Option<&Preference> {
        self.0.get(key.as_ref())
    }

    /// Get a boolean preference.
    pub fn get_bool(&self, key: impl AsRef<str>) -> Result<Option<bool>> {
        match self.0.get(key.as_ref()) {
            Some(Preference::Bool(val)) => Ok(Some(*val)),
            Some(_) => Err(Error::NotABoolean(key.as_ref().to_owned())),
            None => Ok(None),
        }
    }

    /// Get a number preference.
    pub fn get_number(&self, key: impl AsRef<str>) -> Result<Option<f64>> {
        match self.0.get(key.as_ref()) {
            Some(Preference::Number(val)) => Ok(Some(*val)),
            Some(_) => Err(Error::NotANumber(key.as_ref().to_owned())),
            None => Ok(None),
        }
    }

    /// Get a string preference.
    pub fn get_string(&self, key: impl AsRef<str>) -> Result<Option<&str>> {
        match self.0.get(key.as_ref()) {
            Some(Preference::String(val)) => Ok(Some(val.as_str())),
            Some(_) => Err(Error::NotAString(key.as_ref().to_owned())),
            None => Ok(None),
        }
    }

    /// Get a string set preference.
    pub fn get_string_set(
        &self,
        key: impl AsRef<str>,
    ) -> Result<Option<&BTreeSet<String>>> {
        match self.0.get(key.as_ref()) {
            Some(Preference::StringSet(val)) => Ok(Some(val)),
            Some(_) => Err(Error::NotAStringSet(key.as_ref().to_owned())),
            None => Ok(None),
        }
    }

    /// Insert a preference.
    ///
    /// If the preference already exists it is overwritten.
    pub fn insert(
        &mut self,
        key: String,
        value: Preference,
    ) -> Option<Preference> {
        self.0.insert(key, value)
    }

    /// Remove a preference.
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Preference> {
        self.0.remove(key.as_ref())
    }
}
