// src/domain/localized.rs
//
// Locale-keyed values
//
// The host stores most user-facing fields once per locale. Lookups follow the
// platform rule: preferred locale, then the fallback (usually the context's
// primary locale), then the first present value in locale order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A value that can be blank even when a locale key exists.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

/// Locale code → value map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized<T>(BTreeMap<String, T>);

/// The common case: one string per locale
pub type LocalizedText = Localized<String>;

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T: Presence> Localized<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for fixtures and tests
    pub fn with(mut self, locale: impl Into<String>, value: T) -> Self {
        self.0.insert(locale.into(), value);
        self
    }

    pub fn insert(&mut self, locale: impl Into<String>, value: T) {
        self.0.insert(locale.into(), value);
    }

    /// Exact lookup. Blank values count as missing.
    pub fn get(&self, locale: &str) -> Option<&T> {
        self.0.get(locale).filter(|v| v.is_present())
    }

    /// Lookup with fallback chain: preferred, fallback, first present value.
    pub fn localized(&self, preferred: &str, fallback: &str) -> Option<&T> {
        self.get(preferred)
            .or_else(|| self.get(fallback))
            .or_else(|| self.0.values().find(|v| v.is_present()))
    }

    pub fn is_empty(&self) -> bool {
        !self.0.values().any(|v| v.is_present())
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<T, K: Into<String>> FromIterator<(K, T)> for Localized<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
