// src/infrastructure/page_headers.rs
//
// Page header collector
//
// Stands in for the host's template manager: plugins add markup fragments
// under unique keys and the host renders them into <head>.
//
// RULES:
// - Insertion order is rendering order
// - Re-adding a key replaces its fragment in place
// - No format contract: any markup string is accepted

use serde::Serialize;

/// One keyed fragment destined for the page <head>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderEntry {
    pub key: String,
    pub fragment: String,
}

/// Ordered, keyed collection of header fragments for a single page render
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageHeaders {
    entries: Vec<HeaderEntry>,
}

impl PageHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment, replacing any existing fragment under the same key
    pub fn add(&mut self, key: impl Into<String>, fragment: impl Into<String>) {
        let key = key.into();
        let fragment = fragment.into();

        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => existing.fragment = fragment,
            None => self.entries.push(HeaderEntry { key, fragment }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.fragment.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.iter()
    }

    /// All fragments, one per line, in insertion order
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.fragment.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
