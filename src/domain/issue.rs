// src/domain/issue.rs
//
// Issue record
//
// Only journals publish in issues. Preprint servers never supply one.

use serde::{Deserialize, Serialize};

use crate::domain::localized::LocalizedText;

/// A journal issue, read-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,

    /// Locale used when the request locale has no cover
    #[serde(default)]
    pub primary_locale: Option<String>,

    /// Cover image URL per locale
    #[serde(default)]
    pub cover_image_url: LocalizedText,
}

impl Issue {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            primary_locale: None,
            cover_image_url: LocalizedText::new(),
        }
    }

    /// Cover image for the request locale, falling back to the issue's primary locale
    pub fn localized_cover_image_url(&self, ui_locale: &str) -> Option<&str> {
        let fallback = self.primary_locale.as_deref().unwrap_or(ui_locale);
        self.cover_image_url
            .localized(ui_locale, fallback)
            .map(String::as_str)
    }
}
