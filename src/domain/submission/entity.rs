use serde::{Deserialize, Serialize};

use crate::domain::localized::LocalizedText;

/// A published article or preprint as the host exposes it to plugins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Internal host identifier
    pub id: i64,

    /// Submission locale; drives title and abstract lookup
    #[serde(default)]
    pub locale: Option<String>,

    pub title: LocalizedText,

    #[serde(default)]
    pub subtitle: LocalizedText,

    /// Abstract as stored by the host (HTML)
    #[serde(default, rename = "abstract")]
    pub abstract_html: LocalizedText,

    /// Public identifier used in URLs (URL path or numeric id)
    pub best_id: String,

    /// Cover image URL per locale
    #[serde(default)]
    pub cover_image_url: LocalizedText,

    /// Publication date as the host stores it ("2020-05-01 00:00:00", RFC 3339, ...)
    #[serde(default)]
    pub date_published: Option<String>,

    /// Current publication, used for keyword lookup
    pub current_publication_id: i64,
}

impl Submission {
    pub fn new(id: i64, best_id: impl Into<String>, current_publication_id: i64) -> Self {
        Self {
            id,
            locale: None,
            title: LocalizedText::new(),
            subtitle: LocalizedText::new(),
            abstract_html: LocalizedText::new(),
            best_id: best_id.into(),
            cover_image_url: LocalizedText::new(),
            date_published: None,
            current_publication_id,
        }
    }

    /// Submission locale, if set and non-blank
    pub fn locale(&self) -> Option<&str> {
        self.locale
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Title plus subtitle ("Title: Subtitle") in the given locale
    pub fn full_title(&self, locale: &str) -> String {
        let title = self
            .title
            .localized(locale, locale)
            .map(String::as_str)
            .unwrap_or_default();

        match self.subtitle.localized(locale, locale) {
            Some(subtitle) if !title.is_empty() => format!("{}: {}", title, subtitle),
            _ => title.to_string(),
        }
    }

    /// Raw (HTML) abstract in the given locale
    pub fn abstract_in(&self, locale: &str) -> Option<&str> {
        self.abstract_html
            .localized(locale, locale)
            .map(String::as_str)
    }

    /// Cover image for the request locale, falling back to the submission locale
    pub fn localized_cover_image_url(&self, ui_locale: &str) -> Option<&str> {
        let fallback = self.locale().unwrap_or(ui_locale);
        self.cover_image_url
            .localized(ui_locale, fallback)
            .map(String::as_str)
    }
}
