use serde::{Deserialize, Serialize};

use crate::domain::localized::{Localized, LocalizedText, Presence};

/// The publication venue (a journal or a preprint server)
/// Supplied by the host per request; read-only here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Host identifier, used for per-context plugin settings
    pub id: i64,

    /// URL path segment of the context (e.g. "tides")
    pub path: String,

    /// Locale used for the site name
    pub primary_locale: String,

    /// Display name per locale
    pub name: LocalizedText,

    /// Uploaded page header logo per locale
    #[serde(default)]
    pub page_header_logo: Localized<LogoImage>,
}

/// An uploaded image as the host records it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoImage {
    /// File name under the context's public files directory
    pub upload_name: String,

    #[serde(default)]
    pub alt_text: Option<String>,
}

impl Presence for LogoImage {
    fn is_present(&self) -> bool {
        !self.upload_name.trim().is_empty()
    }
}

impl Context {
    pub fn new(id: i64, path: impl Into<String>, primary_locale: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
            primary_locale: primary_locale.into(),
            name: LocalizedText::new(),
            page_header_logo: Localized::new(),
        }
    }

    /// Name in the primary locale, falling back to any locale
    pub fn site_name(&self) -> Option<&str> {
        self.name
            .localized(&self.primary_locale, &self.primary_locale)
            .map(String::as_str)
    }

    /// Logo for the request locale, falling back to the primary locale
    pub fn localized_page_header_logo(&self, ui_locale: &str) -> Option<&LogoImage> {
        self.page_header_logo.localized(ui_locale, &self.primary_locale)
    }
}
