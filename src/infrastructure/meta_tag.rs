// src/infrastructure/meta_tag.rs
//
// Open Graph <meta> tag values and rendering

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::html::escape_html;

pub const OG_SITE_NAME: &str = "og:site_name";
pub const OG_TYPE: &str = "og:type";
pub const OG_TITLE: &str = "og:title";
pub const OG_DESCRIPTION: &str = "og:description";
pub const OG_URL: &str = "og:url";
pub const OG_LOCALE: &str = "og:locale";
pub const OG_IMAGE: &str = "og:image";
pub const ARTICLE_PUBLISHED_TIME: &str = "article:published_time";
pub const ARTICLE_TAG: &str = "article:tag";

/// Object type advertised for every submission page
pub const OBJECT_TYPE_ARTICLE: &str = "article";

/// A single property/content pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub property: &'static str,
    pub content: String,
}

impl MetaTag {
    pub fn new(property: &'static str, content: impl Into<String>) -> Self {
        Self {
            property,
            content: content.into(),
        }
    }

    /// `<meta name="PROPERTY" content="VALUE"/>` with VALUE escaped
    pub fn render(&self) -> String {
        format!(
            "<meta name=\"{}\" content=\"{}\"/>",
            self.property,
            escape_html(&self.content)
        )
    }
}

/// Formats a host publication date as YYYY-MM-DD
///
/// Accepts RFC 3339, "YYYY-MM-DD HH:MM:SS" and plain "YYYY-MM-DD".
pub fn format_published_date(raw: &str) -> DomainResult<String> {
    parse_published_date(raw).map(|date| date.format("%Y-%m-%d").to_string())
}

fn parse_published_date(raw: &str) -> DomainResult<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DomainError::InvalidDate(raw.to_string()))
}
