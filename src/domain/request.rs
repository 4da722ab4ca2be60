// src/domain/request.rs
//
// Per-request values the host hands to a page hook

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which host application is running
///
/// Journals publish articles inside issues; preprint servers publish
/// preprints with no issue at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationKind {
    #[serde(alias = "ojs2")]
    Journal,
    #[serde(alias = "ops")]
    PreprintServer,
}

impl ApplicationKind {
    /// Host application name as reported by the platform
    pub fn name(&self) -> &'static str {
        match self {
            ApplicationKind::Journal => "ojs2",
            ApplicationKind::PreprintServer => "ops",
        }
    }

    /// Page path segment of a submission landing page
    pub fn submission_page(&self) -> &'static str {
        match self {
            ApplicationKind::Journal => "article",
            ApplicationKind::PreprintServer => "preprint",
        }
    }

    pub fn has_issues(&self) -> bool {
        matches!(self, ApplicationKind::Journal)
    }
}

impl fmt::Display for ApplicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The incoming page request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Site base URL without trailing slash (e.g. "https://journals.example.org")
    pub base_url: String,

    /// Path of the context being viewed
    pub context_path: String,

    /// Locale the page is rendered in
    pub ui_locale: String,

    /// Public files base path of the context (e.g. "public/journals/1")
    #[serde(default)]
    pub public_files_dir: String,
}

impl PageRequest {
    pub fn new(
        base_url: impl Into<String>,
        context_path: impl Into<String>,
        ui_locale: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            context_path: context_path.into(),
            ui_locale: ui_locale.into(),
            public_files_dir: String::new(),
        }
    }

    /// Path-info URL: {base}/index.php/{context}/{page}/{op}/{args...}
    pub fn url(&self, page: &str, op: &str, args: &[&str]) -> String {
        let mut url = format!(
            "{}/index.php/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.context_path,
            page,
            op
        );
        for arg in args {
            url.push('/');
            url.push_str(arg);
        }
        url
    }

    /// Public URL of a file uploaded to the context
    pub fn public_file_url(&self, upload_name: &str) -> String {
        format!("{}/{}", self.public_files_dir.trim_end_matches('/'), upload_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_with_args() {
        let request = PageRequest::new("https://example.org/", "tides", "en_US");
        assert_eq!(
            request.url("article", "view", &["42"]),
            "https://example.org/index.php/tides/article/view/42"
        );
    }

    #[test]
    fn test_application_pages() {
        assert_eq!(ApplicationKind::Journal.submission_page(), "article");
        assert_eq!(ApplicationKind::PreprintServer.submission_page(), "preprint");
        assert!(!ApplicationKind::PreprintServer.has_issues());
    }

    #[test]
    fn test_application_accepts_host_names() {
        let kind: ApplicationKind = serde_json::from_str("\"ops\"").unwrap();
        assert_eq!(kind, ApplicationKind::PreprintServer);
        let kind: ApplicationKind = serde_json::from_str("\"journal\"").unwrap();
        assert_eq!(kind, ApplicationKind::Journal);
    }

    #[test]
    fn test_public_file_url() {
        let mut request = PageRequest::new("https://example.org", "tides", "en_US");
        request.public_files_dir = "/public/journals/1/".to_string();
        assert_eq!(
            request.public_file_url("logo.png"),
            "/public/journals/1/logo.png"
        );
    }
}
