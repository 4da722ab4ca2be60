// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are CLI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion TO domain records happens here, nowhere else

use serde::{Deserialize, Serialize};

use crate::domain::{ApplicationKind, Context, Issue, PageRequest, Submission};
use crate::hooks::SubmissionView;
use crate::infrastructure::PageHeaders;

// ============================================================================
// PAGE VIEW INPUT
// ============================================================================

/// A page view as described in a JSON fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageViewDto {
    /// Overrides the configured application when set
    #[serde(default)]
    pub application: Option<ApplicationKind>,
    pub request: PageRequest,
    pub context: Context,
    #[serde(default)]
    pub issue: Option<Issue>,
    pub submission: Submission,
}

impl PageViewDto {
    pub fn into_view(self, default_application: ApplicationKind) -> SubmissionView {
        SubmissionView::new(
            self.application.unwrap_or(default_application),
            self.request,
            self.context,
            self.issue,
            self.submission,
        )
    }
}

// ============================================================================
// HEADER OUTPUT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderDto {
    pub key: String,
    pub fragment: String,
}

impl HeaderDto {
    pub fn from_headers(headers: &PageHeaders) -> Vec<Self> {
        headers
            .iter()
            .map(|entry| Self {
                key: entry.key.clone(),
                fragment: entry.fragment.clone(),
            })
            .collect()
    }
}
