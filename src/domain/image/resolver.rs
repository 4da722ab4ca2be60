use serde::{Deserialize, Serialize};

/// Where an image candidate comes from, least to most specific
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    ContextLogo,
    IssueCover,
    SubmissionCover,
}

/// The three optional candidates for one page view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCandidates<'a> {
    pub context_logo: Option<&'a str>,
    pub issue_cover: Option<&'a str>,
    pub submission_cover: Option<&'a str>,
}

impl<'a> ImageCandidates<'a> {
    /// Picks the most specific non-empty candidate and its source
    pub fn select(&self) -> Option<(ImageSource, &'a str)> {
        let mut chosen = non_empty(self.context_logo).map(|logo| (ImageSource::ContextLogo, logo));

        if let Some(cover) = non_empty(self.issue_cover) {
            chosen = Some((ImageSource::IssueCover, cover));
        }
        if let Some(cover) = non_empty(self.submission_cover) {
            chosen = Some((ImageSource::SubmissionCover, cover));
        }
        chosen
    }

    pub fn resolve(&self) -> String {
        self.select()
            .map(|(_, url)| url.to_string())
            .unwrap_or_default()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Submission cover beats issue cover beats context logo.
/// Empty or absent candidates never overwrite; result may be empty.
pub fn resolve_image(
    context_logo: Option<&str>,
    issue_cover: Option<&str>,
    submission_cover: Option<&str>,
) -> String {
    ImageCandidates {
        context_logo,
        issue_cover,
        submission_cover,
    }
    .resolve()
}
