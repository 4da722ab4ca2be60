// src/hooks/types.rs
//
// Hook names and argument records.
//
// CRITICAL RULES:
// - Every hook passes exactly one fixed-shape argument record
// - Records are owned per call; nothing survives between requests
// - Handlers may write to the record's header sink, nothing else

use crate::domain::{ApplicationKind, Context, Issue, PageRequest, Submission};
use crate::infrastructure::PageHeaders;

/// Called when a journal article landing page is rendered
pub const ARTICLE_VIEW: &str = "ArticleHandler::view";

/// Called when a preprint landing page is rendered
pub const PREPRINT_VIEW: &str = "PreprintHandler::view";

/// Trait that all hook argument records must implement
pub trait HookArgs: std::fmt::Debug + Send + 'static {
    /// Human-readable record type name
    fn args_type(&self) -> &'static str;
}

/// What a handler tells the registry after running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// Let later handlers run
    Continue,
    /// Stop the chain; the hook counts as handled
    Handled,
}

// ============================================================================
// SUBMISSION VIEW
// ============================================================================

/// Arguments of `ArticleHandler::view` and `PreprintHandler::view`
#[derive(Debug, Clone)]
pub struct SubmissionView {
    pub application: ApplicationKind,
    pub request: PageRequest,
    pub context: Context,
    /// Present only for journals
    pub issue: Option<Issue>,
    pub submission: Submission,
    /// Header sink the page renders into <head>
    pub headers: PageHeaders,
}

impl SubmissionView {
    pub fn new(
        application: ApplicationKind,
        request: PageRequest,
        context: Context,
        issue: Option<Issue>,
        submission: Submission,
    ) -> Self {
        Self {
            application,
            request,
            context,
            issue,
            submission,
            headers: PageHeaders::new(),
        }
    }

    /// Hook fired for this view's application
    pub fn hook_name(&self) -> &'static str {
        match self.application {
            ApplicationKind::Journal => ARTICLE_VIEW,
            ApplicationKind::PreprintServer => PREPRINT_VIEW,
        }
    }

    /// The issue, if the running application has issues at all
    pub fn issue(&self) -> Option<&Issue> {
        if self.application.has_issues() {
            self.issue.as_ref()
        } else {
            None
        }
    }
}

impl HookArgs for SubmissionView {
    fn args_type(&self) -> &'static str {
        "SubmissionView"
    }
}
