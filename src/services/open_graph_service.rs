// src/services/open_graph_service.rs
//
// Open Graph header assembly for submission landing pages
//
// RULES:
// - Never fails the page: every problem is logged and the tag skipped
// - Optional fields (abstract, locale, date, images) only suppress their tag
// - Tag order and header keys are stable across calls

use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use crate::domain::{validate_context, validate_submission, ImageCandidates};
use crate::error::AppResult;
use crate::hooks::{HookOutcome, SubmissionView};
use crate::infrastructure::meta_tag::{
    ARTICLE_PUBLISHED_TIME, ARTICLE_TAG, OBJECT_TYPE_ARTICLE, OG_DESCRIPTION, OG_IMAGE, OG_LOCALE,
    OG_SITE_NAME, OG_TITLE, OG_TYPE, OG_URL,
};
use crate::infrastructure::{format_published_date, html_to_text, MetaTag};
use crate::repositories::KeywordRepository;

pub const KEY_SITE_NAME: &str = "openGraphSiteName";
pub const KEY_OBJECT_TYPE: &str = "openGraphObjectType";
pub const KEY_TITLE: &str = "openGraphTitle";
pub const KEY_DESCRIPTION: &str = "openGraphDescription";
pub const KEY_URL: &str = "openGraphUrl";
pub const KEY_LOCALE: &str = "openGraphLocale";
pub const KEY_IMAGE: &str = "openGraphImage";
pub const KEY_DATE: &str = "openGraphDate";
/// Numbered per keyword: openGraphArticleTag0, openGraphArticleTag1, ...
pub const KEY_ARTICLE_TAG_PREFIX: &str = "openGraphArticleTag";

/// A meta tag with the header key it is emitted under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderTag {
    pub key: String,
    pub tag: MetaTag,
}

impl HeaderTag {
    fn new(key: impl Into<String>, tag: MetaTag) -> Self {
        Self {
            key: key.into(),
            tag,
        }
    }
}

pub struct OpenGraphService {
    keyword_repo: Arc<dyn KeywordRepository>,
}

impl OpenGraphService {
    pub fn new(keyword_repo: Arc<dyn KeywordRepository>) -> Self {
        Self { keyword_repo }
    }

    /// Every Open Graph tag for a submission view, in emission order
    ///
    /// Errors only when the context or submission break their invariants.
    pub fn build_tags(&self, view: &SubmissionView) -> AppResult<Vec<HeaderTag>> {
        validate_context(&view.context)?;
        validate_submission(&view.submission)?;

        let request = &view.request;
        let context = &view.context;
        let submission = &view.submission;
        let text_locale = submission
            .locale()
            .unwrap_or(context.primary_locale.as_str());

        let mut tags = vec![
            HeaderTag::new(
                KEY_SITE_NAME,
                MetaTag::new(OG_SITE_NAME, context.site_name().unwrap_or_default()),
            ),
            HeaderTag::new(KEY_OBJECT_TYPE, MetaTag::new(OG_TYPE, OBJECT_TYPE_ARTICLE)),
            HeaderTag::new(
                KEY_TITLE,
                MetaTag::new(OG_TITLE, submission.full_title(text_locale)),
            ),
        ];

        let description = submission
            .abstract_in(text_locale)
            .map(html_to_text)
            .unwrap_or_default();
        if !description.is_empty() {
            tags.push(HeaderTag::new(
                KEY_DESCRIPTION,
                MetaTag::new(OG_DESCRIPTION, description),
            ));
        }

        let url = request.url(
            view.application.submission_page(),
            "view",
            &[submission.best_id.as_str()],
        );
        tags.push(HeaderTag::new(KEY_URL, MetaTag::new(OG_URL, url)));

        if let Some(locale) = submission.locale() {
            tags.push(HeaderTag::new(KEY_LOCALE, MetaTag::new(OG_LOCALE, locale)));
        }

        tags.push(HeaderTag::new(
            KEY_IMAGE,
            MetaTag::new(OG_IMAGE, self.resolve_image(view)),
        ));

        if let Some(raw) = submission.date_published.as_deref() {
            match format_published_date(raw) {
                Ok(date) => tags.push(HeaderTag::new(
                    KEY_DATE,
                    MetaTag::new(ARTICLE_PUBLISHED_TIME, date),
                )),
                Err(e) => warn!(
                    "[OPEN_GRAPH] submission {}: skipping published time: {}",
                    submission.id, e
                ),
            }
        }

        tags.extend(
            self.keywords(view)
                .into_iter()
                .enumerate()
                .map(|(i, keyword)| {
                    HeaderTag::new(
                        format!("{}{}", KEY_ARTICLE_TAG_PREFIX, i),
                        MetaTag::new(ARTICLE_TAG, keyword),
                    )
                }),
        );

        Ok(tags)
    }

    /// Builds the tags and adds them to the view's headers.
    /// Returns how many headers were added.
    pub fn decorate(&self, view: &mut SubmissionView) -> AppResult<usize> {
        let tags = self.build_tags(view)?;
        for header in &tags {
            view.headers.add(header.key.as_str(), header.tag.render());
        }
        Ok(tags.len())
    }

    /// Hook entry point: decorate, log any failure, always let the page continue
    pub fn handle_submission_view(&self, hook_name: &str, view: &mut SubmissionView) -> HookOutcome {
        match self.decorate(view) {
            Ok(count) => debug!(
                "[OPEN_GRAPH] {}: {} headers for submission {}",
                hook_name, count, view.submission.id
            ),
            Err(e) => warn!(
                "[OPEN_GRAPH] {}: submission {} left undecorated: {}",
                hook_name, view.submission.id, e
            ),
        }
        HookOutcome::Continue
    }

    /// Context logo, then issue cover, then submission cover
    fn resolve_image(&self, view: &SubmissionView) -> String {
        let ui_locale = view.request.ui_locale.as_str();

        let context_logo = view
            .context
            .localized_page_header_logo(ui_locale)
            .map(|logo| view.request.public_file_url(&logo.upload_name));

        ImageCandidates {
            context_logo: context_logo.as_deref(),
            issue_cover: view
                .issue()
                .and_then(|issue| issue.localized_cover_image_url(ui_locale)),
            submission_cover: view.submission.localized_cover_image_url(ui_locale),
        }
        .resolve()
    }

    /// Keywords of the current publication in the request locale, flattened
    fn keywords(&self, view: &SubmissionView) -> Vec<String> {
        let locales = [view.request.ui_locale.clone()];
        let publication_id = view.submission.current_publication_id;

        match self.keyword_repo.get_keywords(publication_id, &locales) {
            Ok(by_locale) => by_locale.into_values().flatten().collect(),
            Err(e) => {
                warn!(
                    "[OPEN_GRAPH] keyword lookup failed for publication {}: {}",
                    publication_id, e
                );
                Vec::new()
            }
        }
    }
}
