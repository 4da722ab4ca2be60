// src/services/open_graph_service_tests.rs
//
// Open Graph header assembly
//
// Covers:
// - Tag order and header keys for a fully populated article
// - Optional fields suppress only their own tag
// - Image precedence through the real domain records
// - Keyword numbering and lookup failure
// - Preprint mode ignores issues and uses preprint URLs
// - Registration through the hook registry

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::config::PluginSettings;
    use crate::domain::{
        ApplicationKind, Context, Issue, LocalizedText, LogoImage, PageRequest, Submission,
    };
    use crate::error::AppError;
    use crate::hooks::{HookRegistry, SubmissionView, ARTICLE_VIEW, PREPRINT_VIEW};
    use crate::repositories::{KeywordsByLocale, MockKeywordRepository};
    use crate::services::{OpenGraphPlugin, OpenGraphService};

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn context() -> Context {
        let mut context = Context::new(1, "tides", "en_US");
        context.name = LocalizedText::new().with("en_US", "Journal of Tides".to_string());
        context.page_header_logo.insert(
            "en_US",
            LogoImage {
                upload_name: "pageHeaderLogoImage_en_US.png".to_string(),
                alt_text: None,
            },
        );
        context
    }

    fn submission() -> Submission {
        let mut submission = Submission::new(12, "12", 40);
        submission.locale = Some("en_US".to_string());
        submission.title = LocalizedText::new().with("en_US", "Tidal forcing".to_string());
        submission.subtitle = LocalizedText::new().with("en_US", "A survey".to_string());
        submission.abstract_html =
            LocalizedText::new().with("en_US", "<p>Moon &amp; <em>sea</em>.</p>".to_string());
        submission.date_published = Some("2020-05-01 00:00:00".to_string());
        submission
    }

    fn request() -> PageRequest {
        let mut request = PageRequest::new("https://journals.example.org", "tides", "en_US");
        request.public_files_dir = "/public/journals/1".to_string();
        request
    }

    fn article_view(issue: Option<Issue>) -> SubmissionView {
        SubmissionView::new(
            ApplicationKind::Journal,
            request(),
            context(),
            issue,
            submission(),
        )
    }

    fn issue_with_cover(url: &str) -> Issue {
        let mut issue = Issue::new(3);
        issue.cover_image_url = LocalizedText::new().with("en_US", url.to_string());
        issue
    }

    fn keywords(entries: Vec<(&str, Vec<&str>)>) -> KeywordsByLocale {
        entries
            .into_iter()
            .map(|(locale, words)| {
                (
                    locale.to_string(),
                    words.into_iter().map(String::from).collect(),
                )
            })
            .collect()
    }

    fn service_with_keywords(found: KeywordsByLocale) -> OpenGraphService {
        let mut repo = MockKeywordRepository::new();
        repo.expect_get_keywords()
            .withf(|publication_id, locales| {
                *publication_id == 40 && locales.len() == 1 && locales[0] == "en_US"
            })
            .returning(move |_, _| Ok(found.clone()));
        OpenGraphService::new(Arc::new(repo))
    }

    fn service_without_keywords() -> OpenGraphService {
        service_with_keywords(KeywordsByLocale::new())
    }

    // ========================================================================
    // FULL ARTICLE
    // ========================================================================

    #[test]
    fn test_full_article_headers_in_order() {
        let service = service_with_keywords(keywords(vec![("en_US", vec!["tides", "moon"])]));
        let mut view = article_view(None);

        let added = service.decorate(&mut view).unwrap();

        assert_eq!(added, 10);
        let keys: Vec<&str> = view.headers.keys().collect();
        assert_eq!(
            keys,
            vec![
                "openGraphSiteName",
                "openGraphObjectType",
                "openGraphTitle",
                "openGraphDescription",
                "openGraphUrl",
                "openGraphLocale",
                "openGraphImage",
                "openGraphDate",
                "openGraphArticleTag0",
                "openGraphArticleTag1",
            ]
        );
    }

    #[test]
    fn test_full_article_header_markup() {
        let service = service_with_keywords(keywords(vec![("en_US", vec!["tides"])]));
        let mut view = article_view(None);
        service.decorate(&mut view).unwrap();

        let h = &view.headers;
        assert_eq!(
            h.get("openGraphSiteName"),
            Some("<meta name=\"og:site_name\" content=\"Journal of Tides\"/>")
        );
        assert_eq!(
            h.get("openGraphObjectType"),
            Some("<meta name=\"og:type\" content=\"article\"/>")
        );
        assert_eq!(
            h.get("openGraphTitle"),
            Some("<meta name=\"og:title\" content=\"Tidal forcing: A survey\"/>")
        );
        assert_eq!(
            h.get("openGraphDescription"),
            Some("<meta name=\"og:description\" content=\"Moon &amp; sea.\"/>")
        );
        assert_eq!(
            h.get("openGraphUrl"),
            Some("<meta name=\"og:url\" content=\"https://journals.example.org/index.php/tides/article/view/12\"/>")
        );
        assert_eq!(
            h.get("openGraphLocale"),
            Some("<meta name=\"og:locale\" content=\"en_US\"/>")
        );
        assert_eq!(
            h.get("openGraphImage"),
            Some("<meta name=\"og:image\" content=\"/public/journals/1/pageHeaderLogoImage_en_US.png\"/>")
        );
        assert_eq!(
            h.get("openGraphDate"),
            Some("<meta name=\"article:published_time\" content=\"2020-05-01\"/>")
        );
        assert_eq!(
            h.get("openGraphArticleTag0"),
            Some("<meta name=\"article:tag\" content=\"tides\"/>")
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let service = service_without_keywords();
        let mut view = article_view(None);
        view.submission.title =
            LocalizedText::new().with("en_US", "Ebb & \"Flow\"".to_string());
        view.submission.subtitle = LocalizedText::new();

        service.decorate(&mut view).unwrap();

        assert_eq!(
            view.headers.get("openGraphTitle"),
            Some("<meta name=\"og:title\" content=\"Ebb &amp; &quot;Flow&quot;\"/>")
        );
    }

    // ========================================================================
    // OPTIONAL FIELDS
    // ========================================================================

    #[test]
    fn test_missing_optionals_suppress_their_tags() {
        let service = service_without_keywords();
        let mut view = article_view(None);
        view.submission.locale = None;
        view.submission.abstract_html = LocalizedText::new();
        view.submission.date_published = None;

        service.decorate(&mut view).unwrap();

        assert!(!view.headers.contains("openGraphDescription"));
        assert!(!view.headers.contains("openGraphLocale"));
        assert!(!view.headers.contains("openGraphDate"));
        assert!(view.headers.contains("openGraphTitle"));
        assert!(view.headers.contains("openGraphImage"));
    }

    #[test]
    fn test_markup_only_abstract_has_no_description() {
        let service = service_without_keywords();
        let mut view = article_view(None);
        view.submission.abstract_html =
            LocalizedText::new().with("en_US", "<p><br/></p>".to_string());

        service.decorate(&mut view).unwrap();

        assert!(!view.headers.contains("openGraphDescription"));
    }

    #[test]
    fn test_unparseable_date_skips_only_date() {
        let service = service_without_keywords();
        let mut view = article_view(None);
        view.submission.date_published = Some("someday".to_string());

        service.decorate(&mut view).unwrap();

        assert!(!view.headers.contains("openGraphDate"));
        assert!(view.headers.contains("openGraphUrl"));
    }

    #[test]
    fn test_no_images_emits_empty_image() {
        let service = service_without_keywords();
        let mut view = article_view(None);
        view.context.page_header_logo = Default::default();

        service.decorate(&mut view).unwrap();

        assert_eq!(
            view.headers.get("openGraphImage"),
            Some("<meta name=\"og:image\" content=\"\"/>")
        );
    }

    // ========================================================================
    // IMAGE PRECEDENCE
    // ========================================================================

    #[test]
    fn test_issue_cover_beats_logo() {
        let service = service_without_keywords();
        let mut view = article_view(Some(issue_with_cover("https://cdn.example.org/issue.png")));

        service.decorate(&mut view).unwrap();

        assert_eq!(
            view.headers.get("openGraphImage"),
            Some("<meta name=\"og:image\" content=\"https://cdn.example.org/issue.png\"/>")
        );
    }

    #[test]
    fn test_submission_cover_beats_issue_cover() {
        let service = service_without_keywords();
        let mut view = article_view(Some(issue_with_cover("https://cdn.example.org/issue.png")));
        view.submission.cover_image_url =
            LocalizedText::new().with("en_US", "https://cdn.example.org/article.png".to_string());

        service.decorate(&mut view).unwrap();

        assert_eq!(
            view.headers.get("openGraphImage"),
            Some("<meta name=\"og:image\" content=\"https://cdn.example.org/article.png\"/>")
        );
    }

    #[test]
    fn test_preprint_ignores_issue_and_uses_preprint_url() {
        let service = service_without_keywords();
        let mut view = SubmissionView::new(
            ApplicationKind::PreprintServer,
            request(),
            context(),
            Some(issue_with_cover("https://cdn.example.org/issue.png")),
            submission(),
        );

        service.decorate(&mut view).unwrap();

        assert_eq!(
            view.headers.get("openGraphImage"),
            Some("<meta name=\"og:image\" content=\"/public/journals/1/pageHeaderLogoImage_en_US.png\"/>")
        );
        assert_eq!(
            view.headers.get("openGraphUrl"),
            Some("<meta name=\"og:url\" content=\"https://journals.example.org/index.php/tides/preprint/view/12\"/>")
        );
    }

    // ========================================================================
    // KEYWORDS
    // ========================================================================

    #[test]
    fn test_article_tags_numbered_across_locales() {
        let service = service_with_keywords(keywords(vec![
            ("en_US", vec!["tides", "moon"]),
            ("fr_CA", vec!["marées"]),
        ]));
        let mut view = article_view(None);

        service.decorate(&mut view).unwrap();

        assert_eq!(
            view.headers.get("openGraphArticleTag2"),
            Some("<meta name=\"article:tag\" content=\"marées\"/>")
        );
        assert!(!view.headers.contains("openGraphArticleTag3"));
    }

    #[test]
    fn test_keyword_failure_keeps_other_tags() {
        let mut repo = MockKeywordRepository::new();
        repo.expect_get_keywords()
            .returning(|_, _| Err(AppError::Pool("connection refused".to_string())));
        let service = OpenGraphService::new(Arc::new(repo));
        let mut view = article_view(None);

        let added = service.decorate(&mut view).unwrap();

        assert_eq!(added, 8);
        assert!(!view.headers.contains("openGraphArticleTag0"));
    }

    // ========================================================================
    // INVALID RECORDS
    // ========================================================================

    #[test]
    fn test_invalid_submission_leaves_page_undecorated() {
        let service = service_without_keywords();
        let mut view = article_view(None);
        view.submission.best_id = String::new();

        assert!(service.decorate(&mut view).is_err());
        assert!(view.headers.is_empty());
    }

    // ========================================================================
    // HOOK WIRING
    // ========================================================================

    #[test]
    fn test_plugin_registers_both_hooks() {
        let registry = HookRegistry::new();
        let plugin = OpenGraphPlugin::new(
            PluginSettings::default(),
            Arc::new(service_without_keywords()),
        );

        assert!(plugin.register(&registry, Some(1)));
        assert_eq!(registry.handler_count(ARTICLE_VIEW), 1);
        assert_eq!(registry.handler_count(PREPRINT_VIEW), 1);
    }

    #[test]
    fn test_disabled_plugin_registers_nothing() {
        let registry = HookRegistry::new();
        let settings = PluginSettings {
            disabled_contexts: vec![1],
            ..Default::default()
        };
        let plugin = OpenGraphPlugin::new(settings, Arc::new(service_without_keywords()));

        assert!(!plugin.register(&registry, Some(1)));
        assert_eq!(registry.handler_count(ARTICLE_VIEW), 0);
        assert_eq!(registry.handler_count(PREPRINT_VIEW), 0);
    }

    #[test]
    fn test_hook_call_decorates_and_continues() {
        let registry = HookRegistry::new();
        let plugin = OpenGraphPlugin::new(
            PluginSettings::default(),
            Arc::new(service_without_keywords()),
        );
        plugin.register(&registry, None);

        let mut view = article_view(None);
        let handled = registry.call(view.hook_name(), &mut view);

        assert!(!handled);
        assert!(view.headers.contains("openGraphSiteName"));
    }

    #[test]
    fn test_hook_call_with_invalid_record_does_not_fail() {
        let registry = HookRegistry::new();
        let plugin = OpenGraphPlugin::new(
            PluginSettings::default(),
            Arc::new(service_without_keywords()),
        );
        plugin.register(&registry, None);

        let mut view = article_view(None);
        view.context.primary_locale = String::new();

        assert!(!registry.call(ARTICLE_VIEW, &mut view));
        assert!(view.headers.is_empty());
    }

    #[test]
    fn test_plugin_metadata() {
        let plugin = OpenGraphPlugin::new(
            PluginSettings::default(),
            Arc::new(service_without_keywords()),
        );
        assert_eq!(plugin.display_name(), "plugins.generic.openGraph.name");
        assert_eq!(plugin.description(), "plugins.generic.openGraph.description");
        assert!(plugin.context_settings_file().ends_with("settings.xml"));
    }
}
