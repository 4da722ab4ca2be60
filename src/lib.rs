// src/lib.rs
// OpenGraph - social preview metadata for submission landing pages
//
// Architecture:
// - Domain-centric: read-only records the host supplies per request
// - Hook-driven: the plugin subscribes to named view hooks
// - Explicit: no implicit behavior, no magic
// - Harmless: failing to decorate a page never breaks the page

pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod hooks;
pub mod infrastructure;
pub mod logger;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Records
// ============================================================================

pub use domain::{
    resolve_image, validate_context, validate_submission, ApplicationKind, Context, DomainError,
    ImageCandidates, ImageSource, Issue, Localized, LocalizedText, LogoImage, PageRequest,
    Submission,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Hooks
// ============================================================================

pub use hooks::{
    create_hook_registry, HookArgs, HookLogEntry, HookOutcome, HookRegistry, SubmissionView,
    ARTICLE_VIEW, PREPRINT_VIEW,
};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{escape_html, html_to_text, MetaTag, PageHeaders};

// ============================================================================
// PUBLIC API - Repositories & Services
// ============================================================================

pub use repositories::{KeywordRepository, KeywordsByLocale, SqliteKeywordRepository};
pub use services::{HeaderTag, OpenGraphPlugin, OpenGraphService};

// ============================================================================
// PUBLIC API - Configuration & Application
// ============================================================================

pub use application::AppState;
pub use config::PluginSettings;
