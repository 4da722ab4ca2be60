// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod html;
pub mod meta_tag;
pub mod page_headers;

pub use html::{escape_html, html_to_text};
pub use meta_tag::{format_published_date, MetaTag};
pub use page_headers::{HeaderEntry, PageHeaders};
