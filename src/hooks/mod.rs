// src/hooks/mod.rs
//
// Hook System - Public API
//
// The host calls named hooks at fixed points of request handling.
// Plugins subscribe handlers by name; HookHandler stays internal.

pub mod registry;
pub mod types;

pub use registry::{HookLogEntry, HookRegistry};
pub use types::{HookArgs, HookOutcome, SubmissionView, ARTICLE_VIEW, PREPRINT_VIEW};

/// Initialize a new hook registry
pub fn create_hook_registry() -> HookRegistry {
    HookRegistry::new()
}
