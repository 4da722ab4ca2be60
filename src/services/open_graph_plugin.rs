// src/services/open_graph_plugin.rs
//
// Plugin wiring: settings decide whether the view handler is subscribed

use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use crate::config::PluginSettings;
use crate::hooks::{HookRegistry, SubmissionView, ARTICLE_VIEW, PREPRINT_VIEW};
use crate::services::open_graph_service::OpenGraphService;

/// Locale key of the plugin's display name
pub const DISPLAY_NAME_KEY: &str = "plugins.generic.openGraph.name";

/// Locale key of the plugin's description
pub const DESCRIPTION_KEY: &str = "plugins.generic.openGraph.description";

/// Hooks the plugin listens on
pub const VIEW_HOOKS: [&str; 2] = [ARTICLE_VIEW, PREPRINT_VIEW];

pub struct OpenGraphPlugin {
    settings: PluginSettings,
    service: Arc<OpenGraphService>,
}

impl OpenGraphPlugin {
    pub fn new(settings: PluginSettings, service: Arc<OpenGraphService>) -> Self {
        Self { settings, service }
    }

    /// Subscribe the view handler to both submission view hooks.
    ///
    /// Nothing is registered when the plugin is disabled for the main
    /// context (or site-wide). Returns whether handlers were registered.
    pub fn register(&self, registry: &HookRegistry, main_context_id: Option<i64>) -> bool {
        if !self.settings.is_enabled_for(main_context_id) {
            info!(
                "[OPEN_GRAPH] disabled for context {:?}, no hooks registered",
                main_context_id
            );
            return false;
        }

        for hook in VIEW_HOOKS {
            let service = Arc::clone(&self.service);
            registry.register::<SubmissionView, _>(hook, move |hook_name, view| {
                service.handle_submission_view(hook_name, view)
            });
        }

        info!("[OPEN_GRAPH] handlers registered for {:?}", VIEW_HOOKS);
        true
    }

    pub fn display_name(&self) -> &'static str {
        DISPLAY_NAME_KEY
    }

    pub fn description(&self) -> &'static str {
        DESCRIPTION_KEY
    }

    /// Settings file installed on new context creation
    pub fn context_settings_file(&self) -> PathBuf {
        self.settings.context_settings_file()
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }
}
