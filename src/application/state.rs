// src/application/state.rs

use std::sync::Arc;

use log::info;

use crate::config::PluginSettings;
use crate::db::{
    create_connection_pool, get_connection, get_database_path, initialize_database,
    ConnectionPool,
};
use crate::error::AppResult;
use crate::hooks::{HookRegistry, SubmissionView};
use crate::repositories::{KeywordRepository, SqliteKeywordRepository};
use crate::services::{OpenGraphPlugin, OpenGraphService};

/// Everything a host needs to serve decorated pages.
/// All fields are Arc-wrapped for thread-safe sharing across requests.
pub struct AppState {
    pub hooks: HookRegistry,
    pub keyword_repo: Arc<dyn KeywordRepository>,
    pub plugin: Arc<OpenGraphPlugin>,
}

impl AppState {
    /// Open the keyword store named by the settings and wire the plugin
    pub fn bootstrap(settings: PluginSettings, main_context_id: Option<i64>) -> AppResult<Self> {
        let db_path = match &settings.database_path {
            Some(path) => path.clone(),
            None => get_database_path()?,
        };
        let pool = Arc::new(create_connection_pool(&db_path)?);
        Self::with_pool(settings, pool, main_context_id)
    }

    /// Wire the plugin over an existing pool (tests use an in-memory one)
    pub fn with_pool(
        settings: PluginSettings,
        pool: Arc<ConnectionPool>,
        main_context_id: Option<i64>,
    ) -> AppResult<Self> {
        // Initialize schema (idempotent)
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        let keyword_repo: Arc<dyn KeywordRepository> =
            Arc::new(SqliteKeywordRepository::new(Arc::clone(&pool)));
        let service = Arc::new(OpenGraphService::new(Arc::clone(&keyword_repo)));
        let plugin = Arc::new(OpenGraphPlugin::new(settings, service));

        let hooks = HookRegistry::new();
        let registered = plugin.register(&hooks, main_context_id);
        info!("[APP] ready (open graph hooks registered: {})", registered);

        Ok(Self {
            hooks,
            keyword_repo,
            plugin,
        })
    }

    /// Fire the view hook of the view's application.
    /// Returns true if a handler claimed the hook.
    pub fn render_view(&self, view: &mut SubmissionView) -> bool {
        self.hooks.call(view.hook_name(), view)
    }
}
