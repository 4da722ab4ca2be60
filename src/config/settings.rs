// src/config/settings.rs
//
// Plugin settings
//
// Loaded once at startup from a JSON file. A missing file means defaults;
// a malformed file is an error so misconfiguration is never silent.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::ApplicationKind;
use crate::error::{AppError, AppResult};

/// Settings file name under the plugin directory, installed per new context
pub const CONTEXT_SETTINGS_FILE: &str = "settings.xml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Site-wide switch
    pub enabled: bool,

    /// Contexts that turned the plugin off
    pub disabled_contexts: Vec<i64>,

    /// Host application the plugin runs in
    pub application: ApplicationKind,

    /// Plugin installation directory
    pub plugin_path: PathBuf,

    /// Keyword store; None means the per-user data directory
    pub database_path: Option<PathBuf>,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            disabled_contexts: Vec::new(),
            application: ApplicationKind::Journal,
            plugin_path: PathBuf::from("plugins/generic/openGraph"),
            database_path: None,
        }
    }
}

impl PluginSettings {
    /// Load from a JSON file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!("[CONFIG] {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("{}: {}", path.display(), e))
        })?;
        settings.validate()?;

        info!(
            "[CONFIG] loaded {} (application={}, enabled={})",
            path.display(),
            settings.application,
            settings.enabled
        );
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.plugin_path.as_os_str().is_empty() {
            return Err(AppError::Config("plugin_path cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Whether the plugin runs for a context (None = site level)
    pub fn is_enabled_for(&self, context_id: Option<i64>) -> bool {
        match context_id {
            Some(id) => self.enabled && !self.disabled_contexts.contains(&id),
            None => self.enabled,
        }
    }

    /// Settings file installed when a new context is created
    pub fn context_settings_file(&self) -> PathBuf {
        self.plugin_path.join(CONTEXT_SETTINGS_FILE)
    }
}

/// Default settings location: {CONFIG_DIR}/opengraph/settings.json
pub fn default_settings_path() -> AppResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| AppError::Config("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("opengraph").join("settings.json"))
}
