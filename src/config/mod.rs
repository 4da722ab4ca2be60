// src/config/mod.rs

pub mod settings;

pub use settings::{default_settings_path, PluginSettings, CONTEXT_SETTINGS_FILE};
