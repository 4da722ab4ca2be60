// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod open_graph_plugin;
pub mod open_graph_service;

#[cfg(test)]
mod open_graph_service_tests;

pub use open_graph_plugin::{OpenGraphPlugin, DESCRIPTION_KEY, DISPLAY_NAME_KEY, VIEW_HOOKS};

pub use open_graph_service::{HeaderTag, OpenGraphService};
