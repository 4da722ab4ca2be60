// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above domain, hooks and services
// - Boundary between the CLI and the plugin
// - Translates between DTOs and domain records

pub mod dto;
pub mod state;

pub use dto::{HeaderDto, PageViewDto};
pub use state::AppState;
