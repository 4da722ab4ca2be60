pub mod entity;
pub mod invariants;

pub use entity::{Context, LogoImage};
pub use invariants::validate_context;
