pub mod entity;
pub mod invariants;

pub use entity::Submission;
pub use invariants::validate_submission;
