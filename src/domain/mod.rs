// src/domain/mod.rs
//
// Domain Root - records the host hands to a page hook
//
// Every type here is a read-only value supplied per request.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod context;
pub mod image;
pub mod issue;
pub mod localized;
pub mod request;
pub mod submission;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Context Domain
pub use context::{validate_context, Context, LogoImage};

// Issue (journals only)
pub use issue::Issue;

// Submission Domain
pub use submission::{validate_submission, Submission};

// Request
pub use request::{ApplicationKind, PageRequest};

// Localized values
pub use localized::{Localized, LocalizedText, Presence};

// Image selection
pub use image::{resolve_image, ImageCandidates, ImageSource};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent records the host supplied in an unusable shape
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unrecognized date: {0}")]
    InvalidDate(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
