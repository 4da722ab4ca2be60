use super::entity::Context;
use crate::domain::{DomainError, DomainResult};

/// Validates the Context fields the header builder depends on
pub fn validate_context(context: &Context) -> DomainResult<()> {
    if context.primary_locale.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Context {} has no primary locale",
            context.id
        )));
    }
    Ok(())
}

/// Invariants that must hold true for Context:
///
/// 1. Primary locale is never blank
/// 2. A missing name is allowed (site name tag is then empty)
/// 3. A missing logo is allowed
