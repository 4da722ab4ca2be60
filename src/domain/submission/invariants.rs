use super::entity::Submission;
use crate::domain::{DomainError, DomainResult};

/// Validates the Submission fields needed to build a landing page URL
pub fn validate_submission(submission: &Submission) -> DomainResult<()> {
    if submission.best_id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Submission {} has no public identifier",
            submission.id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::localized::LocalizedText;

    #[test]
    fn test_valid_submission() {
        let submission = Submission::new(12, "12", 40);
        assert!(validate_submission(&submission).is_ok());
    }

    #[test]
    fn test_blank_best_id_fails() {
        let submission = Submission::new(12, "", 40);
        assert!(validate_submission(&submission).is_err());
    }

    #[test]
    fn test_full_title_joins_subtitle() {
        let mut submission = Submission::new(12, "12", 40);
        submission.title = LocalizedText::new().with("en_US", "Tidal forcing".to_string());
        submission.subtitle = LocalizedText::new().with("en_US", "A survey".to_string());
        assert_eq!(submission.full_title("en_US"), "Tidal forcing: A survey");
    }

    #[test]
    fn test_full_title_without_subtitle() {
        let mut submission = Submission::new(12, "12", 40);
        submission.title = LocalizedText::new().with("en_US", "Tidal forcing".to_string());
        assert_eq!(submission.full_title("en_US"), "Tidal forcing");
    }

    #[test]
    fn test_blank_locale_is_none() {
        let mut submission = Submission::new(12, "12", 40);
        submission.locale = Some("".to_string());
        assert_eq!(submission.locale(), None);
        submission.locale = Some("en_US".to_string());
        assert_eq!(submission.locale(), Some("en_US"));
    }
}
