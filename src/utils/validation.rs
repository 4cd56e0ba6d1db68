use validator::{Validate, ValidationErrors};

use crate::dto::jd_dto::JobDescriptionPayload;
use crate::error::{Error, Result};

/// Renders derive-level validation failures into one human-readable message
/// per broken rule.
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("{} is invalid", field)),
            }
        }
    }
    messages
}

/// Checks a submitted record against every rule and reports the complete
/// list of problems; nothing short-circuits and the payload is not touched.
pub fn validate_payload(payload: &JobDescriptionPayload) -> Result<()> {
    let mut errors = match payload.validate() {
        Ok(()) => Vec::new(),
        Err(source) => flatten_errors(&source),
    };

    if let (Some(min), Some(max)) = (payload.experience_min, payload.experience_max) {
        if max < min {
            errors.push(
                "experience_max must be greater than or equal to experience_min".to_string(),
            );
        }
    }
    if let (Some(min), Some(max)) = (payload.budget_min, payload.budget_max) {
        if max < min {
            errors.push("budget_max must be greater than or equal to budget_min".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors))
    }
}
