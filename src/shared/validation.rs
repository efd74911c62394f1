//! Validation Utilities

use validator::ValidationErrors;

use super::error::{AppError, FieldErrors};
use super::messages::{field_reason, Locale, Message};

/// Render validation errors as a field -> reasons map in the given locale.
pub fn field_errors(errors: &ValidationErrors, locale: Locale) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let reasons = errs
                .iter()
                .map(|e| {
                    let max = e.params.get("max").and_then(|v| v.as_u64());
                    let allowed = e.params.get("allowed").and_then(|v| v.as_str());
                    field_reason(locale, field, &e.code, max, allowed)
                })
                .collect();
            (field.to_string(), reasons)
        })
        .collect()
}

/// Convert validation errors to AppError
pub fn validation_error(errors: &ValidationErrors, locale: Locale) -> AppError {
    AppError::Validation {
        message: Message::ValidationFailed.text(locale).to_string(),
        errors: field_errors(errors, locale),
    }
}
