//! Request body validation helpers.
//!
//! Validation runs before any database write. Failures enumerate every
//! failing field in one message rather than stopping at the first, so a
//! form can highlight all problems in a single round trip.

use validator::{Validate, ValidationErrors};

use lapcare_core::error::CoreError;
use lapcare_core::translations::TranslationSet;

use crate::error::AppError;

/// Validate a request DTO, collecting all field errors into one message.
pub fn validate_body<T: Validate>(input: &T) -> Result<(), AppError> {
    input
        .validate()
        .map_err(|errors| AppError::Core(CoreError::Validation(flatten_errors("", &errors))))
}

/// Validate a translation set for a create/update call.
///
/// Every submitted locale is validated independently and errors are
/// prefixed with the locale (`vi.name: must not be empty`). When
/// `require_non_empty` is set (the create path), an empty set is itself a
/// validation error -- an entity must be born with at least one locale.
pub fn validate_translations<T: Validate>(
    set: &TranslationSet<T>,
    require_non_empty: bool,
) -> Result<(), AppError> {
    if require_non_empty && set.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "translations: at least one locale (vi or en) is required".to_string(),
        )));
    }

    let mut messages = Vec::new();
    for (locale, translation) in set.iter() {
        if let Err(errors) = translation.validate() {
            messages.push(flatten_errors(&format!("{locale}."), &errors));
        }
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(messages.join("; "))))
    }
}

/// Render `ValidationErrors` as `field: message; other_field: message`.
fn flatten_errors(prefix: &str, errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", e.code));
                format!("{prefix}{field}: {message}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, Validate)]
    struct Form {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(length(min = 6, message = "must be at least 6 characters"))]
        phone: String,
    }

    fn validation_message(err: AppError) -> String {
        match err {
            AppError::Core(CoreError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn enumerates_every_failing_field() {
        let form = Form {
            name: String::new(),
            phone: "123".to_string(),
        };
        let msg = validation_message(validate_body(&form).unwrap_err());
        assert!(msg.contains("name: must not be empty"), "{msg}");
        assert!(msg.contains("phone: must be at least 6 characters"), "{msg}");
    }

    #[test]
    fn valid_body_passes() {
        let form = Form {
            name: "Ngọc".to_string(),
            phone: "0901234567".to_string(),
        };
        assert!(validate_body(&form).is_ok());
    }

    #[test]
    fn empty_translation_set_rejected_on_create() {
        let set: TranslationSet<Form> = TranslationSet::default();
        let msg = validation_message(validate_translations(&set, true).unwrap_err());
        assert!(msg.contains("at least one locale"), "{msg}");
    }

    #[test]
    fn empty_translation_set_allowed_on_update() {
        // An update that only touches shared fields submits no locales.
        let set: TranslationSet<Form> = TranslationSet::default();
        assert!(validate_translations(&set, false).is_ok());
    }

    #[test]
    fn translation_errors_are_locale_prefixed() {
        use lapcare_core::locale::Locale;
        let set = TranslationSet::single(
            Locale::En,
            Form {
                name: String::new(),
                phone: "0901234567".to_string(),
            },
        );
        let msg = validation_message(validate_translations(&set, true).unwrap_err());
        assert!(msg.contains("en.name: must not be empty"), "{msg}");
    }
}
