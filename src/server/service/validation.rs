use crate::server::error::validation::ValidationError;

/// Maximum length of names, titles and emails
pub const MAX_TEXT_LENGTH: usize = 255;

/// Minimum length of a password set through the API
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Trims a text field and rejects blank or overlong values.
pub fn text(value: String, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::FieldRequired(field));
    }

    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::FieldTooLong {
            field,
            max: MAX_TEXT_LENGTH,
        });
    }

    Ok(value.to_string())
}

/// Like [`text`] but a missing value is also rejected.
pub fn required_text(
    value: Option<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    text(value.ok_or(ValidationError::FieldRequired(field))?, field)
}

pub fn password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}
