use std::borrow::Cow;

/// Errors produced by input validation.
#[roster_derive::roster_error]
pub enum ValidationError {
    #[error("Value cannot be empty{}", format_context(.context))]
    Empty { context: Option<Cow<'static, str>> },

    #[error("Value must be at least {min_length} characters{}", format_context(.context))]
    TooShort { min_length: usize, context: Option<Cow<'static, str>> },
}

/// Validates a text value and returns its normalized form.
///
/// The length check runs against the raw value, before whitespace is
/// stripped; a value of spaces padding a short core still passes when the
/// padded length clears `min_length`. Length is counted in characters, not
/// bytes.
///
/// # Errors
/// Returns [`ValidationError::Empty`] when `value` is empty and
/// [`ValidationError::TooShort`] when it is shorter than `min_length`.
/// Callers tag the offending field via the generated `.context(..)`
/// extension.
///
/// # Example
/// ```rust
/// use roster_kernel::validate::validate_input;
///
/// assert_eq!(validate_input("  alpha  ", 1).unwrap(), "alpha");
/// assert!(validate_input("", 1).is_err());
/// ```
pub fn validate_input(value: &str, min_length: usize) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { context: None });
    }

    if value.chars().count() < min_length {
        return Err(ValidationError::TooShort { min_length, context: None });
    }

    Ok(value.trim().to_owned())
}
