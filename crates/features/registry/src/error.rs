use roster_kernel::validate::ValidationError;
use std::borrow::Cow;

/// Error types specific to the registry feature.
#[roster_derive::roster_error]
pub enum RegistryError {
    /// Input validation failed; the context names the offending field.
    #[error("Validation failed{}: {source}", format_context(.context))]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Conflict{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
