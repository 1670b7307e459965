use std::borrow::Cow;

/// Error types specific to batch processing.
#[roster_derive::roster_error]
pub enum BatchError {
    /// An item failed while the batch ran in fail-fast mode; the context
    /// carries the position of the failing item.
    #[error("Processing failed{}: {message}", format_context(.context))]
    Processing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
