#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace. A single attribute macro lives
//! here: [`macro@roster_error`], which turns a plain enum into a fully wired
//! error type with uniform context and conversion plumbing.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// An attribute macro for defining domain-specific error enums.
///
/// This macro reduces boilerplate by transforming a standard enum into a
/// fully-featured error type shared by every crate in the workspace.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`
///   unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds
///   `.context(...)` to any `Result` convertible into this error type. The
///   context string is rendered as a ` (context)` suffix by the emitted
///   `format_context` helper and is how callers tag the offending field or
///   call site.
/// * **Standard Conversions**: Implements `From<T>` for variants carrying a
///   `source` field, enabling the `?` operator on upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>`
///   when an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a
///    `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping upstream errors must include a `source: T` field or a
///    field marked `#[source]`/`#[from]`, plus a context field.
/// 4. Tuple and unit variants are rejected to keep error wiring explicit.
///
/// # Example
///
/// ```rust,ignore
/// use roster_derive::roster_error;
/// use std::borrow::Cow;
///
/// #[roster_error]
/// pub enum LoaderError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io {
///         #[source]
///         source: std::io::Error,
///         context: Option<Cow<'static, str>>,
///     },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// // Usage:
/// fn load() -> Result<Vec<u8>, LoaderError> {
///     std::fs::read("data.bin").context("Reading data file")
/// }
/// ```
#[proc_macro_attribute]
pub fn roster_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand_error(input).into()
}
