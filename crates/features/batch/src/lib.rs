//! # Batch Processing
//!
//! A sequential, order-preserving batch runner. Items go through a caller
//! supplied operation one at a time; [`FailureMode`] decides whether a failing
//! item aborts the whole batch or is logged and skipped.
//!
//! ## Semantics
//!
//! * Items are processed strictly in input order; outputs keep that order.
//! * [`FailureMode::FailFast`] discards all partial results on the first
//!   failure and reports the failing item's position.
//! * [`FailureMode::Skip`] omits failing items; the output may be shorter
//!   than the input but never reordered.
//!
//! ## Example
//! ```rust
//! use roster_batch::{FailureMode, process_items};
//!
//! let doubled = process_items([1, 2, 3], FailureMode::FailFast, |n: i32| {
//!     n.checked_mul(2).ok_or("overflow")
//! })
//! .unwrap();
//!
//! assert_eq!(doubled, [2, 4, 6]);
//! ```

mod error;

pub use crate::error::{BatchError, BatchErrorExt};
use std::fmt::Display;
use tracing::{error, warn};

/// How [`process_items`] reacts to a failing item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// The first failure aborts the batch and discards partial results.
    #[default]
    FailFast,
    /// Failures are logged and their items omitted; the batch continues.
    Skip,
}

/// Applies `op` to every item in order and collects the outputs.
///
/// # Errors
/// In [`FailureMode::FailFast`] the first item error fails the whole call
/// with [`BatchError::Processing`], wrapping the item error's description and
/// the item's position. [`FailureMode::Skip`] never fails; item errors are
/// logged at warn level and their outputs omitted.
pub fn process_items<I, T, U, E, F>(
    items: I,
    mode: FailureMode,
    mut op: F,
) -> Result<Vec<U>, BatchError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Result<U, E>,
    E: Display,
{
    let items = items.into_iter();
    let mut results = Vec::with_capacity(items.size_hint().0);

    for (index, item) in items.enumerate() {
        match op(item) {
            Ok(output) => results.push(output),
            Err(err) => match mode {
                FailureMode::FailFast => {
                    error!(index, error = %err, "Aborting batch");

                    return Err(BatchError::Processing {
                        message: err.to_string().into(),
                        context: Some(format!("item {index}").into()),
                    });
                },
                FailureMode::Skip => warn!(index, error = %err, "Skipping failed item"),
            },
        }
    }

    Ok(results)
}
