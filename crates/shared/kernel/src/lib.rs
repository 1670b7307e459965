//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it provides ergonomic helpers for IDs, input
//! validation, configuration, and scoped resource handling.
//!
//! ## ID generation
//! Use `safe_id!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use roster_kernel::safe_id;
//! let id = safe_id!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use roster_kernel::config::RegistryConfig;
//!
//! let cfg = RegistryConfig::load(Some("registry.toml")).unwrap();
//! assert!(cfg.timeout() > 0);
//! ```

pub mod config;
pub mod prelude;
pub mod resource;
pub mod validate;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use nanoid::nanoid;
pub use roster_domain as domain;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_id {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
