//! Workspace-wide constant values.

/// Default operation timeout in seconds.
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Default number of retry attempts.
pub const DEFAULT_RETRIES: u32 = 3;

/// Minimum accepted length for validated input strings, in characters.
pub const MIN_INPUT_LENGTH: usize = 1;
