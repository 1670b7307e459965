//! One-stop imports for crates built on the kernel.

pub use crate::config::{ConfigError, ConfigErrorExt, RegistryConfig, load_config};
pub use crate::resource::{ResourceHandle, ScopedResource};
pub use crate::validate::{ValidationError, ValidationErrorExt, validate_input};
pub use roster_domain::constants::MIN_INPUT_LENGTH;
pub use roster_domain::{Entity, EntityStatus, Metadata};
