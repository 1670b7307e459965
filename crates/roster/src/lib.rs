//! Facade crate for Roster features and shared modules.
//! Re-exports domain/kernel primitives and the feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Quick start
//!
//! ```rust
//! use roster::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RegistryConfig::new(60, 5)?;
//!     let mut registry = Registry::new(config);
//!
//!     registry.create("1", "First Entity")?;
//!     registry.create("2", "Second Entity")?;
//!     registry.update_status("1", EntityStatus::Active)?;
//!
//!     let active = registry.list(Some(EntityStatus::Active));
//!     assert_eq!(active.len(), 1);
//!     assert_eq!(active[0].name, "First Entity");
//!
//!     // Generated ids and metadata for entities that bring neither.
//!     let sensor_id = roster::kernel::safe_id!();
//!     let mut tags = Metadata::new();
//!     tags.insert("region".into(), serde_json::json!("eu-central"));
//!     tags.insert("rack".into(), serde_json::json!(12));
//!
//!     let sensor = registry.create_with_metadata(&sensor_id, "Edge sensor", tags)?;
//!     assert_eq!(sensor.metadata["region"], serde_json::json!("eu-central"));
//!
//!     let parsed = process_items(["10", "20", "x", "30"], FailureMode::Skip, |raw| {
//!         raw.parse::<u32>()
//!     })?;
//!     assert_eq!(parsed, [10, 20, 30]);
//!
//!     let handle = {
//!         let resource = ScopedResource::acquire("database");
//!         assert!(resource.is_active());
//!         resource.handle()
//!     };
//!     assert!(!handle.is_active());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! application's call, typically once at startup:
//!
//! ```rust,no_run
//! use roster::logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("roster-app")
//!     .level(LevelFilter::DEBUG)
//!     .file("logs")
//!     .init()
//!     .unwrap();
//! ```

pub use roster_batch as batch;
pub use roster_domain as domain;
pub use roster_kernel as kernel;
pub use roster_logger as logger;
pub use roster_registry as registry;

/// One-stop imports for applications composing the workspace.
///
/// Error extension traits are deliberately left out; import the specific
/// `*Ext` trait from its module when attaching context.
pub mod prelude {
    pub use roster_batch::{BatchError, FailureMode, process_items};
    pub use roster_domain::{Entity, EntityStatus, Metadata};
    pub use roster_kernel::config::{ConfigError, RegistryConfig};
    pub use roster_kernel::resource::{ResourceHandle, ScopedResource};
    pub use roster_kernel::validate::{ValidationError, validate_input};
    pub use roster_logger::{LevelFilter, Logger};
    pub use roster_registry::{Registry, RegistryError};
}
