//! File composition end to end: events emitted by the registry and batch
//! crates while the subscriber is installed must land in the rolling file.

use std::fs;

use roster_batch::{FailureMode, process_items};
use roster_domain::EntityStatus;
use roster_logger::{Logger, Rotation};
use roster_registry::Registry;
use tempfile::tempdir;

#[test]
fn feature_crate_events_land_in_the_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let logs = dir.path().join("logs");

    let logger = Logger::builder()
        .name("roster-capture")
        .console(false)
        .directives("debug")
        .file(&logs)
        .rotation(Rotation::NEVER)
        .init()?;

    let mut registry = Registry::default();
    registry.create("pump-7", "Coolant pump")?;
    registry.update_status("pump-7", EntityStatus::Active)?;

    let parsed = process_items(["4", "x", "16"], FailureMode::Skip, |raw| raw.parse::<u32>())?;
    assert_eq!(parsed, vec![4, 16]);

    // Dropping the handle stops the worker and flushes the file.
    drop(logger);

    let mut captured = String::new();
    for entry in fs::read_dir(&logs)? {
        captured.push_str(&fs::read_to_string(entry?.path())?);
    }

    assert!(captured.contains("pump-7"), "registry events should carry the entity id");
    assert!(captured.contains("Skipping failed item"), "batch skip warnings should be captured");
    Ok(())
}
