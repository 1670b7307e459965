use roster_domain::EntityStatus;
use roster_kernel::config::RegistryConfig;
use roster_registry::{Registry, RegistryError};

fn registry() -> Registry {
    Registry::new(RegistryConfig::default())
}

#[test]
fn created_entity_comes_back_intact() {
    let mut registry = registry();

    registry.create("1", "Test").unwrap();
    let entity = registry.get("1").unwrap();

    assert_eq!(entity.id, "1");
    assert_eq!(entity.name, "Test");
    assert_eq!(entity.status, EntityStatus::Pending);
    assert!(entity.metadata.is_empty());
}

#[test]
fn create_trims_whitespace_from_both_fields() {
    let mut registry = registry();

    registry.create("  alpha  ", "  First Entity  ").unwrap();
    let entity = registry.get("alpha").unwrap();

    assert_eq!(entity.id, "alpha");
    assert_eq!(entity.name, "First Entity");
}

#[test]
fn empty_id_is_rejected_with_field_tag() {
    let mut registry = registry();

    let err = registry.create("", "Test").unwrap_err();

    assert!(
        matches!(err, RegistryError::Validation { context: Some(ref field), .. } if field == "id")
    );
    assert!(registry.is_empty());
}

#[test]
fn empty_name_is_rejected_with_field_tag() {
    let mut registry = registry();

    let err = registry.create("1", "").unwrap_err();

    assert!(
        matches!(err, RegistryError::Validation { context: Some(ref field), .. } if field == "name")
    );
    assert!(registry.is_empty());
}

#[test]
fn duplicate_id_is_a_conflict_and_keeps_the_original() {
    let mut registry = registry();

    registry.create("1", "Original").unwrap();
    let err = registry.create("1", "Replacement").unwrap_err();

    assert!(matches!(err, RegistryError::Conflict { .. }));
    assert_eq!(err.to_string(), "Conflict: Entity already exists: 1");
    assert_eq!(registry.get("1").unwrap().name, "Original");
    assert_eq!(registry.len(), 1);
}

#[test]
fn get_on_absent_id_is_not_found() {
    let registry = registry();

    let err = registry.get("missing").unwrap_err();

    assert!(matches!(err, RegistryError::NotFound { .. }));
    assert_eq!(err.to_string(), "Not found: Entity not found: missing");
}

#[test]
fn update_status_moves_the_entity() {
    let mut registry = registry();

    registry.create("1", "Test").unwrap();
    let updated = registry.update_status("1", EntityStatus::Active).unwrap();

    assert_eq!(updated.status, EntityStatus::Active);
    assert_eq!(registry.get("1").unwrap().status, EntityStatus::Active);
}

#[test]
fn any_status_can_follow_any_other() {
    let mut registry = registry();
    registry.create("1", "Test").unwrap();

    for status in
        [EntityStatus::Completed, EntityStatus::Pending, EntityStatus::Failed, EntityStatus::Active]
    {
        assert_eq!(registry.update_status("1", status).unwrap().status, status);
    }
}

#[test]
fn update_status_on_absent_id_is_not_found() {
    let mut registry = registry();

    let err = registry.update_status("missing", EntityStatus::Active).unwrap_err();

    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[test]
fn deleted_entity_is_gone() {
    let mut registry = registry();

    registry.create("1", "Test").unwrap();
    registry.delete("1").unwrap();

    assert!(matches!(registry.get("1").unwrap_err(), RegistryError::NotFound { .. }));
    assert!(!registry.contains("1"));
}

#[test]
fn delete_on_absent_id_is_not_found() {
    let mut registry = registry();

    let err = registry.delete("missing").unwrap_err();

    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[test]
fn list_preserves_creation_order() {
    let mut registry = registry();

    for (id, name) in [("c", "Third"), ("a", "First"), ("b", "Second")] {
        registry.create(id, name).unwrap();
    }

    let ids: Vec<String> = registry.list(None).into_iter().map(|e| e.id).collect();

    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn list_filters_by_status_in_creation_order() {
    let mut registry = registry();

    for id in ["1", "2", "3", "4"] {
        registry.create(id, "Entity").unwrap();
    }
    registry.update_status("1", EntityStatus::Active).unwrap();
    registry.update_status("3", EntityStatus::Active).unwrap();
    registry.update_status("4", EntityStatus::Failed).unwrap();

    let active: Vec<String> =
        registry.list(Some(EntityStatus::Active)).into_iter().map(|e| e.id).collect();

    assert_eq!(active, ["1", "3"]);
    assert!(registry.list(Some(EntityStatus::Completed)).is_empty());
}

#[test]
fn order_survives_a_mid_sequence_delete() {
    let mut registry = registry();

    for id in ["1", "2", "3", "4"] {
        registry.create(id, "Entity").unwrap();
    }
    registry.delete("2").unwrap();

    let ids: Vec<String> = registry.list(None).into_iter().map(|e| e.id).collect();

    assert_eq!(ids, ["1", "3", "4"]);
}

#[test]
fn listing_is_a_detached_snapshot() {
    let mut registry = registry();
    registry.create("1", "Test").unwrap();

    let mut snapshot = registry.list(None);
    snapshot[0].name = "Tampered".into();
    registry.create("2", "Later").unwrap();

    assert_eq!(registry.get("1").unwrap().name, "Test");
    assert_eq!(snapshot.len(), 1);
}

#[test]
fn metadata_is_carried_through_creation() {
    let mut registry = registry();
    let mut metadata = roster_domain::Metadata::default();
    metadata.insert("owner".into(), serde_json::json!("qa"));
    metadata.insert("attempt".into(), serde_json::json!(2));

    registry.create_with_metadata("1", "Test", metadata).unwrap();
    let entity = registry.get("1").unwrap();

    assert_eq!(entity.metadata["owner"], serde_json::json!("qa"));
    assert_eq!(entity.metadata["attempt"], serde_json::json!(2));
}

#[test]
fn config_is_exposed_read_only() {
    let config = RegistryConfig::new(60, 1).unwrap().with_debug(true);
    let registry = Registry::new(config);

    assert_eq!(registry.config().timeout(), 60);
    assert_eq!(registry.config().retries(), 1);
    assert!(registry.config().debug());
}

#[test]
fn generated_ids_round_trip() {
    let mut registry = registry();
    let id = roster_kernel::safe_id!();

    registry.create(&id, "Generated").unwrap();
    let entity = registry.get(&id).unwrap();

    assert_eq!(entity.id, id);
    assert_eq!(entity.status, EntityStatus::Pending);
}
