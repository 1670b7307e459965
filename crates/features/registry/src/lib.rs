//! # Entity Registry
//!
//! An in-memory store mapping entity ids to [`Entity`] records, with
//! validation on creation, a status lifecycle, and filtered listing.
//!
//! ## Guarantees
//!
//! * **Validated writes**: `create` accepts an entity only after both `id` and
//!   `name` pass input validation; failures carry the offending field name.
//! * **Unique ids**: creating an id twice is a [`RegistryError::Conflict`];
//!   the stored entity is never silently replaced.
//! * **Mediated mutation**: lookups hand out shared references, listings hand
//!   out owned snapshots. The only way to change a stored entity is through a
//!   registry operation.
//! * **Stable order**: listings follow creation order, and deletion does not
//!   disturb the order of the remaining entities.
//!
//! The registry is synchronous and carries no internal locking; wrap it on the
//! caller side if it has to cross threads.

mod error;

pub use crate::error::{RegistryError, RegistryErrorExt};
use indexmap::IndexMap;
use roster_domain::constants::MIN_INPUT_LENGTH;
use roster_domain::{Entity, EntityStatus, Metadata};
use roster_kernel::config::RegistryConfig;
use roster_kernel::validate::validate_input;
use tracing::{debug, info};

/// An insertion-ordered, in-memory entity store.
///
/// # Example
/// ```rust
/// use roster_domain::EntityStatus;
/// use roster_kernel::config::RegistryConfig;
/// use roster_registry::Registry;
///
/// let mut registry = Registry::new(RegistryConfig::default());
///
/// registry.create("1", "Test").unwrap();
/// registry.update_status("1", EntityStatus::Active).unwrap();
///
/// assert_eq!(registry.get("1").unwrap().status, EntityStatus::Active);
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    config: RegistryConfig,
    entries: IndexMap<String, Entity>,
}

impl Registry {
    /// Creates an empty registry backed by the given configuration.
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self { config, entries: IndexMap::new() }
    }

    /// Validates and stores a new entity with empty metadata.
    ///
    /// Both fields are validated independently against [`MIN_INPUT_LENGTH`]
    /// and stored in trimmed form. The entity starts as
    /// [`EntityStatus::Pending`].
    ///
    /// # Errors
    /// Returns [`RegistryError::Validation`] tagged `"id"` or `"name"` when
    /// the respective field fails validation, and [`RegistryError::Conflict`]
    /// when the id is already taken.
    pub fn create(&mut self, id: &str, name: &str) -> Result<&Entity, RegistryError> {
        self.create_with_metadata(id, name, Metadata::default())
    }

    /// Validates and stores a new entity carrying the given metadata.
    ///
    /// # Errors
    /// Same failure modes as [`create`](Self::create).
    pub fn create_with_metadata(
        &mut self,
        id: &str,
        name: &str,
        metadata: Metadata,
    ) -> Result<&Entity, RegistryError> {
        let id = validate_input(id, MIN_INPUT_LENGTH).context("id")?;
        let name = validate_input(name, MIN_INPUT_LENGTH).context("name")?;

        if self.entries.contains_key(&id) {
            return Err(RegistryError::Conflict {
                message: format!("Entity already exists: {id}").into(),
                context: None,
            });
        }

        info!(entity = %id, "Creating entity");
        if self.config.debug() {
            debug!(entity = %id, name = %name, stored = self.entries.len(), "Registry state before insert");
        }

        let entity = Entity::new(&id, name).with_metadata(metadata);
        let (index, _) = self.entries.insert_full(id, entity);

        Ok(&self.entries[index])
    }

    /// Looks up an entity by id.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no entity has this id.
    pub fn get(&self, id: &str) -> Result<&Entity, RegistryError> {
        self.entries.get(id).ok_or_else(|| not_found(id))
    }

    /// Moves an entity to a new status and returns the updated record.
    ///
    /// Any status can follow any other; there is no transition table.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no entity has this id.
    pub fn update_status(
        &mut self,
        id: &str,
        status: EntityStatus,
    ) -> Result<&Entity, RegistryError> {
        let entity = self.entries.get_mut(id).ok_or_else(|| not_found(id))?;

        info!(entity = %id, from = %entity.status, to = %status, "Updating entity status");
        entity.status = status;

        Ok(entity)
    }

    /// Removes an entity, keeping the creation order of the rest intact.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no entity has this id.
    pub fn delete(&mut self, id: &str) -> Result<(), RegistryError> {
        // shift_remove keeps listing order stable, swap_remove would not.
        self.entries.shift_remove(id).ok_or_else(|| not_found(id))?;

        info!(entity = %id, "Deleted entity");

        Ok(())
    }

    /// Returns an owned snapshot of the stored entities in creation order,
    /// optionally narrowed to one status.
    ///
    /// Later registry mutations leave an already-returned snapshot untouched,
    /// and editing the snapshot cannot reach back into the registry.
    #[must_use]
    pub fn list(&self, status: Option<EntityStatus>) -> Vec<Entity> {
        self.entries
            .values()
            .filter(|entity| status.is_none_or(|wanted| entity.status == wanted))
            .cloned()
            .collect()
    }

    /// Number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entity with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// The configuration this registry was built with.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

fn not_found(id: &str) -> RegistryError {
    RegistryError::NotFound { message: format!("Entity not found: {id}").into(), context: None }
}
