use crate::status::EntityStatus;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// String-keyed, insertion-ordered metadata attached to an [`Entity`].
pub type Metadata = IndexMap<String, serde_json::Value>;

/// A registry-managed record with identity, name, status, and metadata.
///
/// The `id` is immutable after creation; its uniqueness is enforced by the
/// registry that stores the entity, not by the entity itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Identifier, unique within one registry.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Current lifecycle status.
    #[serde(default)]
    pub status: EntityStatus,
    /// Free-form metadata; keys are unique, insertion order is preserved.
    #[serde(default)]
    pub metadata: Metadata,
}

impl Entity {
    /// Creates an entity in the [`EntityStatus::Pending`] state with empty metadata.
    ///
    /// # Example
    /// ```rust
    /// use roster_domain::{Entity, EntityStatus};
    ///
    /// let entity = Entity::new("1", "Test");
    /// assert_eq!(entity.status, EntityStatus::Pending);
    /// assert!(entity.metadata.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: EntityStatus::default(),
            metadata: Metadata::default(),
        }
    }

    /// Replaces the whole metadata map.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Adds a single metadata entry, replacing any previous value for the key.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns `true` once the entity reached a terminal status.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
