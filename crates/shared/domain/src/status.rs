use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Lifecycle state of a registry entity.
///
/// Newly created entities start as [`EntityStatus::Pending`]. No transition
/// table is enforced: any status may be assigned from any other.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntityStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Failed,
}

impl EntityStatus {
    /// Returns `true` for statuses that end the lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}
