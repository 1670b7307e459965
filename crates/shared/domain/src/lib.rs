//! # Domain Models
//!
//! This crate contains the pure domain types of the workspace.
//! Keep it lean: no I/O, no logging, no heavy logic; just data and simple helpers.

pub mod constants;
pub mod entity;
pub mod status;

pub use entity::{Entity, Metadata};
pub use status::EntityStatus;
