//! Shipped [`GroupModifier`](crate::GroupModifier) implementations.
//!
//! [`DefaultGroupModifier`] covers any group exposing the mutation
//! surface; [`FolderModifier`] takes over for folder kinds and re-stamps
//! stored jobs with their folder-qualified path.

pub mod default;
pub mod folder;

pub use default::DefaultGroupModifier;
pub use folder::FolderModifier;
