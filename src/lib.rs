//! # convoy-relocate
//!
//! Item relocation engine for the Convoy CI orchestration server.
//!
//! Moving a job between container groups is container-specific work, since
//! no two kinds of group store their items the same way. Plugins
//! contribute [`GroupModifier`] implementations for the group
//! kinds they own, the [`ModifierRegistry`] resolves the most specific
//! modifier for a target kind, and the [`Relocator`] drives the standard
//! move flow.
//!
//! # Architecture
//!
//! ```text
//! plugin load
//!   ↓  ModifierRegistry::register()
//! registered GroupModifier set (immutable afterwards)
//!   ↓  ModifierRegistry::resolve(group type)
//! most specific modifier for the destination kind
//!   ↓  Relocator::relocate() (can_add gate, then add, then remove)
//! item stored in the destination group
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use convoy_relocate::{Item, ModifierRegistry, MutableGroup, Relocator};
//! use convoy_relocate::group_type;
//! use convoy_relocate::model::{Folder, Job};
//!
//! let registry = Arc::new(ModifierRegistry::with_defaults());
//! let relocator = Relocator::new(registry);
//!
//! let mut root = Folder::new("root", &group_type::ROOT);
//! root.insert(Box::new(Job::new("deploy"))).unwrap();
//! let mut team = Folder::new("team-ci", &group_type::FOLDER);
//!
//! let stored = relocator.relocate(&mut root, &mut team, "deploy").unwrap();
//! assert_eq!(stored.name(), "deploy");
//! ```

pub mod error;
pub mod group_type;
pub mod item;
pub mod model;
pub mod modifier;
pub mod modifiers;
pub mod registry;
pub mod relocation;
pub mod storage;

// Re-exports
pub use error::RelocateError;
pub use group_type::GroupType;
pub use item::{Item, ItemGroup, MutableGroup};
pub use modifier::GroupModifier;
pub use registry::ModifierRegistry;
pub use relocation::Relocator;

/// Library version.
pub const VERSION: &str = "0.3.0";
