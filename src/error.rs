//! Relocation errors.

use thiserror::Error;

/// Errors that can occur while adding, removing, or relocating items.
///
/// Failing to resolve a modifier is not an error at the registry level:
/// [`crate::ModifierRegistry::resolve`] returns `None` and each caller
/// picks its own fallback. [`RelocateError::Unsupported`] is the fallback
/// chosen by the standard relocator.
#[derive(Debug, Error)]
pub enum RelocateError {
    /// Persisting a container mutation failed. The container may be in an
    /// indeterminate state; the caller owns any rollback.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No modifier is registered for the group type.
    #[error("no modifier registered for group type '{0}'")]
    Unsupported(String),

    /// The destination group will not take the item.
    #[error("group '{group}' cannot take item '{item}'")]
    Rejected { group: String, item: String },

    /// The item is not present in the group.
    #[error("item '{item}' not found in group '{group}'")]
    ItemNotFound { group: String, item: String },

    /// The group already holds an item with this name.
    #[error("group '{group}' already contains an item named '{item}'")]
    AlreadyExists { group: String, item: String },

    /// The group exposes no mutation surface.
    #[error("group '{0}' is not modifiable")]
    Immutable(String),
}
