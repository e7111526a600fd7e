//! The group-modifier extension point.

use std::fmt;

use crate::error::RelocateError;
use crate::group_type::GroupType;
use crate::item::{Item, ItemGroup};

/// A capability provider that can test, add, and remove items for one
/// kind of container group.
///
/// Plugins implement this for the group kinds they own and register the
/// implementation with the [`crate::ModifierRegistry`] at load time.
/// Registered modifiers are never mutated afterwards, which is why every
/// method takes `&self`.
pub trait GroupModifier: fmt::Debug + Send + Sync {
    /// The kind of group this modifier works on. A modifier also covers
    /// every subtype of its declared kind unless a more specific modifier
    /// is registered.
    fn target_type(&self) -> &'static GroupType;

    /// Returns `true` if `target` can take `item`.
    ///
    /// Pure predicate: must not mutate the target or the item. What is
    /// checked (name collisions, kind restrictions, quota) is up to each
    /// implementation.
    fn can_add(&self, target: &dyn ItemGroup, item: &dyn Item) -> bool;

    /// Add `item` to `target`.
    ///
    /// Returns the representation now stored in the target. It may be a
    /// different instance than the one passed in when the container
    /// re-stamps what it stores.
    ///
    /// # Errors
    ///
    /// Propagates an I/O error when persisting the change fails; the
    /// target is then in an indeterminate state and the caller owns any
    /// rollback.
    fn add(
        &self,
        target: &mut dyn ItemGroup,
        item: Box<dyn Item>,
    ) -> Result<Box<dyn Item>, RelocateError>;

    /// Remove `item` from `target`.
    ///
    /// # Errors
    ///
    /// Same failure contract as [`GroupModifier::add`].
    fn remove(&self, target: &mut dyn ItemGroup, item: &dyn Item) -> Result<(), RelocateError>;
}
