//! Item and container-group abstractions.
//!
//! Items and groups are trait objects so the relocation machinery can move
//! content between container kinds it has never heard of. Concrete kinds
//! downcast through `as_any` when they need their own surface back.

use std::any::Any;
use std::fmt;
use std::io;

use crate::group_type::GroupType;

/// A unit of content stored inside a container group.
pub trait Item: fmt::Debug + Send + Sync {
    /// Item name, unique within its group.
    fn name(&self) -> &str;

    /// Coarse classification tag (e.g. `"job"`, `"pipeline"`). Groups may
    /// restrict the kinds they accept.
    fn kind(&self) -> &str;

    /// Clone into a new boxed instance, for ownership transfer between
    /// containers.
    fn clone_box(&self) -> Box<dyn Item>;

    /// Downcasting support for concrete modifiers.
    fn as_any(&self) -> &dyn Any;
}

/// A container group holding items, identified by its [`GroupType`].
pub trait ItemGroup: fmt::Debug + Send + Sync {
    /// Group name, unique within its parent.
    fn name(&self) -> &str;

    /// The descriptor for this group's kind.
    fn group_type(&self) -> &'static GroupType;

    /// Names of the items currently stored, in storage order.
    fn item_names(&self) -> Vec<String>;

    /// Look up a stored item by name.
    fn get(&self, name: &str) -> Option<&dyn Item>;

    /// Whether an item with this name is stored.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of stored items.
    fn len(&self) -> usize;

    /// Whether the group holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this group's own policy accepts the item. Name collisions
    /// are checked separately by modifiers.
    fn accepts(&self, _item: &dyn Item) -> bool {
        true
    }

    /// Downcasting support.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcasting support.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Whether this group exposes the direct-mutation surface.
    fn is_mutable(&self) -> bool {
        false
    }

    /// The direct-mutation surface, if this group supports it.
    fn as_mutable(&mut self) -> Option<&mut dyn MutableGroup> {
        None
    }
}

/// Direct-mutation surface for groups that can be modified in place.
///
/// Both operations persist the membership change through the group's
/// store before returning; a store failure surfaces as the `io::Error` of
/// the mutation that caused it, with the in-memory state already changed.
pub trait MutableGroup {
    /// Store an item. The caller has already checked for collisions.
    fn insert(&mut self, item: Box<dyn Item>) -> io::Result<()>;

    /// Remove and return the item with this name, if stored.
    fn eject(&mut self, name: &str) -> io::Result<Option<Box<dyn Item>>>;
}
