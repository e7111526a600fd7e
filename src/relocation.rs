//! Standard relocation flow: resolve, gate, add, remove.

use std::sync::Arc;

use crate::error::RelocateError;
use crate::item::{Item, ItemGroup};
use crate::registry::ModifierRegistry;

/// Drives an item move end to end through the modifier registry.
///
/// The relocator takes no locks. Concurrent moves touching the same
/// groups must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct Relocator {
    registry: Arc<ModifierRegistry>,
}

impl Relocator {
    /// Create a relocator over a shared registry.
    pub fn new(registry: Arc<ModifierRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this relocator resolves against.
    pub fn registry(&self) -> &ModifierRegistry {
        &self.registry
    }

    /// Whether `item_name` could move from `source` to `destination`.
    ///
    /// Pure probe, nothing is mutated. `false` covers every up-front
    /// refusal: the item is missing, a group kind resolves to no
    /// modifier, or the destination will not take the item.
    pub fn can_relocate(
        &self,
        source: &dyn ItemGroup,
        destination: &dyn ItemGroup,
        item_name: &str,
    ) -> bool {
        let item = match source.get(item_name) {
            Some(item) => item,
            None => return false,
        };
        let destination_modifier = match self.registry.resolve(destination.group_type()) {
            Some(modifier) => modifier,
            None => return false,
        };
        if self.registry.resolve(source.group_type()).is_none() {
            return false;
        }
        destination_modifier.can_add(destination, item)
    }

    /// Move `item_name` from `source` into `destination`.
    ///
    /// Returns the representation now stored in the destination, which
    /// may be a different instance than the one that left the source.
    ///
    /// # Errors
    ///
    /// - [`RelocateError::ItemNotFound`] if `source` does not hold the item.
    /// - [`RelocateError::Unsupported`] if either group kind resolves to
    ///   no modifier.
    /// - [`RelocateError::Rejected`] if the destination will not take the
    ///   item.
    /// - [`RelocateError::Io`] from either container mutation, propagated
    ///   verbatim. A failure after the add leaves the item present in
    ///   both groups; the caller owns rollback.
    pub fn relocate(
        &self,
        source: &mut dyn ItemGroup,
        destination: &mut dyn ItemGroup,
        item_name: &str,
    ) -> Result<Box<dyn Item>, RelocateError> {
        let item = source
            .get(item_name)
            .ok_or_else(|| RelocateError::ItemNotFound {
                group: source.name().to_string(),
                item: item_name.to_string(),
            })?
            .clone_box();

        let destination_modifier = self
            .registry
            .resolve(destination.group_type())
            .ok_or_else(|| {
                RelocateError::Unsupported(destination.group_type().name().to_string())
            })?;
        let source_modifier = self
            .registry
            .resolve(source.group_type())
            .ok_or_else(|| RelocateError::Unsupported(source.group_type().name().to_string()))?;

        if !destination_modifier.can_add(destination, item.as_ref()) {
            return Err(RelocateError::Rejected {
                group: destination.name().to_string(),
                item: item_name.to_string(),
            });
        }

        let stored = destination_modifier.add(destination, item.clone_box())?;
        if let Err(err) = source_modifier.remove(source, item.as_ref()) {
            log::warn!(
                "relocating '{}': removal from '{}' failed after adding to '{}', \
                 both groups now hold the item: {}",
                item_name,
                source.name(),
                destination.name(),
                err
            );
            return Err(err);
        }

        log::debug!(
            "relocated '{}' from '{}' to '{}'",
            item_name,
            source.name(),
            destination.name()
        );
        Ok(stored)
    }
}
