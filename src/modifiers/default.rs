//! Fallback modifier for any directly modifiable group.

use crate::error::RelocateError;
use crate::group_type::{GroupType, GROUP};
use crate::item::{Item, ItemGroup};
use crate::modifier::GroupModifier;

/// Works on any group that exposes the mutation surface.
///
/// Declares the most generic target kind, so it is selected only when no
/// modifier with a more specific declared kind matches the target.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultGroupModifier;

impl GroupModifier for DefaultGroupModifier {
    fn target_type(&self) -> &'static GroupType {
        &GROUP
    }

    fn can_add(&self, target: &dyn ItemGroup, item: &dyn Item) -> bool {
        target.is_mutable() && target.accepts(item) && !target.contains(item.name())
    }

    fn add(
        &self,
        target: &mut dyn ItemGroup,
        item: Box<dyn Item>,
    ) -> Result<Box<dyn Item>, RelocateError> {
        if target.contains(item.name()) {
            return Err(RelocateError::AlreadyExists {
                group: target.name().to_string(),
                item: item.name().to_string(),
            });
        }
        let group_name = target.name().to_string();
        match target.as_mutable() {
            Some(group) => {
                let stored = item.clone_box();
                group.insert(item)?;
                log::debug!("added '{}' to group '{}'", stored.name(), group_name);
                Ok(stored)
            }
            None => Err(RelocateError::Immutable(group_name)),
        }
    }

    fn remove(&self, target: &mut dyn ItemGroup, item: &dyn Item) -> Result<(), RelocateError> {
        let group_name = target.name().to_string();
        let group = target
            .as_mutable()
            .ok_or_else(|| RelocateError::Immutable(group_name.clone()))?;
        match group.eject(item.name())? {
            Some(_) => {
                log::debug!("removed '{}' from group '{}'", item.name(), group_name);
                Ok(())
            }
            None => Err(RelocateError::ItemNotFound {
                group: group_name,
                item: item.name().to_string(),
            }),
        }
    }
}
