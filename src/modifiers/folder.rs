//! Modifier for folder kinds.

use crate::error::RelocateError;
use crate::group_type::{GroupType, FOLDER};
use crate::item::{Item, ItemGroup};
use crate::model::Job;
use crate::modifier::GroupModifier;

/// Modifier for `FOLDER` and its subtypes.
///
/// Same mechanics as the default modifier, with one folder-specific
/// wrinkle: a stored [`Job`] is re-stamped with its folder-qualified
/// path, so the instance returned by `add` is not the instance passed
/// in.
#[derive(Debug, Default, Clone, Copy)]
pub struct FolderModifier;

impl GroupModifier for FolderModifier {
    fn target_type(&self) -> &'static GroupType {
        &FOLDER
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
        let stored: Box<dyn Item> = match item.as_any().downcast_ref::<Job>() {
            Some(job) => Box::new(job.located_in(&group_name)),
            None => item.clone_box(),
        };
        match target.as_mutable() {
            Some(group) => {
                let handle = stored.clone_box();
                group.insert(stored)?;
                log::debug!("added '{}' to folder '{}'", handle.name(), group_name);
                Ok(handle)
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
                log::debug!("removed '{}' from folder '{}'", item.name(), group_name);
                Ok(())
            }
            None => Err(RelocateError::ItemNotFound {
                group: group_name,
                item: item.name().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Folder;

    #[test]
    fn test_add_restamps_job_path() {
        let modifier = FolderModifier;
        let mut folder = Folder::new("team-ci", &FOLDER);

        let stored = modifier
            .add(&mut folder, Box::new(Job::new("deploy")))
            .unwrap();

        let job = stored.as_any().downcast_ref::<Job>().unwrap();
        assert_eq!(job.full_name.as_deref(), Some("team-ci/deploy"));
        // The stored instance keeps its plain name for lookups.
        assert!(folder.contains("deploy"));
    }

    #[test]
    fn test_can_add_honors_folder_restriction() {
        let modifier = FolderModifier;
        let folder = Folder::new("pipelines", &FOLDER).restrict_kinds(["pipeline"]);

        assert!(!modifier.can_add(&folder, &Job::new("build")));
        assert!(modifier.can_add(&folder, &Job::new("release").with_kind("pipeline")));
    }

    #[test]
    fn test_add_and_remove_roundtrip() {
        let modifier = FolderModifier;
        let mut folder = Folder::new("team-ci", &FOLDER);

        let job = Job::new("deploy");
        modifier.add(&mut folder, Box::new(job.clone())).unwrap();
        modifier.remove(&mut folder, &job).unwrap();
        assert!(folder.is_empty());
    }
}
